use clap::Parser;
use resonance::Config;

fn main() -> anyhow::Result<()> {
    resonance::init_tracing()?;
    let config = Config::parse();
    let counts = resonance::run(&config)?;
    counts.write_to(std::io::stdout().lock())?;
    Ok(())
}
