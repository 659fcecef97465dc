use std::ops::{Add, Neg, Sub};

/// A cell coordinate, or the displacement between two cells.
///
/// `x` is the column and `y` the row, both signed so that projections may
/// land outside the grid before being filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: isize,
    pub y: isize,
}

impl Position {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x as isize, y as isize)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Position {
    type Output = Position;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacement_round_trips() {
        let origin = Position::new(4, 3);
        let destination = Position::new(5, 5);
        let diff = destination - origin;
        assert_eq!(diff, Position::new(1, 2));
        assert_eq!(origin + diff, destination);
        assert_eq!(destination + -diff, origin);
    }

    #[test]
    fn converts_grid_indices() {
        assert_eq!(Position::from((3_usize, 7_usize)), Position::new(3, 7));
        assert_eq!(Position::from((0_usize, 0_usize)), Position::default());
    }
}
