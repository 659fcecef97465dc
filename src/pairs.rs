use crate::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub origin: Position,
    pub destination: Position,
    pub displacement: Position,
}

impl Pair {
    pub fn new(origin: Position, destination: Position) -> Self {
        Self {
            origin,
            destination,
            displacement: destination - origin,
        }
    }
}

/// Every unordered pair `(positions[i], positions[j])` with `i < j`.
pub fn pairs(positions: &[Position]) -> Vec<Pair> {
    positions
        .iter()
        .enumerate()
        .flat_map(|(i, &origin)| {
            positions[i + 1..]
                .iter()
                .map(move |&destination| Pair::new(origin, destination))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 1)]
    #[case(4, 6)]
    #[case(7, 21)]
    fn yields_n_choose_two(#[case] n: usize, #[case] expected: usize) {
        let positions: Vec<_> = (0..n).map(|i| Position::from((i, i * 2))).collect();
        assert_eq!(pairs(&positions).len(), expected);
    }

    #[test]
    fn pairs_in_index_order_with_displacement() {
        let a = Position::new(0, 0);
        let b = Position::new(1, 2);
        let c = Position::new(3, 1);
        let found = pairs(&[a, b, c]);
        assert_eq!(
            found,
            vec![
                Pair {
                    origin: a,
                    destination: b,
                    displacement: Position::new(1, 2),
                },
                Pair {
                    origin: a,
                    destination: c,
                    displacement: Position::new(3, 1),
                },
                Pair {
                    origin: b,
                    destination: c,
                    displacement: Position::new(2, -1),
                },
            ]
        );
    }
}
