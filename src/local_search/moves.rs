//! Move application through a per-operator dispatch table.

use super::config::MoveOperator;
use crate::tour::Tour;

type MoveFn = fn(&mut Tour, usize, usize);

struct MoveEntry {
    apply: MoveFn,
    undo: MoveFn,
    full_neighborhood: bool,
}

// Indexed by `MoveOperator as usize`.
static MOVE_TABLE: [MoveEntry; 3] = [
    MoveEntry {
        apply: swap,
        undo: swap,
        full_neighborhood: false,
    },
    MoveEntry {
        apply: shift,
        undo: unshift,
        full_neighborhood: true,
    },
    MoveEntry {
        apply: invert,
        undo: invert,
        full_neighborhood: false,
    },
];

fn swap(tour: &mut Tour, i: usize, j: usize) {
    tour.swap(i, j);
}

fn shift(tour: &mut Tour, i: usize, j: usize) {
    tour.shift(i, j);
}

fn unshift(tour: &mut Tour, i: usize, j: usize) {
    tour.shift(j, i);
}

fn invert(tour: &mut Tour, i: usize, j: usize) {
    tour.reverse(i, j);
}

impl MoveOperator {
    fn entry(self) -> &'static MoveEntry {
        &MOVE_TABLE[self as usize]
    }

    /// Applies the move at positions `(i, j)`.
    pub fn apply(self, tour: &mut Tour, i: usize, j: usize) {
        (self.entry().apply)(tour, i, j)
    }

    /// Reverts a move previously applied at `(i, j)`.
    pub fn undo(self, tour: &mut Tour, i: usize, j: usize) {
        (self.entry().undo)(tour, i, j)
    }

    /// Whether the neighborhood spans all ordered pairs rather than `j > i`.
    pub fn full_neighborhood(self) -> bool {
        self.entry().full_neighborhood
    }

    /// Enumerates the neighborhood of a tour of length `n` in scan order.
    ///
    /// Position 0 stays fixed as the reference point of the cyclic tour.
    pub fn neighborhood(self, n: usize) -> impl Iterator<Item = (usize, usize)> {
        let full = self.full_neighborhood();
        (1..n).flat_map(move |i| {
            let j_start = if full { 1 } else { i + 1 };
            (j_start..n).filter(move |&j| j != i).map(move |j| (i, j))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [MoveOperator; 3] = [MoveOperator::Swap, MoveOperator::Shift, MoveOperator::Invert];

    #[test]
    fn test_apply_semantics() {
        let mut t = Tour::identity(6);
        MoveOperator::Swap.apply(&mut t, 1, 4);
        assert_eq!(t.as_slice(), &[0, 4, 2, 3, 1, 5]);

        let mut t = Tour::identity(6);
        MoveOperator::Shift.apply(&mut t, 4, 1);
        assert_eq!(t.as_slice(), &[0, 4, 1, 2, 3, 5]);

        let mut t = Tour::identity(6);
        MoveOperator::Invert.apply(&mut t, 4, 1);
        assert_eq!(t.as_slice(), &[0, 4, 3, 2, 1, 5]);
    }

    #[test]
    fn test_undo_restores_every_pair() {
        let n = 7;
        for op in ALL {
            for (i, j) in op.neighborhood(n) {
                let mut t = Tour::new(vec![3, 0, 6, 1, 5, 2, 4]).expect("valid");
                let before = t.clone();
                op.apply(&mut t, i, j);
                op.undo(&mut t, i, j);
                assert_eq!(t, before, "{op:?} ({i}, {j}) not undone");
            }
        }
    }

    #[test]
    fn test_neighborhood_sizes() {
        let n = 5;
        // upper triangle over positions 1..5: 4 * 3 / 2
        assert_eq!(MoveOperator::Swap.neighborhood(n).count(), 6);
        assert_eq!(MoveOperator::Invert.neighborhood(n).count(), 6);
        // all ordered pairs over positions 1..5, excluding i == j: 4 * 3
        assert_eq!(MoveOperator::Shift.neighborhood(n).count(), 12);
    }

    #[test]
    fn test_neighborhood_excludes_position_zero() {
        for op in ALL {
            assert!(op.neighborhood(6).all(|(i, j)| i >= 1 && j >= 1 && i != j));
        }
    }

    #[test]
    fn test_neighborhood_degenerate() {
        for op in ALL {
            assert_eq!(op.neighborhood(0).count(), 0);
            assert_eq!(op.neighborhood(1).count(), 0);
            assert_eq!(op.neighborhood(2).count(), 0);
        }
    }
}
