//! Local search configuration.

/// Neighborhood move applied to a pair of positions `(i, j)`.
///
/// # Examples
///
/// ```
/// use u_tour::local_search::MoveOperator;
/// use u_tour::tour::Tour;
///
/// let mut tour = Tour::identity(5);
/// MoveOperator::Shift.apply(&mut tour, 1, 3);
/// assert_eq!(tour.as_slice(), &[0, 2, 3, 1, 4]);
/// MoveOperator::Shift.undo(&mut tour, 1, 3);
/// assert_eq!(tour, Tour::identity(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOperator {
    /// Exchange the nodes at positions `i` and `j`.
    #[default]
    Swap,
    /// Move the node at position `i` to position `j`.
    ///
    /// Directional: `shift(i, j)` and `shift(j, i)` differ, so its
    /// neighborhood covers every ordered pair.
    Shift,
    /// Reverse the range `[min(i, j), max(i, j)]` (a 2-opt move on the
    /// cyclic tour).
    Invert,
}

/// Acceptance rule for improving moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Improvement {
    /// Accept the first improving move found in scan order, then rescan.
    #[default]
    First,
    /// Scan the whole neighborhood, accept the best move, then rescan.
    Best,
}

/// Configuration for [`LocalSearch`](super::LocalSearch).
///
/// # Examples
///
/// ```
/// use u_tour::local_search::{Improvement, LocalSearchConfig, MoveOperator};
///
/// let config = LocalSearchConfig::default()
///     .with_operator(MoveOperator::Invert)
///     .with_improvement(Improvement::Best);
/// assert_eq!(config.operator, MoveOperator::Invert);
/// assert!(config.max_passes.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchConfig {
    /// Move operator defining the neighborhood.
    pub operator: MoveOperator,

    /// Improvement strategy.
    pub improvement: Improvement,

    /// Upper bound on neighborhood scans.
    ///
    /// `None` runs until a local optimum is reached. `Some(1)` performs a
    /// single scan and stops whether or not it improved.
    pub max_passes: Option<usize>,
}

impl LocalSearchConfig {
    /// Creates a configuration for the given operator and strategy.
    pub fn new(operator: MoveOperator, improvement: Improvement) -> Self {
        Self {
            operator,
            improvement,
            max_passes: None,
        }
    }

    /// Sets the move operator.
    pub fn with_operator(mut self, operator: MoveOperator) -> Self {
        self.operator = operator;
        self
    }

    /// Sets the improvement strategy.
    pub fn with_improvement(mut self, improvement: Improvement) -> Self {
        self.improvement = improvement;
        self
    }

    /// Bounds the number of neighborhood scans.
    pub fn with_max_passes(mut self, passes: usize) -> Self {
        self.max_passes = Some(passes);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> crate::Result<()> {
        if self.max_passes == Some(0) {
            return Err(crate::TourError::InvalidConfig(
                "max_passes must be positive or None".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_swap_first_improvement() {
        let config = LocalSearchConfig::default();
        assert_eq!(config.operator, MoveOperator::Swap);
        assert_eq!(config.improvement, Improvement::First);
        assert!(config.max_passes.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config =
            LocalSearchConfig::new(MoveOperator::Shift, Improvement::Best).with_max_passes(3);
        assert_eq!(config.operator, MoveOperator::Shift);
        assert_eq!(config.improvement, Improvement::Best);
        assert_eq!(config.max_passes, Some(3));
    }

    #[test]
    fn test_validate_zero_passes() {
        let config = LocalSearchConfig::default().with_max_passes(0);
        assert!(config.validate().is_err());
    }
}
