//! Two-state lifecycle of a guarded value

use strum_macros::{Display, EnumIter};

/// Where a guarded value is in its life
///
/// The only transition is `Alive` -> `Finalized`, taken exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Lifecycle {
    Alive,
    Finalized,
}

impl Lifecycle {
    /// True until the value has been finalized
    pub fn is_alive(self) -> bool {
        self == Lifecycle::Alive
    }

    /// Move to `Finalized`, returning true if this call made the transition
    pub fn finalize(&mut self) -> bool {
        let was_alive = self.is_alive();
        *self = Lifecycle::Finalized;
        was_alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_finalize_transitions_once() {
        let mut state = Lifecycle::Alive;
        assert!(state.finalize());
        assert!(!state.finalize());
        assert_eq!(state, Lifecycle::Finalized);
    }

    #[test]
    fn test_display_names() {
        let names: Vec<String> = Lifecycle::iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["alive", "finalized"]);
    }
}
