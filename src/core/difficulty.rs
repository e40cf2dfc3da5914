//! Difficulty levels
//!
//! Each level fixes the wrong-guess budget, hint availability, and the
//! score multiplier for the round.

use std::fmt;

/// Difficulty level for a round
///
/// Declaration order is stable and drives menu numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 8 wrong guesses allowed, hints available
    Easy,
    /// 6 wrong guesses allowed, hints available
    Medium,
    /// 4 wrong guesses allowed, no hints
    Hard,
}

impl Difficulty {
    /// All difficulty levels in menu order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Maximum number of wrong guesses before the round is lost
    #[must_use]
    pub const fn max_wrong(self) -> u8 {
        match self {
            Self::Easy => 8,
            Self::Medium => 6,
            Self::Hard => 4,
        }
    }

    /// Whether a hint may be requested at this level
    #[must_use]
    pub const fn hint_allowed(self) -> bool {
        match self {
            Self::Easy | Self::Medium => true,
            Self::Hard => false,
        }
    }

    /// Score multiplier applied to a winning round
    #[must_use]
    pub const fn multiplier(self) -> u32 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Lowercase name, used for menus and the score file keys
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Create from a 1-based menu index
    ///
    /// Returns `None` for anything outside `1..=3`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            1 => Some(Self::Easy),
            2 => Some(Self::Medium),
            3 => Some(Self::Hard),
            _ => None,
        }
    }

    /// Create from a lowercase name
    ///
    /// Returns `None` for unrecognized names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_per_level() {
        assert_eq!(Difficulty::Easy.max_wrong(), 8);
        assert!(Difficulty::Easy.hint_allowed());
        assert_eq!(Difficulty::Easy.multiplier(), 1);

        assert_eq!(Difficulty::Medium.max_wrong(), 6);
        assert!(Difficulty::Medium.hint_allowed());
        assert_eq!(Difficulty::Medium.multiplier(), 2);

        assert_eq!(Difficulty::Hard.max_wrong(), 4);
        assert!(!Difficulty::Hard.hint_allowed());
        assert_eq!(Difficulty::Hard.multiplier(), 3);
    }

    #[test]
    fn all_preserves_menu_order() {
        assert_eq!(
            Difficulty::ALL,
            [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        );
    }

    #[test]
    fn from_index_one_based() {
        assert_eq!(Difficulty::from_index(1), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_index(2), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_index(3), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_index(0), None);
        assert_eq!(Difficulty::from_index(4), None);
    }

    #[test]
    fn from_name_roundtrip() {
        for level in Difficulty::ALL {
            assert_eq!(Difficulty::from_name(level.name()), Some(level));
        }
        assert_eq!(Difficulty::from_name("brutal"), None);
    }

    #[test]
    fn every_level_allows_at_least_one_miss() {
        for level in Difficulty::ALL {
            assert!(level.max_wrong() > 0);
        }
    }
}
