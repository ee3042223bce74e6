use enum_map::Enum;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// The difficulty tiers offered in the difficulty menu.  A tier fixes both
/// the speed of the snake and the wall layout of the level.
#[derive(Clone, Copy, Debug, Default, Deserialize, Enum, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Number of snake movements per second
    pub(crate) fn tick_rate(self) -> u32 {
        match self {
            Difficulty::Easy => 7,
            Difficulty::Normal => 12,
            Difficulty::Hard => 18,
        }
    }

    /// Time between movements of the snake
    pub(crate) fn tick_period(self) -> Duration {
        Duration::from_secs(1) / self.tick_rate()
    }

    /// Key that selects this tier in the difficulty menu
    pub(crate) fn hotkey(self) -> char {
        match self {
            Difficulty::Easy => '1',
            Difficulty::Normal => '2',
            Difficulty::Hard => '3',
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
