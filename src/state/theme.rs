//! Theme slice - Light/dark display preference.

use serde::{Deserialize, Serialize};

/// Display theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Default light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeMode {
    /// The opposite mode, used by the toggle operation.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// The theme slice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    /// Current display mode
    pub mode: ThemeMode,
}
