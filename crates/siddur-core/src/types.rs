use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Where the calendar is observed.
///
/// The diaspora keeps a second day for the pilgrimage festivals, which moves
/// several liturgical seasons by a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    #[default]
    Israel,
    Diaspora,
}

impl Location {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Israel => "israel",
            Self::Diaspora => "diaspora",
        }
    }

    #[must_use]
    pub const fn is_diaspora(self) -> bool {
        matches!(self, Self::Diaspora)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Location {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "israel" | "eretz_israel" => Ok(Self::Israel),
            "diaspora" | "chutz_laaretz" => Ok(Self::Diaspora),
            other => Err(CoreError::UnknownLocation(other.to_string())),
        }
    }
}
