//! Color capability levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How much color a destination stream can display.
///
/// Levels are ordered: anything at or below [`ColorLevel::None`] renders
/// plain text, anything above it emits escape codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorLevel {
    /// No color support.
    #[default]
    None = 0,
    /// The basic 16 ANSI colors.
    #[serde(rename = "basic")]
    Basic16 = 1,
    /// The 256-color palette.
    #[serde(rename = "256")]
    Ansi256 = 2,
    /// 24-bit RGB.
    TrueColor = 3,
}

impl ColorLevel {
    /// Returns true if this level emits escape codes at all.
    pub fn has_color(self) -> bool {
        self > ColorLevel::None
    }

    /// The canonical name, as accepted by [`FromStr`] and used by serde.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorLevel::None => "none",
            ColorLevel::Basic16 => "basic",
            ColorLevel::Ansi256 => "256",
            ColorLevel::TrueColor => "truecolor",
        }
    }
}

impl fmt::Display for ColorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a value cannot be turned into a [`ColorLevel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelParseError {
    /// The name is not one of the known level names.
    UnknownName(String),
    /// The numeric value is above [`ColorLevel::TrueColor`].
    OutOfRange(u8),
}

impl fmt::Display for LevelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelParseError::UnknownName(name) => {
                write!(f, "unknown color level '{}'", name)
            }
            LevelParseError::OutOfRange(value) => {
                write!(f, "color level {} is out of range (0-3)", value)
            }
        }
    }
}

impl std::error::Error for LevelParseError {}

impl FromStr for ColorLevel {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "0" => Ok(ColorLevel::None),
            "basic" | "16" | "1" => Ok(ColorLevel::Basic16),
            "256" | "ansi256" | "2" => Ok(ColorLevel::Ansi256),
            "truecolor" | "true" | "16m" | "3" => Ok(ColorLevel::TrueColor),
            _ => Err(LevelParseError::UnknownName(s.to_string())),
        }
    }
}

impl TryFrom<u8> for ColorLevel {
    type Error = LevelParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ColorLevel::None),
            1 => Ok(ColorLevel::Basic16),
            2 => Ok(ColorLevel::Ansi256),
            3 => Ok(ColorLevel::TrueColor),
            other => Err(LevelParseError::OutOfRange(other)),
        }
    }
}

impl From<ColorLevel> for u8 {
    fn from(level: ColorLevel) -> Self {
        level as u8
    }
}
