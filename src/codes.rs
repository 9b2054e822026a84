//! Escape code pairs for the built-in styles.
//!
//! Every style is an `(open, close)` pair of SGR sequences. The composer
//! treats both halves as opaque strings, so pairs from any other table can
//! be used through [`StyleCodes::new`].

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// The open and close escape sequences for one style layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleCodes {
    pub open: Cow<'static, str>,
    pub close: Cow<'static, str>,
}

impl StyleCodes {
    /// Creates a pair from raw escape sequences.
    pub fn new(open: impl Into<Cow<'static, str>>, close: impl Into<Cow<'static, str>>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    const fn sgr(open: &'static str, close: &'static str) -> Self {
        Self {
            open: Cow::Borrowed(open),
            close: Cow::Borrowed(close),
        }
    }
}

/// Returns true if `close` is the reset-intensity code shared by bold and dim.
///
/// Bold and dim can be active at the same time, so closing one of them must
/// not be collapsed into a bare re-open of the other.
pub fn is_intensity_close(close: &str) -> bool {
    close == Style::Bold.codes().close || close == Style::Dim.codes().close
}

/// Error returned when a style name cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// No built-in style has this name
    UnknownStyle { name: String },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::UnknownStyle { name } => write!(f, "unknown style '{}'", name),
        }
    }
}

impl std::error::Error for StyleError {}

/// Built-in modifiers and base colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Inverse,
    Hidden,
    Strikethrough,

    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,

    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,
    BgGray,
}

impl Style {
    /// All built-in styles, modifiers first.
    pub const ALL: &'static [Style] = &[
        Style::Reset,
        Style::Bold,
        Style::Dim,
        Style::Italic,
        Style::Underline,
        Style::Inverse,
        Style::Hidden,
        Style::Strikethrough,
        Style::Black,
        Style::Red,
        Style::Green,
        Style::Yellow,
        Style::Blue,
        Style::Magenta,
        Style::Cyan,
        Style::White,
        Style::Gray,
        Style::BgBlack,
        Style::BgRed,
        Style::BgGreen,
        Style::BgYellow,
        Style::BgBlue,
        Style::BgMagenta,
        Style::BgCyan,
        Style::BgWhite,
        Style::BgGray,
    ];

    /// Returns the escape code pair for this style.
    pub fn codes(self) -> StyleCodes {
        match self {
            Style::Reset => StyleCodes::sgr("\x1b[0m", "\x1b[0m"),
            Style::Bold => StyleCodes::sgr("\x1b[1m", "\x1b[22m"),
            Style::Dim => StyleCodes::sgr("\x1b[2m", "\x1b[22m"),
            Style::Italic => StyleCodes::sgr("\x1b[3m", "\x1b[23m"),
            Style::Underline => StyleCodes::sgr("\x1b[4m", "\x1b[24m"),
            Style::Inverse => StyleCodes::sgr("\x1b[7m", "\x1b[27m"),
            Style::Hidden => StyleCodes::sgr("\x1b[8m", "\x1b[28m"),
            Style::Strikethrough => StyleCodes::sgr("\x1b[9m", "\x1b[29m"),

            Style::Black => StyleCodes::sgr("\x1b[30m", "\x1b[39m"),
            Style::Red => StyleCodes::sgr("\x1b[31m", "\x1b[39m"),
            Style::Green => StyleCodes::sgr("\x1b[32m", "\x1b[39m"),
            Style::Yellow => StyleCodes::sgr("\x1b[33m", "\x1b[39m"),
            Style::Blue => StyleCodes::sgr("\x1b[34m", "\x1b[39m"),
            Style::Magenta => StyleCodes::sgr("\x1b[35m", "\x1b[39m"),
            Style::Cyan => StyleCodes::sgr("\x1b[36m", "\x1b[39m"),
            Style::White => StyleCodes::sgr("\x1b[37m", "\x1b[39m"),
            Style::Gray => StyleCodes::sgr("\x1b[90m", "\x1b[39m"),

            Style::BgBlack => StyleCodes::sgr("\x1b[40m", "\x1b[49m"),
            Style::BgRed => StyleCodes::sgr("\x1b[41m", "\x1b[49m"),
            Style::BgGreen => StyleCodes::sgr("\x1b[42m", "\x1b[49m"),
            Style::BgYellow => StyleCodes::sgr("\x1b[43m", "\x1b[49m"),
            Style::BgBlue => StyleCodes::sgr("\x1b[44m", "\x1b[49m"),
            Style::BgMagenta => StyleCodes::sgr("\x1b[45m", "\x1b[49m"),
            Style::BgCyan => StyleCodes::sgr("\x1b[46m", "\x1b[49m"),
            Style::BgWhite => StyleCodes::sgr("\x1b[47m", "\x1b[49m"),
            Style::BgGray => StyleCodes::sgr("\x1b[100m", "\x1b[49m"),
        }
    }

    /// The camelCase name of this style.
    pub fn name(self) -> &'static str {
        match self {
            Style::Reset => "reset",
            Style::Bold => "bold",
            Style::Dim => "dim",
            Style::Italic => "italic",
            Style::Underline => "underline",
            Style::Inverse => "inverse",
            Style::Hidden => "hidden",
            Style::Strikethrough => "strikethrough",
            Style::Black => "black",
            Style::Red => "red",
            Style::Green => "green",
            Style::Yellow => "yellow",
            Style::Blue => "blue",
            Style::Magenta => "magenta",
            Style::Cyan => "cyan",
            Style::White => "white",
            Style::Gray => "gray",
            Style::BgBlack => "bgBlack",
            Style::BgRed => "bgRed",
            Style::BgGreen => "bgGreen",
            Style::BgYellow => "bgYellow",
            Style::BgBlue => "bgBlue",
            Style::BgMagenta => "bgMagenta",
            Style::BgCyan => "bgCyan",
            Style::BgWhite => "bgWhite",
            Style::BgGray => "bgGray",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = StyleError;

    /// Accepts camelCase (`bgRed`), snake_case (`bg_red`), and `grey`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let normalized = normalized.replace("grey", "gray");

        Style::ALL
            .iter()
            .copied()
            .find(|style| style.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| StyleError::UnknownStyle {
                name: s.to_string(),
            })
    }
}

impl From<Style> for StyleCodes {
    fn from(style: Style) -> Self {
        style.codes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_and_dim_share_close() {
        assert_eq!(Style::Bold.codes().close, Style::Dim.codes().close);
        assert!(is_intensity_close("\x1b[22m"));
        assert!(!is_intensity_close("\x1b[39m"));
    }

    #[test]
    fn test_every_style_name_parses_back() {
        for style in Style::ALL {
            assert_eq!(style.name().parse::<Style>(), Ok(*style));
        }
    }

    #[test]
    fn test_parse_snake_case_and_grey() {
        assert_eq!("bg_red".parse::<Style>(), Ok(Style::BgRed));
        assert_eq!("grey".parse::<Style>(), Ok(Style::Gray));
        assert_eq!("bgGrey".parse::<Style>(), Ok(Style::BgGray));
        assert_eq!("BOLD".parse::<Style>(), Ok(Style::Bold));
    }

    #[test]
    fn test_parse_unknown_style() {
        let err = "sparkly".parse::<Style>().unwrap_err();
        assert_eq!(
            err,
            StyleError::UnknownStyle {
                name: "sparkly".to_string()
            }
        );
        assert_eq!(err.to_string(), "unknown style 'sparkly'");
    }

    #[test]
    fn test_colors_close_with_default_color() {
        assert_eq!(Style::Red.codes().close, "\x1b[39m");
        assert_eq!(Style::BgBlue.codes().close, "\x1b[49m");
        assert_eq!(Style::Green.codes().open, "\x1b[32m");
    }

    #[test]
    fn test_raw_codes() {
        let codes = StyleCodes::new("\x1b[38;5;208m", String::from("\x1b[39m"));
        assert_eq!(codes.open, "\x1b[38;5;208m");
        assert_eq!(codes.close, "\x1b[39m");
    }
}
