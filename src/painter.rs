//! Chainable styling entry point.

use std::sync::Arc;

use crate::codes::{Style, StyleCodes, StyleError};
use crate::compose::render;
use crate::config::ColorConfig;
use crate::detect::{detect_level, Stream};
use crate::level::ColorLevel;
use crate::node::StyleNode;

/// Applies a chain of styles to text.
///
/// Every styling call returns a new painter with one more layer; the
/// receiver is left untouched, so a base painter can be reused for many
/// independent chains. All painters derived from one root share its
/// [`ColorLevel`]: changing the level through any of them affects the whole
/// family.
///
/// # Example
///
/// ```rust
/// use nestyle::{ColorLevel, Painter};
///
/// let painter = Painter::with_level(ColorLevel::Basic16);
///
/// let warning = painter.yellow().bold();
/// assert_eq!(warning.paint("careful"), "\x1b[33m\x1b[1mcareful\x1b[22m\x1b[39m");
///
/// // Nested styles resume the outer color after the inner one closes
/// let line = painter.green().paint(format!("a {} c", painter.blue().paint("b")));
/// assert_eq!(line, "\x1b[32ma \x1b[34mb\x1b[32m c\x1b[39m");
/// ```
#[derive(Debug, Clone)]
pub struct Painter {
    node: Option<Arc<StyleNode>>,
    config: Arc<ColorConfig>,
}

impl Painter {
    /// Creates an unstyled painter for stdout, with the detected color level.
    pub fn new() -> Self {
        Self::for_stream(Stream::Stdout)
    }

    /// Creates an unstyled painter with the level detected for `stream`.
    pub fn for_stream(stream: Stream) -> Self {
        Self::with_level(detect_level(stream))
    }

    /// Creates an unstyled painter with an explicit level, skipping detection.
    pub fn with_level(level: ColorLevel) -> Self {
        Self {
            node: None,
            config: Arc::new(ColorConfig::new(level)),
        }
    }

    /// Adds a built-in style to the chain.
    #[must_use]
    pub fn style(&self, style: Style) -> Self {
        self.codes(&style.codes())
    }

    /// Adds a built-in style by name, e.g. `"bold"` or `"bgRed"`.
    pub fn named(&self, name: &str) -> Result<Self, StyleError> {
        Ok(self.style(name.parse()?))
    }

    /// Adds a raw escape code pair to the chain.
    #[must_use]
    pub fn codes(&self, codes: &StyleCodes) -> Self {
        Self {
            node: Some(StyleNode::with_codes(self.node.as_ref(), codes)),
            config: Arc::clone(&self.config),
        }
    }

    /// Renders `text` through the current chain.
    pub fn paint(&self, text: impl AsRef<str>) -> String {
        self.paint_all([text])
    }

    /// Renders several strings, joined by single spaces, through the chain.
    pub fn paint_all<I, S>(&self, strings: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        render(self.node.as_deref(), self.config.level(), strings)
    }

    /// Returns the level shared by this painter's family.
    pub fn level(&self) -> ColorLevel {
        self.config.level()
    }

    /// Changes the level for every painter sharing this one's root.
    ///
    /// Strings rendered before the call are unaffected.
    pub fn set_level(&self, level: ColorLevel) {
        self.config.set_level(level);
    }

    /// The innermost style layer, if any style has been applied.
    pub fn node(&self) -> Option<&Arc<StyleNode>> {
        self.node.as_ref()
    }

    /// Returns true if `other` shares this painter's color level.
    pub fn shares_level_with(&self, other: &Painter) -> bool {
        Arc::ptr_eq(&self.config, &other.config)
    }

    #[must_use]
    pub fn reset(&self) -> Self {
        self.style(Style::Reset)
    }

    #[must_use]
    pub fn bold(&self) -> Self {
        self.style(Style::Bold)
    }

    #[must_use]
    pub fn dim(&self) -> Self {
        self.style(Style::Dim)
    }

    #[must_use]
    pub fn italic(&self) -> Self {
        self.style(Style::Italic)
    }

    #[must_use]
    pub fn underline(&self) -> Self {
        self.style(Style::Underline)
    }

    #[must_use]
    pub fn inverse(&self) -> Self {
        self.style(Style::Inverse)
    }

    #[must_use]
    pub fn hidden(&self) -> Self {
        self.style(Style::Hidden)
    }

    #[must_use]
    pub fn strikethrough(&self) -> Self {
        self.style(Style::Strikethrough)
    }

    #[must_use]
    pub fn black(&self) -> Self {
        self.style(Style::Black)
    }

    #[must_use]
    pub fn red(&self) -> Self {
        self.style(Style::Red)
    }

    #[must_use]
    pub fn green(&self) -> Self {
        self.style(Style::Green)
    }

    #[must_use]
    pub fn yellow(&self) -> Self {
        self.style(Style::Yellow)
    }

    #[must_use]
    pub fn blue(&self) -> Self {
        self.style(Style::Blue)
    }

    #[must_use]
    pub fn magenta(&self) -> Self {
        self.style(Style::Magenta)
    }

    #[must_use]
    pub fn cyan(&self) -> Self {
        self.style(Style::Cyan)
    }

    #[must_use]
    pub fn white(&self) -> Self {
        self.style(Style::White)
    }

    #[must_use]
    pub fn gray(&self) -> Self {
        self.style(Style::Gray)
    }

    #[must_use]
    pub fn bg_black(&self) -> Self {
        self.style(Style::BgBlack)
    }

    #[must_use]
    pub fn bg_red(&self) -> Self {
        self.style(Style::BgRed)
    }

    #[must_use]
    pub fn bg_green(&self) -> Self {
        self.style(Style::BgGreen)
    }

    #[must_use]
    pub fn bg_yellow(&self) -> Self {
        self.style(Style::BgYellow)
    }

    #[must_use]
    pub fn bg_blue(&self) -> Self {
        self.style(Style::BgBlue)
    }

    #[must_use]
    pub fn bg_magenta(&self) -> Self {
        self.style(Style::BgMagenta)
    }

    #[must_use]
    pub fn bg_cyan(&self) -> Self {
        self.style(Style::BgCyan)
    }

    #[must_use]
    pub fn bg_white(&self) -> Self {
        self.style(Style::BgWhite)
    }

    #[must_use]
    pub fn bg_gray(&self) -> Self {
        self.style(Style::BgGray)
    }
}

impl Default for Painter {
    fn default() -> Self {
        Self::new()
    }
}
