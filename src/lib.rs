//! # Nestyle - chainable ANSI styling that survives nesting
//!
//! `nestyle` wraps strings in ANSI escape sequences built up from a chain of
//! styles. Styled strings can be embedded inside other styled strings: when
//! an inner style closes, the outer style picks up again instead of leaking
//! to plain text.
//!
//! ## Core Concepts
//!
//! - [`Painter`]: The chainable entry point. Each style call returns a new
//!   painter with one more layer.
//! - [`StyleNode`]: One immutable layer in a chain, sharing its parent.
//! - [`ColorLevel`]: How much color the destination supports. At
//!   [`ColorLevel::None`] text is returned without any codes.
//! - [`Style`] / [`StyleCodes`]: Built-in styles and raw `(open, close)`
//!   code pairs.
//!
//! ## Quick Start
//!
//! ```rust
//! use nestyle::{ColorLevel, Painter};
//!
//! let painter = Painter::with_level(ColorLevel::Basic16);
//!
//! let title = painter.cyan().bold();
//! println!("{}", title.paint("Report"));
//!
//! // Several arguments are joined with spaces
//! assert_eq!(
//!     painter.red().paint_all(["Hello", "World"]),
//!     "\x1b[31mHello World\x1b[39m",
//! );
//! ```
//!
//! ## Color Levels
//!
//! Painters created with [`Painter::new`] or [`Painter::for_stream`] ask the
//! detector for their initial level (see [`set_level_detector`]). Every
//! painter derived from one root shares that level, and
//! [`Painter::set_level`] changes it for all of them:
//!
//! ```rust
//! use nestyle::{ColorLevel, Painter};
//!
//! let root = Painter::with_level(ColorLevel::TrueColor);
//! let error = root.red().bold();
//!
//! root.set_level(ColorLevel::None);
//! assert_eq!(error.paint("plain now"), "plain now");
//! ```
//!
//! ## Line Breaks
//!
//! Styles are closed before every line break and re-opened after it, so
//! terminals that reset attributes per line still render each line styled.

pub mod codes;
pub mod compose;
mod config;
pub mod detect;
mod level;
pub mod node;
mod painter;

pub use codes::{is_intensity_close, Style, StyleCodes, StyleError};
pub use compose::render;
pub use config::ColorConfig;
pub use detect::{detect_level, reset_level_detector, set_level_detector, Stream};
pub use level::{ColorLevel, LevelParseError};
pub use node::StyleNode;
pub use painter::Painter;
