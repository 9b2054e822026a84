//! Initial color level detection.
//!
//! Painters ask a process-wide detector for their starting level. The
//! default detector defers to the `console` crate, which honours
//! `CLICOLOR`/`CLICOLOR_FORCE` and checks whether the stream is a terminal.
//! Applications (and tests) can install their own with
//! [`set_level_detector`].

use once_cell::sync::Lazy;
use std::sync::Mutex;

use crate::level::ColorLevel;

/// The output stream a painter targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

type LevelDetector = fn(Stream) -> ColorLevel;

static LEVEL_DETECTOR: Lazy<Mutex<LevelDetector>> = Lazy::new(|| Mutex::new(console_detector));

/// Overrides the detector used to pick the initial level of new painters.
///
/// Painters that already exist keep their level.
pub fn set_level_detector(detector: LevelDetector) {
    let mut guard = LEVEL_DETECTOR.lock().unwrap_or_else(|e| e.into_inner());
    *guard = detector;
}

/// Restores the default `console`-based detector.
pub fn reset_level_detector() {
    set_level_detector(console_detector);
}

/// Returns the detected color level for `stream`.
pub fn detect_level(stream: Stream) -> ColorLevel {
    let detector = *LEVEL_DETECTOR.lock().unwrap_or_else(|e| e.into_inner());
    detector(stream)
}

fn console_detector(stream: Stream) -> ColorLevel {
    let enabled = match stream {
        Stream::Stdout => console::colors_enabled(),
        Stream::Stderr => console::colors_enabled_stderr(),
    };
    if enabled {
        ColorLevel::Basic16
    } else {
        ColorLevel::None
    }
}
