//! Capability level shared by a family of painters.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::level::ColorLevel;

/// The color level shared by a root painter and every painter derived from it.
///
/// The level is stored atomically, so it can be changed while other threads
/// render through the same family.
#[derive(Debug)]
pub struct ColorConfig {
    level: AtomicU8,
}

impl ColorConfig {
    pub fn new(level: ColorLevel) -> Self {
        Self {
            level: AtomicU8::new(level.into()),
        }
    }

    pub fn level(&self) -> ColorLevel {
        // Only valid levels are ever stored.
        ColorLevel::try_from(self.level.load(Ordering::Acquire)).unwrap_or(ColorLevel::None)
    }

    pub fn set_level(&self, level: ColorLevel) {
        self.level.store(level.into(), Ordering::Release);
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(ColorLevel::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_set_and_get() {
        let config = ColorConfig::new(ColorLevel::Basic16);
        assert_eq!(config.level(), ColorLevel::Basic16);

        config.set_level(ColorLevel::TrueColor);
        assert_eq!(config.level(), ColorLevel::TrueColor);
    }

    #[test]
    fn test_config_default_is_none() {
        assert_eq!(ColorConfig::default().level(), ColorLevel::None);
    }
}
