//! Render configuration.

use crate::error::{Error, Result};

/// Default height of the bars, in pixels.
pub const DEFAULT_HEIGHT: u32 = 60;
/// Default width of one element, in pixels.
pub const DEFAULT_BAR_WIDTH: u32 = 2;
/// Default blank padding on each side, in pixels.
pub const DEFAULT_QUIET_ZONE: u32 = 10;
/// Height of the band reserved under the bars for the text label.
pub const LABEL_HEIGHT: u32 = 20;

/// Geometry and label options. Every field falls back to its documented
/// default, also when deserializing a partial object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RenderConfig {
    /// Height of the bars.
    pub height: u32,
    /// Width of a single bar or space element.
    pub bar_width: u32,
    /// Padding added on the left and right.
    pub quiet_zone: u32,
    /// Draw the original text under the bars.
    pub show_text: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderConfig {
    pub const fn new() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            bar_width: DEFAULT_BAR_WIDTH,
            quiet_zone: DEFAULT_QUIET_ZONE,
            show_text: true,
        }
    }

    pub const fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub const fn with_bar_width(mut self, bar_width: u32) -> Self {
        self.bar_width = bar_width;
        self
    }

    pub const fn with_quiet_zone(mut self, quiet_zone: u32) -> Self {
        self.quiet_zone = quiet_zone;
        self
    }

    pub const fn with_show_text(mut self, show_text: bool) -> Self {
        self.show_text = show_text;
        self
    }

    /// Rejects configurations that would produce zero-sized bars. A zero
    /// quiet zone is allowed.
    pub const fn validate(&self) -> Result<()> {
        if self.bar_width == 0 {
            return Err(Error::InvalidConfiguration {
                field: "bar_width",
                reason: "must be at least 1",
            });
        }
        if self.height == 0 {
            return Err(Error::InvalidConfiguration {
                field: "height",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Height of the whole surface, label band included.
    pub const fn total_height(&self) -> u32 {
        if self.show_text {
            self.height.saturating_add(LABEL_HEIGHT)
        } else {
            self.height
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.height, 60);
        assert_eq!(config.bar_width, 2);
        assert_eq!(config.quiet_zone, 10);
        assert!(config.show_text);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_bar_width_is_rejected() {
        let err = RenderConfig::new().with_bar_width(0).validate().unwrap_err();
        assert_eq!(err, Error::InvalidConfiguration { field: "bar_width", reason: "must be at least 1" });
        assert_eq!(err.to_string(), "invalid configuration: `bar_width` must be at least 1");
    }

    #[test]
    fn test_zero_height_is_rejected() {
        let err = RenderConfig::new().with_height(0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { field: "height", .. }));
    }

    #[test]
    fn test_zero_quiet_zone_is_valid() {
        assert!(RenderConfig::new().with_quiet_zone(0).validate().is_ok());
    }

    #[test]
    fn test_total_height() {
        assert_eq!(RenderConfig::new().total_height(), 80);
        assert_eq!(RenderConfig::new().with_show_text(false).total_height(), 60);
        assert_eq!(RenderConfig::new().with_height(u32::MAX).total_height(), u32::MAX);
    }
}
