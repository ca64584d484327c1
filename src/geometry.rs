//! Bar layout.
//!
//! Every element of a pattern, bar or space, is `bar_width` pixels wide.
//! Symbols are separated by one extra narrow space and the whole message is
//! padded by a quiet zone on both sides:
//!
//! ```text
//! | quiet | * | gap | payload... | * | gap | quiet |
//! ```

use crate::config::RenderConfig;
use crate::generators::Message;
use crate::sanitize::{payload_len, sanitize};

/// Elements taken by one symbol, inter-character gap included.
pub const SYMBOL_MODULES: u32 = crate::tables::PATTERN_LEN as u32 + 1;

/// One dark rectangle, anchored at the top of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bar {
    pub x: u32,
    pub width: u32,
    pub height: u32,
}

/// Drawable description of a barcode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Geometry {
    /// Bar rectangles, left to right. Spaces are not listed.
    pub bars: Vec<Bar>,
    pub total_width: u32,
    /// Bar height plus the label band when a label is shown.
    pub total_height: u32,
    /// Text to draw under the bars, if enabled.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub label: Option<String>,
    /// The text as given by the caller, before sanitizing. Feeds the
    /// accessible label, so it is kept even when `label` is not.
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: String,
}

/// Total width of a barcode holding `len` payload symbols.
pub const fn total_width(len: usize, bar_width: u32, quiet_zone: u32) -> u32 {
    let symbols = len.saturating_add(2);
    let symbols = if symbols > u32::MAX as usize { u32::MAX } else { symbols as u32 };
    symbols
        .saturating_mul(SYMBOL_MODULES)
        .saturating_mul(bar_width)
        .saturating_add(quiet_zone.saturating_mul(2))
}

/// Lays out the bars of an already sanitized payload. Returns the bar
/// rectangles and the total width, quiet zones included.
pub fn layout(payload: &str, bar_width: u32, quiet_zone: u32, height: u32) -> (Vec<Bar>, u32) {
    let mut bars = Vec::new();
    let mut x = quiet_zone;

    for symbol in Message::new(payload) {
        for bar in symbol {
            if bar {
                bars.push(Bar { x, width: bar_width, height });
            }
            x = x.saturating_add(bar_width);
        }
        // inter-character gap
        x = x.saturating_add(bar_width);
    }

    (bars, x.saturating_add(quiet_zone))
}

impl Geometry {
    /// Encodes `value` with `config`. The configuration is used as is; see
    /// [crate::encode_with] for the validating entry point.
    pub fn build(value: &str, config: &RenderConfig) -> Self {
        let payload = sanitize(value);
        let (bars, total_width) = layout(&payload, config.bar_width, config.quiet_zone, config.height);
        debug_assert_eq!(total_width, self::total_width(payload_len(value), config.bar_width, config.quiet_zone));

        Self {
            bars,
            total_width,
            total_height: config.total_height(),
            label: config.show_text.then(|| value.to_owned()),
            value: value.to_owned(),
        }
    }

    /// Height of the bars, without the label band.
    pub fn bar_height(&self) -> u32 {
        self.bars.first().map_or(self.total_height, |bar| bar.height)
    }

    /// Text for assistive technology.
    pub fn accessible_label(&self) -> String {
        format!("Code 39 barcode for {}", self.value)
    }
}
