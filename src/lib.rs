//! Code 39 barcode encoder.
//!
//! Text is upper-cased and filtered down to the 43 Code 39 payload symbols
//! (`0-9`, `A-Z`, `- . space $ / + %`), framed by the `*` start/stop
//! character and laid out as bar rectangles. Every element of a symbol's
//! 12-element pattern is `bar_width` pixels wide, symbols are separated by one
//! narrow space and the barcode is padded by a quiet zone on both sides.
//!
//! ```
//! let geometry = code39::encode("hello world");
//! assert_eq!(geometry.total_width, 358);
//! assert_eq!(geometry.label.as_deref(), Some("hello world"));
//! ```
//!
//! For pixel output, use the [Code39] builder:
//!
//! ```
//! use code39::Code39;
//!
//! let render = Code39::new("LOT-42").render().set_bar_width(1).set_height(4);
//! let mut storage = vec![false; code39::code39_width!(6, 1, 10) * 4];
//! render.fill_bits(&mut storage);
//! ```

mod builder;
mod error;
#[cfg(feature = "embedded-graphics")]
mod graphics;
mod svg;
mod tables;

pub mod config;
pub mod generators;
pub mod geometry;
pub mod sanitize;

pub use builder::{Code39, Code39Render};
pub use config::{RenderConfig, DEFAULT_BAR_WIDTH, DEFAULT_HEIGHT, DEFAULT_QUIET_ZONE, LABEL_HEIGHT};
pub use error::{Error, Result};
pub use geometry::{Bar, Geometry, SYMBOL_MODULES};
pub use sanitize::sanitize;
pub use svg::Svg;
pub use tables::{pattern, PATTERN_LEN, SENTINEL, SYMBOLS};

/// Computes at compile time the width in pixels of a barcode holding `len`
/// payload symbols. The bar width and quiet zone default to
/// [DEFAULT_BAR_WIDTH] and [DEFAULT_QUIET_ZONE].
#[macro_export]
macro_rules! code39_width {
    ($len:expr) => {
        $crate::code39_width!($len, $crate::DEFAULT_BAR_WIDTH, $crate::DEFAULT_QUIET_ZONE)
    };
    ($len:expr, $bar_width:expr, $quiet_zone:expr) => {
        (2 * ($quiet_zone as usize) + (($len as usize) + 2) * ($crate::SYMBOL_MODULES as usize) * ($bar_width as usize))
    };
}

/// Encodes `value` with the default configuration: 60 pixel bars, 2 pixel
/// elements, a 10 pixel quiet zone and a text label.
pub fn encode(value: &str) -> Geometry {
    Geometry::build(value, &RenderConfig::default())
}

/// Encodes `value` with `config`. Only the configuration can be rejected, see
/// [RenderConfig::validate].
pub fn encode_with(value: &str, config: &RenderConfig) -> Result<Geometry> {
    config.validate()?;
    Ok(Geometry::build(value, config))
}
