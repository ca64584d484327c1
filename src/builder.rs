use core::iter;

use crate::config::RenderConfig;
use crate::generators::Message;
use crate::geometry::{self, Geometry};
use crate::sanitize::sanitize;

/// A Code 39 barcode: the caller's text and the payload it sanitizes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code39<'a> {
    value: &'a str,
    payload: String,
}

impl<'a> Code39<'a> {
    /// Creates a barcode for `value`. Lowercase letters are upper-cased,
    /// unsupported characters and `*` are dropped; this never fails.
    pub fn new(value: &'a str) -> Self {
        Self { value, payload: sanitize(value) }
    }

    /// The text as given by the caller.
    #[inline]
    pub const fn value(&self) -> &'a str {
        self.value
    }

    /// The encoded text, without the start/stop characters.
    #[inline]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Number of symbols in the message, start and stop included.
    #[inline]
    pub fn symbol_count(&self) -> usize {
        self.payload.chars().count() + 2
    }

    /// Symbol patterns of the message, start and stop included.
    pub fn symbols(&self) -> Message<'_> {
        Message::new(&self.payload)
    }

    /// One entry per element, inter-character gaps included: `true` for a
    /// bar, `false` for a space.
    pub fn modules(&self) -> impl Iterator<Item = bool> + '_ {
        self.symbols()
            .flat_map(|symbol| symbol.into_iter().chain(iter::once(false)))
    }

    pub fn render(self) -> Code39Render<'a> {
        Code39Render {
            inner: self,
            config: RenderConfig::new(),
            inverted: false,
            offset: (0, 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code39Render<'a> {
    inner: Code39<'a>,
    config: RenderConfig,
    inverted: bool,
    offset: (i32, i32),
}

impl<'a> From<Code39<'a>> for Code39Render<'a> {
    fn from(inner: Code39<'a>) -> Self {
        inner.render()
    }
}

impl<'a> Code39Render<'a> {
    pub fn barcode(&self) -> &Code39<'a> {
        &self.inner
    }

    /// Total width, quiet zones included.
    pub fn width(&self) -> u32 {
        geometry::total_width(self.inner.symbol_count() - 2, self.config.bar_width, self.config.quiet_zone)
    }

    /// Height of the bars.
    pub const fn height(&self) -> u32 {
        self.config.height
    }

    /// Height of the bars plus the label band, if enabled.
    pub const fn total_height(&self) -> u32 {
        self.config.total_height()
    }

    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Replaces the whole configuration. Zero bar width and height are
    /// raised to one pixel.
    pub fn set_config(mut self, config: RenderConfig) -> Self {
        self.config = config
            .with_bar_width(config.bar_width.max(1))
            .with_height(config.height.max(1));
        self
    }

    /// Sets the height of the bars (at least 1).
    pub fn set_height(mut self, height: u32) -> Self {
        self.config.height = height.max(1);
        self
    }

    /// Sets the width of a single element (at least 1).
    pub fn set_bar_width(mut self, bar_width: u32) -> Self {
        self.config.bar_width = bar_width.max(1);
        self
    }

    pub fn set_quiet_zone(mut self, quiet_zone: u32) -> Self {
        self.config.quiet_zone = quiet_zone;
        self
    }

    pub fn set_show_text(mut self, show_text: bool) -> Self {
        self.config.show_text = show_text;
        self
    }

    /// Returns if the barcode is set to be rendered with inverted colors.
    pub const fn inverted(&self) -> bool {
        self.inverted
    }

    /// Marks whether this barcode should be rendered with pixel values
    /// inverted.
    pub fn set_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Top-left corner used when drawing onto a target.
    pub const fn offset(&self) -> (i32, i32) {
        self.offset
    }

    pub fn set_offset(mut self, offset: (i32, i32)) -> Self {
        self.offset = offset;
        self
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::build(self.inner.value, &self.config)
    }

    /// One pixel row of the bars, quiet zones included. Always yields
    /// exactly [Self::width] pixels, so a row whose width saturated at
    /// `u32::MAX` is cut off on the right.
    pub fn row(&self) -> impl Iterator<Item = bool> + '_ {
        let bar_width = self.config.bar_width as usize;
        let invert = self.inverted;
        let quiet_zone = iter::repeat(false).take(self.config.quiet_zone as usize);

        quiet_zone.clone()
            .chain(self.inner.modules().flat_map(move |m| iter::repeat(m).take(bar_width)))
            .chain(quiet_zone)
            .take(self.width() as usize)
            .map(move |bit| bit ^ invert)
    }

    /// Every pixel of the bar area, row after row. The label band is not
    /// included.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.config.height).flat_map(move |_| self.row())
    }

    /// Fills `target` with `on` for bar pixels and `off` for space pixels.
    /// Pixels past the end of `target` are ignored.
    pub fn fill<P: Clone>(&self, target: &mut [P], on: &P, off: &P) {
        for (pixel, bit) in target.iter_mut().zip(self.bits()) {
            *pixel = if bit { on.clone() } else { off.clone() };
        }
    }

    pub fn fill_bits(&self, target: &mut [bool]) {
        self.fill(target, &true, &false);
    }

    /// Packs the bar area 8 pixels per byte, most significant bit first.
    /// Each row starts on a new byte. Bytes past the end of `target` are
    /// ignored.
    pub fn fill_bitmap(&self, target: &mut [u8]) {
        let stride = (self.width() as usize).div_ceil(8);
        for bytes in target.chunks_mut(stride).take(self.config.height as usize) {
            bytes.fill(0);
            for (i, bit) in self.row().enumerate() {
                if let Some(byte) = bytes.get_mut(i / 8).filter(|_| bit) {
                    *byte |= 0x80 >> (i % 8);
                }
            }
        }
    }
}
