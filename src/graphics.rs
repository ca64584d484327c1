//! [embedded_graphics] support.

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::Rectangle,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use crate::builder::Code39Render;
use crate::config::LABEL_HEIGHT;

/// Converts a pixel distance to a coordinate, clamping at `i32::MAX`.
fn coord(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// `origin` moved right by `x` and down by `y`, saturating at the edge of
/// the coordinate space.
fn shifted(origin: Point, x: u32, y: u32) -> Point {
    Point::new(origin.x.saturating_add(coord(x)), origin.y.saturating_add(coord(y)))
}

/// Center of the label band under bars of `bar_height` pixels.
fn label_center(origin: Point, total_width: u32, bar_height: u32) -> Point {
    shifted(origin, total_width / 2, bar_height.saturating_add(LABEL_HEIGHT / 2))
}

impl Drawable for Code39Render<'_> {
    type Color = BinaryColor;
    type Output = ();

    /// Draws the background, the bars and, if enabled, the original text
    /// centered in the label band. Unless inverted, bars are
    /// [BinaryColor::On] on an [BinaryColor::Off] background.
    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let (background, foreground) = if self.inverted() {
            (BinaryColor::On, BinaryColor::Off)
        } else {
            (BinaryColor::Off, BinaryColor::On)
        };
        let origin = Point::new(self.offset().0, self.offset().1);
        let geometry = self.geometry();

        target.fill_solid(
            &Rectangle::new(origin, Size::new(geometry.total_width, geometry.total_height)),
            background,
        )?;

        for bar in &geometry.bars {
            let area = Rectangle::new(shifted(origin, bar.x, 0), Size::new(bar.width, bar.height));
            target.fill_solid(&area, foreground)?;
        }

        if let Some(label) = &geometry.label {
            let center = label_center(origin, geometry.total_width, self.height());
            let style = TextStyleBuilder::new()
                .alignment(Alignment::Center)
                .baseline(Baseline::Middle)
                .build();
            Text::with_text_style(label, center, MonoTextStyle::new(&FONT_6X10, foreground), style)
                .draw(target)?;
        }

        Ok(())
    }
}
