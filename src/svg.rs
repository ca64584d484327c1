//! SVG output.

use core::fmt;

use crate::config::LABEL_HEIGHT;
use crate::geometry::Geometry;

const LABEL_FONT_SIZE: u32 = 14;

/// Writes a [Geometry] as a standalone SVG document.
#[derive(Debug, Clone, Copy)]
pub struct Svg<'a> {
    geometry: &'a Geometry,
}

/// Escapes text for use in XML content and attribute values.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(i) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..i])?;
            f.write_str(match rest.as_bytes()[i] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&apos;",
            })?;
            rest = &rest[i + 1..];
        }
        f.write_str(rest)
    }
}

impl fmt::Display for Svg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = self.geometry;
        let (w, h) = (g.total_width, g.total_height);

        write!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-label="Code 39 barcode for {}">"#,
            Escaped(&g.value)
        )?;
        write!(f, r##"<rect x="0" y="0" width="{w}" height="{h}" fill="#ffffff"/>"##)?;
        for bar in &g.bars {
            write!(
                f,
                r##"<rect x="{}" y="0" width="{}" height="{}" fill="#000000"/>"##,
                bar.x, bar.width, bar.height
            )?;
        }
        if let Some(label) = &g.label {
            let y = g.bar_height().saturating_add((LABEL_HEIGHT + LABEL_FONT_SIZE) / 2 - 2);
            write!(
                f,
                r##"<text x="{}" y="{y}" text-anchor="middle" font-family="monospace" font-size="{LABEL_FONT_SIZE}" fill="#000000">{}</text>"##,
                w / 2,
                Escaped(label)
            )?;
        }
        f.write_str("</svg>")
    }
}

impl Geometry {
    /// Borrows the geometry as a displayable SVG document.
    pub fn svg(&self) -> Svg<'_> {
        Svg { geometry: self }
    }

    pub fn to_svg(&self) -> String {
        self.svg().to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Escaped;
    use crate::{config::RenderConfig, geometry::Geometry};

    #[test]
    fn test_escape() {
        assert_eq!(Escaped(r#"a<b>&"c'"#).to_string(), "a&lt;b&gt;&amp;&quot;c&apos;");
        assert_eq!(Escaped("plain").to_string(), "plain");
        assert_eq!(Escaped("日本<").to_string(), "日本&lt;");
    }

    #[test]
    fn test_document_structure() {
        let svg = Geometry::build("A", &RenderConfig::default()).to_svg();

        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="98" height="80" viewBox="0 0 98 80" role="img" aria-label="Code 39 barcode for A">"#));
        assert!(svg.contains(r##"<rect x="0" y="0" width="98" height="80" fill="#ffffff"/>"##));
        assert!(svg.contains(r##"<rect x="10" y="0" width="2" height="60" fill="#000000"/>"##));
        assert!(svg.contains(r#"<text x="49" y="75" text-anchor="middle""#));
        assert!(svg.ends_with(">A</text></svg>"));
    }

    #[test]
    fn test_one_rect_per_bar() {
        let g = Geometry::build("0", &RenderConfig::default());
        let svg = g.to_svg();
        // background + bars
        assert_eq!(svg.matches("<rect").count(), g.bars.len() + 1);
        assert_eq!(g.bars.len(), 7 + 7 + 7);
    }

    #[test]
    fn test_without_label() {
        let svg = Geometry::build("a&b", &RenderConfig::new().with_show_text(false)).to_svg();
        assert!(!svg.contains("<text"));
        assert!(svg.contains(r#"aria-label="Code 39 barcode for a&amp;b""#));
        assert!(svg.contains(r#"height="60""#));
    }

    #[test]
    fn test_label_is_original_text() {
        let svg = Geometry::build("lot <7>", &RenderConfig::default()).to_svg();
        assert!(svg.contains(">lot &lt;7&gt;</text>"));
    }

    #[test]
    fn test_extreme_sizes() {
        let config = RenderConfig::new().with_height(u32::MAX - 5).with_bar_width(u32::MAX).with_quiet_zone(u32::MAX);
        let svg = Geometry::build("A", &config).to_svg();

        assert!(svg.contains(r#"width="4294967295" height="4294967295""#));
        assert!(svg.contains(r#"<text x="2147483647" y="4294967295""#));
        assert!(svg.ends_with("</svg>"));
    }
}
