// File: crates/headcount-core/src/theme.rs
// Summary: Color palettes for bars, gutters, and labels.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub new_hires: skia::Color,
    pub headcount: skia::Color,
    pub leavers: skia::Color,
    pub gutter_stroke: skia::Color,
    pub gutter_label: skia::Color,
    pub value_label: skia::Color,
    pub header: skia::Color,
}

impl Theme {
    /// Palette of the dashboard visualisation.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            new_hires: skia::Color::from_argb(255, 0xd0, 0xf0, 0xc0),
            headcount: skia::Color::from_argb(255, 0x8f, 0xa9, 0xdc),
            leavers: skia::Color::from_argb(255, 0xe7, 0x4c, 0x3c),
            gutter_stroke: skia::Color::from_argb(255, 0x8f, 0xa9, 0xdc),
            gutter_label: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            value_label: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            header: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            new_hires: skia::Color::from_argb(255, 40, 200, 120),
            headcount: skia::Color::from_argb(255, 64, 160, 255),
            leavers: skia::Color::from_argb(255, 220, 80, 80),
            gutter_stroke: skia::Color::from_argb(255, 180, 180, 190),
            gutter_label: skia::Color::from_argb(255, 235, 235, 245),
            value_label: skia::Color::from_argb(255, 235, 235, 245),
            header: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// `#rrggbb` form used by the SVG writer; alpha is carried separately.
pub fn hex(color: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_palette_hex() {
        let t = Theme::light();
        assert_eq!(hex(t.new_hires), "#d0f0c0");
        assert_eq!(hex(t.headcount), "#8fa9dc");
        assert_eq!(hex(t.leavers), "#e74c3c");
    }

    #[test]
    fn default_is_light() {
        assert_eq!(Theme::default(), Theme::light());
        assert_ne!(Theme::dark().background, Theme::light().background);
    }
}
