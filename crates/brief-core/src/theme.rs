// File: crates/brief-core/src/theme.rs
// Summary: Colors and Light/Dark theme presets for the brief's charts.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha scaled by `opacity` (clamped to [0, 1]).
    pub fn with_alpha(self, opacity: f32) -> Self {
        let o = crate::geometry::clamp(opacity, 0.0, 1.0);
        Self { a: (self.a as f32 * o).round() as u8, ..self }
    }

    /// `#rrggbb` when opaque, `rgba(r,g,b,a)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let a = self.a as f32 / 255.0;
            format!("rgba({},{},{},{})", self.r, self.g, self.b, crate::svg::fmt_num(a))
        }
    }
}

/// Donut segment opacity by ordinal position; positions past the ramp hold its last level.
pub const SHADE_RAMP: [f32; 4] = [1.0, 0.75, 0.5, 0.3];

pub fn shade_for(index: usize) -> f32 {
    SHADE_RAMP[index.min(SHADE_RAMP.len() - 1)]
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub title: Color,
    pub subtitle: Color,
    pub line_stroke: Color,
    pub marker_fill: Color,
    pub bar_fill: Color,
    pub bar_track: Color,
    pub mini_bar_fill: Color,
    pub donut_base: Color,
    pub donut_track: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(255, 255, 255),
            grid: Color::rgb(229, 231, 235),
            axis_line: Color::rgb(156, 163, 175),
            axis_label: Color::rgb(75, 85, 99),
            title: Color::rgb(17, 24, 39),
            subtitle: Color::rgb(107, 114, 128),
            line_stroke: Color::rgb(30, 64, 175),
            marker_fill: Color::rgb(30, 64, 175),
            bar_fill: Color::rgb(37, 99, 235),
            bar_track: Color::rgb(243, 244, 246),
            mini_bar_fill: Color::rgb(71, 85, 105),
            donut_base: Color::rgb(30, 58, 138),
            donut_track: Color::rgb(229, 231, 235),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            grid: Color::rgb(40, 40, 45),
            axis_line: Color::rgb(180, 180, 190),
            axis_label: Color::rgb(235, 235, 245),
            title: Color::rgb(245, 245, 250),
            subtitle: Color::rgb(150, 150, 160),
            line_stroke: Color::rgb(64, 160, 255),
            marker_fill: Color::rgb(64, 160, 255),
            bar_fill: Color::rgb(96, 156, 255),
            bar_track: Color::rgb(40, 40, 45),
            mini_bar_fill: Color::rgb(148, 163, 184),
            donut_base: Color::rgb(96, 156, 255),
            donut_track: Color::rgb(40, 40, 45),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: Color::rgb(0x00, 0x00, 0x00),
            grid: Color::rgb(0x22, 0x22, 0x22),
            axis_line: Color::rgb(0xff, 0xff, 0xff),
            axis_label: Color::rgb(0xff, 0xff, 0xff),
            title: Color::rgb(0xff, 0xff, 0xff),
            subtitle: Color::rgb(0xcc, 0xcc, 0xcc),
            line_stroke: Color::rgb(0x00, 0xff, 0xff),
            marker_fill: Color::rgb(0xff, 0xff, 0x00),
            bar_fill: Color::rgb(0x00, 0xaa, 0xff),
            bar_track: Color::rgb(0x22, 0x22, 0x22),
            mini_bar_fill: Color::rgb(0x00, 0xff, 0x00),
            donut_base: Color::rgb(0x00, 0xaa, 0xff),
            donut_track: Color::rgb(0x22, 0x22, 0x22),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_holds_after_four() {
        assert_eq!(shade_for(0), 1.0);
        assert_eq!(shade_for(3), 0.3);
        assert_eq!(shade_for(9), 0.3);
        assert!(shade_for(1) > shade_for(2));
    }

    #[test]
    fn css_colors() {
        assert_eq!(Color::rgb(30, 64, 175).to_css(), "#1e40af");
        assert_eq!(Color::rgb(0, 0, 0).with_alpha(0.5).to_css(), "rgba(0,0,0,0.5)");
    }

    #[test]
    fn find_falls_back_to_light() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("nope").name, "light");
    }
}
