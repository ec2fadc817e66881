// File: crates/raster-render/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

/// Backend-neutral 8-bit color; converted to the renderer's color type at draw time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub tick: Rgba,
    pub line_stroke: Rgba,
    pub point_fill: Rgba,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::from_argb(255, 18, 18, 20),
            grid: Rgba::from_argb(255, 40, 40, 45),
            axis_line: Rgba::from_argb(255, 180, 180, 190),
            axis_label: Rgba::from_argb(255, 235, 235, 245),
            tick: Rgba::from_argb(255, 150, 150, 160),
            line_stroke: Rgba::from_argb(255, 75, 192, 192),
            point_fill: Rgba::from_argb(255, 255, 230, 70),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::from_argb(255, 250, 250, 252),
            grid: Rgba::from_argb(255, 230, 230, 235),
            axis_line: Rgba::from_argb(255, 60, 60, 70),
            axis_label: Rgba::from_argb(255, 20, 20, 30),
            tick: Rgba::from_argb(255, 100, 100, 110),
            line_stroke: Rgba::from_argb(255, 75, 192, 192),
            point_fill: Rgba::from_argb(255, 30, 120, 240),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::from_argb(255, 0x00, 0x00, 0x00),
            grid: Rgba::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: Rgba::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: Rgba::from_argb(255, 0xff, 0xff, 0xff),
            tick: Rgba::from_argb(255, 0xcc, 0xcc, 0xcc),
            line_stroke: Rgba::from_argb(255, 0x00, 0xff, 0xff),
            point_fill: Rgba::from_argb(255, 0xff, 0xff, 0x00),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    log::warn!("unknown theme '{name}', using dark");
    Theme::dark()
}
