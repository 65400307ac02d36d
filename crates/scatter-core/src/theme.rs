// File: crates/scatter-core/src/theme.rs
// Summary: Colour sets for the scene background, axis lines and point discs.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub point: skia::Color,
}

impl Theme {
    /// White lines and points on black.
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 0, 0, 0),
            axis_line: skia::Color::from_argb(255, 255, 255, 255),
            point: skia::Color::from_argb(255, 255, 255, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            point: skia::Color::from_argb(255, 32, 120, 200),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            axis_line: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),  // base1
            point: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),      // blue
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::solarized_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
