// File: crates/polar-core/src/theme.rs
// Summary: Chart color palette presets and hex color parsing.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub text: skia::Color,
    /// Fill used for wedges that carry no explicit color.
    pub wedge_default: skia::Color,
}

impl Theme {
    /// Warm off-white used by the reference rendering.
    pub fn parchment() -> Self {
        Self {
            name: "parchment",
            background: skia::Color::from_argb(255, 0xF8, 0xF1, 0xF1),
            text: skia::Color::from_argb(255, 0x20, 0x20, 0x24),
            wedge_default: skia::Color::from_argb(255, 0x46, 0x8F, 0xA8),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            text: skia::Color::from_argb(255, 20, 20, 30),
            wedge_default: skia::Color::from_argb(255, 32, 120, 200),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            text: skia::Color::from_argb(255, 235, 235, 245),
            wedge_default: skia::Color::from_argb(255, 64, 160, 255),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::parchment()
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::parchment(), Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to parchment.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::parchment()
}

/// Parse `#RRGGBB` (leading `#` optional) into an opaque color.
pub fn parse_hex(s: &str) -> Option<skia::Color> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(skia::Color::from_argb(255, r, g, b))
}
