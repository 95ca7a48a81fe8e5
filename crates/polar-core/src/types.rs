// File: crates/polar-core/src/types.rs
// Summary: Shared types and constants (surface size, text alignment).

/// Default surface width in pixels. The viewport is square, so width and
/// height default to the same value.
pub const WIDTH: i32 = 1600;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 1600;

/// Horizontal text anchoring relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}
