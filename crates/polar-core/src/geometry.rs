// File: crates/polar-core/src/geometry.rs
// Summary: Polar/cartesian helpers and the data-space -> pixel-space viewport.

/// Convert a polar coordinate (degrees, data-space radius) to cartesian,
/// with an optional extra radial offset applied before conversion.
#[inline]
pub fn polar_to_cartesian(angle_deg: f64, radius: f64, offset: f64) -> (f64, f64) {
    let length = radius + offset;
    let radian = angle_deg.to_radians();
    (length * radian.cos(), length * radian.sin())
}

/// Straight-line distance between the two endpoints of an arc of
/// `angle_deg` degrees at `radius`. Used as a label/image offset proxy.
#[inline]
pub fn chord_length(angle_deg: f64, radius: f64) -> f64 {
    2.0 * radius * (angle_deg.to_radians() / 2.0).sin()
}

/// Maps data-space coordinates (origin-centered, y up, `[-limit, limit]`
/// on the shorter side) onto pixel coordinates (top-left origin, y down).
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    cx: f32,
    cy: f32,
    scale: f32,
}

impl Viewport {
    pub fn new(width: i32, height: i32, limit: f64) -> Self {
        let half = (width.min(height) as f64) / 2.0;
        let scale = (half / limit.max(1e-9)) as f32;
        Self {
            cx: width as f32 / 2.0,
            cy: height as f32 / 2.0,
            scale,
        }
    }

    /// Map a data-space point to pixels.
    #[inline]
    pub fn to_px(&self, x: f64, y: f64) -> (f32, f32) {
        (self.cx + x as f32 * self.scale, self.cy - y as f32 * self.scale)
    }

    /// Scale a data-space length to pixels.
    #[inline]
    pub fn len_px(&self, d: f64) -> f32 {
        d as f32 * self.scale
    }
}
