// File: crates/polar-core/src/layout.rs
// Summary: Pure layout math: per-render parameters, wedge arcs, label flip rule.

use thiserror::Error;

use crate::types::HAlign;

/// Fraction of each wedge's angular allotment carved out as a gap.
/// The gap sits on the leading edge only; the trailing edge is flush with
/// the next wedge's slot.
pub const WEDGE_PADDING_RATIO: f64 = 0.1;

/// Margin factor applied to the largest radius when sizing the viewport.
pub const LIMIT_MARGIN: f64 = 1.25;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("no wedges to lay out")]
    Empty,
    #[error("wedge value must be positive and finite, got {0}")]
    BadValue(f64),
    #[error("angle span must be positive, got {0}")]
    BadSpan(f64),
}

/// Derived layout state for one render call. Computed once from the wedge
/// values and passed to every sub-step; never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    /// Angle of the first wedge's slot, degrees counter-clockwise from +x.
    pub start_angle: f64,
    /// Total span shared by all wedges; the remainder up to 360 is left as
    /// a seam for the reference-ring tick labels.
    pub angle_span: f64,
    /// Hub radius reserved for the title.
    pub inner_padding: f64,
    /// Angular allotment per wedge (`angle_span / wedge_count`).
    pub wedge_size: f64,
    /// Leading-edge gap inside each allotment.
    pub wedge_padding: f64,
    /// Symmetric half-extent of the square viewport.
    pub limit: f64,
    /// Number of wedges the parameters were computed for.
    pub wedge_count: usize,
}

/// One wedge's drawable arc, after the leading-edge gap is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WedgeArc {
    pub start: f64,
    pub end: f64,
}

impl LayoutParams {
    /// Derive parameters from the value sequence. The wedge count comes
    /// from the slice itself; nothing ambient is captured.
    pub fn compute(
        values: &[f64],
        start_angle: f64,
        angle_span: f64,
        inner_padding: Option<f64>,
    ) -> Result<Self, LayoutError> {
        if values.is_empty() {
            return Err(LayoutError::Empty);
        }
        if !(angle_span > 0.0) {
            return Err(LayoutError::BadSpan(angle_span));
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values {
            if !v.is_finite() || v <= 0.0 {
                return Err(LayoutError::BadValue(v));
            }
            min = min.min(v);
            max = max.max(v);
        }

        let wedge_size = angle_span / values.len() as f64;
        // Default hub: twice the smallest value, so the shortest wedge
        // still clears the title area.
        let inner_padding = inner_padding.unwrap_or(min * 2.0);
        Ok(Self {
            start_angle,
            angle_span,
            inner_padding,
            wedge_size,
            wedge_padding: wedge_size * WEDGE_PADDING_RATIO,
            limit: (max + inner_padding) * LIMIT_MARGIN,
            wedge_count: values.len(),
        })
    }

    /// Unpadded angular allotment of wedge `index`. Slots tile the span
    /// contiguously: slot(i).1 == slot(i+1).0.
    #[inline]
    pub fn wedge_slot(&self, index: usize) -> (f64, f64) {
        let start = self.start_angle + index as f64 * self.wedge_size;
        (start, start + self.wedge_size)
    }

    /// Drawable arc of wedge `index`: the slot with the gap carved from
    /// the leading edge only.
    #[inline]
    pub fn wedge_arc(&self, index: usize) -> WedgeArc {
        let (start, end) = self.wedge_slot(index);
        WedgeArc { start: start + self.wedge_padding, end }
    }

    /// Angle at which wedge `index`'s label and image are anchored:
    /// midpoint of the padded arc.
    #[inline]
    pub fn label_angle(&self, index: usize) -> f64 {
        let arc = self.wedge_arc(index);
        (arc.start + arc.end) / 2.0
    }

    /// Outer radius of a wedge holding `value`.
    #[inline]
    pub fn radius(&self, value: f64) -> f64 {
        self.inner_padding + value
    }
}

/// Resolved placement for one radial label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelPlacement {
    pub text: String,
    /// Rotation in degrees counter-clockwise, applied about the anchor.
    pub rotation: f64,
    pub align: HAlign,
}

/// Orientation flip that keeps radial text upright on both halves of the
/// circle. On the left half (90..270 after normalization) the text is
/// mirrored: right-aligned, rotated back by 180, value trailing.
pub fn label_placement(angle: f64, label: &str, value: Option<f64>) -> LabelPlacement {
    let norm = angle.rem_euclid(360.0);
    if norm > 90.0 && norm < 270.0 {
        let text = match value {
            Some(v) => format!("{} ({})", label, v),
            None => label.to_string(),
        };
        LabelPlacement { text, rotation: norm - 180.0, align: HAlign::Right }
    } else {
        let text = match value {
            Some(v) => format!("({}) {}", v, label),
            None => label.to_string(),
        };
        LabelPlacement { text, rotation: norm, align: HAlign::Left }
    }
}

/// Rotation applied to a wedge's annotation image. The comparison runs on
/// the raw (unnormalized) anchor angle: with the usual 90-degree start the
/// anchors sweep 90..440, and only the 270..440 tail stays unmodified.
#[inline]
pub fn image_rotation(angle: f64) -> f64 {
    if angle > 270.0 {
        angle
    } else {
        angle - 180.0
    }
}
