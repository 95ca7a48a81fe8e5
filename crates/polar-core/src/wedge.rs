// File: crates/polar-core/src/wedge.rs
// Summary: Wedge model: one typed record per data point, optional color and image.

use std::path::PathBuf;

use skia_safe as skia;

/// One annular sector of the histogram. `value` is the radial extent past
/// the hub; `label` is drawn past the outer rim, flipped to stay upright.
#[derive(Clone, Debug)]
pub struct WedgeSpec {
    pub value: f64,
    pub label: String,
    pub color: Option<skia::Color>,
    pub image: Option<PathBuf>,
}

impl WedgeSpec {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self { value, label: label.into(), color: None, image: None }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.image = Some(path.into());
        self
    }
}
