// File: crates/polar-core/src/lib.rs
// Summary: Core library entry point; exports public API for polar histogram layout and rendering.

pub mod chart;
pub mod geometry;
pub mod layout;
pub mod legend;
pub mod text;
pub mod theme;
pub mod types;
pub mod wedge;

pub use chart::{PolarHistogram, RenderOptions};
pub use geometry::{chord_length, polar_to_cartesian, Viewport};
pub use layout::{image_rotation, label_placement, LabelPlacement, LayoutError, LayoutParams, WedgeArc};
pub use legend::Legend;
pub use text::TextShaper;
pub use theme::Theme;
pub use types::HAlign;
pub use wedge::WedgeSpec;
