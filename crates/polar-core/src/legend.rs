// File: crates/polar-core/src/legend.rs
// Summary: Legend model and fixed upper-left swatch-list drawing.

use skia_safe as skia;

use crate::text::TextShaper;

/// Discrete category -> color legend. `labels` and `colors` are paired by
/// index; extra entries on either side are ignored.
#[derive(Clone, Debug, Default)]
pub struct Legend {
    pub labels: Vec<String>,
    pub colors: Vec<skia::Color>,
    pub title: Option<String>,
}

impl Legend {
    pub fn new(labels: Vec<String>, colors: Vec<skia::Color>) -> Self {
        Self { labels, colors, title: None }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Draw the legend as a swatch column pinned to the upper-left corner of
/// the surface, in pixel space (independent of the data viewport).
pub fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    legend: &Legend,
    text_color: skia::Color,
    font_scale: f32,
) {
    let margin = 28.0f32;
    let title_size = 21.0 * font_scale;
    let entry_size = 18.0 * font_scale;
    let swatch = 18.0 * font_scale;
    let row_gap = swatch * 0.45;

    let mut y = margin;
    if let Some(title) = &legend.title {
        let mut p = shaper.layout(title, title_size, text_color);
        p.paint(canvas, (margin, y));
        y += title_size * 1.6;
    }

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);

    for (label, color) in legend.labels.iter().zip(legend.colors.iter()) {
        paint.set_color(*color);
        let rect = skia::Rect::from_xywh(margin, y, swatch, swatch);
        canvas.draw_rect(rect, &paint);
        let mut p = shaper.layout(label, entry_size, text_color);
        p.paint(canvas, (margin + swatch * 1.4, y + (swatch - entry_size) / 2.0));
        y += swatch + row_gap;
    }
}
