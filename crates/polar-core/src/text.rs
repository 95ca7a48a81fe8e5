// File: crates/polar-core/src/text.rs
// Summary: Text shaper on Skia textlayout with rotated/aligned drawing for radial labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::types::HAlign;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&[
            "Times New Roman",
            "Liberation Serif",
            "DejaVu Serif",
            "Georgia",
            "serif",
        ]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0));
        // width of the longest line
        p.longest_line()
    }

    /// Draw `text` anchored at `(x, y)` (vertical center), rotated by
    /// `rotation` degrees counter-clockwise about the anchor. Alignment
    /// decides which end of the text sits on the anchor.
    pub fn draw_rotated(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        rotation: f64,
        align: HAlign,
        size: f32,
        color: skia::Color,
    ) {
        let mut p = self.layout(text, size, color);
        let width = p.longest_line();
        let dx = match align {
            HAlign::Left => 0.0,
            HAlign::Center => -width / 2.0,
            HAlign::Right => -width,
        };
        canvas.save();
        canvas.translate((x, y));
        // Canvas rotation is clockwise; layout angles are counter-clockwise.
        canvas.rotate(-rotation as f32, None);
        p.paint(canvas, (dx, -size * 0.6));
        canvas.restore();
    }

    /// Draw newline-separated lines centered on `(x, y)` as a block, with
    /// 1.5x line spacing. Used for the hub title.
    pub fn draw_multiline_centered(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
    ) {
        let lines: Vec<&str> = text.lines().collect();
        if lines.is_empty() {
            return;
        }
        let line_height = size * 1.5;
        let total = line_height * lines.len() as f32;
        let mut line_y = y - total / 2.0 + line_height / 2.0;
        for line in lines {
            let mut p = self.layout(line, size, color);
            let width = p.longest_line();
            p.paint(canvas, (x - width / 2.0, line_y - size * 0.6));
            line_y += line_height;
        }
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
