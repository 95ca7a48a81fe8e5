// File: crates/polar-core/src/chart.rs
// Summary: PolarHistogram model and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use log::warn;
use skia_safe as skia;

use crate::geometry::{chord_length, polar_to_cartesian, Viewport};
use crate::layout::{image_rotation, label_placement, LayoutError, LayoutParams};
use crate::legend::{draw_legend, Legend};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{HAlign, HEIGHT, WIDTH};
use crate::wedge::WedgeSpec;

/// Reference rings are this thick, in data units.
const RING_WIDTH: f64 = 0.01;
/// Perpendicular nudge for ring tick labels, in data units.
const TICK_NUDGE: f64 = 0.2;

const LABEL_SIZE: f32 = 14.0;
const TICK_SIZE: f32 = 14.0;
const TITLE_SIZE: f32 = 48.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    /// Angle of the first wedge slot, degrees counter-clockwise from +x.
    pub start_angle: f64,
    /// Span shared by the wedges; the rest of the circle is the seam where
    /// ring tick labels sit.
    pub angle_span: f64,
    /// Hub radius; defaults to twice the smallest value when `None`.
    pub inner_padding: Option<f64>,
    pub draw_labels: bool,
    pub draw_images: bool,
    pub font_scale: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: Theme::default(),
            start_angle: 90.0,
            angle_span: 350.0,
            inner_padding: None,
            draw_labels: true,
            draw_images: true,
            font_scale: 1.0,
        }
    }
}

#[derive(Default)]
pub struct PolarHistogram {
    pub wedges: Vec<WedgeSpec>,
    pub reference_values: Vec<f64>,
    pub legend: Option<Legend>,
    pub title: Option<String>,
}

impl PolarHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_wedge(&mut self, wedge: WedgeSpec) {
        self.wedges.push(wedge);
    }

    /// Derive the layout parameters this chart would render with.
    pub fn layout(&self, opts: &RenderOptions) -> Result<LayoutParams, LayoutError> {
        let values: Vec<f64> = self.wedges.iter().map(|w| w.value).collect();
        LayoutParams::compute(&values, opts.start_angle, opts.angle_span, opts.inner_padding)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts)?;

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a raw RGBA8 buffer; returns (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts)?;

        let stride = opts.width as usize * 4;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) -> Result<LayoutParams> {
        let params = self.layout(opts)?;
        let vp = Viewport::new(opts.width, opts.height, params.limit);
        let shaper = TextShaper::new();

        canvas.clear(opts.theme.background);

        for (index, wedge) in self.wedges.iter().enumerate() {
            self.draw_one_wedge(canvas, &shaper, &vp, &params, opts, index, wedge);
        }
        self.draw_reference_rings(canvas, &shaper, &vp, &params, opts);

        // Legend only makes sense when the wedges are actually color-coded.
        if let Some(legend) = &self.legend {
            if self.wedges.iter().any(|w| w.color.is_some()) {
                draw_legend(canvas, &shaper, legend, opts.theme.text, opts.font_scale);
            }
        }
        if let Some(title) = &self.title {
            let (cx, cy) = vp.to_px(0.0, 0.0);
            shaper.draw_multiline_centered(
                canvas,
                title,
                cx,
                cy,
                TITLE_SIZE * opts.font_scale,
                opts.theme.text,
            );
        }
        Ok(params)
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_one_wedge(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        vp: &Viewport,
        params: &LayoutParams,
        opts: &RenderOptions,
        index: usize,
        wedge: &WedgeSpec,
    ) {
        let arc = params.wedge_arc(index);
        let radius = params.radius(wedge.value);
        let color = wedge.color.unwrap_or(opts.theme.wedge_default);
        fill_sector(canvas, vp, arc.start, arc.end, radius, wedge.value, color);

        let angle = params.label_angle(index);
        let chord = chord_length(params.wedge_size, radius);

        // The chord subtended by the wedge sets the annotation scale: the
        // image sits 0.8 chords past the rim, the text past the image.
        let mut text_offset = chord * 0.5;
        if opts.draw_images {
            if let Some(path) = &wedge.image {
                let (ix, iy) = polar_to_cartesian(angle, radius, chord * 0.8);
                draw_annotation_image(canvas, vp, path, ix, iy, angle, chord * 0.5);
                text_offset = chord * 1.6;
            }
        }

        if opts.draw_labels {
            let place = label_placement(angle, &wedge.label, Some(wedge.value));
            let (tx, ty) = polar_to_cartesian(angle, radius, text_offset);
            let (px, py) = vp.to_px(tx, ty);
            shaper.draw_rotated(
                canvas,
                &place.text,
                px,
                py,
                place.rotation,
                place.align,
                LABEL_SIZE * opts.font_scale,
                opts.theme.text,
            );
        }
    }

    fn draw_reference_rings(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        vp: &Viewport,
        params: &LayoutParams,
        opts: &RenderOptions,
    ) {
        for &value in &self.reference_values {
            let radius = params.radius(value);
            // Drawn in the background color over the wedges, so the ring
            // reads as a carved gridline.
            fill_sector(canvas, vp, 0.0, 360.0, radius, RING_WIDTH, opts.theme.background);

            if opts.draw_labels {
                let seam = params.start_angle + params.angle_span;
                let (x, y) = polar_to_cartesian(seam, radius, 0.0);
                let (dx, dy) = polar_to_cartesian(params.start_angle + 90.0, TICK_NUDGE, 0.0);
                let (px, py) = vp.to_px(x + dx, y + dy);
                shaper.draw_rotated(
                    canvas,
                    &format!("{}", value),
                    px,
                    py,
                    params.angle_span - 360.0,
                    HAlign::Center,
                    TICK_SIZE * opts.font_scale,
                    opts.theme.text,
                );
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// Fill an annular sector from `outer - width` to `outer`, spanning
/// `[start, end]` degrees. Arcs are sampled at roughly one-degree steps.
fn fill_sector(
    canvas: &skia::Canvas,
    vp: &Viewport,
    start: f64,
    end: f64,
    outer: f64,
    width: f64,
    color: skia::Color,
) {
    let inner = (outer - width).max(0.0);
    let sweep = end - start;
    let steps = (sweep.abs().ceil() as usize).max(2);

    let mut path = skia::Path::new();
    for k in 0..=steps {
        let angle = start + sweep * k as f64 / steps as f64;
        let (x, y) = polar_to_cartesian(angle, outer, 0.0);
        let (px, py) = vp.to_px(x, y);
        if k == 0 {
            path.move_to((px, py));
        } else {
            path.line_to((px, py));
        }
    }
    for k in (0..=steps).rev() {
        let angle = start + sweep * k as f64 / steps as f64;
        let (x, y) = polar_to_cartesian(angle, inner, 0.0);
        let (px, py) = vp.to_px(x, y);
        path.line_to((px, py));
    }
    path.close();

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    canvas.draw_path(&path, &paint);
}

/// Draw a wedge's annotation image centered on its data-space anchor,
/// scaled to `target_width` data units and kept upright by the rotation
/// rule. A missing or undecodable file is skipped, not fatal.
fn draw_annotation_image(
    canvas: &skia::Canvas,
    vp: &Viewport,
    path: &std::path::Path,
    x: f64,
    y: f64,
    angle: f64,
    target_width: f64,
) {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("skipping image {}: {}", path.display(), err);
            return;
        }
    };
    let data = skia::Data::new_copy(&bytes);
    let image = match skia::Image::from_encoded(data) {
        Some(image) => image,
        None => {
            warn!("skipping undecodable image {}", path.display());
            return;
        }
    };
    if image.width() <= 0 || image.height() <= 0 {
        return;
    }

    let (px, py) = vp.to_px(x, y);
    let tw = vp.len_px(target_width);
    let th = tw * image.height() as f32 / image.width() as f32;

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);

    canvas.save();
    canvas.translate((px, py));
    canvas.rotate(-image_rotation(angle) as f32, None);
    let dst = skia::Rect::from_xywh(-tw / 2.0, -th / 2.0, tw, th);
    canvas.draw_image_rect(&image, None, dst, &paint);
    canvas.restore();
}
