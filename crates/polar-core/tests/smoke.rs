// File: crates/polar-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use polar_core::{Legend, PolarHistogram, RenderOptions, WedgeSpec};
use skia_safe as skia;

#[test]
fn render_smoke_png() {
    let mut chart = PolarHistogram::new();
    chart.add_wedge(WedgeSpec::new(2.0, "Alpha").with_color(skia::Color::from_argb(255, 70, 143, 168)));
    chart.add_wedge(WedgeSpec::new(4.5, "Beta").with_color(skia::Color::from_argb(255, 98, 70, 107)));
    chart.add_wedge(WedgeSpec::new(6.8, "Gamma").with_color(skia::Color::from_argb(255, 229, 98, 94)));
    chart.reference_values = vec![2.0, 4.0, 6.0];
    chart.title = Some("Smoke\nTest".to_string());
    chart.legend = Some(Legend::new(
        vec!["A".into(), "B".into(), "C".into()],
        vec![
            skia::Color::from_argb(255, 70, 143, 168),
            skia::Color::from_argb(255, 98, 70, 107),
            skia::Color::from_argb(255, 229, 98, 94),
        ],
    ).with_title("Groups"));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn missing_image_is_skipped_not_fatal() {
    let mut chart = PolarHistogram::new();
    chart.add_wedge(WedgeSpec::new(3.0, "Has no flag").with_image("target/test_out/definitely_absent.png"));
    chart.add_wedge(WedgeSpec::new(5.0, "Plain"));

    let opts = RenderOptions::default();
    let bytes = chart
        .render_to_png_bytes(&opts)
        .expect("missing image asset must not abort the render");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
