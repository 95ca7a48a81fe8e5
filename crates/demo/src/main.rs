// File: crates/demo/src/main.rs
// Summary: Demo loads the merged country table and renders the World Happiness polar histogram.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polar_core::{theme, Legend, PolarHistogram, RenderOptions, WedgeSpec};
use skia_safe as skia;
use table_merge::{read_merged, IncomeGroup};

const LEGEND_GROUPS: [IncomeGroup; 5] = [
    IncomeGroup::High,
    IncomeGroup::UpperMiddle,
    IncomeGroup::LowerMiddle,
    IncomeGroup::Low,
    IncomeGroup::Unknown,
];

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "data/merged_data.csv".to_string());
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/out/polar_histogram.png"));
    let flags_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("data/flags"));

    let mut records = read_merged(&input)
        .with_context(|| format!("failed to read merged table '{}'", input))?;
    if records.is_empty() {
        anyhow::bail!("no records in '{}' — run merge-tables first.", input);
    }
    println!("Loaded {} countries from {}", records.len(), input);

    // Display order: shortest wedge first, right after the seam.
    records.sort_by(|a, b| a.score.total_cmp(&b.score));

    let mut chart = PolarHistogram::new();
    for record in &records {
        chart.add_wedge(
            WedgeSpec::new(record.score, record.country.clone())
                .with_color(income_color(record.income))
                .with_image(flag_path(&flags_dir, &record.country)),
        );
    }
    chart.reference_values = vec![2.0, 4.0, 6.0];
    chart.legend = Some(
        Legend::new(
            LEGEND_GROUPS.iter().map(|g| g.as_str().to_string()).collect(),
            LEGEND_GROUPS.iter().map(|g| income_color(*g)).collect(),
        )
        .with_title("Income level according to the World Bank"),
    );
    chart.title = Some("World Happiness Report 2023".replace(' ', "\n"));

    let opts = RenderOptions::default();
    chart
        .render_to_png(&opts, &output)
        .with_context(|| format!("failed to render '{}'", output.display()))?;
    println!("Wrote {}", output.display());
    Ok(())
}

fn income_color(income: IncomeGroup) -> skia::Color {
    let hex = match income {
        IncomeGroup::High => "#468FA8",
        IncomeGroup::UpperMiddle => "#62466B",
        IncomeGroup::LowerMiddle => "#E5625E",
        IncomeGroup::Low => "#6B0F1A",
        IncomeGroup::Unknown => "#909090",
    };
    theme::parse_hex(hex).unwrap_or(theme::Theme::parchment().wedge_default)
}

/// Flag asset convention: lowercase country name, spaces to underscores.
/// The file may be absent; the renderer skips it with a warning.
fn flag_path(dir: &Path, country: &str) -> PathBuf {
    dir.join(format!("{}.png", country.to_lowercase().replace(' ', "_")))
}
