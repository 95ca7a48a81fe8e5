// File: crates/merge/src/main.rs
// Summary: Batch entry point: join the score and income tables into merged_data.csv.

use anyhow::{Context, Result};
use table_merge::{merge, read_income_groups, read_scores, write_merged, IncomeGroup};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let scores_path = args.next().unwrap_or_else(|| "data/happiness_scores.csv".to_string());
    let income_path = args.next().unwrap_or_else(|| "data/income_groups.csv".to_string());
    let out_path = args.next().unwrap_or_else(|| "data/merged_data.csv".to_string());

    let scores = read_scores(&scores_path)
        .with_context(|| format!("failed to read score table '{}'", scores_path))?;
    println!("Loaded {} score rows from {}", scores.len(), scores_path);

    let income = read_income_groups(&income_path)
        .with_context(|| format!("failed to read income table '{}'", income_path))?;
    println!("Loaded {} income rows from {}", income.len(), income_path);

    let records = merge(&scores, &income);
    let unknown = records.iter().filter(|r| r.income == IncomeGroup::Unknown).count();
    println!("Merged {} rows ({} without an income group)", records.len(), unknown);

    write_merged(&out_path, &records)
        .with_context(|| format!("failed to write '{}'", out_path))?;
    println!("Wrote {}", out_path);
    Ok(())
}
