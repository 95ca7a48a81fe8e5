// File: crates/merge/src/lib.rs
// Summary: Left-outer join of the happiness-score table with income groups.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use thiserror::Error;

/// World Bank income classification, plus the fill value for countries the
/// income table does not know.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IncomeGroup {
    High,
    UpperMiddle,
    LowerMiddle,
    Low,
    Unknown,
}

impl IncomeGroup {
    /// Parse the label as it appears in the source table. Anything
    /// unrecognized (including an empty cell) becomes `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "High income" => Self::High,
            "Upper middle income" => Self::UpperMiddle,
            "Lower middle income" => Self::LowerMiddle,
            "Low income" => Self::Low,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High income",
            Self::UpperMiddle => "Upper middle income",
            Self::LowerMiddle => "Lower middle income",
            Self::Low => "Low income",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for IncomeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the score table after column selection and rounding.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreRow {
    pub country: String,
    pub score: f64,
}

/// One merged record. Immutable once written.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub country: String,
    pub score: f64,
    pub income: IncomeGroup,
}

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing column {column:?} in {path}")]
    MissingColumn { column: &'static str, path: String },
    #[error("bad score {value:?} for {country:?}")]
    BadScore { country: String, value: String },
}

/// Round to 3 decimal places, the precision the merged table carries.
#[inline]
pub fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

fn header_index(
    headers: &[String],
    wanted: &'static str,
    path: &Path,
) -> Result<usize, MergeError> {
    headers
        .iter()
        .position(|h| h == wanted)
        .ok_or_else(|| MergeError::MissingColumn { column: wanted, path: path.display().to_string() })
}

fn lowercase_headers(rdr: &mut csv::Reader<std::fs::File>) -> Result<Vec<String>, MergeError> {
    Ok(rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect())
}

/// Read the score table: columns `Country name`, `Ladder score`
/// (header match is case-insensitive). Scores are rounded to 3 decimals.
pub fn read_scores(path: impl AsRef<Path>) -> Result<Vec<ScoreRow>, MergeError> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = lowercase_headers(&mut rdr)?;
    let i_country = header_index(&headers, "country name", path)?;
    let i_score = header_index(&headers, "ladder score", path)?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let country = rec.get(i_country).unwrap_or("").trim();
        if country.is_empty() {
            continue;
        }
        let raw = rec.get(i_score).unwrap_or("").trim();
        let score = raw.parse::<f64>().map_err(|_| MergeError::BadScore {
            country: country.to_string(),
            value: raw.to_string(),
        })?;
        out.push(ScoreRow { country: country.to_string(), score: round3(score) });
    }
    Ok(out)
}

/// Read the income table: columns `TableName`, `IncomeGroup`.
pub fn read_income_groups(
    path: impl AsRef<Path>,
) -> Result<HashMap<String, IncomeGroup>, MergeError> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = lowercase_headers(&mut rdr)?;
    let i_country = header_index(&headers, "tablename", path)?;
    let i_income = header_index(&headers, "incomegroup", path)?;

    let mut out = HashMap::new();
    for rec in rdr.records() {
        let rec = rec?;
        let country = rec.get(i_country).unwrap_or("").trim();
        if country.is_empty() {
            continue;
        }
        let income = IncomeGroup::parse(rec.get(i_income).unwrap_or(""));
        out.insert(country.to_string(), income);
    }
    Ok(out)
}

/// Left-outer join on exact country-name equality; score-table order is
/// preserved. No fuzzy matching and no case folding: a spelling mismatch
/// between the two sources lands in `Unknown`, by design.
pub fn merge(scores: &[ScoreRow], income: &HashMap<String, IncomeGroup>) -> Vec<Record> {
    scores
        .iter()
        .map(|row| Record {
            country: row.country.clone(),
            score: row.score,
            income: income.get(&row.country).copied().unwrap_or(IncomeGroup::Unknown),
        })
        .collect()
}

/// Write the merged table with columns `country,score,income`.
pub fn write_merged(path: impl AsRef<Path>, records: &[Record]) -> Result<(), MergeError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["country", "score", "income"])?;
    for r in records {
        let score = r.score.to_string();
        wtr.write_record([r.country.as_str(), score.as_str(), r.income.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read a merged table back, as written by [`write_merged`].
pub fn read_merged(path: impl AsRef<Path>) -> Result<Vec<Record>, MergeError> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = lowercase_headers(&mut rdr)?;
    let i_country = header_index(&headers, "country", path)?;
    let i_score = header_index(&headers, "score", path)?;
    let i_income = header_index(&headers, "income", path)?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let country = rec.get(i_country).unwrap_or("").trim();
        if country.is_empty() {
            continue;
        }
        let raw = rec.get(i_score).unwrap_or("").trim();
        let score = raw.parse::<f64>().map_err(|_| MergeError::BadScore {
            country: country.to_string(),
            value: raw.to_string(),
        })?;
        out.push(Record {
            country: country.to_string(),
            score,
            income: IncomeGroup::parse(rec.get(i_income).unwrap_or("")),
        });
    }
    Ok(out)
}
