use crate::data::record::FundingRecord;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

//date formats seen in funding csv exports, tried in order
const DATE_FORMATS: [&str; 3] = ["%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d"];

#[derive(Debug, Deserialize)]
struct CsvRecord {
    date: String,
    startup: String,
    investors: String,
    vertical: String,
    city: String,
    round: String,
    #[serde(default)]
    amount: Option<f64>,
}

//parses a date permissively, unparseable values become none rather than errors
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

//loads funding records from a csv file
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<FundingRecord>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .context(format!("Failed to open CSV file: {:?}", path))?;

    let mut records = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let record: CsvRecord =
            result.context(format!("Failed to parse CSV record at line {}", index + 2))?;

        //permissive date handling, bad dates are kept as records without a date
        let date = parse_date(&record.date);

        records.push(FundingRecord::new_unchecked(
            date,
            record.startup,
            record.investors,
            record.vertical,
            record.city,
            record.round,
            record.amount.unwrap_or(0.0),
        ));
    }

    //source order is preserved, no sort: callers that care about recency sort explicitly
    Ok(records)
}

//once-loaded read-only handle to the funding table
//constructed at startup and shared into every query, never mutated
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[FundingRecord]>,
}

impl Dataset {
    //reads the full row source, exactly once per handle
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let records = load_csv(path)?;
        Ok(Dataset {
            records: records.into(),
        })
    }

    pub fn from_records(records: Vec<FundingRecord>) -> Self {
        Dataset {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[FundingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
