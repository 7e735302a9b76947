use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Empty startup name")]
    EmptyStartup,
    #[error("Negative amount: {0}")]
    NegativeAmount(f64),
}

//represents a single startup-funding record from the source table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FundingRecord {
    //funding date, none when the source value could not be parsed
    pub date: Option<NaiveDate>,
    //month 1-12 derived from date, none iff date is none
    pub month: Option<u32>,
    //calendar year derived from date, none iff date is none
    pub year: Option<i32>,
    pub startup: String,
    //comma-separated investor names, free text
    pub investors: String,
    pub vertical: String,
    pub city: String,
    pub round: String,
    //amount in crore inr, missing values load as zero
    pub amount: f64,
}

impl FundingRecord {
    //creates a new FundingRecord with validation
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: Option<NaiveDate>,
        startup: String,
        investors: String,
        vertical: String,
        city: String,
        round: String,
        amount: f64,
    ) -> Result<Self, RecordError> {
        //validate non-empty startup name
        if startup.trim().is_empty() {
            return Err(RecordError::EmptyStartup);
        }

        //validate non-negative amount
        if amount < 0.0 {
            return Err(RecordError::NegativeAmount(amount));
        }

        Ok(Self::new_unchecked(
            date, startup, investors, vertical, city, round, amount,
        ))
    }

    //creates a FundingRecord without validation
    //month and year are always derived here so they stay consistent with date
    #[allow(clippy::too_many_arguments)]
    pub fn new_unchecked(
        date: Option<NaiveDate>,
        startup: String,
        investors: String,
        vertical: String,
        city: String,
        round: String,
        amount: f64,
    ) -> Self {
        FundingRecord {
            date,
            month: date.map(|d| d.month()),
            year: date.map(|d| d.year()),
            startup,
            investors,
            vertical,
            city,
            round,
            amount,
        }
    }

    //returns the individual investor names (comma-split, trimmed, empties dropped)
    pub fn investor_names(&self) -> Vec<String> {
        self.investors
            .split(',')
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(|name| name.to_string())
            .collect()
    }

    //returns true when the investors field contains the given name as a substring
    pub fn mentions_investor(&self, name: &str) -> bool {
        self.investors.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_and_year_follow_date() {
        let record = FundingRecord::new_unchecked(
            Some(date(2021, 6, 15)),
            "Byju's".to_string(),
            "Sequoia".to_string(),
            "EdTech".to_string(),
            "Bangalore".to_string(),
            "Series C".to_string(),
            100.0,
        );
        assert_eq!(record.month, Some(6));
        assert_eq!(record.year, Some(2021));
    }

    #[test]
    fn month_and_year_are_none_without_date() {
        let record = FundingRecord::new_unchecked(
            None,
            "Ola".to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            0.0,
        );
        assert_eq!(record.month, None);
        assert_eq!(record.year, None);
    }

    #[test]
    fn rejects_negative_amount() {
        let result = FundingRecord::new(
            None,
            "Ola".to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            -5.0,
        );
        assert!(matches!(result, Err(RecordError::NegativeAmount(_))));
    }

    #[test]
    fn rejects_empty_startup() {
        let result = FundingRecord::new(
            None,
            "  ".to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            1.0,
        );
        assert!(matches!(result, Err(RecordError::EmptyStartup)));
    }

    #[test]
    fn investor_names_splits_and_trims() {
        let record = FundingRecord::new_unchecked(
            None,
            "Swiggy".to_string(),
            "Accel, SoftBank ,, Prosus".to_string(),
            String::new(),
            String::new(),
            String::new(),
            10.0,
        );
        assert_eq!(record.investor_names(), vec!["Accel", "SoftBank", "Prosus"]);
    }

    #[test]
    fn mentions_investor_matches_substrings() {
        let record = FundingRecord::new_unchecked(
            None,
            "Swiggy".to_string(),
            "SoftBank Vision Fund".to_string(),
            String::new(),
            String::new(),
            String::new(),
            10.0,
        );
        //substring containment, not exact membership
        assert!(record.mentions_investor("SoftBank"));
        assert!(record.mentions_investor("Vision"));
        assert!(!record.mentions_investor("Sequoia"));
    }
}
