use crate::analysis::series::{group_max, group_sum, SeriesPoint};
use crate::analysis::AnalysisError;
use crate::data::FundingRecord;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

//monthly series flavor, mirrors the dashboard's mom graph selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthlyMode {
    //sum per month 1-12, collapsed across years
    Total,
    //sum per (year, month) pair, labeled "{month}-{year}"
    Count,
}

impl MonthlyMode {
    //parse monthly mode from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "total" => Some(MonthlyMode::Total),
            "count" => Some(MonthlyMode::Count),
            _ => None,
        }
    }
}

//overall market summary computed over the full table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallSummary {
    //sum of all amounts, rounded to nearest crore
    pub total_investment: i64,
    //largest single-record amount any startup has raised
    pub max_single_funding: f64,
    //mean of per-startup total raised, rounded to nearest crore
    pub average_ticket_size: i64,
    //distinct startup names
    pub total_startups: usize,
}

impl OverallSummary {
    //computes the summary, errors when the table is empty
    pub fn from_records(records: &[FundingRecord]) -> Result<Self, AnalysisError> {
        let total_investment = records.iter().map(|r| r.amount).sum::<f64>().round() as i64;

        //per-startup max amount, then the largest of those maxima:
        //descending sort, first element wins, ties keep encounter order
        let mut maxima: Vec<f64> = group_max(records, |r| Some(r.startup.clone()))
            .into_values()
            .collect();
        maxima.sort_by(|a, b| b.total_cmp(a));

        let max_single_funding = *maxima.first().ok_or_else(|| AnalysisError::NoData {
            view: "overall analysis".to_string(),
        })?;

        //mean of per-startup totals
        let per_startup_totals: Vec<f64> = group_sum(records, |r| Some(r.startup.clone()))
            .into_values()
            .collect();
        let average_ticket_size = per_startup_totals.mean().round() as i64;

        let total_startups = records
            .iter()
            .map(|r| r.startup.as_str())
            .collect::<IndexSet<_>>()
            .len();

        Ok(OverallSummary {
            total_investment,
            max_single_funding,
            average_ticket_size,
            total_startups,
        })
    }
}

//computes the monthly investment series for the requested mode
//records without a parsed date are excluded
pub fn monthly_series(records: &[FundingRecord], mode: MonthlyMode) -> Vec<SeriesPoint> {
    match mode {
        MonthlyMode::Total => {
            let mut groups = group_sum(records, |r| r.month);
            //month number order, not encounter order
            groups.sort_keys();
            groups
                .into_iter()
                .map(|(month, amount)| SeriesPoint::new(month.to_string(), amount))
                .collect()
        }
        MonthlyMode::Count => {
            let mut groups = group_sum(records, |r| r.year.zip(r.month));
            //ascending (year, month) pair, never the label string:
            //"10-2019" must not sort before "2-2020"
            groups.sort_keys();
            groups
                .into_iter()
                .map(|((year, month), amount)| {
                    SeriesPoint::new(format!("{}-{}", month, year), amount)
                })
                .collect()
        }
    }
}
