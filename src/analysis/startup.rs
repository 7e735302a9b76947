use crate::analysis::series::group_sum;
use crate::analysis::AnalysisError;
use crate::data::FundingRecord;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

//per-startup summary, the exact-match counterpart of the investor view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupDetail {
    pub name: String,
    //total raised across all rounds, rounded to nearest crore
    pub total_raised: i64,
    //number of funding records for this startup
    pub rounds: usize,
    //largest single round
    pub biggest_round: f64,
    //distinct verticals in encounter order
    pub verticals: Vec<String>,
    //distinct cities in encounter order
    pub cities: Vec<String>,
    //per-year totals ascending, records without a year excluded
    pub year_over_year: Vec<(i32, f64)>,
}

impl StartupDetail {
    //exact name match, not substring: startup names are selected from the
    //known list so there is no free-text lookup to be permissive about
    pub fn from_records(records: &[FundingRecord], name: &str) -> Result<Self, AnalysisError> {
        let matched: Vec<FundingRecord> = records
            .iter()
            .filter(|r| r.startup == name)
            .cloned()
            .collect();

        if matched.is_empty() {
            return Err(AnalysisError::NoData {
                view: format!("startup '{}'", name),
            });
        }

        let total_raised = matched.iter().map(|r| r.amount).sum::<f64>().round() as i64;
        let biggest_round = matched.iter().map(|r| r.amount).fold(f64::MIN, f64::max);

        let verticals: Vec<String> = matched
            .iter()
            .map(|r| r.vertical.clone())
            .filter(|v| !v.is_empty())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();

        let cities: Vec<String> = matched
            .iter()
            .map(|r| r.city.clone())
            .filter(|c| !c.is_empty())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();

        let mut yearly = group_sum(&matched, |r| r.year);
        yearly.sort_keys();
        let year_over_year = yearly.into_iter().collect();

        Ok(StartupDetail {
            name: name.to_string(),
            total_raised,
            rounds: matched.len(),
            biggest_round,
            verticals,
            cities,
            year_over_year,
        })
    }
}
