use crate::analysis::series::{group_sum, rank_descending};
use crate::analysis::AnalysisError;
use crate::data::FundingRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

//one row of the investor's investment listing, projected from a funding record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Investment {
    pub date: Option<NaiveDate>,
    pub startup: String,
    pub vertical: String,
    pub city: String,
    pub round: String,
    pub amount: f64,
}

//everything the investor view displays, computed from the filtered records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorDetail {
    pub name: String,
    //matched records in source order
    pub investments: Vec<Investment>,
    //per-startup totals, largest first
    pub biggest_investments: Vec<(String, f64)>,
    //per-year totals ascending, records without a year excluded
    pub year_over_year: Vec<(i32, f64)>,
}

impl InvestorDetail {
    //filters by substring containment on the investors field
    //a name that is a substring of another investor's name will over-match,
    //kept as-is: exact token matching would change which records this view shows
    pub fn from_records(records: &[FundingRecord], name: &str) -> Result<Self, AnalysisError> {
        let matched: Vec<FundingRecord> = records
            .iter()
            .filter(|r| r.mentions_investor(name))
            .cloned()
            .collect();

        if matched.is_empty() {
            return Err(AnalysisError::NoData {
                view: format!("investor '{}'", name),
            });
        }

        let investments = matched
            .iter()
            .map(|r| Investment {
                date: r.date,
                startup: r.startup.clone(),
                vertical: r.vertical.clone(),
                city: r.city.clone(),
                round: r.round.clone(),
                amount: r.amount,
            })
            .collect();

        let biggest_investments =
            rank_descending(group_sum(&matched, |r| Some(r.startup.clone())));

        let mut yearly = group_sum(&matched, |r| r.year);
        yearly.sort_keys();
        let year_over_year = yearly.into_iter().collect();

        Ok(InvestorDetail {
            name: name.to_string(),
            investments,
            biggest_investments,
            year_over_year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        startup: &str,
        investors: &str,
        amount: f64,
        date: Option<(i32, u32, u32)>,
    ) -> FundingRecord {
        FundingRecord::new_unchecked(
            date.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
            startup.to_string(),
            investors.to_string(),
            "Vertical".to_string(),
            "City".to_string(),
            "Seed".to_string(),
            amount,
        )
    }

    #[test]
    fn filter_matches_substrings_including_overmatch() {
        let records = vec![
            record("Ola", "SoftBank", 100.0, None),
            record("Oyo", "SoftBank Vision Fund", 200.0, None),
            record("Cred", "Sequoia", 50.0, None),
        ];

        let detail = InvestorDetail::from_records(&records, "SoftBank").unwrap();
        //"SoftBank Vision Fund" contains "SoftBank", so oyo is included too
        assert_eq!(detail.investments.len(), 2);
        assert_eq!(detail.investments[0].startup, "Ola");
        assert_eq!(detail.investments[1].startup, "Oyo");
    }

    #[test]
    fn no_match_reports_no_data() {
        let records = vec![record("Ola", "SoftBank", 100.0, None)];
        let result = InvestorDetail::from_records(&records, "Tiger Global");
        assert!(matches!(result, Err(AnalysisError::NoData { .. })));
    }

    #[test]
    fn biggest_investments_ranked_descending_with_stable_ties() {
        let records = vec![
            record("Ola", "SoftBank", 100.0, None),
            record("Oyo", "SoftBank", 300.0, None),
            record("Ola", "SoftBank", 200.0, None),
            record("Paytm", "SoftBank", 300.0, None),
        ];

        let detail = InvestorDetail::from_records(&records, "SoftBank").unwrap();
        //ola totals 300, tied with oyo's 300 but ola was encountered first
        assert_eq!(
            detail.biggest_investments,
            vec![
                ("Ola".to_string(), 300.0),
                ("Oyo".to_string(), 300.0),
                ("Paytm".to_string(), 300.0),
            ]
        );
    }

    #[test]
    fn year_over_year_ascending_and_skips_null_years() {
        let records = vec![
            record("Ola", "SoftBank", 10.0, Some((2021, 3, 1))),
            record("Oyo", "SoftBank", 20.0, Some((2019, 7, 1))),
            record("Grofers", "SoftBank", 99.0, None),
            record("Paytm", "SoftBank", 5.0, Some((2019, 1, 1))),
        ];

        let detail = InvestorDetail::from_records(&records, "SoftBank").unwrap();
        assert_eq!(detail.year_over_year, vec![(2019, 25.0), (2021, 10.0)]);
    }

    #[test]
    fn projection_keeps_source_order_and_columns() {
        let records = vec![
            record("Zomato", "Info Edge", 40.0, Some((2020, 2, 2))),
            record("PolicyBazaar", "Info Edge", 60.0, Some((2018, 5, 5))),
        ];

        let detail = InvestorDetail::from_records(&records, "Info Edge").unwrap();
        assert_eq!(detail.investments[0].startup, "Zomato");
        assert_eq!(detail.investments[0].vertical, "Vertical");
        assert_eq!(detail.investments[0].round, "Seed");
        assert_eq!(detail.investments[1].amount, 60.0);
    }
}
