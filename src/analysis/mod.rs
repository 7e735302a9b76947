pub mod investor;
pub mod overall;
pub mod series;
pub mod startup;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("No data for this view: {view}")]
    NoData { view: String },
}

pub use investor::{Investment, InvestorDetail};
pub use overall::{monthly_series, MonthlyMode, OverallSummary};
pub use series::SeriesPoint;
pub use startup::StartupDetail;
