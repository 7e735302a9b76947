//a Rust-based analysis dashboard for startup funding data

pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod render;

//prelude module for convenient imports
pub mod prelude {
    pub use crate::analysis::{
        monthly_series, AnalysisError, Investment, InvestorDetail, MonthlyMode, OverallSummary,
        SeriesPoint, StartupDetail,
    };
    pub use crate::app::{
        investor_options, startup_options, AnalysisMode, SessionRegistry, SessionState,
    };
    pub use crate::config::AppConfiguration;
    pub use crate::data::{load_csv, parse_date, Dataset, FundingRecord};
    pub use crate::render::{
        biggest_investments_chart, investment_distribution_chart, investments_table, monthly_chart,
        overall_cards, print_cards, print_series, ranking_table, startup_cards, yoy_chart,
        ChartKind, ChartSeries, MetricCard,
    };
}
