pub mod cards;
pub mod charts;
pub mod tables;

pub use cards::{overall_cards, startup_cards, MetricCard};
pub use charts::{
    biggest_investments_chart, investment_distribution_chart, monthly_chart, yoy_chart, ChartKind,
    ChartSeries,
};
pub use tables::{investments_table, print_cards, print_series, ranking_table};
