use crate::analysis::{OverallSummary, StartupDetail};

//a single display metric, already formatted for presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
}

impl MetricCard {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        MetricCard {
            label: label.into(),
            value: value.into(),
        }
    }

    //amounts are displayed in crore
    pub fn crore(label: impl Into<String>, amount: impl std::fmt::Display) -> Self {
        MetricCard::new(label, format!("{} Cr", amount))
    }
}

//maps the overall summary to its four metric cards
pub fn overall_cards(summary: &OverallSummary) -> Vec<MetricCard> {
    vec![
        MetricCard::crore("Total Investment", summary.total_investment),
        MetricCard::crore("Max Funding", summary.max_single_funding),
        MetricCard::crore("Average Funding", summary.average_ticket_size),
        MetricCard::new("Total Startups", summary.total_startups.to_string()),
    ]
}

//maps the startup detail to its metric cards
pub fn startup_cards(detail: &StartupDetail) -> Vec<MetricCard> {
    vec![
        MetricCard::crore("Total Raised", detail.total_raised),
        MetricCard::crore("Biggest Round", detail.biggest_round),
        MetricCard::new("Funding Rounds", detail.rounds.to_string()),
        MetricCard::new("Verticals", detail.verticals.join(", ")),
        MetricCard::new("Cities", detail.cities.join(", ")),
    ]
}
