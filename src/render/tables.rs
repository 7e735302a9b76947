use crate::analysis::investor::Investment;
use crate::render::cards::MetricCard;
use crate::render::charts::ChartSeries;
use prettytable::{Cell, Row, Table};

//prints metric cards as a two-column table
pub fn print_cards(cards: &[MetricCard]) {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));

    for card in cards {
        table.add_row(Row::new(vec![
            Cell::new(&card.label),
            Cell::new(&card.value),
        ]));
    }

    table.printstd();
}

//builds the investment listing table for an investor view
pub fn investments_table(investments: &[Investment]) -> Table {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Date"),
        Cell::new("Startup"),
        Cell::new("Vertical"),
        Cell::new("City"),
        Cell::new("Round"),
        Cell::new("Amount (Cr)"),
    ]));

    for investment in investments {
        let date = investment
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());

        table.add_row(Row::new(vec![
            Cell::new(&date),
            Cell::new(&investment.startup),
            Cell::new(&investment.vertical),
            Cell::new(&investment.city),
            Cell::new(&investment.round),
            Cell::new(&format!("{:.1}", investment.amount)),
        ]));
    }

    table
}

//builds a two-column ranking table from grouped sums
pub fn ranking_table(key_header: &str, ranked: &[(String, f64)]) -> Table {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new(key_header),
        Cell::new("Amount (Cr)"),
    ]));

    for (key, amount) in ranked {
        table.add_row(Row::new(vec![
            Cell::new(key),
            Cell::new(&format!("{:.1}", amount)),
        ]));
    }

    table
}

//prints a chart series as label/value rows, the text stand-in for a plot
pub fn print_series(series: &ChartSeries) {
    println!("{}", series.title);

    let mut table = Table::new();
    for point in &series.points {
        table.add_row(Row::new(vec![
            Cell::new(&point.label),
            Cell::new(&format!("{:.1}", point.value)),
        ]));
    }

    table.printstd();
}
