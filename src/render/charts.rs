use crate::analysis::SeriesPoint;

//chart flavor hint for the rendering backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

//a labeled numeric series plus how it should be drawn
//this is the whole contract with any charting backend, no computation happens here
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub title: String,
    pub kind: ChartKind,
    pub points: Vec<SeriesPoint>,
}

impl ChartSeries {
    pub fn new(title: impl Into<String>, kind: ChartKind, points: Vec<SeriesPoint>) -> Self {
        ChartSeries {
            title: title.into(),
            kind,
            points,
        }
    }
}

//monthly investment series, drawn as a line like the mom graph
pub fn monthly_chart(title: impl Into<String>, points: Vec<SeriesPoint>) -> ChartSeries {
    ChartSeries::new(title, ChartKind::Line, points)
}

//biggest investments of an investor, one bar per startup
pub fn biggest_investments_chart(ranked: &[(String, f64)]) -> ChartSeries {
    let points = ranked
        .iter()
        .map(|(startup, amount)| SeriesPoint::new(startup.clone(), *amount))
        .collect();
    ChartSeries::new("Biggest Investments by Amount", ChartKind::Bar, points)
}

//share of the investor's total per startup, drawn as a pie
pub fn investment_distribution_chart(ranked: &[(String, f64)]) -> ChartSeries {
    let points = ranked
        .iter()
        .map(|(startup, amount)| SeriesPoint::new(startup.clone(), *amount))
        .collect();
    ChartSeries::new("Investment Distribution", ChartKind::Pie, points)
}

//year-over-year totals as a line
pub fn yoy_chart(yearly: &[(i32, f64)]) -> ChartSeries {
    let points = yearly
        .iter()
        .map(|(year, amount)| SeriesPoint::new(year.to_string(), *amount))
        .collect();
    ChartSeries::new("Year-Over-Year Investment", ChartKind::Line, points)
}
