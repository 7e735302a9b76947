use fundlens::prelude::*;
use std::io::Write;

const SAMPLE_CSV: &str = "date,startup,investors,vertical,city,round,amount\n\
    05/01/2021,Ola,SoftBank,Transport,Bangalore,Series J,10\n\
    01/06/2021,Ola,SoftBank Vision Fund,Transport,Bangalore,Series K,5\n\
    10/01/2021,Cred,\"DST Global, Sequoia\",FinTech,Bangalore,Series B,7\n\
    bad-date,Meesho,Sequoia,Ecommerce,Bangalore,Series C,3\n";

fn sample_dataset() -> Dataset {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_CSV.as_bytes()).unwrap();
    file.flush().unwrap();
    Dataset::load(file.path()).unwrap()
}

#[test]
fn overall_view_from_loaded_csv() {
    let dataset = sample_dataset();
    assert_eq!(dataset.len(), 4);

    let summary = OverallSummary::from_records(dataset.records()).unwrap();
    assert_eq!(summary.total_investment, 25);
    assert_eq!(summary.total_startups, 3);
    assert_eq!(summary.max_single_funding, 10.0);

    let cards = overall_cards(&summary);
    assert_eq!(cards[0].value, "25 Cr");

    //undated meesho record is excluded from the monthly series
    let series = monthly_series(dataset.records(), MonthlyMode::Total);
    let dated_total: f64 = series.iter().map(|p| p.value).sum();
    assert_eq!(dated_total, 22.0);
    assert_eq!(series[0], SeriesPoint::new("1", 17.0));
    assert_eq!(series[1], SeriesPoint::new("6", 5.0));
}

#[test]
fn investor_view_overmatches_substrings() {
    let dataset = sample_dataset();

    //"SoftBank" also matches the "SoftBank Vision Fund" record
    let detail = InvestorDetail::from_records(dataset.records(), "SoftBank").unwrap();
    assert_eq!(detail.investments.len(), 2);
    assert_eq!(detail.biggest_investments, vec![("Ola".to_string(), 15.0)]);
    assert_eq!(detail.year_over_year, vec![(2021, 15.0)]);

    let chart = biggest_investments_chart(&detail.biggest_investments);
    assert_eq!(chart.kind, ChartKind::Bar);
    assert_eq!(chart.points.len(), 1);
}

#[test]
fn selector_options_come_from_the_table() {
    let dataset = sample_dataset();

    assert_eq!(
        startup_options(dataset.records()),
        vec!["Cred", "Meesho", "Ola"]
    );
    //quoted comma-separated investors are split into individual names
    assert_eq!(
        investor_options(dataset.records()),
        vec!["DST Global", "Sequoia", "SoftBank", "SoftBank Vision Fund"]
    );
}

#[test]
fn startup_view_uses_exact_match() {
    let dataset = sample_dataset();

    let detail = StartupDetail::from_records(dataset.records(), "Ola").unwrap();
    assert_eq!(detail.rounds, 2);
    assert_eq!(detail.total_raised, 15);
    assert_eq!(detail.biggest_round, 10.0);

    assert!(StartupDetail::from_records(dataset.records(), "Ol").is_err());
}

#[test]
fn session_drives_mode_and_reveal() {
    let mut registry = SessionRegistry::new();
    let state = registry.state_mut("test");

    state.select_mode(AnalysisMode::Investors);
    state.selected_investor = Some("SoftBank".to_string());
    assert!(!state.is_revealed());

    state.reveal();
    assert!(state.is_revealed());

    //mode switch keeps the investor reveal for when the user returns
    state.select_mode(AnalysisMode::OverallAnalysis);
    assert!(!state.is_revealed());
    state.select_mode(AnalysisMode::Investors);
    assert!(state.is_revealed());
}
