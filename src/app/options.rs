use crate::data::FundingRecord;
use indexmap::IndexSet;

//sorted distinct startup names for the startup selector
pub fn startup_options(records: &[FundingRecord]) -> Vec<String> {
    let mut names: Vec<String> = records
        .iter()
        .map(|r| r.startup.clone())
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect();
    names.sort();
    names
}

//sorted distinct investor names for the investor selector,
//derived by splitting every investors field on commas
pub fn investor_options(records: &[FundingRecord]) -> Vec<String> {
    let mut names: Vec<String> = records
        .iter()
        .flat_map(|r| r.investor_names())
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect();
    names.sort();
    names
}
