use crate::data::FundingRecord;
use indexmap::IndexMap;
use std::hash::Hash;

//a single labeled point in a computed series, the hand-off unit to charts
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        SeriesPoint {
            label: label.into(),
            value,
        }
    }
}

//groups records by a key and sums amounts
//insertion order of the map follows first encounter in the slice,
//records where the key function returns none are skipped
pub fn group_sum<K, F>(records: &[FundingRecord], key: F) -> IndexMap<K, f64>
where
    K: Hash + Eq,
    F: Fn(&FundingRecord) -> Option<K>,
{
    let mut groups: IndexMap<K, f64> = IndexMap::new();

    for record in records {
        if let Some(k) = key(record) {
            *groups.entry(k).or_insert(0.0) += record.amount;
        }
    }

    groups
}

//groups records by a key and takes the max amount per group
pub fn group_max<K, F>(records: &[FundingRecord], key: F) -> IndexMap<K, f64>
where
    K: Hash + Eq,
    F: Fn(&FundingRecord) -> Option<K>,
{
    let mut groups: IndexMap<K, f64> = IndexMap::new();

    for record in records {
        if let Some(k) = key(record) {
            let entry = groups.entry(k).or_insert(f64::NEG_INFINITY);
            if record.amount > *entry {
                *entry = record.amount;
            }
        }
    }

    groups
}

//sorts grouped sums descending by value
//the underlying sort is stable, so equal sums keep first-encounter order
pub fn rank_descending<K>(groups: IndexMap<K, f64>) -> Vec<(K, f64)> {
    let mut ranked: Vec<(K, f64)> = groups.into_iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}
