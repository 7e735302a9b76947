pub mod loader;
pub mod record;

pub use loader::{load_csv, parse_date, Dataset};
pub use record::FundingRecord;
