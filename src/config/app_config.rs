use crate::analysis::MonthlyMode;
use crate::app::AnalysisMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

//complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfiguration {
    //path to the funding csv
    pub data_path: PathBuf,

    //mode the dashboard opens in
    pub default_mode: AnalysisMode,

    //monthly series flavor for the overall view
    pub monthly_mode: MonthlyMode,
}

impl Default for AppConfiguration {
    fn default() -> Self {
        AppConfiguration {
            data_path: PathBuf::from("startup_funding.csv"),
            default_mode: AnalysisMode::OverallAnalysis,
            monthly_mode: MonthlyMode::Total,
        }
    }
}

impl AppConfiguration {
    //load configuration from a JSON file
    pub fn from_json_file(path: &PathBuf) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfiguration = serde_json::from_str(&contents)?;
        Ok(config)
    }

    //save configuration to a JSON file
    pub fn to_json_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fundlens.json");

        let config = AppConfiguration {
            data_path: PathBuf::from("data/funding.csv"),
            default_mode: AnalysisMode::Investors,
            monthly_mode: MonthlyMode::Count,
        };

        config.to_json_file(&path).unwrap();
        let loaded = AppConfiguration::from_json_file(&path).unwrap();

        assert_eq!(loaded.data_path, config.data_path);
        assert_eq!(loaded.default_mode, AnalysisMode::Investors);
        assert_eq!(loaded.monthly_mode, MonthlyMode::Count);
    }
}
