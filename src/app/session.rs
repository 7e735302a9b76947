use serde::{Deserialize, Serialize};
use std::collections::HashMap;

//top-level analysis mode, the three values of the mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisMode {
    OverallAnalysis,
    Startup,
    Investors,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 3] = [
        AnalysisMode::OverallAnalysis,
        AnalysisMode::Startup,
        AnalysisMode::Investors,
    ];

    //parse analysis mode from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "overall" | "overall analysis" => Some(AnalysisMode::OverallAnalysis),
            "startup" | "startups" => Some(AnalysisMode::Startup),
            "investor" | "investors" => Some(AnalysisMode::Investors),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisMode::OverallAnalysis => "Overall Analysis",
            AnalysisMode::Startup => "Startup",
            AnalysisMode::Investors => "Investors",
        }
    }
}

impl Default for AnalysisMode {
    fn default() -> Self {
        AnalysisMode::OverallAnalysis
    }
}

//per-session navigation state: current mode, current selections,
//and one revealed flag per mode that persists across interactions
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub mode: AnalysisMode,
    pub selected_startup: Option<String>,
    pub selected_investor: Option<String>,
    revealed: HashMap<AnalysisMode, bool>,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState::default()
    }

    //switches mode, reveal flags for other modes are kept
    pub fn select_mode(&mut self, mode: AnalysisMode) {
        self.mode = mode;
    }

    //marks the current mode's view as revealed
    pub fn reveal(&mut self) {
        self.revealed.insert(self.mode, true);
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed.get(&self.mode).copied().unwrap_or(false)
    }

    pub fn hide(&mut self) {
        self.revealed.insert(self.mode, false);
    }
}

//session states keyed by session id, passed explicitly into presentation
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<String, SessionState>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        SessionRegistry::default()
    }

    pub fn state_mut(&mut self, session_id: &str) -> &mut SessionState {
        self.sessions
            .entry(session_id.to_string())
            .or_default()
    }

    pub fn state(&self, session_id: &str) -> Option<&SessionState> {
        self.sessions.get(session_id)
    }
}
