pub mod options;
pub mod session;

pub use options::{investor_options, startup_options};
pub use session::{AnalysisMode, SessionRegistry, SessionState};
