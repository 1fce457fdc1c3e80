//! Session analysis and transcript compression

mod analyzer;
mod compress;
mod config;
mod locale;
pub mod rules;
mod types;

pub use analyzer::{count_task_keywords, SessionAnalyzer};
pub use compress::DEFAULT_MAX_MESSAGES;
pub use config::AnalyzerConfig;
pub use locale::{Labels, Locale};
pub use types::{Message, Role, SessionContext};
