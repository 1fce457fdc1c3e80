//! Configuration for memory formatting and storage

use claw_context_core::Locale;
use serde::{Deserialize, Serialize};

/// Formatter and memory store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Directory holding one markdown file per day (`~` expands to home)
    pub memory_path: String,

    /// Long-lived MEMORY.md that receives append-style updates
    pub memory_md_path: String,

    /// strftime pattern for daily file names
    pub date_format: String,

    /// Language of markdown headings
    pub locale: Locale,
}

impl FormatterConfig {
    pub fn new() -> Self {
        Self {
            memory_path: "~/clawd/memory".to_string(),
            memory_md_path: "~/clawd/MEMORY.md".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            locale: Locale::Zh,
        }
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::new()
    }
}
