//! Configuration for session analysis

use serde::{Deserialize, Serialize};

use crate::Locale;

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Summary length cap, in characters
    pub max_summary_length: usize,

    /// Carried for callers that render timestamps; extraction ignores it
    pub include_timestamps: bool,

    /// Max key points kept (prefix of the extracted list)
    pub max_key_points: usize,

    /// A task keyword becomes a pattern once its count exceeds this
    pub pattern_threshold: usize,

    /// Language of generated pattern strings
    pub locale: Locale,
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self {
            max_summary_length: 500,
            include_timestamps: false,
            max_key_points: 10,
            pattern_threshold: 2,
            locale: Locale::Zh,
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new()
    }
}
