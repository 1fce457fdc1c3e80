//! Conversion of analysis results into memory entries and markdown

use chrono::{NaiveDate, Utc};
use claw_context_core::SessionContext;
use serde::{Deserialize, Serialize};

use crate::FormatterConfig;

/// A dated, tagged summary record ready to persist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryEntry {
    pub date: NaiveDate,
    pub summary: String,
    pub key_points: Vec<String>,
    pub tags: Vec<String>,
}

struct TagRule {
    /// Any of these substrings in the lower-cased summary fires the rule
    needles: &'static [&'static str],
    tags: &'static [&'static str],
}

const TAG_RULES: &[TagRule] = &[
    TagRule {
        needles: &["github", "git"],
        tags: &["github", "git"],
    },
    TagRule {
        needles: &["安装", "install"],
        tags: &["install"],
    },
    TagRule {
        needles: &["删除", "delete"],
        tags: &["delete"],
    },
    TagRule {
        needles: &["搜索", "search"],
        tags: &["search"],
    },
    TagRule {
        needles: &["创建", "create"],
        tags: &["create"],
    },
];

/// Derive topic tags from a summary, in rule order without duplicates
pub fn generate_tags(summary: &str) -> Vec<String> {
    let content = summary.to_lowercase();
    let mut tags: Vec<String> = Vec::new();

    for rule in TAG_RULES {
        if !rule.needles.iter().any(|n| content.contains(n)) {
            continue;
        }
        for tag in rule.tags {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
    }
    tags
}

/// Maps session analysis into persistable memory records
#[derive(Debug, Clone, Default)]
pub struct MemoryFormatter {
    config: FormatterConfig,
}

impl MemoryFormatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Build today's memory entry
    pub fn context_to_memory(&self, context: &SessionContext) -> MemoryEntry {
        self.context_to_memory_on(context, Utc::now().date_naive())
    }

    /// Build a memory entry for a fixed date
    pub fn context_to_memory_on(&self, context: &SessionContext, date: NaiveDate) -> MemoryEntry {
        MemoryEntry {
            date,
            summary: context.summary.clone(),
            key_points: context.key_points.clone(),
            tags: generate_tags(&context.summary),
        }
    }

    /// Render an entry for the daily memory file
    pub fn to_markdown(&self, entry: &MemoryEntry) -> String {
        let labels = self.config.locale.labels();
        let tags = if entry.tags.is_empty() {
            labels.no_tags.to_string()
        } else {
            entry.tags.join(", ")
        };

        let mut md = format!(
            "## {} - {}\n\n",
            entry.date.format("%Y-%m-%d"),
            labels.session_record
        );
        md.push_str(&format!("**{}**: {}\n\n", labels.tags, tags));
        md.push_str(&format!("### {}\n\n{}\n\n", labels.summary, entry.summary));

        if !entry.key_points.is_empty() {
            md.push_str(&format!("### {}\n\n", labels.key_points));
            md.push_str(&bullet_list(&entry.key_points));
            md.push('\n');
        }

        md.push_str("---\n\n");
        md
    }

    /// Render the block appended to MEMORY.md after a session
    pub fn append_to_memory_md(&self, context: &SessionContext) -> String {
        let labels = self.config.locale.labels();

        let mut md = format!("\n## {}\n\n", labels.latest_session);
        md.push_str(&format!("### {}\n{}\n\n", labels.summary, context.summary));

        if !context.user_preferences.is_empty() {
            md.push_str(&format!("### {}\n", labels.preferences));
            md.push_str(&bullet_list(&context.user_preferences));
            md.push('\n');
        }

        if !context.decisions.is_empty() {
            md.push_str(&format!("### {}\n", labels.decisions));
            md.push_str(&bullet_list(&context.decisions));
            md.push('\n');
        }

        md.push_str("---\n");
        md
    }
}

fn bullet_list(items: &[String]) -> String {
    items.iter().map(|item| format!("- {}\n", item)).collect()
}
