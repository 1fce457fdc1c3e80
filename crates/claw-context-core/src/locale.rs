//! Output labels for generated text

use serde::{Deserialize, Serialize};

/// Language of generated pattern strings and markdown headings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

/// Fixed strings used when rendering analysis and memory output
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub session_record: &'static str,
    pub tags: &'static str,
    pub no_tags: &'static str,
    pub summary: &'static str,
    pub key_points: &'static str,
    pub latest_session: &'static str,
    pub preferences: &'static str,
    pub decisions: &'static str,
    pub patterns: &'static str,
}

const ZH: Labels = Labels {
    session_record: "会话记录",
    tags: "标签",
    no_tags: "无",
    summary: "摘要",
    key_points: "关键点",
    latest_session: "最新会话",
    preferences: "用户偏好",
    decisions: "重要决策",
    patterns: "使用模式",
};

const EN: Labels = Labels {
    session_record: "Session Record",
    tags: "Tags",
    no_tags: "none",
    summary: "Summary",
    key_points: "Key Points",
    latest_session: "Latest Session",
    preferences: "User Preferences",
    decisions: "Decisions",
    patterns: "Usage Patterns",
};

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::Zh => &ZH,
            Locale::En => &EN,
        }
    }

    /// Render a frequent-task pattern line
    pub fn frequent_task(self, keyword: &str, count: usize) -> String {
        match self {
            Locale::Zh => format!("频繁执行: {} ({}次)", keyword, count),
            Locale::En => format!("frequently performed: {} ({} times)", keyword, count),
        }
    }
}
