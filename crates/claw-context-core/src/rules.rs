//! Extraction rule tables
//!
//! Signal phrases, task keywords and key point markers are data here; the
//! analyzer only walks the tables.

use regex::Regex;
use std::sync::OnceLock;

/// What a signal phrase tells us about the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Preference,
    Decision,
}

pub struct SignalRule {
    pub kind: SignalKind,
    /// Case-insensitive alternation; the matched phrase itself is collected
    pub pattern: &'static str,
}

pub const SIGNAL_RULES: &[SignalRule] = &[
    SignalRule {
        kind: SignalKind::Preference,
        pattern: "我喜欢|I like|我偏好|I prefer|我喜欢用|prefer",
    },
    SignalRule {
        kind: SignalKind::Preference,
        pattern: "习惯用|usually|normally|typically",
    },
    SignalRule {
        kind: SignalKind::Preference,
        pattern: "最好用|better to|prefer to use",
    },
    SignalRule {
        kind: SignalKind::Decision,
        pattern: "决定|decided|决定用|decided to use|选择|chose",
    },
    SignalRule {
        kind: SignalKind::Decision,
        pattern: "最终|finally|最终选择|finally chose",
    },
    SignalRule {
        kind: SignalKind::Decision,
        pattern: "采用|adopted|使用|using",
    },
];

/// Task keywords counted for usage patterns, in emission order
pub const TASK_KEYWORDS: &[&str] = &[
    "下载", "创建", "删除", "安装", "更新", "搜索", "download", "create", "delete", "install",
    "update", "search",
];

static SIGNAL_RES: OnceLock<Vec<(SignalKind, Regex)>> = OnceLock::new();
static KEYWORD_RES: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
static SENTENCE_RE: OnceLock<Regex> = OnceLock::new();
static BULLET_RE: OnceLock<Regex> = OnceLock::new();
static FLAGGED_RE: OnceLock<Regex> = OnceLock::new();

fn signal_regexes() -> &'static [(SignalKind, Regex)] {
    SIGNAL_RES.get_or_init(|| {
        SIGNAL_RULES
            .iter()
            .map(|rule| {
                let re = Regex::new(&format!("(?i){}", rule.pattern)).unwrap();
                (rule.kind, re)
            })
            .collect()
    })
}

/// Regexes for one signal kind, in table order
pub fn signals(kind: SignalKind) -> impl Iterator<Item = &'static Regex> {
    signal_regexes()
        .iter()
        .filter(move |(k, _)| *k == kind)
        .map(|(_, re)| re)
}

/// Task keywords paired with their case-insensitive matchers
pub fn task_keywords() -> &'static [(&'static str, Regex)] {
    KEYWORD_RES.get_or_init(|| {
        TASK_KEYWORDS
            .iter()
            .map(|kw| (*kw, Regex::new(&format!("(?i){}", regex::escape(kw))).unwrap()))
            .collect()
    })
}

/// Sentence-like runs ending in ASCII or full-width terminators
pub fn sentence_re() -> &'static Regex {
    SENTENCE_RE.get_or_init(|| Regex::new(r"[^.!?。！？]+[.!?。！？]*").unwrap())
}

/// Lines led by a `-`, `•` or `*` marker; group 1 is the item text
pub fn bullet_re() -> &'static Regex {
    BULLET_RE.get_or_init(|| Regex::new(r"(?m)^[ \t]*[-•*][ \t]+(.+)$").unwrap())
}

/// Lines led by a check or exclamation glyph; group 1 is the remainder
pub fn flagged_re() -> &'static Regex {
    FLAGGED_RE.get_or_init(|| Regex::new(r"(?m)^[ \t]*[✓✅❗❕]\x{FE0F}?(.*)$").unwrap())
}
