//! Heuristic session analysis

use crate::rules::{self, SignalKind};
use crate::{AnalyzerConfig, Message, Role, SessionContext};

/// Derives summaries, key points and usage signals from a transcript
#[derive(Debug, Clone, Default)]
pub struct SessionAnalyzer {
    config: AnalyzerConfig,
}

impl SessionAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a whole session
    pub fn analyze(&self, messages: &[Message]) -> SessionContext {
        let context = SessionContext {
            summary: self.summarize(messages),
            key_points: self.extract_key_points(messages),
            user_preferences: self.extract_user_preferences(messages),
            decisions: self.extract_decisions(messages),
            patterns: self.extract_patterns(messages),
        };

        tracing::debug!(
            messages = messages.len(),
            key_points = context.key_points.len(),
            preferences = context.user_preferences.len(),
            decisions = context.decisions.len(),
            patterns = context.patterns.len(),
            "analyzed session"
        );
        context
    }

    /// First three sentence-like units of the whole session, length capped
    pub fn summarize(&self, messages: &[Message]) -> String {
        let all_content = messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let sentences: Vec<&str> = rules::sentence_re()
            .find_iter(&all_content)
            .take(3)
            .map(|m| m.as_str())
            .collect();

        truncate_chars(&sentences.join(" "), self.config.max_summary_length)
    }

    /// Bullet and flagged lines from assistant messages, prefix-truncated
    pub fn extract_key_points(&self, messages: &[Message]) -> Vec<String> {
        let mut key_points = Vec::new();

        for msg in messages.iter().filter(|m| m.role == Role::Assistant) {
            let bullets = rules::bullet_re().captures_iter(&msg.content);
            let flagged = rules::flagged_re().captures_iter(&msg.content);

            for caps in bullets.chain(flagged) {
                if let Some(text) = caps.get(1) {
                    let text = text.as_str().trim();
                    if !text.is_empty() {
                        key_points.push(text.to_string());
                    }
                }
            }
        }

        key_points.truncate(self.config.max_key_points);
        key_points
    }

    /// Preference phrases spoken by the user
    pub fn extract_user_preferences(&self, messages: &[Message]) -> Vec<String> {
        let user_messages: Vec<&Message> =
            messages.iter().filter(|m| m.role == Role::User).collect();
        collect_signals(&user_messages, SignalKind::Preference)
    }

    /// Decision phrases from any speaker
    pub fn extract_decisions(&self, messages: &[Message]) -> Vec<String> {
        let all: Vec<&Message> = messages.iter().collect();
        collect_signals(&all, SignalKind::Decision)
    }

    /// Task keywords recurring more often than the configured threshold
    pub fn extract_patterns(&self, messages: &[Message]) -> Vec<String> {
        let counts = count_task_keywords(messages);

        counts
            .into_iter()
            .filter(|(_, count)| *count > self.config.pattern_threshold)
            .map(|(keyword, count)| self.config.locale.frequent_task(keyword, count))
            .collect()
    }
}

/// Total case-insensitive occurrences per task keyword, in table order
pub fn count_task_keywords(messages: &[Message]) -> Vec<(&'static str, usize)> {
    rules::task_keywords()
        .iter()
        .map(|(keyword, re)| {
            let count = messages
                .iter()
                .map(|m| re.find_iter(&m.content).count())
                .sum();
            (*keyword, count)
        })
        .collect()
}

fn collect_signals(messages: &[&Message], kind: SignalKind) -> Vec<String> {
    let mut found = Vec::new();
    for msg in messages {
        for re in rules::signals(kind) {
            found.extend(re.find_iter(&msg.content).map(|m| m.as_str().to_string()));
        }
    }
    found
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
