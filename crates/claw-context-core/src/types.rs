//! Core types for session analysis

use serde::{Deserialize, Serialize};

/// Speaker of a transcript message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    /// Any role outside the three above (tool, function, ...). Skipped by
    /// role-scoped extraction, treated as non-system by compression.
    #[serde(other)]
    Other,
}

impl Role {
    pub fn parse(value: &str) -> Self {
        match value {
            "system" => Role::System,
            "user" | "human" => Role::User,
            "assistant" => Role::Assistant,
            _ => Role::Other,
        }
    }
}

/// A single role-tagged transcript message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

/// Structured result of analyzing one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub summary: String,
    pub key_points: Vec<String>,
    pub user_preferences: Vec<String>,
    pub decisions: Vec<String>,
    pub patterns: Vec<String>,
}

impl SessionContext {
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
            && self.key_points.is_empty()
            && self.user_preferences.is_empty()
            && self.decisions.is_empty()
            && self.patterns.is_empty()
    }
}
