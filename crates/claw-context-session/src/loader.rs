//! Transcript parsing
//!
//! Accepts a JSON array of messages, an object with a `messages` array, a
//! single message object, or JSONL where each line is either a plain message
//! or a Claude Code transcript record
//! (`{"type": "user", "message": {"content": ...}}`).

use claw_context_core::{Message, Role};
use serde_json::Value;
use std::path::Path;

use crate::SessionError;

/// Load a transcript from disk
pub fn load_session(path: &Path) -> Result<Vec<Message>, SessionError> {
    let content = std::fs::read_to_string(path).map_err(|e| SessionError::io(path, e))?;

    let messages = if path.extension().and_then(|e| e.to_str()) == Some("jsonl") {
        parse_lines(path, &content)?
    } else {
        parse_document(path, &content)?
    };

    tracing::debug!(path = %path.display(), messages = messages.len(), "loaded session");
    Ok(messages)
}

/// Parse a transcript held in memory; `origin` is only used for errors
pub fn parse_document(origin: &Path, content: &str) -> Result<Vec<Message>, SessionError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let doc: Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(e) => {
            // Several JSON values, one per line
            if content.lines().filter(|l| !l.trim().is_empty()).count() > 1 {
                return parse_lines(origin, content);
            }
            return Err(SessionError::Parse {
                path: origin.to_path_buf(),
                line: e.line(),
                source: e,
            });
        }
    };

    let items = match &doc {
        Value::Array(items) => items,
        Value::Object(obj) => match obj.get("messages").and_then(|m| m.as_array()) {
            Some(items) => items,
            // A lone record reads like a one-line JSONL file
            None if obj.contains_key("role") || obj.contains_key("type") => {
                return Ok(record_to_message(&doc).into_iter().collect());
            }
            None => {
                return Err(SessionError::Format {
                    path: origin.to_path_buf(),
                    reason: "expected a message array or an object with `messages`".to_string(),
                })
            }
        },
        _ => {
            return Err(SessionError::Format {
                path: origin.to_path_buf(),
                reason: "top-level value is neither an array nor an object".to_string(),
            })
        }
    };

    Ok(items.iter().filter_map(record_to_message).collect())
}

/// Parse JSONL, one record per non-blank line
pub fn parse_lines(origin: &Path, content: &str) -> Result<Vec<Message>, SessionError> {
    let mut messages = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: Value = serde_json::from_str(line).map_err(|e| SessionError::Parse {
            path: origin.to_path_buf(),
            line: idx + 1,
            source: e,
        })?;
        match record_to_message(&record) {
            Some(msg) => messages.push(msg),
            None => tracing::debug!(line = idx + 1, "skipping non-message record"),
        }
    }

    Ok(messages)
}

fn record_to_message(record: &Value) -> Option<Message> {
    let role = record
        .get("role")
        .or_else(|| record.pointer("/message/role"))
        .or_else(|| record.get("type"))
        .and_then(|r| r.as_str())?;

    // Claude Code writes bookkeeping records (summary, file snapshots) inline
    if record.get("role").is_none()
        && !matches!(role, "user" | "human" | "assistant" | "system")
    {
        return None;
    }

    let content = record
        .get("content")
        .or_else(|| record.pointer("/message/content"))?;
    let text = extract_text(content);
    if text.is_empty() {
        return None;
    }

    let timestamp = record
        .get("timestamp")
        .and_then(|t| t.as_str())
        .map(String::from);

    Some(Message {
        role: Role::parse(role),
        content: text,
        timestamp,
    })
}

/// Plain string content, or the text blocks of a content array
fn extract_text(content: &Value) -> String {
    if let Some(s) = content.as_str() {
        return s.to_string();
    }
    let Some(blocks) = content.as_array() else {
        return String::new();
    };
    blocks
        .iter()
        .filter(|b| b.get("type").and_then(|t| t.as_str()) == Some("text"))
        .filter_map(|b| b.get("text").and_then(|t| t.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> &'static Path {
        Path::new("session.json")
    }

    #[test]
    fn test_parse_message_array() {
        let content = r#"[
            {"role": "system", "content": "be helpful"},
            {"role": "user", "content": "hi", "timestamp": "2025-01-01T00:00:00Z"}
        ]"#;
        let messages = parse_document(origin(), content).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].timestamp.as_deref(), Some("2025-01-01T00:00:00Z"));
    }

    #[test]
    fn test_parse_messages_object() {
        let content = r#"{"messages": [{"role": "assistant", "content": "- done"}]}"#;
        let messages = parse_document(origin(), content).unwrap();
        assert_eq!(messages, vec![Message::assistant("- done")]);
    }

    #[test]
    fn test_parse_claude_code_jsonl() {
        let lines = [
            serde_json::json!({"type": "summary", "summary": "old session"}),
            serde_json::json!({"type": "user", "timestamp": "2025-01-01T00:00:00Z", "message": {"role": "user", "content": "fix router"}}),
            serde_json::json!({"type": "assistant", "message": {"role": "assistant", "content": [
                {"type": "text", "text": "Looking now."},
                {"type": "tool_use", "name": "Read", "input": {"file_path": "router.rs"}}
            ]}}),
            serde_json::json!({"type": "user", "message": {"role": "user", "content": [
                {"type": "tool_result", "content": "fn main() {}"}
            ]}}),
        ];
        let content: String = lines.iter().map(|l| format!("{}\n", l)).collect();

        let messages = parse_lines(origin(), &content).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "fix router");
        assert_eq!(messages[0].timestamp.as_deref(), Some("2025-01-01T00:00:00Z"));
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].content, "Looking now.");
    }

    #[test]
    fn test_unknown_roles_are_kept_as_other() {
        let content = r#"[{"role": "tool", "content": "exit 0"}]"#;
        let messages = parse_document(origin(), content).unwrap();
        assert_eq!(messages[0].role, Role::Other);
    }

    #[test]
    fn test_document_falls_back_to_lines() {
        let content = "{\"role\":\"user\",\"content\":\"a\"}\n{\"role\":\"assistant\",\"content\":\"b\"}\n";
        let messages = parse_document(origin(), content).unwrap();
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let content = "{\"role\":\"user\",\"content\":\"a\"}\n\n{not json}\n";
        let err = parse_lines(origin(), content).unwrap_err();
        match err {
            SessionError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_shape_is_format_error() {
        let err = parse_document(origin(), r#"{"foo": 1}"#).unwrap_err();
        assert!(matches!(err, SessionError::Format { .. }));
    }

    #[test]
    fn test_single_message_object() {
        let content = r#"{"role": "user", "content": "hi"}"#;
        let messages = parse_document(origin(), content).unwrap();
        assert_eq!(messages, vec![Message::user("hi")]);
    }

    #[test]
    fn test_single_object_matches_jsonl_line() {
        let temp = tempfile::TempDir::new().unwrap();
        let line = r#"{"type": "assistant", "message": {"content": "done"}}"#;
        let json = temp.path().join("one.json");
        let jsonl = temp.path().join("one.jsonl");
        std::fs::write(&json, line).unwrap();
        std::fs::write(&jsonl, line).unwrap();

        let from_json = load_session(&json).unwrap();
        assert_eq!(from_json, load_session(&jsonl).unwrap());
        assert_eq!(from_json, vec![Message::assistant("done")]);
    }

    #[test]
    fn test_single_bookkeeping_record_is_empty() {
        let content = r#"{"type": "summary", "summary": "old session"}"#;
        assert!(parse_document(origin(), content).unwrap().is_empty());
    }

    #[test]
    fn test_empty_document() {
        assert!(parse_document(origin(), "  \n").unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_session(Path::new("/nonexistent/session.json")).unwrap_err();
        assert!(matches!(err, SessionError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/session.json"));
    }

    #[test]
    fn test_load_session_by_extension() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("session.jsonl");
        std::fs::write(&path, "{\"role\":\"user\",\"content\":\"hello\"}\n").unwrap();

        let messages = load_session(&path).unwrap();
        assert_eq!(messages, vec![Message::user("hello")]);
    }
}
