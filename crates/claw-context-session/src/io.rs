//! Transcript writing and atomic file operations

use claw_context_core::Message;
use std::io::Write;
use std::path::Path;

use crate::SessionError;

/// Write a transcript; `.jsonl` paths get one message per line, anything
/// else a pretty-printed JSON array
pub fn save_session(path: &Path, messages: &[Message]) -> Result<(), SessionError> {
    let data = if path.extension().and_then(|e| e.to_str()) == Some("jsonl") {
        to_jsonl(messages)
    } else {
        serde_json::to_vec_pretty(messages).map_err(std::io::Error::from)
    };

    data.and_then(|bytes| atomic_write(path, &bytes))
        .map_err(|e| SessionError::io(path, e))?;

    tracing::info!(path = %path.display(), messages = messages.len(), "wrote session");
    Ok(())
}

fn to_jsonl(messages: &[Message]) -> std::io::Result<Vec<u8>> {
    let mut out = Vec::new();
    for msg in messages {
        let json = serde_json::to_string(msg)?;
        writeln!(out, "{}", json)?;
    }
    Ok(out)
}

/// Write data atomically using a uniquely named temp file in the target
/// directory, then rename it over `path`
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(data)?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
