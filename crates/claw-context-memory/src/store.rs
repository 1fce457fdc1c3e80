//! Markdown memory store on the local filesystem

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use claw_context_core::SessionContext;
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::paths::expand_home;
use crate::{FormatterConfig, MemoryEntry, MemoryFormatter};

/// Writes rendered memory entries under a memory root
#[derive(Debug, Clone)]
pub struct MemoryStore {
    root: PathBuf,
    memory_md: PathBuf,
    formatter: MemoryFormatter,
}

impl MemoryStore {
    pub fn new(config: &FormatterConfig) -> Result<Self> {
        // Unknown specifiers and time fields both fail when rendering a bare date
        let mut rendered = String::new();
        if write!(rendered, "{}", NaiveDate::default().format(&config.date_format)).is_err() {
            bail!("invalid date format {:?}", config.date_format);
        }

        let root = expand_home(&config.memory_path)
            .with_context(|| format!("resolving memory path {}", config.memory_path))?;
        let memory_md = expand_home(&config.memory_md_path)
            .with_context(|| format!("resolving MEMORY.md path {}", config.memory_md_path))?;

        Ok(Self {
            root,
            memory_md,
            formatter: MemoryFormatter::new(config.clone()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn memory_md_path(&self) -> &Path {
        &self.memory_md
    }

    /// Daily file an entry belongs to
    pub fn entry_path(&self, entry: &MemoryEntry) -> PathBuf {
        let date_format = &self.formatter.config().date_format;
        self.root.join(format!("{}.md", entry.date.format(date_format)))
    }

    /// Append an entry to its daily file, returning the file path
    pub fn save_entry(&self, entry: &MemoryEntry) -> Result<PathBuf> {
        let path = self.entry_path(entry);
        let markdown = self.formatter.to_markdown(entry);
        append_text(&path, &markdown)?;

        tracing::info!(path = %path.display(), tags = ?entry.tags, "saved memory entry");
        Ok(path)
    }

    /// Append the session block to MEMORY.md, returning its path
    pub fn append_memory_md(&self, context: &SessionContext) -> Result<PathBuf> {
        let markdown = self.formatter.append_to_memory_md(context);
        append_text(&self.memory_md, &markdown)?;

        tracing::info!(path = %self.memory_md.display(), "updated MEMORY.md");
        Ok(self.memory_md.clone())
    }
}

fn append_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> MemoryStore {
        let config = FormatterConfig {
            memory_path: dir.join("memory").to_string_lossy().to_string(),
            memory_md_path: dir.join("MEMORY.md").to_string_lossy().to_string(),
            ..Default::default()
        };
        MemoryStore::new(&config).unwrap()
    }

    fn entry() -> MemoryEntry {
        MemoryEntry {
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            summary: "Installed ripgrep.".to_string(),
            key_points: vec![],
            tags: vec!["install".to_string()],
        }
    }

    #[test]
    fn test_entry_path_uses_date() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = store_in(temp.path());
        assert_eq!(
            store.entry_path(&entry()),
            temp.path().join("memory").join("2025-03-14.md")
        );
    }

    #[test]
    fn test_entry_path_custom_date_format() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = FormatterConfig {
            memory_path: temp.path().to_string_lossy().to_string(),
            date_format: "%Y%m%d".to_string(),
            ..Default::default()
        };
        let store = MemoryStore::new(&config).unwrap();
        assert!(store.entry_path(&entry()).ends_with("20250314.md"));
    }

    #[test]
    fn test_invalid_date_format_rejected() {
        let config = FormatterConfig {
            date_format: "%Q".to_string(),
            ..Default::default()
        };
        assert!(MemoryStore::new(&config).is_err());
    }

    #[test]
    fn test_time_specifiers_rejected() {
        for date_format in ["%Y-%m-%d-%H", "%Y%m%d%M", "%s"] {
            let config = FormatterConfig {
                date_format: date_format.to_string(),
                ..Default::default()
            };
            let err = MemoryStore::new(&config).unwrap_err();
            assert!(err.to_string().contains(date_format), "{}", date_format);
        }
    }

    #[test]
    fn test_save_entry_appends_same_day() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = store_in(temp.path());

        let path = store.save_entry(&entry()).unwrap();
        store.save_entry(&entry()).unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text.matches("## 2025-03-14").count(), 2);
        assert!(text.contains("**标签**: install"));
    }

    #[test]
    fn test_append_memory_md() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = store_in(temp.path());
        std::fs::write(store.memory_md_path(), "# MEMORY\n").unwrap();

        let ctx = SessionContext {
            summary: "s".to_string(),
            ..Default::default()
        };
        let path = store.append_memory_md(&ctx).unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.starts_with("# MEMORY\n\n## 最新会话"));
        assert!(text.ends_with("---\n"));
    }

    #[test]
    fn test_default_root_is_under_home() {
        let store = MemoryStore::new(&FormatterConfig::default()).unwrap();
        assert!(store.root().ends_with("clawd/memory"));
    }
}
