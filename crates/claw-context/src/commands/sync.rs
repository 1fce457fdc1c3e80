use anyhow::Context;
use claw_context_core::{AnalyzerConfig, SessionAnalyzer};
use claw_context_memory::{FormatterConfig, MemoryFormatter, MemoryStore};
use claw_context_session::load_session;
use std::path::{Path, PathBuf};

/// Where a sync wrote its output
#[derive(Debug)]
struct SyncOutcome {
    entry_path: PathBuf,
    memory_md_path: PathBuf,
}

fn sync_session(
    analyzer_config: &AnalyzerConfig,
    memory_config: &FormatterConfig,
    file: &Path,
    dry_run: bool,
) -> anyhow::Result<Option<SyncOutcome>> {
    let messages = load_session(file)?;
    let context = SessionAnalyzer::new(analyzer_config.clone()).analyze(&messages);
    let formatter = MemoryFormatter::new(memory_config.clone());
    let entry = formatter.context_to_memory(&context);

    let labels = memory_config.locale.labels();
    println!("{}", entry.summary);
    let tags = if entry.tags.is_empty() {
        labels.no_tags.to_string()
    } else {
        entry.tags.join(", ")
    };
    println!("  {}: {}", labels.tags, tags);

    let store = MemoryStore::new(memory_config)?;
    if dry_run {
        println!("\n(dry run) would write {}", store.entry_path(&entry).display());
        print!("{}", formatter.to_markdown(&entry));
        return Ok(None);
    }

    let entry_path = store.save_entry(&entry)?;
    let memory_md_path = store.append_memory_md(&context).with_context(|| {
        format!(
            "daily entry already written to {}; MEMORY.md was not updated",
            entry_path.display()
        )
    })?;
    Ok(Some(SyncOutcome {
        entry_path,
        memory_md_path,
    }))
}

pub fn run(
    analyzer_config: &AnalyzerConfig,
    memory_config: &FormatterConfig,
    file: &Path,
    dry_run: bool,
) -> anyhow::Result<()> {
    if let Some(outcome) = sync_session(analyzer_config, memory_config, file, dry_run)? {
        println!("\nSynced to memory:");
        println!("  {}", outcome.entry_path.display());
        println!("  {}", outcome.memory_md_path.display());
    }
    Ok(())
}
