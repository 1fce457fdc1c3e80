use claw_context_core::SessionAnalyzer;
use claw_context_session::{estimate_session_tokens, load_session, save_session};
use std::path::Path;

use crate::config::AppConfig;

pub fn run(
    config: &AppConfig,
    input: &Path,
    output: Option<&Path>,
    max: usize,
) -> anyhow::Result<()> {
    let messages = load_session(input)?;
    let analyzer = SessionAnalyzer::new(config.analyzer.clone());
    let compressed = analyzer.compress(&messages, max);

    println!(
        "Compressed: {} -> {} messages",
        messages.len(),
        compressed.len()
    );
    println!(
        "Estimated tokens: {} -> {}",
        estimate_session_tokens(&messages),
        estimate_session_tokens(&compressed)
    );

    if let Some(path) = output {
        save_session(path, &compressed)?;
        println!("  Output: {}", path.display());
    }
    Ok(())
}
