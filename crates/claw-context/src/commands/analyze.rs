use claw_context_core::{Labels, SessionAnalyzer, SessionContext};
use claw_context_session::load_session;
use std::path::Path;

use crate::config::AppConfig;

fn render_context(context: &SessionContext, labels: &Labels) -> String {
    let mut out = format!("{}:\n  {}\n\n", labels.summary, context.summary);

    out.push_str(&format!("{}:\n", labels.key_points));
    for (i, point) in context.key_points.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, point));
    }

    let sections = [
        (labels.preferences, &context.user_preferences),
        (labels.decisions, &context.decisions),
        (labels.patterns, &context.patterns),
    ];
    for (title, items) in sections {
        if items.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{}:\n", title));
        for item in items {
            out.push_str(&format!("  - {}\n", item));
        }
    }
    out
}

pub fn run(
    config: &AppConfig,
    file: &Path,
    compress_max: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let messages = load_session(file)?;
    let analyzer = SessionAnalyzer::new(config.analyzer.clone());
    let context = analyzer.analyze(&messages);

    if json {
        println!("{}", serde_json::to_string_pretty(&context)?);
    } else {
        print!("{}", render_context(&context, config.analyzer.locale.labels()));
    }

    if let Some(max) = compress_max {
        let compressed = analyzer.compress(&messages, max);
        // Keep stdout parseable in JSON mode
        if json {
            eprintln!("Compressed: {} -> {} messages", messages.len(), compressed.len());
        } else {
            println!(
                "\nCompressed: {} -> {} messages",
                messages.len(),
                compressed.len()
            );
        }
    }
    Ok(())
}
