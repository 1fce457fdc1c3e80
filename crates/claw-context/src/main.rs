mod cli;
mod commands;
mod config;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `--json` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze {
            file,
            compress,
            max,
            json,
        } => commands::analyze::run(&config, &file, compress.then_some(max), json),
        Commands::Sync {
            file,
            memory,
            memory_dir,
            dry_run,
        } => {
            let mut memory_config = config.memory.clone();
            if let Some(path) = memory {
                memory_config.memory_md_path = path;
            }
            if let Some(dir) = memory_dir {
                memory_config.memory_path = dir;
            }
            commands::sync::run(&config.analyzer, &memory_config, &file, dry_run)
        }
        Commands::Compress { input, output, max } => {
            commands::compress::run(&config, &input, output.as_deref(), max)
        }
        Commands::Version => commands::version::run(),
    }
}
