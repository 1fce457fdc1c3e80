//! Memory entries, markdown rendering and the on-disk memory store

mod config;
mod formatter;
mod paths;
mod store;

pub use config::FormatterConfig;
pub use formatter::{generate_tags, MemoryEntry, MemoryFormatter};
pub use paths::expand_home;
pub use store::MemoryStore;
