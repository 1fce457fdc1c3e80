//! Transcript loading and writing for session analysis

mod error;
mod io;
mod loader;
mod tokens;

pub use error::SessionError;
pub use io::{atomic_write, save_session};
pub use loader::{load_session, parse_document, parse_lines};
pub use tokens::{estimate_session_tokens, estimate_tokens};
