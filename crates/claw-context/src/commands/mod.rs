pub mod analyze;
pub mod compress;
pub mod sync;
pub mod version;
