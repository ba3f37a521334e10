// Public modules
pub mod build;
pub mod config;
pub mod error;
pub mod names;
pub mod patch;
pub mod scaffold;
pub mod ship;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
