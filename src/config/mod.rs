//! Configuration subsystem - target file and write settings
//!
//! This module handles loading configuration from .sitemigraterc files.
//! Command-line flags take precedence over anything loaded here.

pub mod rc;

// Re-export public interface
pub use rc::{ConfigLoader, MigrateConfig};
