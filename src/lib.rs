//! Rewrites project-site image references in a web project's page content.
//!
//! Two converters share this library:
//! - `convert-projects` turns `'/images/project_sites/<name>'` literals into
//!   `buildGeneralImageUrl('project_sites/<name>')` calls.
//! - `convert-project-sites` turns those calls into
//!   `buildProjectSiteUrl('<name>')`.

pub mod buffer;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod migrate;
pub mod rewrite;

pub use buffer::{TextBuffer, WriteMode};
pub use error::MigrateError;
pub use migrate::{Migration, MigrationReport};
pub use rewrite::Rewrite;
