use crate::buffer::WriteMode;
use crate::config::{ConfigLoader, MigrateConfig};
use crate::logging;
use crate::migrate::{Migration, MigrationReport};
use crate::rewrite::Rewrite;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Flags shared by both converters. With none given, the converter rewrites
/// the configured target file in place.
#[derive(Args, Debug, Clone, Default)]
pub struct MigrateArgs {
    /// Rewrite this file instead of the configured target
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Report how many call sites would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Write through a temp file renamed over the target
    #[arg(long)]
    pub atomic: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a sample .sitemigraterc and exit
    #[arg(long)]
    pub sample_rc: bool,
}

impl MigrateArgs {
    /// Flags override the rc file, which overrides the defaults.
    pub fn migration(&self, rewrite: Rewrite, config: &MigrateConfig) -> Migration {
        let target = self
            .file
            .clone()
            .unwrap_or_else(|| config.target_file.clone());
        let write_mode = if self.atomic || config.atomic_write {
            WriteMode::Atomic
        } else {
            WriteMode::InPlace
        };

        Migration::new(rewrite, target)
            .write_mode(write_mode)
            .dry_run(self.dry_run)
    }
}

/// Entry point shared by the converter binaries.
pub fn run(rule: fn() -> crate::error::Result<Rewrite>, args: &MigrateArgs) -> Result<()> {
    if args.sample_rc {
        print!("{}", ConfigLoader::generate_sample_rc());
        return Ok(());
    }

    let config = ConfigLoader::load_config();
    let level = if args.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    logging::init(level);

    let rewrite = rule()?;
    let confirmation = rewrite.confirmation().to_string();
    let migration = args.migration(rewrite, &config);

    let report = migration
        .run()
        .with_context(|| format!("{} failed", migration.rewrite.name()))?;

    println!("{}", report_line(&confirmation, &report));
    Ok(())
}

/// The single line printed once a converter finishes.
pub fn report_line(confirmation: &str, report: &MigrationReport) -> String {
    match report.bytes_written {
        Some(_) => confirmation.to_string(),
        None => format!(
            "{} call site(s) would change in {}",
            report.replacements,
            report.path.display()
        ),
    }
}
