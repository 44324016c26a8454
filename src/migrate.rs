use crate::buffer::{TextBuffer, WriteMode};
use crate::error::Result;
use crate::rewrite::Rewrite;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// One read -> rewrite -> write run against a single target file.
#[derive(Debug, Clone)]
pub struct Migration {
    pub rewrite: Rewrite,
    pub target: PathBuf,
    pub write_mode: WriteMode,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub path: PathBuf,
    pub replacements: usize,
    /// `None` for dry runs.
    pub bytes_written: Option<usize>,
}

impl Migration {
    pub fn new(rewrite: Rewrite, target: impl Into<PathBuf>) -> Self {
        Self {
            rewrite,
            target: target.into(),
            write_mode: WriteMode::default(),
            dry_run: false,
        }
    }

    pub fn write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn run(&self) -> Result<MigrationReport> {
        info!(rule = self.rewrite.name(), path = %self.target.display(), "rewriting");

        let mut buffer = TextBuffer::read(&self.target)?;
        debug!(bytes = buffer.len(), pattern = self.rewrite.pattern(), "read target");

        let replacements = buffer.apply(&self.rewrite);
        if replacements == 0 {
            warn!(rule = self.rewrite.name(), "no matches found, content unchanged");
        }

        let bytes_written = if self.dry_run {
            info!(replacements, "dry run, target not written");
            None
        } else {
            let bytes = buffer.write(self.write_mode)?;
            debug!(bytes, mode = self.write_mode.name(), "wrote target");
            Some(bytes)
        };

        info!(replacements, "done");

        Ok(MigrationReport {
            path: buffer.path().to_path_buf(),
            replacements,
            bytes_written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MigrateError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_rewrites_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ProjectsContent.tsx");
        fs::write(&path, "const a = '/images/project_sites/hero.jpg';\n").unwrap();

        let report = Migration::new(Rewrite::path_to_general_call().unwrap(), &path)
            .run()
            .unwrap();

        let expected = "const a = buildGeneralImageUrl('project_sites/hero.jpg');\n";
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
        assert_eq!(report.path, path);
        assert_eq!(report.replacements, 1);
        assert_eq!(report.bytes_written, Some(expected.len()));
    }

    #[test]
    fn test_dry_run_leaves_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ProjectsContent.tsx");
        let original = "x = buildGeneralImageUrl('project_sites/a.png');";
        fs::write(&path, original).unwrap();

        let report = Migration::new(Rewrite::general_to_project_site_call().unwrap(), &path)
            .dry_run(true)
            .run()
            .unwrap();

        assert_eq!(report.replacements, 1);
        assert_eq!(report.bytes_written, None);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_missing_target_is_io_error() {
        let dir = tempdir().unwrap();
        let result = Migration::new(
            Rewrite::path_to_general_call().unwrap(),
            dir.path().join("missing.tsx"),
        )
        .run();

        assert!(matches!(result, Err(MigrateError::Io { .. })));
    }
}
