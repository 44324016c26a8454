use crate::error::{MigrateError, Result};
use crate::rewrite::Rewrite;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Truncate and overwrite the target directly.
    #[default]
    InPlace,
    /// Write a sibling temp file and rename it over the target.
    Atomic,
}

impl WriteMode {
    pub fn name(&self) -> &'static str {
        match self {
            WriteMode::InPlace => "in-place",
            WriteMode::Atomic => "atomic",
        }
    }
}

/// The full content of a target file, held in memory between one read and
/// one write.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    path: PathBuf,
    content: String,
}

impl TextBuffer {
    pub fn from_string(path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| MigrateError::io(path, e))?;
        let content = String::from_utf8(bytes).map_err(|source| MigrateError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_string(path, content))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Run one substitution pass over the whole buffer.
    pub fn apply(&mut self, rewrite: &Rewrite) -> usize {
        let (content, replacements) = rewrite.apply(&self.content);
        self.content = content;
        replacements
    }

    /// Write the buffer back to its path, returning the number of bytes written.
    pub fn write(&self, mode: WriteMode) -> Result<usize> {
        match mode {
            WriteMode::InPlace => {
                fs::write(&self.path, self.content.as_bytes())
                    .map_err(|e| MigrateError::io(&self.path, e))?;
            }
            WriteMode::Atomic => self.write_atomic()?,
        }

        Ok(self.content.len())
    }

    fn write_atomic(&self) -> Result<()> {
        // Rename over the link's target so a symlinked file stays a symlink
        let target = fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());

        // Temp file must live on the same filesystem for the rename
        let parent_dir = match target.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut temp_file =
            NamedTempFile::new_in(parent_dir).map_err(|e| MigrateError::io(parent_dir, e))?;
        temp_file
            .write_all(self.content.as_bytes())
            .and_then(|_| temp_file.as_file().sync_all())
            .map_err(|e| MigrateError::io(temp_file.path(), e))?;

        // The temp file is created owner-only; keep the target's mode
        if let Ok(metadata) = fs::metadata(&target) {
            temp_file
                .as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| MigrateError::io(temp_file.path(), e))?;
        }

        temp_file
            .persist(&target)
            .map_err(|source| MigrateError::Persist {
                path: target.clone(),
                source,
            })?;

        Ok(())
    }
}
