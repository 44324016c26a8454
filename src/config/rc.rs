use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const RC_FILE_NAME: &str = ".sitemigraterc";
pub const DEFAULT_TARGET_FILE: &str = "src/app/projects/ProjectsContent.tsx";

#[derive(Debug, Clone, PartialEq)]
pub struct MigrateConfig {
    pub target_file: PathBuf,
    pub atomic_write: bool,
    pub log_level: String,
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            target_file: PathBuf::from(DEFAULT_TARGET_FILE),
            atomic_write: false,
            log_level: "info".to_string(),
        }
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Get the path to the RC file
    /// Looks for .sitemigraterc in:
    /// 1. Current directory
    /// 2. Home directory (~/.sitemigraterc)
    pub fn get_rc_path() -> Option<PathBuf> {
        let home = env::var_os("HOME").map(PathBuf::from);
        Self::find_rc_path(Path::new("."), home.as_deref())
    }

    fn find_rc_path(current_dir: &Path, home: Option<&Path>) -> Option<PathBuf> {
        let current_rc = current_dir.join(RC_FILE_NAME);
        if current_rc.exists() {
            return Some(current_rc);
        }

        let home_rc = home?.join(RC_FILE_NAME);
        home_rc.exists().then_some(home_rc)
    }

    /// Load defaults overlaid with the RC file, if one is found
    pub fn load_config() -> MigrateConfig {
        match Self::get_rc_path() {
            Some(rc_path) => Self::load_from(&rc_path),
            None => MigrateConfig::default(),
        }
    }

    pub fn load_from(rc_path: &Path) -> MigrateConfig {
        let mut config = MigrateConfig::default();

        // An unreadable rc file falls back to defaults
        if let Ok(content) = fs::read_to_string(rc_path) {
            Self::parse_config_content(&content, &mut config);
        }

        config
    }

    fn parse_config_content(content: &str, config: &mut MigrateConfig) {
        for line in content.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            Self::parse_config_line(line, config);
        }
    }

    fn parse_config_line(line: &str, config: &mut MigrateConfig) {
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        }
        .trim();

        let Some((key, value)) = line.split_once('=') else {
            debug!(line, "ignoring rc line without '='");
            return;
        };
        let key = key.trim();
        let value = value.trim();

        match key {
            "target_file" | "target" => {
                if !value.is_empty() {
                    config.target_file = PathBuf::from(value);
                }
            }
            "atomic_write" | "atomic" => {
                if let Some(flag) = parse_bool(value) {
                    config.atomic_write = flag;
                }
            }
            "log_level" => match value {
                "error" | "warn" | "info" | "debug" | "trace" => {
                    config.log_level = value.to_string();
                }
                _ => {}
            },
            _ => debug!(key, "ignoring unknown rc setting"),
        }
    }

    /// Generate a sample RC file content
    pub fn generate_sample_rc() -> String {
        format!(
            r#"# site-asset-migrate configuration file ({RC_FILE_NAME})
# Lines starting with # are comments

# File rewritten by convert-projects and convert-project-sites
target_file = {DEFAULT_TARGET_FILE}

# Write through a temp file and rename it over the target
atomic_write = false

# error, warn, info, debug or trace (RUST_LOG takes precedence)
log_level = info
"#
        )
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let mut config = MigrateConfig::default();
        let content = r#"
            target_file = /srv/site/src/app/projects/ProjectsContent.tsx
            atomic_write = yes
            log_level = debug
        "#;

        ConfigLoader::parse_config_content(content, &mut config);

        assert_eq!(
            config.target_file,
            PathBuf::from("/srv/site/src/app/projects/ProjectsContent.tsx")
        );
        assert!(config.atomic_write);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_parse_aliases_and_comments() {
        let mut config = MigrateConfig::default();
        let content = r#"
            # This is a comment
            target = pages/Other.tsx   # inline comment
            atomic=on
            # atomic = off
        "#;

        ConfigLoader::parse_config_content(content, &mut config);

        assert_eq!(config.target_file, PathBuf::from("pages/Other.tsx"));
        assert!(config.atomic_write);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_values_ignored() {
        let mut config = MigrateConfig::default();
        let content = r#"
            atomic_write = maybe
            log_level = loud
            target_file =
            unknown_setting = value
            not a setting
        "#;

        ConfigLoader::parse_config_content(content, &mut config);

        assert_eq!(config, MigrateConfig::default());
    }

    #[test]
    fn test_sample_rc_parses_to_defaults() {
        let mut config = MigrateConfig {
            atomic_write: true,
            log_level: "trace".to_string(),
            ..MigrateConfig::default()
        };

        ConfigLoader::parse_config_content(&ConfigLoader::generate_sample_rc(), &mut config);

        assert_eq!(config, MigrateConfig::default());
    }

    #[test]
    fn test_load_from_rc_file() {
        let dir = tempfile::tempdir().unwrap();
        let rc_path = dir.path().join(RC_FILE_NAME);
        fs::write(&rc_path, "target_file = site/ProjectsContent.tsx\natomic_write = true\n").unwrap();

        let config = ConfigLoader::load_from(&rc_path);

        assert_eq!(config.target_file, PathBuf::from("site/ProjectsContent.tsx"));
        assert!(config.atomic_write);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_find_rc_prefers_current_dir() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        fs::write(home.path().join(RC_FILE_NAME), "").unwrap();

        assert_eq!(
            ConfigLoader::find_rc_path(cwd.path(), Some(home.path())),
            Some(home.path().join(RC_FILE_NAME))
        );

        fs::write(cwd.path().join(RC_FILE_NAME), "").unwrap();
        assert_eq!(
            ConfigLoader::find_rc_path(cwd.path(), Some(home.path())),
            Some(cwd.path().join(RC_FILE_NAME))
        );
    }

    #[test]
    fn test_find_rc_none() {
        let cwd = tempfile::tempdir().unwrap();
        assert_eq!(ConfigLoader::find_rc_path(cwd.path(), None), None);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let config = ConfigLoader::load_from(Path::new("/nonexistent/.sitemigraterc"));
        assert_eq!(config, MigrateConfig::default());
    }
}
