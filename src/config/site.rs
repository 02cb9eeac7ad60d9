//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the optional configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

const DEFAULT_MATH_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Input directory does not exist: {0:?}")]
    MissingContentDir(PathBuf),

    #[error("Failed to create output directory {path:?}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Site configuration as written in `_config.yml`.
///
/// Directory paths may be relative; they are resolved against the base
/// directory by [`SiteConfig::resolve`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Directory
    pub content_dir: PathBuf,
    pub output_dir: PathBuf,
    pub root_dir: PathBuf,

    // Index page
    pub index_name: String,
    pub index_title: String,

    // Pages
    pub math_script: String,
    /// chrono format for dates in the index; empty keeps them verbatim
    pub date_format: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            output_dir: PathBuf::from("writing"),
            root_dir: PathBuf::from("."),

            index_name: "writing.html".to_string(),
            index_title: "Writing".to_string(),

            math_script: DEFAULT_MATH_SCRIPT.to_string(),
            date_format: String::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `_config.yml` from a base directory, or the defaults if it is absent
    pub fn load_from_dir<P: AsRef<Path>>(base_dir: P) -> Result<Self, ConfigError> {
        let config_path = base_dir.as_ref().join(CONFIG_FILE);
        if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve directories against `base_dir` and validate them.
    ///
    /// The content directory must exist. The output directory is created if
    /// it is missing.
    pub fn resolve<P: AsRef<Path>>(&self, base_dir: P) -> Result<Config, ConfigError> {
        let base_dir = base_dir.as_ref();
        let content_dir = absolute(base_dir, &self.content_dir);
        let output_dir = absolute(base_dir, &self.output_dir);
        let root_dir = absolute(base_dir, &self.root_dir);

        if !content_dir.is_dir() {
            return Err(ConfigError::MissingContentDir(content_dir));
        }

        fs::create_dir_all(&output_dir).map_err(|source| ConfigError::CreateOutputDir {
            path: output_dir.clone(),
            source,
        })?;

        Ok(Config {
            content_dir,
            output_dir,
            root_dir,
            index_name: self.index_name.clone(),
            index_title: self.index_title.clone(),
            math_script: self.math_script.clone(),
            date_format: self.date_format.clone(),
        })
    }
}

/// Resolved configuration with absolute directories
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the markdown sources
    pub content_dir: PathBuf,
    /// Directory receiving one HTML page per post
    pub output_dir: PathBuf,
    /// Directory receiving the index page
    pub root_dir: PathBuf,
    pub index_name: String,
    pub index_title: String,
    pub math_script: String,
    pub date_format: String,
}

impl Config {
    /// Full path of the index page
    pub fn index_path(&self) -> PathBuf {
        self.root_dir.join(&self.index_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        let site = SiteConfig::default();
        Self {
            content_dir: site.content_dir,
            output_dir: site.output_dir,
            root_dir: site.root_dir,
            index_name: site.index_name,
            index_title: site.index_title,
            math_script: site.math_script,
            date_format: site.date_format,
        }
    }
}

/// Join a possibly relative path onto `base`, dropping `.` components
fn absolute(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };
    joined
        .components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert_eq!(config.output_dir, PathBuf::from("writing"));
        assert_eq!(config.index_name, "writing.html");
        assert!(config.date_format.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
content_dir: posts
index_title: Notes
date_format: "%B %d, %Y"
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.content_dir, PathBuf::from("posts"));
        assert_eq!(config.index_title, "Notes");
        assert_eq!(config.date_format, "%B %d, %Y");
        // untouched fields keep defaults
        assert_eq!(config.output_dir, PathBuf::from("writing"));
    }

    #[test]
    fn test_load_from_dir_without_file() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.index_title, "Writing");
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "content_dir: [unclosed").unwrap();
        let err = SiteConfig::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_resolve() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("content")).unwrap();

        let config = SiteConfig::default().resolve(dir.path()).unwrap();
        assert_eq!(config.content_dir, dir.path().join("content"));
        assert_eq!(config.output_dir, dir.path().join("writing"));
        assert_eq!(config.root_dir, dir.path().to_path_buf());
        assert!(config.output_dir.is_dir());
        assert_eq!(config.index_path(), dir.path().join("writing.html"));
    }

    #[test]
    fn test_resolve_missing_content_dir() {
        let dir = TempDir::new().unwrap();
        let err = SiteConfig::default().resolve(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingContentDir(_)));
        assert!(!dir.path().join("writing").exists());
    }
}
