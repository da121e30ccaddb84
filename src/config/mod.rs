//! Migration configuration.
//!
//! Built once at startup from the command line and an optional TOML file,
//! then passed by reference to the batch driver. CLI values win over file
//! values.
//!
//! ```toml
//! # aui-upgrade.toml
//! files = ["docroot/html", "docroot/js/main.js"]
//! ext = ["jsp", "jspf"]
//! jobs = 4
//! dry_run = false
//! ```
//!
//! Relative `files` entries resolve against the config file's directory.

mod error;

pub use error::ConfigError;

use crate::cli::Cli;
use crate::core::normalize_extension;
use crate::log;
use crate::pipeline::ProcessOptions;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Extensions processed when none are given.
pub const DEFAULT_EXTENSIONS: &[&str] = &["js", "jsp", "jspf", "css"];

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct MigrateConfig {
    /// Files or directories, in the order given.
    pub inputs: Vec<PathBuf>,
    /// Normalized extensions (lower-case, no leading dot).
    pub extensions: FxHashSet<String>,
    /// Worker threads; `None` uses the rayon default.
    pub jobs: Option<usize>,
    pub options: ProcessOptions,
}

/// Optional TOML file, every key optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    files: Vec<PathBuf>,
    ext: Option<Vec<String>>,
    jobs: Option<usize>,
    dry_run: bool,
}

impl MigrateConfig {
    /// Build the configuration for this run.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let (file, base) = match &cli.config {
            Some(path) => {
                let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
                (FileConfig::from_path(path)?, base)
            }
            None => (FileConfig::default(), PathBuf::new()),
        };
        Self::from_parts(cli, file, &base)
    }

    fn from_parts(cli: &Cli, file: FileConfig, base: &Path) -> Result<Self, ConfigError> {
        let inputs = if cli.files.is_empty() {
            file.files.into_iter().map(|path| base.join(path)).collect()
        } else {
            cli.files.clone()
        };
        if inputs.is_empty() {
            return Err(ConfigError::NoInputs);
        }

        let extensions = match cli.ext.as_ref().or(file.ext.as_ref()) {
            Some(list) => normalize_extensions(list.iter().map(String::as_str)),
            None => normalize_extensions(DEFAULT_EXTENSIONS.iter().copied()),
        };
        if extensions.is_empty() {
            return Err(ConfigError::Validation(
                "no usable file extension given".to_string(),
            ));
        }

        let jobs = cli.jobs.or(file.jobs);
        if jobs == Some(0) {
            return Err(ConfigError::Validation("`jobs` must be at least 1".to_string()));
        }

        Ok(Self {
            inputs,
            extensions,
            jobs,
            options: ProcessOptions {
                dry_run: cli.dry_run || file.dry_run,
            },
        })
    }
}

impl FileConfig {
    /// Load from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        for field in &ignored {
            log!("warning"; "unknown field `{}` in {}, ignoring", field, path.display());
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }
}

fn normalize_extensions<'a>(raw: impl Iterator<Item = &'a str>) -> FxHashSet<String> {
    raw.filter_map(normalize_extension).collect()
}
