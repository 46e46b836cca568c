use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::io::OutputFormat;
use crate::route::SolveOptions;

/// Settings read from `iceberg.toml`
///
/// Every field is optional in the file; missing fields take the defaults.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub parallel: bool,
    pub strict: bool,
    pub verbose: bool,
    pub format: OutputFormat,
}

impl FileConfig {
    /// Load the first parseable config file from the search paths
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly requested config file
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context("Failed to parse config file")
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("iceberg.toml"), PathBuf::from(".iceberg.toml")];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("iceberg").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".iceberg.toml"));
    }

    paths
}

/// Options given on the command line; `None`/`false` defers to the file
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub parallel: bool,
    pub strict: bool,
    pub verbose: bool,
    pub format: Option<OutputFormat>,
}

/// Fully resolved run settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub parallel: bool,
    pub strict: bool,
    pub verbose: bool,
    pub format: OutputFormat,
}

impl Settings {
    /// Merge command line flags over file values
    pub fn resolve(cli: CliOverrides, file: Option<&FileConfig>) -> Self {
        Self {
            parallel: cli.parallel || file.is_some_and(|c| c.parallel),
            strict: cli.strict || file.is_some_and(|c| c.strict),
            verbose: cli.verbose || file.is_some_and(|c| c.verbose),
            format: cli
                .format
                .or_else(|| file.map(|c| c.format))
                .unwrap_or_default(),
        }
    }

    pub fn solve_options(&self) -> SolveOptions {
        SolveOptions {
            parallel: self.parallel,
            strict: self.strict,
        }
    }
}
