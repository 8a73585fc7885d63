use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::license::precedence::{Precedence, Rule};

/// Root configuration structure, deserialized from `.license-files/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Adjustments to the built-in precedence table.
    #[serde(default)]
    pub rules: RulesConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct RulesConfig {
    /// Labels of built-in rules to drop, e.g. `["README"]`.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Extra rules appended after the built-ins, in file order.
    #[serde(default)]
    pub extra: Vec<CustomRule>,
}

/// A user-defined naming convention.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomRule {
    pub label: String,
    /// Regular expression over the upper-cased base name. Anchored on both ends.
    pub pattern: String,
}

impl Config {
    /// Build the precedence table this configuration describes.
    pub fn precedence(&self) -> Result<Precedence> {
        let extra = self
            .rules
            .extra
            .iter()
            .map(|rule| Rule::new(rule.label.as_str(), &rule.pattern))
            .collect::<Result<Vec<_>>>()?;

        Ok(Precedence::builtin()
            .without(&self.rules.exclude)
            .extended(extra))
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<dir>/.license-files/config.toml`
/// 3. `~/.config/license-files/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    let home_config = dirs::home_dir().map(|home| {
        home.join(".config")
            .join("license-files")
            .join("config.toml")
    });
    search(dir, config_override, home_config)
}

fn search(
    dir: &Path,
    config_override: Option<&Path>,
    home_config: Option<PathBuf>,
) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = dir.join(".license-files").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(path) = home_config.filter(|p| p.exists()) {
        return read_config(&path);
    }

    debug!("no config file found, using built-in rules");
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    debug!("loading config from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })
}
