use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::generators::Strategy;
use crate::namespace::{NameSpace, DEFAULT_SEPARATOR};
use crate::words;

pub const DEFAULT_CONFIG_FILE: &str = "wordrank.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_members")]
    pub members: usize,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walk_limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjectives_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names_file: Option<PathBuf>,
}

fn default_members() -> usize {
    2
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_count() -> usize {
    8
}

impl Default for Config {
    fn default() -> Self {
        Config {
            members: default_members(),
            separator: default_separator(),
            strategy: Strategy::default(),
            count: default_count(),
            seed: None,
            walk_limit: None,
            adjectives_file: None,
            names_file: None,
        }
    }
}

impl Config {
    /// Build the name space this configuration describes, reading any
    /// word list files it names.
    pub fn name_space(&self) -> Result<NameSpace> {
        let names = self.names_file.as_deref().map(words::load_words).transpose()?;
        let adjectives = if self.members > 1 {
            self.adjectives_file
                .as_deref()
                .map(words::load_words)
                .transpose()?
        } else {
            None
        };
        NameSpace::new(self.members, self.separator.as_str(), names, adjectives)
    }
}

pub fn write_default_config(path: &Path) -> Result<()> {
    let config = Config::default();
    let content = toml::to_string_pretty(&config)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn read_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
