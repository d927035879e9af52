//! Configuration for pizza-split.
//!
//! Built-in defaults reproduce the classic behavior. A config file is only
//! read when one is named on the command line; it may be plain YAML or a
//! markdown file with a YAML frontmatter block.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::bill::Rounding;

pub mod defaults;
pub mod validation;

pub use defaults::*;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub limits: Limits,
    /// Word that ends the participant list
    #[serde(default = "defaults::default_sentinel")]
    pub sentinel: String,
    #[serde(default)]
    pub rounding: Rounding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            sentinel: defaults::default_sentinel(),
            rounding: Rounding::default(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let yaml = match split_frontmatter(content) {
            (Some(frontmatter), _body) => frontmatter,
            (None, body) => body.to_string(),
        };

        // An empty document means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&yaml).context("Failed to parse config")?;
        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, rounding: Option<Rounding>, sentinel: Option<String>) -> Result<Self> {
        if let Some(rounding) = rounding {
            self.rounding = rounding;
        }
        if let Some(sentinel) = sentinel {
            self.sentinel = sentinel;
        }
        self.validate()?;
        Ok(self)
    }
}

/// Split a `---` delimited YAML frontmatter block from the rest of `content`.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    let rest = &content[3..];
    if let Some(end) = rest.find("---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 3..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}
