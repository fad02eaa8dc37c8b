//! Display configuration.
//!
//! Read from `config.json` in the platform config directory
//! (e.g. `~/.config/visitnote/config.json` on Linux). Every field is optional;
//! a missing file means defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sections: SectionLimits,
}

/// How many items each summary section shows before "Read More".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionLimits {
    pub diagnosis: usize,
    pub action_items: usize,
    pub action_todos: usize,
    pub follow_up: usize,
    pub learnings: usize,
    /// Low-importance plan items shown when a plan card has no high ones.
    pub plan: usize,
}

impl Default for SectionLimits {
    fn default() -> Self {
        Self {
            diagnosis: 3,
            action_items: 5,
            action_todos: 5,
            follow_up: 3,
            learnings: 3,
            plan: 2,
        }
    }
}

impl SectionLimits {
    pub fn validate(&self) -> Result<()> {
        for (what, value) in [
            ("sections.diagnosis", self.diagnosis),
            ("sections.action_items", self.action_items),
            ("sections.action_todos", self.action_todos),
            ("sections.follow_up", self.follow_up),
            ("sections.learnings", self.learnings),
            ("sections.plan", self.plan),
        ] {
            if value < 1 {
                return Err(Error::InvalidConfiguration {
                    what: what.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

impl Config {
    /// Get the path to the default config file.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "visitnote")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from_path(&path),
            None => {
                tracing::debug!("no config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a config file. A missing file yields defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&json)?;
        config.sections.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
