// ⚙️ Configuration
//
// Resolution order: defaults → JSON file → environment → command-line flags.
// Flags are applied by the binaries after `AppConfig::load`.

use crate::card::{load_cards, Card};
use crate::catalog::seed_cards;
use crate::selection::SelectionPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG: &str = "CREDITWISE_CONFIG";
pub const ENV_CATALOG: &str = "CREDITWISE_CATALOG";
pub const ENV_BIND: &str = "CREDITWISE_BIND";
pub const ENV_SELECTION_POLICY: &str = "CREDITWISE_SELECTION_POLICY";
pub const ENV_SESSION_TTL: &str = "CREDITWISE_SESSION_TTL_MINUTES";

/// Longest accepted session idle time (one week)
pub const MAX_SESSION_TTL_MINUTES: i64 = 7 * 24 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Alternate record source (CSV or JSON); the seed catalog when unset
    pub catalog_path: Option<PathBuf>,

    /// Server listen address
    pub bind: String,

    pub selection_policy: SelectionPolicy,

    /// Idle minutes before a server session is dropped
    pub session_ttl_minutes: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            catalog_path: None,
            bind: "127.0.0.1:3000".to_string(),
            selection_policy: SelectionPolicy::EvictOldest,
            session_ttl_minutes: 30,
        }
    }
}

impl AppConfig {
    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config JSON: {:?}", path.as_ref()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Range checks that serde alone cannot express
    pub fn validate(&self) -> Result<()> {
        check_session_ttl(self.session_ttl_minutes)
    }

    /// Defaults, then `config_file` (or `$CREDITWISE_CONFIG`), then the environment
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let vars: HashMap<String, String> = std::env::vars().collect();

        let file = config_file
            .map(Path::to_path_buf)
            .or_else(|| vars.get(ENV_CONFIG).map(PathBuf::from));

        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env(&vars)?;
        Ok(config)
    }

    /// Overlay environment values; an unparsable value names its variable
    pub fn apply_env(&mut self, vars: &HashMap<String, String>) -> Result<()> {
        if let Some(path) = vars.get(ENV_CATALOG) {
            self.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(bind) = vars.get(ENV_BIND) {
            self.bind = bind.clone();
        }

        if let Some(policy) = vars.get(ENV_SELECTION_POLICY) {
            self.selection_policy = policy
                .parse::<SelectionPolicy>()
                .with_context(|| format!("Invalid {}", ENV_SELECTION_POLICY))?;
        }

        if let Some(ttl) = vars.get(ENV_SESSION_TTL) {
            let minutes = ttl
                .trim()
                .parse::<i64>()
                .with_context(|| format!("Invalid {}: '{}'", ENV_SESSION_TTL, ttl))?;
            check_session_ttl(minutes).with_context(|| format!("Invalid {}", ENV_SESSION_TTL))?;
            self.session_ttl_minutes = minutes;
        }

        Ok(())
    }

    /// The configured record source, or the seed catalog
    pub fn load_cards(&self) -> Result<Vec<Card>> {
        match &self.catalog_path {
            Some(path) => load_cards(path),
            None => Ok(seed_cards()),
        }
    }
}

fn check_session_ttl(minutes: i64) -> Result<()> {
    if !(1..=MAX_SESSION_TTL_MINUTES).contains(&minutes) {
        anyhow::bail!(
            "session_ttl_minutes must be between 1 and {}, got {}",
            MAX_SESSION_TTL_MINUTES,
            minutes
        );
    }
    Ok(())
}
