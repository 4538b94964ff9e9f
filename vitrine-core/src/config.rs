//! Engine configuration.
//!
//! Evaluation order:
//! 1) built-in defaults,
//! 2) a TOML or JSON file (explicit path, else `$VITRINE_CONFIG`),
//! 3) `$VITRINE_SORT_POLICY` and `$VITRINE_DEFAULT_SORT` overrides.
//!
//! A `.env` file in the working directory is loaded first when present.

use crate::error::{CatalogError, Result};
use crate::query::{SortKey, SortKeyPolicy, resolve_sort_key};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_PATH_ENV: &str = "VITRINE_CONFIG";
pub const DEFAULT_SORT_ENV: &str = "VITRINE_DEFAULT_SORT";
pub const SORT_POLICY_ENV: &str = "VITRINE_SORT_POLICY";

/// Source that produced the engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    /// Path named by `$VITRINE_CONFIG`
    EnvPath(PathBuf),
    /// Path passed by the caller
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EngineConfig {
    /// Ordering applied when the caller names none
    pub default_sort: SortKey,
    /// Handling of sort key strings outside the known set
    pub sort_key_policy: SortKeyPolicy,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// On-disk layout. `default_sort` stays raw until the file's policy is known.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EngineConfigFile {
    default_sort: Option<String>,
    sort_key_policy: SortKeyPolicy,
    log_level: Option<String>,
}

impl EngineConfigFile {
    fn resolve(self) -> Result<EngineConfig> {
        let default_sort = match self.default_sort.as_deref() {
            Some(raw) => resolve_sort_key(raw, self.sort_key_policy)?,
            None => SortKey::default(),
        };
        Ok(EngineConfig {
            default_sort,
            sort_key_policy: self.sort_key_policy,
            log_level: self.log_level,
        })
    }
}

impl EngineConfig {
    /// Load from the process environment.
    pub fn load(path: Option<&Path>) -> Result<(Self, ConfigSource)> {
        if let Ok(dotenv) = dotenvy::dotenv() {
            debug!(path = %dotenv.display(), "loaded .env");
        }
        Self::load_with(path, |key| env::var(key).ok())
    }

    /// Load with an explicit variable lookup
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<(Self, ConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (mut config, source) = match path {
            Some(path) => (Self::from_file(path)?, ConfigSource::File(path.to_path_buf())),
            None => match lookup(CONFIG_PATH_ENV).filter(|p| !p.trim().is_empty()) {
                Some(raw) => {
                    let path = PathBuf::from(raw);
                    (Self::from_file(&path)?, ConfigSource::EnvPath(path))
                }
                None => (Self::default(), ConfigSource::Default),
            },
        };

        config.apply_overrides(lookup)?;
        debug!(?source, ?config, "engine configuration resolved");
        Ok((config, source))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).map_err(|source| CatalogError::ConfigIo {
                path: path.to_path_buf(),
                source,
            })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                serde_json::from_str::<EngineConfigFile>(&contents)?.resolve()
            }
            _ => Self::from_toml_str(&contents),
        }
    }

    /// Parse TOML. An unknown `default_sort` is handled under the file's
    /// `sort_key_policy`.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str::<EngineConfigFile>(contents)?.resolve()
    }

    /// Apply environment overrides, returning the variables that took effect.
    ///
    /// The policy override is applied first so it governs how an unknown
    /// `$VITRINE_DEFAULT_SORT` is handled.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<Vec<&'static str>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut applied = Vec::new();

        if let Some(raw) = lookup(SORT_POLICY_ENV).filter(|v| !v.trim().is_empty()) {
            self.sort_key_policy = raw.parse()?;
            applied.push(SORT_POLICY_ENV);
        }

        if let Some(raw) = lookup(DEFAULT_SORT_ENV).filter(|v| !v.trim().is_empty()) {
            match (raw.parse::<SortKey>(), self.sort_key_policy) {
                (Ok(key), _) => {
                    self.default_sort = key;
                    applied.push(DEFAULT_SORT_ENV);
                }
                (Err(err), SortKeyPolicy::Strict) => return Err(err),
                // Fallback keeps the value from the file or the default
                (Err(_), SortKeyPolicy::Fallback) => {
                    warn!(
                        value = %raw,
                        kept = %self.default_sort,
                        "unrecognized {DEFAULT_SORT_ENV}, keeping configured sort"
                    );
                }
            }
        }

        Ok(applied)
    }

    /// Resolve a caller-supplied sort key, using the configured default when
    /// none is given.
    pub fn sort_key(&self, raw: Option<&str>) -> Result<SortKey> {
        match raw {
            Some(raw) => resolve_sort_key(raw, self.sort_key_policy),
            None => Ok(self.default_sort),
        }
    }
}
