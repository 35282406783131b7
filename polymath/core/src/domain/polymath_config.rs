// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Polymath Configuration Types
//
// Defines the YAML configuration for the reading engine:
// - Reader identity and declared expert domains
// - Traversal knobs (hub target, repeat window, bisociation distance, interleave day)
// - Discovery order and environment overrides

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::knowledge_domain::{Domain, DomainId};
use super::recommendation::TraversalPhase;

/// Top-level configuration document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolymathConfig {
    /// Reader identity and declared strengths
    #[serde(default)]
    pub user: UserConfig,

    /// Traversal strategy settings
    #[serde(default)]
    pub traversal: TraversalConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    /// Display name of the reader
    #[serde(default = "default_user_name")]
    pub name: String,

    /// Domains the reader already knows well; seeded as `is_expert`
    #[serde(default)]
    pub expert_domains: Vec<DomainId>,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            name: default_user_name(),
            expert_domains: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Phase the traversal engine starts in
    #[serde(default)]
    pub current_phase: TraversalPhase,

    /// Books needed before a hub domain counts as complete
    #[serde(default = "default_hub_target_books")]
    pub hub_target_books: u32,

    /// Days a domain stays on cooldown after being read
    #[serde(default = "default_max_domain_repeat_window")]
    pub max_domain_repeat_window: u32,

    /// Minimum branch distance for distant picks and bisociation pairs (0-4)
    #[serde(default = "default_bisociation_min_distance")]
    pub bisociation_min_distance: u8,

    /// Weekday (0 = Monday .. 6 = Sunday) reserved for a distant interleave
    #[serde(default = "default_distant_interleave_day")]
    pub distant_interleave_day: u8,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            current_phase: TraversalPhase::default(),
            hub_target_books: default_hub_target_books(),
            max_domain_repeat_window: default_max_domain_repeat_window(),
            bisociation_min_distance: default_bisociation_min_distance(),
            distant_interleave_day: default_distant_interleave_day(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl PolymathConfig {
    /// Load configuration from YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to YAML file
    pub fn to_yaml_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Parse configuration from YAML string
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Discover configuration file using precedence order
    /// 1. POLYMATH_CONFIG_PATH environment variable
    /// 2. ./polymath-config.yaml (working directory)
    /// 3. ~/.polymath/config.yaml (user home)
    pub fn discover_config() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("POLYMATH_CONFIG_PATH") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        let cwd = PathBuf::from("./polymath-config.yaml");
        if cwd.exists() {
            return Some(cwd);
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".polymath").join("config.yaml");
            if user_config.exists() {
                return Some(user_config);
            }
        }

        None
    }

    /// Load from an explicit path, else a discovered one, else defaults.
    /// An explicit path that cannot be read is an error.
    pub fn load_or_default(explicit_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let mut config = if let Some(path) = explicit_path {
            tracing::info!("Loading configuration from explicit path: {:?}", path);
            Self::from_yaml_file(&path).map_err(|e| {
                anyhow::anyhow!("Failed to load config at {:?}: {}", path, e)
            })?
        } else if let Some(config_path) = Self::discover_config() {
            tracing::info!("Loading configuration from discovered path: {:?}", config_path);
            Self::from_yaml_file(config_path)?
        } else {
            tracing::warn!("No configuration file found in standard locations. Using defaults.");
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Override source is injectable so tests don't touch the process env.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("POLYMATH_HUB_TARGET_BOOKS") {
            match val.trim().parse::<u32>() {
                Ok(target) => {
                    tracing::info!("Environment override: POLYMATH_HUB_TARGET_BOOKS={}", target);
                    self.traversal.hub_target_books = target;
                }
                Err(_) => tracing::warn!(
                    "Invalid value for POLYMATH_HUB_TARGET_BOOKS: '{}'. Expected an integer. Ignoring.",
                    val
                ),
            }
        }

        if let Some(val) = lookup("POLYMATH_INTERLEAVE_DAY") {
            match val.trim().parse::<u8>() {
                Ok(day) => {
                    tracing::info!("Environment override: POLYMATH_INTERLEAVE_DAY={}", day);
                    self.traversal.distant_interleave_day = day;
                }
                Err(_) => tracing::warn!(
                    "Invalid value for POLYMATH_INTERLEAVE_DAY: '{}'. Expected 0-6. Ignoring.",
                    val
                ),
            }
        }

        if let Some(val) = lookup("POLYMATH_PHASE") {
            match val.parse::<TraversalPhase>() {
                Ok(phase) => {
                    tracing::info!("Environment override: POLYMATH_PHASE={}", phase);
                    self.traversal.current_phase = phase;
                }
                Err(e) => tracing::warn!("Invalid value for POLYMATH_PHASE: {}. Ignoring.", e),
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.traversal;

        if t.hub_target_books == 0 {
            return Err(ConfigError::InvalidValue {
                field: "traversal.hub_target_books",
                reason: "must be at least 1".to_string(),
            });
        }

        if t.max_domain_repeat_window == 0 {
            return Err(ConfigError::InvalidValue {
                field: "traversal.max_domain_repeat_window",
                reason: "must be at least 1 day".to_string(),
            });
        }

        if t.bisociation_min_distance > crate::domain::distance::MAX_BRANCH_DISTANCE {
            return Err(ConfigError::InvalidValue {
                field: "traversal.bisociation_min_distance",
                reason: format!("{} exceeds the maximum branch distance of 4", t.bisociation_min_distance),
            });
        }

        if t.distant_interleave_day > 6 {
            return Err(ConfigError::InvalidValue {
                field: "traversal.distant_interleave_day",
                reason: format!("{} is not a weekday index (0-6)", t.distant_interleave_day),
            });
        }

        Ok(())
    }

    /// Sets `is_expert` on every domain listed in `user.expert_domains`.
    /// Returns how many domains were flagged.
    pub fn mark_expert_domains(&self, domains: &mut [Domain]) -> usize {
        let mut flagged = 0;
        for domain in domains.iter_mut() {
            if self.user.expert_domains.contains(&domain.id) && !domain.is_expert {
                domain.is_expert = true;
                flagged += 1;
            }
        }
        flagged
    }
}

fn default_user_name() -> String {
    "Reader".to_string()
}

fn default_hub_target_books() -> u32 {
    4
}

fn default_max_domain_repeat_window() -> u32 {
    14
}

fn default_bisociation_min_distance() -> u8 {
    3
}

fn default_distant_interleave_day() -> u8 {
    6
}
