use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What to do when cards compared hole-by-hole have different lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleCountPolicy {
    /// Fail with `ScoringError::HoleCountMismatch`.
    #[default]
    Reject,
    /// Score only the holes every card has.
    Truncate,
}

impl FromStr for HoleCountPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "truncate" => Ok(Self::Truncate),
            other => Err(ConfigError::Invalid(format!(
                "hole_count_policy must be \"reject\" or \"truncate\", got \"{other}\""
            ))),
        }
    }
}

/// Rules applied when scoring rounds, loaded from `fairway.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub hole_count_policy: HoleCountPolicy,
    /// Share of the course handicap a player receives (1-100).
    pub handicap_allowance_percent: u8,
    /// Whether Stableford points are taken from net hole scores.
    pub stableford_use_net: bool,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            hole_count_policy: HoleCountPolicy::Reject,
            handicap_allowance_percent: 100,
            stableford_use_net: true,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config read error: {e}"),
            Self::Parse(e) => write!(f, "config parse error: {e}"),
            Self::Invalid(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ScoringRules {
    pub const DEFAULT_PATH: &'static str = "fairway.toml";

    /// Load rules from `$FAIRWAY_CONFIG`, then `fairway.toml`, falling back
    /// to defaults. Environment overrides are applied last.
    pub fn load() -> Self {
        let mut rules = match std::env::var("FAIRWAY_CONFIG") {
            Ok(path) if !path.is_empty() => Self::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path,
                    error = %e,
                    "Failed to load scoring rules, using defaults"
                );
                Self::default()
            }),
            _ => match std::fs::read_to_string(Self::DEFAULT_PATH) {
                Ok(content) => match toml::from_str::<Self>(&content) {
                    Ok(rules) => {
                        tracing::info!("Loaded scoring rules from {}", Self::DEFAULT_PATH);
                        rules
                    },
                    Err(e) => {
                        tracing::warn!(
                            "Failed to parse {}: {e}, using defaults",
                            Self::DEFAULT_PATH
                        );
                        Self::default()
                    },
                },
                Err(_) => {
                    tracing::info!("No {} found, using default scoring rules", Self::DEFAULT_PATH);
                    Self::default()
                },
            },
        };
        rules.apply_overrides(|key| std::env::var(key).ok());
        rules
    }

    /// Read rules from an explicit TOML file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let rules = Self::from_toml(&content)?;
        tracing::info!(path, "Loaded scoring rules");
        Ok(rules)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply `FAIRWAY_*` overrides. Unparseable values are logged and ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("FAIRWAY_HOLE_COUNT_POLICY")
            && !val.is_empty()
        {
            match val.parse::<HoleCountPolicy>() {
                Ok(policy) => self.hole_count_policy = policy,
                Err(e) => tracing::warn!("Ignoring FAIRWAY_HOLE_COUNT_POLICY: {e}"),
            }
        }
        if let Some(val) = lookup("FAIRWAY_HANDICAP_ALLOWANCE") {
            match val.parse::<u8>() {
                Ok(n) => self.handicap_allowance_percent = n,
                Err(e) => tracing::warn!(value = %val, "Ignoring FAIRWAY_HANDICAP_ALLOWANCE: {e}"),
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.handicap_allowance_percent) {
            return Err(ConfigError::Invalid(format!(
                "handicap_allowance_percent must be within 1..=100, got {}",
                self.handicap_allowance_percent
            )));
        }
        if self.hole_count_policy == HoleCountPolicy::Truncate {
            tracing::warn!(
                "hole_count_policy = truncate: mismatched cards will be scored silently short"
            );
        }
        Ok(())
    }
}
