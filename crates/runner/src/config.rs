//! Scenario configuration, read from the environment with built-in defaults.

use thiserror::Error;

const DEFAULT_NAME: &str = "Ahmed";
const DEFAULT_AGE: i64 = 25;
const DEFAULT_SECRET: &str = "1234";
const DEFAULT_NEW_SECRET: &str = "5678";

/// Errors raised while reading scenario configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `PERSONA_AGE` is set but is not an integer.
    #[error("Invalid PERSONA_AGE value: {value:?}")]
    InvalidAge { value: String },
}

/// Inputs for the example run: who is built and what the secret becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioConfig {
    pub name: String,
    pub age: i64,
    pub secret: String,
    pub new_secret: String,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.into(),
            age: DEFAULT_AGE,
            secret: DEFAULT_SECRET.into(),
            new_secret: DEFAULT_NEW_SECRET.into(),
        }
    }
}

impl ScenarioConfig {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let age = match lookup("PERSONA_AGE") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidAge { value: raw.clone() })?,
            None => defaults.age,
        };

        Ok(Self {
            name: lookup("PERSONA_NAME").unwrap_or(defaults.name),
            age,
            secret: lookup("PERSONA_SECRET").unwrap_or(defaults.secret),
            new_secret: lookup("PERSONA_NEW_SECRET").unwrap_or(defaults.new_secret),
        })
    }
}
