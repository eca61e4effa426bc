mod loader;
pub mod typed;
pub mod value;

use std::collections::HashMap;
use std::path::Path;

pub use typed::{ConfigProperties, PropertyMeta};
pub use value::{ConfigValue, FromConfigValue};

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// The requested key was not found in the configuration.
    NotFound(String),
    /// The value could not be converted to the requested type.
    TypeMismatch { key: String, expected: &'static str },
    /// An I/O or YAML parsing error occurred while loading config files.
    Load(String),
    /// The value has the right type but is not acceptable.
    Invalid { key: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(key) => write!(f, "Config key not found: {key}"),
            ConfigError::TypeMismatch { key, expected } => {
                write!(f, "Config type mismatch for '{key}': expected {expected}")
            }
            ConfigError::Load(msg) => write!(f, "Config load error: {msg}"),
            ConfigError::Invalid { key, message } => {
                write!(f, "Invalid config value for '{key}': {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Generator configuration loaded from YAML files, `.env` files, and
/// environment variables.
///
/// Resolution order (lowest to highest priority):
/// 1. `svcgen.yaml` (base)
/// 2. `svcgen-{profile}.yaml` (profile override)
/// 3. `.env` then `.env.{profile}` (loaded into the process environment,
///    never overwriting variables that are already set)
/// 4. Environment variables prefixed `SVCGEN__`, with `__` between key
///    segments (`SVCGEN__NAMING__SERVICE_SUFFIX` overrides
///    `svcgen.naming.service_suffix`)
///
/// Profile is determined by: `SVCGEN_PROFILE` env var > argument > `"dev"`.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    values: HashMap<String, ConfigValue>,
    profile: String,
}

impl GeneratorConfig {
    pub const DEFAULT_PROFILE: &'static str = "dev";

    /// Load configuration from the current working directory.
    pub fn load(profile: Option<&str>) -> Result<Self, ConfigError> {
        Self::load_in(Path::new("."), profile)
    }

    /// Load configuration from the files found in `dir`.
    pub fn load_in(dir: &Path, profile: Option<&str>) -> Result<Self, ConfigError> {
        let profile = std::env::var("SVCGEN_PROFILE")
            .ok()
            .or_else(|| profile.map(str::to_string))
            .unwrap_or_else(|| Self::DEFAULT_PROFILE.to_string());

        let mut values = HashMap::new();
        loader::load_yaml_file(&dir.join("svcgen.yaml"), &mut values)?;
        loader::load_yaml_file(&dir.join(format!("svcgen-{profile}.yaml")), &mut values)?;

        let _ = dotenvy::from_path(dir.join(".env"));
        let _ = dotenvy::from_path(dir.join(format!(".env.{profile}")));

        loader::overlay_env(std::env::vars(), &mut values);

        tracing::debug!(profile = %profile, keys = values.len(), "Loaded generator configuration");
        Ok(Self { values, profile })
    }

    /// Create a config from a YAML string, without environment overlay.
    pub fn from_yaml_str(yaml: &str, profile: &str) -> Result<Self, ConfigError> {
        let mut values = HashMap::new();
        loader::load_yaml_str(yaml, &mut values)?;
        Ok(Self {
            values,
            profile: profile.to_string(),
        })
    }

    /// An empty config; every section falls back to its defaults.
    pub fn empty() -> Self {
        Self {
            values: HashMap::new(),
            profile: "test".to_string(),
        }
    }

    pub fn set(&mut self, key: &str, value: ConfigValue) {
        self.values.insert(key.to_string(), value);
    }

    /// Get a typed value for the given dot-separated key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the key does not exist, or
    /// `ConfigError::TypeMismatch` if the value cannot be converted.
    pub fn get<V: FromConfigValue>(&self, key: &str) -> Result<V, ConfigError> {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| ConfigError::NotFound(key.to_string()))?;
        V::from_config_value(value, key)
    }

    /// Get a typed value, or `default` when the key is missing.
    ///
    /// Unlike a missing key, a present value of the wrong type is an error.
    pub fn get_or<V: FromConfigValue>(&self, key: &str, default: V) -> Result<V, ConfigError> {
        match self.get(key) {
            Err(ConfigError::NotFound(_)) => Ok(default),
            other => other,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Build a typed section.
    pub fn section<C: ConfigProperties>(&self) -> Result<C, ConfigError> {
        C::from_config(self)
    }
}
