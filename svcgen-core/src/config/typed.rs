use super::{ConfigError, GeneratorConfig};

/// Metadata about a single configuration property.
#[derive(Debug, Clone)]
pub struct PropertyMeta {
    /// Relative key (e.g., `"service_suffix"`).
    pub key: &'static str,
    /// Rust type name (e.g., `"String"`).
    pub type_name: &'static str,
    /// Default value as a string, if any.
    pub default_value: Option<&'static str>,
    pub description: &'static str,
}

impl PropertyMeta {
    /// Absolute key under the given section prefix.
    pub fn full_key(&self, prefix: &str) -> String {
        format!("{prefix}.{}", self.key)
    }

    /// Environment variable overriding this property.
    pub fn env_var(&self, prefix: &str) -> String {
        self.full_key(prefix).replace('.', "__").to_uppercase()
    }
}

/// A strongly-typed configuration section.
pub trait ConfigProperties: Sized {
    /// The configuration key prefix (e.g., `"svcgen.naming"`).
    fn prefix() -> &'static str;

    /// Metadata about all known properties.
    fn properties_metadata() -> Vec<PropertyMeta>;

    /// Construct from raw configuration, falling back to defaults for
    /// missing keys.
    fn from_config(config: &GeneratorConfig) -> Result<Self, ConfigError>;
}
