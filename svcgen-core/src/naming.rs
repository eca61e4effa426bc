use serde::{Deserialize, Serialize};

use crate::code::{CodeArg, CodeBlock};
use crate::config::{ConfigError, ConfigProperties, GeneratorConfig, PropertyMeta};

/// How a field endpoint reads the field from the looked-up entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessorStyle {
    /// Direct field access: `.status`
    #[default]
    Field,
    /// Getter method: `.get_status()`
    Getter,
    /// Bean-style getter with the field capitalised: `.getStatus()`
    Bean,
}

impl AccessorStyle {
    /// The accessor suffix appended to the looked-up entity.
    ///
    /// `Field` and `Getter` name the member through `$N`, so it follows the
    /// target casing like every other identifier. `Bean` keeps the
    /// capitalised form verbatim.
    pub fn accessor(self, field: &str) -> CodeBlock {
        match self {
            AccessorStyle::Field => CodeBlock::new(".$N", [CodeArg::name(field)]),
            AccessorStyle::Getter => {
                CodeBlock::new(".$N()", [CodeArg::name(format!("get_{field}"))])
            }
            AccessorStyle::Bean => CodeBlock::new(
                "$L",
                [CodeArg::literal(format!(".get{}()", capitalize(field)))],
            ),
        }
    }
}

impl std::str::FromStr for AccessorStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "field" => Ok(AccessorStyle::Field),
            "getter" => Ok(AccessorStyle::Getter),
            "bean" => Ok(AccessorStyle::Bean),
            other => Err(format!("unknown accessor style '{other}' (expected field, getter or bean)")),
        }
    }
}

/// Naming conventions for generated classes.
///
/// Loaded from the `svcgen.naming` section:
///
/// ```yaml
/// svcgen:
///   naming:
///     class_prefix: ""
///     service_suffix: Service
///     repository_suffix: Repository
///     accessor_style: field
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub class_prefix: String,
    pub service_suffix: String,
    pub repository_suffix: String,
    pub accessor_style: AccessorStyle,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            class_prefix: String::new(),
            service_suffix: "Service".to_string(),
            repository_suffix: "Repository".to_string(),
            accessor_style: AccessorStyle::Field,
        }
    }
}

impl NamingConfig {
    pub fn service_name(&self, entity: &str) -> String {
        format!("{}{entity}{}", self.class_prefix, self.service_suffix)
    }

    pub fn repository_name(&self, entity: &str) -> String {
        format!("{}{entity}{}", self.class_prefix, self.repository_suffix)
    }
}

impl ConfigProperties for NamingConfig {
    fn prefix() -> &'static str {
        "svcgen.naming"
    }

    fn properties_metadata() -> Vec<PropertyMeta> {
        vec![
            PropertyMeta {
                key: "class_prefix",
                type_name: "String",
                default_value: Some(""),
                description: "Prepended to service and repository type names",
            },
            PropertyMeta {
                key: "service_suffix",
                type_name: "String",
                default_value: Some("Service"),
                description: "Appended to the entity name to form the service name",
            },
            PropertyMeta {
                key: "repository_suffix",
                type_name: "String",
                default_value: Some("Repository"),
                description: "Appended to the entity name to form the repository type",
            },
            PropertyMeta {
                key: "accessor_style",
                type_name: "String",
                default_value: Some("field"),
                description: "Field endpoint accessor: field, getter or bean",
            },
        ]
    }

    fn from_config(config: &GeneratorConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let key = |k: &str| format!("{}.{k}", Self::prefix());

        let style_key = key("accessor_style");
        let accessor_style = match config.get::<String>(&style_key) {
            Ok(raw) => raw
                .parse()
                .map_err(|message| ConfigError::Invalid { key: style_key, message })?,
            Err(ConfigError::NotFound(_)) => defaults.accessor_style,
            Err(e) => return Err(e),
        };

        Ok(Self {
            class_prefix: config.get_or(&key("class_prefix"), defaults.class_prefix)?,
            service_suffix: config.get_or(&key("service_suffix"), defaults.service_suffix)?,
            repository_suffix: config
                .get_or(&key("repository_suffix"), defaults.repository_suffix)?,
            accessor_style,
        })
    }
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert camelCase or PascalCase to snake_case.
///
/// Names that are already snake_case are returned unchanged; runs of
/// capitals are kept together (`HTTPCode` → `httpcode`).
pub fn to_snake_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut prev_upper = true;
    for c in name.chars() {
        if c.is_uppercase() {
            if !prev_upper && !result.ends_with('_') {
                result.push('_');
            }
            result.extend(c.to_lowercase());
            prev_upper = true;
        } else {
            result.push(c);
            prev_upper = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case() {
        assert_eq!(to_snake_case("pageSize"), "page_size");
        assert_eq!(to_snake_case("allByFilter"), "all_by_filter");
        assert_eq!(to_snake_case("UserService"), "user_service");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case("id"), "id");
        assert_eq!(to_snake_case("HTTPCode"), "httpcode");
    }

    #[test]
    fn capitalize_first_char_only() {
        assert_eq!(capitalize("status"), "Status");
        assert_eq!(capitalize("firstName"), "FirstName");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn accessor_styles() {
        let field = AccessorStyle::Field.accessor("minPrice");
        assert_eq!(field.format(), ".$N");
        assert_eq!(field.args(), [CodeArg::name("minPrice")]);

        let getter = AccessorStyle::Getter.accessor("status");
        assert_eq!(getter.format(), ".$N()");
        assert_eq!(getter.args(), [CodeArg::name("get_status")]);

        let bean = AccessorStyle::Bean.accessor("firstName");
        assert_eq!(bean.args(), [CodeArg::literal(".getFirstName()")]);
    }

    #[test]
    fn accessor_style_parse() {
        assert_eq!("Bean".parse::<AccessorStyle>().unwrap(), AccessorStyle::Bean);
        assert!("camel".parse::<AccessorStyle>().is_err());
    }

    #[test]
    fn class_names() {
        let naming = NamingConfig {
            class_prefix: "Api".into(),
            ..NamingConfig::default()
        };
        assert_eq!(naming.service_name("User"), "ApiUserService");
        assert_eq!(naming.repository_name("User"), "ApiUserRepository");
    }
}
