use svcgen_core::config::{ConfigError, ConfigProperties, GeneratorConfig, PropertyMeta};

/// Output options, loaded from the `svcgen.render` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Extra `use` paths emitted after the runtime prelude, typically the
    /// entity and repository types.
    pub imports: Vec<String>,
    /// Mark the constructor `#[bean]` so a DI container can build the
    /// service. Needs the container's prelude in `imports`.
    pub bean_wiring: bool,
}

impl ConfigProperties for RenderOptions {
    fn prefix() -> &'static str {
        "svcgen.render"
    }

    fn properties_metadata() -> Vec<PropertyMeta> {
        vec![
            PropertyMeta {
                key: "imports",
                type_name: "Vec<String>",
                default_value: None,
                description: "Use paths added to every generated file",
            },
            PropertyMeta {
                key: "bean_wiring",
                type_name: "bool",
                default_value: Some("false"),
                description: "Annotate the generated constructor with #[bean]",
            },
        ]
    }

    fn from_config(config: &GeneratorConfig) -> Result<Self, ConfigError> {
        let key = |k: &str| format!("{}.{k}", Self::prefix());
        Ok(Self {
            imports: config.get_or(&key("imports"), Vec::new())?,
            bean_wiring: config.get_or(&key("bean_wiring"), false)?,
        })
    }
}
