use colored::Colorize;

use svcgen_core::config::{ConfigProperties, PropertyMeta};
use svcgen_core::{GeneratorConfig, NamingConfig};
use svcgen_render::RenderOptions;

use super::Settings;

pub fn run(profile: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load(profile)?;

    println!(
        "{} {}",
        "Configuration".bold(),
        format!("(profile: {})", settings.config.profile()).dimmed()
    );
    println!();
    print_section::<NamingConfig>(&settings.config);
    print_section::<RenderOptions>(&settings.config);
    Ok(())
}

fn print_section<C: ConfigProperties>(config: &GeneratorConfig) {
    let prefix = C::prefix();
    println!("  {}", prefix.cyan());
    for meta in C::properties_metadata() {
        println!(
            "    {:<22} {:<12} {:<20} {}",
            meta.key,
            meta.type_name.dimmed(),
            describe_value(config, prefix, &meta),
            meta.env_var(prefix).dimmed()
        );
        println!("      {}", meta.description.dimmed());
    }
    println!();
}

/// Current value when set, otherwise the default.
pub fn describe_value(config: &GeneratorConfig, prefix: &str, meta: &PropertyMeta) -> String {
    let key = meta.full_key(prefix);
    if config.contains_key(&key) {
        match config.get::<String>(&key) {
            Ok(value) => value,
            Err(_) => config
                .get::<Vec<String>>(&key)
                .map(|items| items.join(", "))
                .unwrap_or_else(|e| e.to_string()),
        }
    } else {
        match meta.default_value {
            Some(default) => format!("{default:?} (default)"),
            None => "(unset)".to_string(),
        }
    }
}
