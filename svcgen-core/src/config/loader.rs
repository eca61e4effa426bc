use std::collections::HashMap;
use std::path::Path;

use super::value::ConfigValue;
use super::ConfigError;

/// Prefix of environment variables overlaid onto the configuration.
pub(crate) const ENV_PREFIX: &str = "SVCGEN__";

/// Load a YAML file into `values`. A missing file is not an error.
pub(crate) fn load_yaml_file(
    path: &Path,
    values: &mut HashMap<String, ConfigValue>,
) -> Result<(), ConfigError> {
    if !path.exists() {
        return Ok(());
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
        .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
    flatten_yaml("", &yaml, values);
    Ok(())
}

pub(crate) fn load_yaml_str(
    content: &str,
    values: &mut HashMap<String, ConfigValue>,
) -> Result<(), ConfigError> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| ConfigError::Load(e.to_string()))?;
    flatten_yaml("", &yaml, values);
    Ok(())
}

/// Flatten a YAML tree into dot-separated keys.
///
/// Sequences are stored whole under their parent key; scalars are stored as
/// leaves.
pub(crate) fn flatten_yaml(
    prefix: &str,
    value: &serde_yaml::Value,
    out: &mut HashMap<String, ConfigValue>,
) {
    match value {
        serde_yaml::Value::Mapping(map) => {
            for (k, v) in map {
                let segment = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    other => format!("{other:?}"),
                };
                let key = if prefix.is_empty() {
                    segment
                } else {
                    format!("{prefix}.{segment}")
                };
                flatten_yaml(&key, v, out);
            }
        }
        leaf if !prefix.is_empty() => {
            out.insert(prefix.to_string(), ConfigValue::from_yaml(leaf));
        }
        _ => {}
    }
}

/// Overlay `SVCGEN__A__B_C=value` as `svcgen.a.b_c = value`.
pub(crate) fn overlay_env(
    vars: impl IntoIterator<Item = (String, String)>,
    values: &mut HashMap<String, ConfigValue>,
) {
    for (name, value) in vars {
        if let Some(rest) = name.strip_prefix(ENV_PREFIX) {
            let key = format!("svcgen.{}", rest.to_lowercase().replace("__", "."));
            values.insert(key, ConfigValue::String(value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overlay_keeps_underscores_inside_segments() {
        let mut values = HashMap::new();
        overlay_env(
            vec![
                ("SVCGEN__NAMING__SERVICE_SUFFIX".to_string(), "Svc".to_string()),
                ("PATH".to_string(), "/bin".to_string()),
            ],
            &mut values,
        );
        assert_eq!(values.len(), 1);
        assert!(matches!(
            values.get("svcgen.naming.service_suffix"),
            Some(ConfigValue::String(s)) if s == "Svc"
        ));
    }

    #[test]
    fn file_errors_name_the_path_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("svcgen.yaml");
        std::fs::write(&path, "svcgen: [unclosed\n").unwrap();

        let err = load_yaml_file(&path, &mut HashMap::new()).unwrap_err();
        let message = err.to_string();
        assert_eq!(message.matches("Config load error").count(), 1, "{message}");
        assert!(message.contains("svcgen.yaml"), "{message}");
    }

    #[test]
    fn sequences_stay_whole() {
        let mut values = HashMap::new();
        load_yaml_str("svcgen:\n  render:\n    imports: [a, b]\n", &mut values).unwrap();
        assert!(matches!(
            values.get("svcgen.render.imports"),
            Some(ConfigValue::List(items)) if items.len() == 2
        ));
    }
}
