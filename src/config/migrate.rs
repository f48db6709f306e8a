//! Config file migrations: older installs may miss keys added later.
//! Migrations only ever add keys with defaults; existing values are kept.

use crate::ui::messages::success;
use serde_yaml::Value;
use std::fs;
use std::io;
use std::path::Path;

/// Report the keys a config file is missing, without touching it.
/// Empty result means the file is complete.
pub fn missing_keys(path: &Path) -> io::Result<Vec<&'static str>> {
    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| io::Error::other(format!("Failed to parse {:?}: {}", path, e)))?;

    let mut missing = Vec::new();
    if let Some(map) = yaml.as_mapping() {
        for key in ["export_dir", "default_session"] {
            if !map.contains_key(&Value::String(key.to_string())) {
                missing.push(key);
            }
        }
    }
    Ok(missing)
}

/// Migration that adds the `default_session` parameter to the YAML config,
/// if missing. Returns true when the file was updated.
pub fn migrate_add_default_session(path: &Path) -> io::Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(path)?;

    if let Ok(mut yaml) = serde_yaml::from_str::<Value>(&content)
        && let Some(map) = yaml.as_mapping_mut()
    {
        let key = Value::String("default_session".to_string());

        if !map.contains_key(&key) {
            map.insert(key, Value::String("Morning".to_string()));

            let serialized = serde_yaml::to_string(&yaml)
                .map_err(|e| io::Error::other(format!("serialize error: {}", e)))?;

            // Inject documentation comment right after the new line
            let mut new_content = String::new();
            for line in serialized.lines() {
                new_content.push_str(line);
                new_content.push('\n');

                if line.starts_with("default_session:") {
                    new_content.push_str(
                        "# default_session: session name used when the\n\
                         # attendance form's session field is left blank\n",
                    );
                }
            }

            fs::write(path, new_content)?;

            success("Migration applied: added default_session parameter to config.");
            return Ok(true);
        }
    }

    Ok(false)
}
