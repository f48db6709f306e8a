use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub export_dir: String,
    #[serde(default = "default_session")]
    pub default_session: String,
}

fn default_session() -> String {
    "Morning".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: Self::export_dir_default().to_string_lossy().to_string(),
            default_session: default_session(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("voldesk")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".voldesk")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("voldesk.conf")
    }

    /// Default directory for exported report files
    pub fn export_dir_default() -> PathBuf {
        Self::config_dir().join("exports")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration file and export directory
    pub fn init_all(custom_export_dir: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Export dir: user provided or default
        let export_dir = if let Some(d) = custom_export_dir {
            let p = std::path::Path::new(&d);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::export_dir_default()
        };

        let config = Config {
            export_dir: export_dir.to_string_lossy().to_string(),
            default_session: default_session(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("serialize error: {}", e)))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        fs::create_dir_all(&export_dir)?;
        println!("✅ Export dir:  {:?}", export_dir);

        Ok(())
    }
}
