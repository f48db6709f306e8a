use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::env;
use std::process::Command as ProcessCommand;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigSave)?;
            println!("# {}", path.display());
            print!("{}", yaml);
        }

        if *check {
            if !path.exists() {
                warning("No config file found. Run 'voldesk init' first.");
                return Ok(());
            }
            let missing = migrate::missing_keys(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing configuration keys: {}", missing.join(", ")));
                info("Run 'voldesk config --migrate' to add them with defaults.");
            }
        }

        if *run_migrate {
            if !migrate::migrate_add_default_session(&path)? {
                info("No configuration migration needed.");
            }
        }

        if *edit_config {
            edit(&path, editor.as_deref())?;
        }
    }
    Ok(())
}

/// Open the config file in the chosen editor: --editor, then $EDITOR/$VISUAL,
/// then a per-platform fallback.
fn edit(path: &std::path::Path, editor: Option<&str>) -> AppResult<()> {
    let chosen = editor
        .map(str::to_string)
        .or_else(|| env::var("EDITOR").ok())
        .or_else(|| env::var("VISUAL").ok())
        .unwrap_or_else(|| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let status = ProcessCommand::new(&chosen).arg(path).status()?;
    if !status.success() {
        return Err(AppError::Config(format!("Editor '{}' exited with an error", chosen)));
    }
    Ok(())
}
