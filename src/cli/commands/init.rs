use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the export directory
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing voldesk…");

    if let Some(custom) = &cli.export_dir {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    println!("📄 Config file : {}", path.display());

    Ok(())
}
