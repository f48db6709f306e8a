use clap::{Parser, Subcommand};

/// Command-line interface definition for voldesk
/// CLI dashboard to register volunteers, log hours and attendance, export CSV
#[derive(Parser)]
#[command(
    name = "voldesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple volunteer dashboard CLI: register volunteers, log hours and attendance, export CSV reports",
    long_about = None
)]
pub struct Cli {
    /// Override export directory (useful for tests or a custom reports location)
    #[arg(global = true, long = "export-dir")]
    pub export_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and export directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Start an interactive dashboard session
    Run {
        /// Skip the login gate
        #[arg(long = "no-login", hide = true)]
        no_login: bool,
    },
}
