use crate::cli::parser::Commands;
use crate::config::Config;
use crate::dashboard::{login, shell};
use crate::errors::AppResult;
use crate::store::RecordStore;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run { no_login } = cmd {
        let stdin = io::stdin();
        let mut reader = stdin.lock();

        if !*no_login {
            login::gate(&mut reader)?;
        }

        // The store lives exactly as long as the session: one explicit
        // value handed to the shell, no global state.
        let mut store = RecordStore::new();
        shell::run(&mut store, cfg, &mut reader)?;
    }
    Ok(())
}
