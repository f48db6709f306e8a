#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn vd() -> Command {
    cargo_bin_cmd!("voldesk")
}

/// Create a unique export directory path inside the system temp dir and
/// remove any leftover from a previous run
pub fn setup_export_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_voldesk_exports", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Join stdin lines for an interactive session script
pub fn script(lines: &[&str]) -> String {
    let mut s = lines.join("\n");
    s.push('\n');
    s
}

/// The `register` command plus its thirteen answers: the five required
/// fields and eight blank optional ones
pub fn register_block(name: &str, email: &str, role: &str, grade: &str) -> Vec<String> {
    let mut lines = vec![
        "register".to_string(),
        name.to_string(),
        email.to_string(),
        "5551234567".to_string(),
        role.to_string(),
        grade.to_string(),
    ];
    lines.extend(std::iter::repeat_n(String::new(), 8));
    lines
}

/// Run a no-login dashboard session with the given stdin lines and export dir
pub fn session(export_dir: &str, lines: &[String]) -> Command {
    let mut cmd = vd();
    cmd.args(["--export-dir", export_dir, "run", "--no-login"])
        .write_stdin(format!("{}\n", lines.join("\n")));
    cmd
}
