use clap::Parser;
use directories::ProjectDirs;
use mailroom::api::MailroomApi;
use mailroom::error::{MailroomError, Result};
use mailroom::menu::Session;
use mailroom::store::json::JsonFileStore;
use std::io;
use std::path::PathBuf;

mod args;
use args::Cli;

/// Overrides the default data-file location (used by the tests).
const DATA_ENV: &str = "MAILROOM_DATA";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse();

    let store = JsonFileStore::new(data_file_path()?);
    store.ensure_initialized()?;
    let api = MailroomApi::new(store);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(api, stdin.lock(), stdout.lock());
    session.run()
}

fn data_file_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(DATA_ENV) {
        return Ok(PathBuf::from(path));
    }
    let proj_dirs = ProjectDirs::from("com", "mailroom", "mailroom")
        .ok_or_else(|| MailroomError::Store("could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().join("donors.json"))
}
