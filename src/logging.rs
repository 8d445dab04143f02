use std::fs::{self, File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// Install the global logger. The alternate screen owns stdout/stderr while the
/// UI runs, so records go to `path`; if it cannot be opened they go to stderr
/// rather than nowhere.
pub fn init(path: &Path) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));

    match open_log_file(path) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(file)));
        }
        Err(err) => eprintln!("{err:#}; logging to stderr"),
    }

    builder.init();
}

/// Open `path` for appending, creating its directory first.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create log directory {}", parent.display()))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))
}
