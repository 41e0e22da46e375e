//! toucan init command implementation
//!
//! Writes a default `.toucan.toml` so the job service URL and board defaults
//! can be edited in place. An existing file is left alone.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{Config, CONFIG_FILE};
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};

#[derive(Serialize)]
struct InitReport {
    path: PathBuf,
    created: bool,
}

pub fn run(target: Option<&Path>, output: OutputOptions) -> Result<()> {
    let path = match target {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?.join(CONFIG_FILE),
    };
    let created = ensure_config(&path)?;

    let header = if created {
        "toucan init: wrote default config"
    } else {
        "toucan init: nothing to do"
    };
    let mut human = HumanOutput::new(header);
    human.push_summary("config", path.display().to_string());
    if created {
        human.push_next_step("edit api.base_url to point at the job service");
        human.push_next_step("toucan list");
    }

    let report = InitReport { path, created };
    emit_success(output, "init", &report, Some(&human))
}

fn ensure_config(path: &Path) -> Result<bool> {
    if path.exists() {
        if !path.is_file() {
            return Err(Error::InvalidConfig(format!(
                "{} exists but is not a file",
                path.display()
            )));
        }
        return Ok(false);
    }
    Config::default().save(path)?;
    Ok(true)
}
