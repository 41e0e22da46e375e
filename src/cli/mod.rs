//! Command-line interface for toucan
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::board::ViewMode;
use crate::classify::Column;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::integrations::HttpJobSource;
use crate::output::OutputOptions;
use crate::record::RecordId;
use crate::sort::SortDirection;

mod delete;
mod init;
mod list;
mod logo;
mod relocate;

/// toucan - job application tracker
///
/// Shows job applications from the job service as a table or as a board of
/// applied / interview / offer lanes.
#[derive(Parser, Debug)]
#[command(name = "toucan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a config file (defaults to ./.toucan.toml, then the user config dir)
    #[arg(long, global = true, env = "TOUCAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Job service base URL, overriding the config file
    #[arg(long, global = true, env = "TOUCAN_API_URL")]
    pub api_url: Option<String>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default .toucan.toml (to --config when given)
    Init,

    /// Fetch jobs and show them
    List {
        /// View mode: table or board
        #[arg(long)]
        view: Option<String>,

        /// Sort direction: newest or oldest
        #[arg(long)]
        sort: Option<String>,
    },

    /// Move a job to another lane (local only, not saved to the job service)
    Move {
        /// Job id
        id: RecordId,

        /// Target lane: applied, interview, offer
        column: String,
    },

    /// Delete a job from the job service
    Delete {
        /// Job id
        id: RecordId,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Show the logo key derived from a company name
    Logo {
        /// Company name
        company: String,
    },
}

/// Resolved settings shared by every subcommand.
pub(crate) struct Context {
    pub config: Config,
    pub output: OutputOptions,
}

impl Context {
    fn resolve(
        config_path: Option<&Path>,
        api_url: Option<String>,
        output: OutputOptions,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let mut config = Config::discover(config_path, &cwd)?;
        if let Some(url) = api_url {
            config.api.base_url = url;
            config.validate()?;
        }
        Ok(Self { config, output })
    }

    pub fn job_source(&self) -> Result<HttpJobSource> {
        HttpJobSource::new(&self.config.api).map_err(|err| Error::Load(err.to_string()))
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        let output = OutputOptions {
            json: self.json,
            quiet: self.quiet,
        };
        // init creates the config file, so it runs before any config is loaded
        if matches!(self.command, Commands::Init) {
            return init::run(self.config.as_deref(), output);
        }
        let context = Context::resolve(self.config.as_deref(), self.api_url, output)?;

        match self.command {
            Commands::List { view, sort } => {
                list::run(
                    &context,
                    list::ListOptions {
                        view: view.as_deref().map(str::parse::<ViewMode>).transpose()?,
                        sort: sort
                            .as_deref()
                            .map(str::parse::<SortDirection>)
                            .transpose()?,
                    },
                )
                .await
            }
            Commands::Move { id, column } => {
                relocate::run(
                    &context,
                    relocate::MoveOptions {
                        id,
                        column: column.parse::<Column>()?,
                    },
                )
                .await
            }
            Commands::Delete { id, yes } => {
                delete::run(&context, delete::DeleteOptions { id, yes }).await
            }
            Commands::Logo { company } => logo::run(&context, &company),
            Commands::Init => init::run(self.config.as_deref(), context.output),
        }
    }
}
