//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, EnvironmentFlags, OutputFlags};
use crate::commands;
use crate::infra::launcher::DEFAULT_EDITOR;

/// Switch your machine into a project workspace in one command
#[derive(Parser)]
#[command(name = "switchblade", version, propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Show diagnostic logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Workspace definitions file (JSON, or YAML by extension)
    #[arg(long, global = true, env = "SWITCHBLADE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also append the switch log to this file
    #[arg(long, global = true, env = "SWITCHBLADE_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Editor command to launch on the workspace path
    #[arg(long, global = true, env = "SWITCHBLADE_EDITOR", default_value = DEFAULT_EDITOR)]
    pub editor: String,

    /// Give up on any single external command after this many seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Switch to a workspace
    Switch(commands::switch::SwitchArgs),

    /// List configured workspaces
    List,

    /// Pick workspaces interactively (default)
    Session,

    /// Write a sample configuration file
    Init(commands::init::InitArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the
    /// command itself fails. A switch never fails this way.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            verbose,
            config,
            log_file,
            editor,
            timeout,
            command,
        } = self;
        crate::logging::init(verbose);

        let app = AppContext::new(AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            environment: EnvironmentFlags {
                config,
                log_file,
                editor,
                timeout: timeout.map(Duration::from_secs),
            },
        });

        match command.unwrap_or(Command::Session) {
            Command::Switch(args) => commands::switch::run(&app, &args).await,
            Command::List => commands::list::run(&app),
            Command::Session => commands::session::run(&app).await,
            Command::Init(args) => commands::init::run(&app, &args),
            Command::Config(cmd) => commands::config::run(&app, &cmd),
            Command::Version => Ok(commands::version::run(&app)),
        }
    }
}
