use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stackenv::Transport;

/// stackenv - reproducible multi-repository development environment builder
#[derive(Parser, Debug)]
#[command(name = "stackenv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a development environment at the target path
    Create {
        /// Target directory receiving the workspace and environment
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Manifest file to build from (defaults to the built-in catalog)
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Build open packages only (defaults the transport to https)
        #[arg(long)]
        non_member: bool,

        /// Clone transport for open packages; restricted packages always use ssh
        #[arg(long, value_enum)]
        transport: Option<Transport>,

        /// Disable build isolation for speed (may break some installs)
        #[arg(long)]
        fast: bool,

        /// Use the legacy editable install layout
        #[arg(long)]
        compat: bool,

        /// Hide system site packages and force fresh installs
        #[arg(long)]
        ignore_system_packages: bool,

        /// Shell prompt prefix for the environment
        #[arg(long, default_value = "venv")]
        prompt: String,

        /// Leave the named package out of the build (repeatable)
        #[arg(long = "exclude", value_name = "PACKAGE")]
        excludes: Vec<String>,
    },

    /// Print the resolved install order without building anything
    Plan {
        /// Manifest file to resolve (defaults to the built-in catalog)
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Resolve open packages only
        #[arg(long)]
        non_member: bool,

        /// Leave the named package out of the plan (repeatable)
        #[arg(long = "exclude", value_name = "PACKAGE")]
        excludes: Vec<String>,
    },
}
