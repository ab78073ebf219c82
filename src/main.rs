//! stackenv CLI - reproducible multi-repository development environment builder
//!
//! Usage: stackenv <COMMAND>
//!
//! Commands:
//!   create  Build a development environment at the target path
//!   plan    Print the resolved install order without building anything

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Partial clones and installs are left in place on interrupt; the
    // idempotent acquire/provision steps pick them up on the next run.
    let _ = ctrlc::set_handler(|| {
        eprintln!(
            "\ninterrupted - partial workspace and environment left in place; \
             re-run `stackenv create` to resume"
        );
        std::process::exit(130);
    });

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Create {
            path,
            manifest,
            non_member,
            transport,
            fast,
            compat,
            ignore_system_packages,
            prompt,
            excludes,
        } => commands::create::cmd_create(
            &path,
            manifest.as_deref(),
            non_member,
            transport,
            fast,
            compat,
            ignore_system_packages,
            &prompt,
            excludes,
            cli.json,
            cli.verbose,
        ),
        Commands::Plan {
            manifest,
            non_member,
            excludes,
        } => commands::plan::cmd_plan(manifest.as_deref(), non_member, excludes, cli.json),
    }
}
