// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

pub mod config;
pub mod nodes;
pub mod plan;
pub mod validate;

use nodes::NodesArgs;

use clap::{Parser, Subcommand};

use crate::{config::RunConfig, scope::Scope};

/// A `HandledError` represents an error that has already been handled. When you call a function
/// that returns a `HandledError` or `HandledResult`, you don't need to do anything with that error,
/// other than just be aware that it happened, and return it on to your caller.
///
/// `main()` has a special responsibility: since its "caller" is, in a certain sense, the operating
/// system, `main()` must return a nonzero exit status when it gets a `HandledError`.
///
/// The primary way to construct a `HandledError` is with the `handle_err()` function, which turns a
/// generic error into a `HandledError`, and also runs some caller-provided code to handle the
/// error. That provided code would normally do something like report the error to stderr.
#[derive(Debug, PartialEq)]
pub struct HandledError {}

pub type HandledResult<T> = std::result::Result<T, HandledError>;

pub trait Handle<T, F> {
    fn handle_err(self, handler: F) -> HandledResult<T>;
}

impl<T, E, F: FnOnce(E)> Handle<T, F> for std::result::Result<T, E> {
    /// Handle an error by running the provided `handler` code, giving it the error.
    ///
    /// Then, return a `HandledResult`, so that transitive callers of this function know that they
    /// do not need to do anything further to handle the error.
    fn handle_err(self, handler: F) -> HandledResult<T> {
        self.map_err(|e| {
            handler(e);
            HandledError {}
        })
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Run configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Scope file. Defaults to the scope named in the run configuration given with --config.
    #[arg(long, global = true)]
    pub scope: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the scope file loads and summarize the plan.
    Validate,
    /// Print the fully expanded plan.
    Plan,
    /// List the planned nodes and their services.
    Nodes(NodesArgs),
    /// Print the run configuration.
    Config,
}

/// Get the run configuration path: the one given on the command line, otherwise the default.
fn run_config_path(cli: &Cli) -> String {
    match &cli.config {
        Some(path) => path.clone(),
        None => crate::default_config_path(),
    }
}

fn load_run_config(path: &str) -> HandledResult<RunConfig> {
    RunConfig::load(path).handle_err(|e| eprintln!("Could not load run configuration: {e}"))
}

/// Work out which scope file to use: `--scope` wins, then the `scope` entry of the run
/// configuration, then the default.
fn resolve_scope_path(cli: &Cli, run_config: Option<&RunConfig>) -> String {
    if let Some(path) = &cli.scope {
        return path.clone();
    }
    match run_config {
        Some(run_config) if !run_config.scope.is_empty() => run_config.scope.clone(),
        _ => crate::default_scope_path(),
    }
}

/// The scope file to use. The run configuration is only consulted when `--config` was given.
pub fn scope_path(cli: &Cli) -> HandledResult<String> {
    let run_config = match (&cli.scope, &cli.config) {
        (None, Some(config_path)) => Some(load_run_config(config_path)?),
        _ => None,
    };
    Ok(resolve_scope_path(cli, run_config.as_ref()))
}

fn load_scope(cli: &Cli) -> HandledResult<Scope> {
    let path = scope_path(cli)?;
    Scope::load(&path).handle_err(|e| eprintln!("Could not load scope: {e}"))
}

pub fn main(cli: &Cli) -> HandledResult<()> {
    match &cli.command {
        Commands::Validate => validate::validate(cli),
        Commands::Plan => plan::plan(cli),
        Commands::Nodes(args) => nodes::nodes(cli, args),
        Commands::Config => config::config(cli),
    }
}
