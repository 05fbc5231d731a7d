// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

use clap::Parser;

use sequoia_lib::commands::{self, Cli};

/// The sequoia binary loads a scope file and reports on the topology it expands into.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("SEQUOIA_LOG", "warn"))
        .init();

    let args = Cli::parse();

    if commands::main(&args).is_err() {
        std::process::exit(1);
    }
}
