// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

use crate::commands::{load_scope, Cli, Handle, HandledResult};

pub fn plan(cli: &Cli) -> HandledResult<()> {
    let scope = load_scope(cli)?;

    let plan = toml::to_string_pretty(&scope)
        .handle_err(|e| eprintln!("Could not serialize plan: {e}"))?;
    println!("{plan}");

    Ok(())
}
