// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

use crate::commands::{
    load_run_config, resolve_scope_path, run_config_path, Cli, Handle, HandledResult,
};

pub fn config(cli: &Cli) -> HandledResult<()> {
    let run_config = load_run_config(&run_config_path(cli))?;

    let out = toml::to_string_pretty(&run_config)
        .handle_err(|e| eprintln!("Could not serialize run configuration: {e}"))?;
    println!("{out}");
    println!(
        "# scope file: {}",
        resolve_scope_path(cli, Some(&run_config))
    );

    Ok(())
}
