// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

use crate::commands::{load_scope, Cli, HandledResult};

pub fn validate(cli: &Cli) -> HandledResult<()> {
    let scope = load_scope(cli)?;

    scope.print_summary();

    Ok(())
}
