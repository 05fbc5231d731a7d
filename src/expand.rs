// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

/// Expand a group template into concrete instance names by appending a 1-based index to `base`,
/// e.g. `("node", 3)` gives `node1`, `node2`, `node3`.
pub fn expand_name(base: &str, count: u32) -> Vec<String> {
    (1..=count).map(|i| format!("{base}{i}")).collect()
}
