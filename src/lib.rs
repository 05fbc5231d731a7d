// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

pub mod attr;
pub mod bucket;
pub mod commands;
pub mod config;
pub mod error;
pub mod expand;
pub mod reader;
pub mod scope;
pub mod server;
pub mod service;

/// Gets the path of the run configuration file.
pub fn default_config_path() -> String {
    match std::env::var("SEQUOIA_CONFIG") {
        Ok(conf) => conf,
        Err(_) => "sequoia.yml".to_string(),
    }
}

/// Gets the path of the scope file, used when neither the command line nor the run
/// configuration names one.
pub fn default_scope_path() -> String {
    match std::env::var("SEQUOIA_SCOPE") {
        Ok(scope) => scope,
        Err(_) => "scope.yml".to_string(),
    }
}
