// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

use std::io;

use thiserror::Error;

/// An error raised while loading a run configuration or scope file. Loading is all-or-nothing:
/// when one of these is returned, no partial plan exists.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read \"{path}\": {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed TOML in \"{path}\": {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("malformed YAML in \"{path}\": {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl LoadError {
    /// The path of the file that failed to load.
    pub fn path(&self) -> &str {
        match self {
            LoadError::Io { path, .. } => path,
            LoadError::Toml { path, .. } => path,
            LoadError::Yaml { path, .. } => path,
        }
    }
}
