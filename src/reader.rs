// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::LoadError;

/// The syntaxes a configuration document may be written in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Format {
    Yaml,
    Toml,
}

impl Format {
    /// Pick a format from the extension of `path`. Anything that is not `.toml` is treated as
    /// YAML, which is what scope files have historically been written in.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Yaml,
        }
    }
}

/// Read the file at `path` and deserialize it into a `T`.
pub fn read_into<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, LoadError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    from_str(&contents, Format::from_path(path), &path.display().to_string())
}

/// Deserialize `contents` in the given `format`. `origin` is only used to label errors.
pub fn from_str<T: DeserializeOwned>(
    contents: &str,
    format: Format,
    origin: &str,
) -> Result<T, LoadError> {
    match format {
        Format::Toml => toml::from_str(contents).map_err(|source| LoadError::Toml {
            path: origin.to_string(),
            source,
        }),
        Format::Yaml => {
            // An empty YAML document deserializes as unit rather than an empty mapping.
            let contents = if contents.trim().is_empty() {
                "{}"
            } else {
                contents
            };
            serde_yaml::from_str(contents).map_err(|source| LoadError::Yaml {
                path: origin.to_string(),
                source,
            })
        }
    }
}
