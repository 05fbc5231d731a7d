// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::{error::LoadError, reader, service::Service};

/// RunConfig holds the toggles for one test run. It is loaded from its own file and has no
/// relationship to the topology beyond naming the scope file to use.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub client: String,
    pub scope: String,
    pub test: String,
    pub provider: String,
    pub skip_setup: bool,
    pub skip_test: bool,
    pub skip_teardown: bool,
    pub repeat: u32,
}

impl RunConfig {
    /// Load a run configuration from the file at `path`.
    pub fn load(path: &str) -> Result<Self, LoadError> {
        let config: RunConfig = reader::read_into(path)?;
        log::info!("loaded run configuration from {path}");
        Ok(config)
    }
}

/// ScopeConfig, along with its children BucketConfig and ServerConfig, is the model of a test
/// topology as written in a scope file. The scope file is deserialized into a ScopeConfig.
///
/// Groups in the file are templates: a base name plus a count. Expanding them into concrete
/// buckets, nodes and service assignments is done by [`crate::scope::Scope`], whose model is kept
/// separate so that the planned topology can change without changing the file format.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ScopeConfig {
    pub buckets: Vec<BucketConfig>,
    pub servers: Vec<ServerConfig>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct BucketConfig {
    pub name: String,
    pub count: u32,
    #[serde(deserialize_with = "string_or_number")]
    pub ram: String,
    /// Left unset when the file omits it, so that an explicit `replica: 0` survives defaulting.
    pub replica: Option<u8>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub sasl: String,
    pub eviction: String,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub name: String,
    pub count: u32,
    #[serde(deserialize_with = "string_or_number")]
    pub ram: String,
    #[serde(deserialize_with = "string_or_number")]
    pub index_ram: String,
    #[serde(deserialize_with = "string_or_number")]
    pub rest_username: String,
    #[serde(deserialize_with = "string_or_number")]
    pub rest_password: String,
    #[serde(deserialize_with = "string_or_number")]
    pub rest_port: String,
    pub init_nodes: u32,
    pub data_path: String,
    pub index_path: String,
    pub index_storage: String,
    /// Comma separated names of the bucket groups this server group serves.
    pub buckets: String,
    pub services: ServiceTargets,
}

/// How many nodes of a server group should run each service. Only the known services are
/// accepted; any other key in the file is a load error.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceTargets {
    pub data: u32,
    pub index: u32,
    pub query: u32,
}

impl ServiceTargets {
    pub fn target(&self, service: Service) -> u32 {
        match service {
            Service::Data => self.data,
            Service::Index => self.index,
            Service::Query => self.query,
        }
    }
}

/// Accept a scalar that is textual in the model but is often written as a bare number (ports,
/// memory sizes).
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrNumber;

    impl de::Visitor<'_> for StringOrNumber {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "a string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        // `ram:` with nothing after it
        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(StringOrNumber)
}
