// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

use std::collections::HashMap;

use serde::Serialize;

use crate::{config::BucketConfig, expand::expand_name};

pub const DEFAULT_REPLICA: u8 = 1;
pub const DEFAULT_BUCKET_TYPE: &str = "couchbase";

/// A bucket group after expansion: the group's attributes with defaults applied, plus the
/// concrete bucket names it expands into.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BucketGroup {
    pub name: String,
    pub names: Vec<String>,
    pub count: u32,
    pub ram: String,
    pub replica: u8,
    #[serde(rename = "type")]
    pub kind: String,
    pub sasl: String,
    pub eviction: String,
}

/// A single concrete bucket. It carries the attributes of the group it was expanded from.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketInstance<'a> {
    pub name: &'a str,
    pub group: &'a BucketGroup,
}

impl BucketGroup {
    pub fn from_config(conf: &BucketConfig) -> Self {
        let kind = match conf.kind.as_deref() {
            None | Some("") => DEFAULT_BUCKET_TYPE.to_string(),
            Some(kind) => kind.to_string(),
        };
        BucketGroup {
            name: conf.name.clone(),
            names: expand_name(&conf.name, conf.count),
            count: conf.count,
            ram: conf.ram.clone(),
            replica: conf.replica.unwrap_or(DEFAULT_REPLICA),
            kind,
            sasl: conf.sasl.clone(),
            eviction: conf.eviction.clone(),
        }
    }

    pub fn instances(&self) -> impl Iterator<Item = BucketInstance<'_>> {
        self.names.iter().map(move |name| BucketInstance {
            name: name.as_str(),
            group: self,
        })
    }
}

/// Bucket groups by the base name they were declared with.
pub type BucketLookup = HashMap<String, BucketGroup>;

/// Expand every declared bucket group, and build the lookup that server groups use to resolve
/// the buckets they reference. A group with a count of zero has no buckets but can still be
/// referenced.
pub fn plan_buckets(configs: &[BucketConfig]) -> (Vec<BucketGroup>, BucketLookup) {
    let mut groups = Vec::with_capacity(configs.len());
    let mut lookup = BucketLookup::new();

    for conf in configs.iter() {
        let group = BucketGroup::from_config(conf);
        log::debug!(
            "bucket group '{}': {} buckets, type {}, {} replicas",
            group.name,
            group.names.len(),
            group.kind,
            group.replica
        );
        lookup.insert(group.name.clone(), group.clone());
        groups.push(group);
    }

    (groups, lookup)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(name: &str, count: u32) -> BucketConfig {
        BucketConfig {
            name: name.to_string(),
            count,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let (groups, lookup) = plan_buckets(&[bucket("default", 2)]);

        assert_eq!(groups[0].replica, DEFAULT_REPLICA);
        assert_eq!(groups[0].kind, DEFAULT_BUCKET_TYPE);
        assert_eq!(groups[0].names, vec!["default1", "default2"]);
        assert_eq!(lookup["default"], groups[0]);
    }

    #[test]
    fn test_explicit_values_kept() {
        let conf = BucketConfig {
            replica: Some(2),
            kind: Some("ephemeral".to_string()),
            ..bucket("other", 1)
        };
        let group = BucketGroup::from_config(&conf);
        assert_eq!(group.replica, 2);
        assert_eq!(group.kind, "ephemeral");

        let conf = BucketConfig {
            replica: Some(0),
            kind: Some(String::new()),
            ..bucket("none", 1)
        };
        let group = BucketGroup::from_config(&conf);
        assert_eq!(group.replica, 0);
        assert_eq!(group.kind, DEFAULT_BUCKET_TYPE);
    }

    #[test]
    fn test_zero_count_registered() {
        let (groups, lookup) = plan_buckets(&[bucket("empty", 0)]);
        assert!(groups[0].names.is_empty());
        assert_eq!(groups[0].instances().count(), 0);
        assert!(lookup.contains_key("empty"));
    }

    #[test]
    fn test_instances_inherit_group() {
        let conf = BucketConfig {
            ram: "512".to_string(),
            eviction: "fullEviction".to_string(),
            ..bucket("b", 3)
        };
        let group = BucketGroup::from_config(&conf);
        let instances: Vec<_> = group.instances().collect();

        assert_eq!(instances.len(), 3);
        assert_eq!(instances[2].name, "b3");
        assert!(instances
            .iter()
            .all(|i| i.group.ram == "512" && i.group.eviction == "fullEviction"));
    }
}
