// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

use serde::Serialize;

use crate::{
    bucket::{BucketGroup, BucketLookup},
    config::{ServerConfig, ServiceTargets},
    expand::expand_name,
    service::{distribute, NodeServices, Service},
};

/// A server group after expansion: its concrete node names, the bucket groups it serves, and the
/// services each node runs.
///
/// Orchestration code may change a group while walking its nodes with
/// [`crate::scope::Scope::apply_to_servers`], e.g. to bump `nodes_active` as nodes join.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ServerGroup {
    pub name: String,
    pub names: Vec<String>,
    pub count: u32,
    pub ram: String,
    pub index_ram: String,
    pub rest_username: String,
    pub rest_password: String,
    pub rest_port: String,
    pub init_nodes: u32,
    pub data_path: String,
    pub index_path: String,
    pub index_storage: String,
    /// The bucket references as written in the scope file.
    pub buckets: String,
    pub nodes_active: u32,
    pub services: ServiceTargets,
    pub node_services: NodeServices,
    /// The bucket groups from `buckets` that could be resolved, in reference order.
    pub bucket_specs: Vec<BucketGroup>,
}

impl ServerGroup {
    /// Expand a server group from the scope file, resolving its bucket references against
    /// `bucket_lookup` and assigning services to its nodes.
    pub fn from_config(conf: &ServerConfig, bucket_lookup: &BucketLookup) -> Self {
        let names = expand_name(&conf.name, conf.count);
        let node_services = distribute(&names, &conf.services);

        ServerGroup {
            name: conf.name.clone(),
            names,
            count: conf.count,
            ram: conf.ram.clone(),
            index_ram: conf.index_ram.clone(),
            rest_username: conf.rest_username.clone(),
            rest_password: conf.rest_password.clone(),
            rest_port: conf.rest_port.clone(),
            init_nodes: conf.init_nodes,
            data_path: conf.data_path.clone(),
            index_path: conf.index_path.clone(),
            index_storage: conf.index_storage.clone(),
            buckets: conf.buckets.clone(),
            nodes_active: 0,
            services: conf.services,
            node_services,
            bucket_specs: resolve_buckets(&conf.name, &conf.buckets, bucket_lookup),
        }
    }

    /// The services assigned to `node`, or `None` if the node is not part of this group.
    pub fn services_for(&self, node: &str) -> Option<&[Service]> {
        self.node_services.get(node).map(|s| s.as_slice())
    }

    /// The nodes running `service`, in expansion order.
    pub fn nodes_with(&self, service: Service) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .filter(move |name| {
                self.node_services
                    .get(name.as_str())
                    .is_some_and(|services| services.contains(&service))
            })
            .map(|name| name.as_str())
    }

    /// The names of the buckets served by this group, across all of its bucket groups.
    pub fn bucket_names(&self) -> impl Iterator<Item = &str> {
        self.bucket_specs
            .iter()
            .flat_map(|group| group.names.iter().map(|name| name.as_str()))
    }
}

/// Split a comma separated list of bucket group names and look each one up. Names that don't
/// match a declared bucket group are skipped.
fn resolve_buckets(server: &str, refs: &str, lookup: &BucketLookup) -> Vec<BucketGroup> {
    refs.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter_map(|name| match lookup.get(name) {
            Some(group) => Some(group.clone()),
            None => {
                log::debug!("server group '{server}' references unknown bucket group '{name}'");
                None
            }
        })
        .collect()
}

/// Expand every declared server group, in declaration order.
pub fn plan_servers(configs: &[ServerConfig], bucket_lookup: &BucketLookup) -> Vec<ServerGroup> {
    configs
        .iter()
        .map(|conf| {
            let group = ServerGroup::from_config(conf, bucket_lookup);
            log::debug!(
                "server group '{}': {} nodes, {} bucket groups",
                group.name,
                group.names.len(),
                group.bucket_specs.len()
            );
            group
        })
        .collect()
}
