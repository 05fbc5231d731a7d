// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

use std::convert::Infallible;
use std::fmt::Write;

use serde::Serialize;

use crate::{
    bucket::{plan_buckets, BucketGroup},
    config::ScopeConfig,
    error::LoadError,
    reader,
    server::{plan_servers, ServerGroup},
    service::Service,
};

/// Scope is the fully expanded plan for one test run: every bucket group and server group from
/// the scope file, with concrete names, resolved bucket references and per-node services.
///
/// A Scope is built once when the run starts and is read-only after that, except through the
/// traversal methods, which hand each visited node's group to the caller mutably.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Scope {
    pub buckets: Vec<BucketGroup>,
    pub servers: Vec<ServerGroup>,
}

impl Scope {
    /// Load a scope file and expand it.
    pub fn load(path: &str) -> Result<Self, LoadError> {
        let config: ScopeConfig = reader::read_into(path)?;
        let scope = Self::from_config(&config);
        log::info!(
            "loaded scope from {path}: {} bucket groups, {} server groups, {} nodes",
            scope.buckets.len(),
            scope.servers.len(),
            scope.node_count()
        );
        Ok(scope)
    }

    pub fn from_config(conf: &ScopeConfig) -> Self {
        let (buckets, bucket_lookup) = plan_buckets(&conf.buckets);
        let servers = plan_servers(&conf.servers, &bucket_lookup);
        Scope { buckets, servers }
    }

    /// Run `op` on every node of every server group.
    pub fn apply_to_all_servers<F>(&mut self, op: F)
    where
        F: FnMut(&str, &mut ServerGroup),
    {
        self.apply_to_servers(op, 0, None);
    }

    /// Run `op` on the nodes in positions `start..end` of each server group, in declaration order
    /// of the groups and expansion order of the nodes. `op` gets the node name and the group it
    /// belongs to, and changes it makes to the group are kept in this scope.
    ///
    /// An `end` of `None` means the end of each group's own node list. Bounds are clamped to each
    /// group, so a group with fewer nodes than `start` is skipped.
    pub fn apply_to_servers<F>(&mut self, mut op: F, start: usize, end: Option<usize>)
    where
        F: FnMut(&str, &mut ServerGroup),
    {
        let result = self.try_apply_to_servers(
            |name, group| -> Result<(), Infallible> {
                op(name, group);
                Ok(())
            },
            start,
            end,
        );
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Like [`Scope::apply_to_servers`], but stops at the first error returned by `op`. Changes
    /// made to groups before the error are kept.
    pub fn try_apply_to_servers<E, F>(
        &mut self,
        mut op: F,
        start: usize,
        end: Option<usize>,
    ) -> Result<(), E>
    where
        F: FnMut(&str, &mut ServerGroup) -> Result<(), E>,
    {
        for group in self.servers.iter_mut() {
            let len = group.names.len();
            let end = end.map_or(len, |end| end.min(len));
            let start = start.min(end);

            // `op` may rewrite the group, names included, so walk a snapshot of the names.
            let names = group.names[start..end].to_vec();
            for name in names.iter() {
                op(name, group)?;
            }
        }
        Ok(())
    }

    /// The total number of nodes across all server groups.
    pub fn node_count(&self) -> usize {
        self.servers.iter().map(|group| group.names.len()).sum()
    }

    pub fn bucket(&self, name: &str) -> Option<&BucketGroup> {
        self.buckets.iter().find(|group| group.name == name)
    }

    pub fn server(&self, name: &str) -> Option<&ServerGroup> {
        self.servers.iter().find(|group| group.name == name)
    }

    /// A short human readable description of the plan.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} bucket groups:", self.buckets.len());
        for group in self.buckets.iter() {
            let _ = writeln!(
                out,
                "  {}: {} buckets, type={}, replica={}, ram={}",
                group.name,
                group.names.len(),
                group.kind,
                group.replica,
                group.ram
            );
        }
        let _ = writeln!(
            out,
            "{} server groups, {} nodes:",
            self.servers.len(),
            self.node_count()
        );
        for group in self.servers.iter() {
            let services: Vec<String> = Service::ALL
                .iter()
                .map(|service| format!("{service}={}", group.nodes_with(*service).count()))
                .collect();
            let buckets: Vec<&str> = group.bucket_specs.iter().map(|b| b.name.as_str()).collect();
            let _ = writeln!(
                out,
                "  {}: {} nodes, {}, buckets=[{}]",
                group.name,
                group.names.len(),
                services.join(", "),
                buckets.join(", ")
            );
        }
        out
    }

    pub fn print_summary(&self) {
        print!("{}", self.summary());
    }
}
