// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ServiceTargets;

/// A role that a node in the cluster under test can run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Data,
    Index,
    Query,
}

impl Service {
    pub const ALL: [Service; 3] = [Service::Data, Service::Index, Service::Query];

    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Data => "data",
            Service::Index => "index",
            Service::Query => "query",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq)]
pub struct UnknownService(pub String);

impl fmt::Display for UnknownService {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown service '{}'", self.0)
    }
}

impl std::error::Error for UnknownService {}

impl FromStr for Service {
    type Err = UnknownService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "data" => Ok(Service::Data),
            "index" => Ok(Service::Index),
            "query" => Ok(Service::Query),
            other => Err(UnknownService(other.to_string())),
        }
    }
}

/// The services assigned to each node of a server group, keyed by node name.
pub type NodeServices = BTreeMap<String, Vec<Service>>;

/// Assign services to the nodes in `names` so that each service runs on at most its target
/// number of nodes.
///
/// Nodes are walked in order and each target is consumed greedily. Data is handed out from the
/// front. Index and query are kept toward the tail so they overlap as little as possible: query
/// may only start on the last `query` nodes, and index on the `index` nodes before those. When
/// the targets add up to more than the number of nodes, the windows start at the first node and
/// whatever does not fit is left unassigned.
///
/// Every node runs at least the data service, even if that puts data on more nodes than its
/// target asks for.
pub fn distribute(names: &[String], targets: &ServiceTargets) -> NodeServices {
    let num_nodes = names.len() as u64;
    let mut data = u64::from(targets.data);
    let mut index = u64::from(targets.index);
    let mut query = u64::from(targets.query);

    let index_start = num_nodes.saturating_sub(query + index);
    let query_start = num_nodes.saturating_sub(query);

    let mut node_services = NodeServices::new();
    for (pos, name) in (0u64..).zip(names.iter()) {
        let mut services = Vec::with_capacity(Service::ALL.len());
        if data > 0 {
            services.push(Service::Data);
            data -= 1;
        }
        if pos >= index_start && index > 0 {
            services.push(Service::Index);
            index -= 1;
        }
        if pos >= query_start && query > 0 {
            services.push(Service::Query);
            query -= 1;
        }
        if services.is_empty() {
            services.push(Service::Data);
        }
        node_services.insert(name.clone(), services);
    }

    if index > 0 || query > 0 {
        log::warn!(
            "{} nodes could not hold every requested service: {index} index and {query} query \
             assignments left over",
            names.len()
        );
    }

    node_services
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::expand_name;

    fn targets(data: u32, index: u32, query: u32) -> ServiceTargets {
        ServiceTargets { data, index, query }
    }

    fn count_with(services: &NodeServices, service: Service) -> usize {
        services.values().filter(|s| s.contains(&service)).count()
    }

    #[test]
    fn test_spread() {
        let names = expand_name("node", 5);
        let services = distribute(&names, &targets(5, 2, 1));

        use Service::*;
        assert_eq!(services["node1"], vec![Data]);
        assert_eq!(services["node2"], vec![Data]);
        assert_eq!(services["node3"], vec![Data, Index]);
        assert_eq!(services["node4"], vec![Data, Index]);
        assert_eq!(services["node5"], vec![Data, Query]);
    }

    #[test]
    fn test_fallback_to_data() {
        let names = expand_name("node", 3);
        let services = distribute(&names, &targets(0, 0, 0));

        assert_eq!(services.len(), 3);
        for roles in services.values() {
            assert_eq!(roles, &vec![Service::Data]);
        }
    }

    #[test]
    fn test_dedicated_index_and_query() {
        let names = expand_name("node", 4);
        let services = distribute(&names, &targets(2, 1, 1));

        use Service::*;
        assert_eq!(services["node1"], vec![Data]);
        assert_eq!(services["node2"], vec![Data]);
        // data target is spent by the time the index and query windows start
        assert_eq!(services["node3"], vec![Index]);
        assert_eq!(services["node4"], vec![Query]);
    }

    #[test]
    fn test_targets_are_caps() {
        let names = expand_name("node", 6);
        let services = distribute(&names, &targets(2, 2, 2));

        assert!(count_with(&services, Service::Index) <= 2);
        assert!(count_with(&services, Service::Query) <= 2);
        assert_eq!(count_with(&services, Service::Data), 2);
        assert!(services.values().all(|s| !s.is_empty()));
    }

    #[test]
    fn test_index_query_disjoint_when_they_fit() {
        let names = expand_name("node", 5);
        let services = distribute(&names, &targets(1, 2, 3));

        for roles in services.values() {
            assert!(!(roles.contains(&Service::Index) && roles.contains(&Service::Query)));
        }
        assert_eq!(count_with(&services, Service::Index), 2);
        assert_eq!(count_with(&services, Service::Query), 3);
    }

    #[test]
    fn test_over_capacity() {
        let names = expand_name("node", 2);
        let services = distribute(&names, &targets(0, 5, 5));

        use Service::*;
        assert_eq!(services["node1"], vec![Index, Query]);
        assert_eq!(services["node2"], vec![Index, Query]);
    }

    #[test]
    fn test_no_nodes() {
        assert!(distribute(&[], &targets(3, 1, 1)).is_empty());
    }

    #[test]
    fn test_parse_service() {
        assert_eq!("index".parse::<Service>(), Ok(Service::Index));
        assert_eq!(
            "fts".parse::<Service>(),
            Err(UnknownService("fts".to_string()))
        );
    }
}
