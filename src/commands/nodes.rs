// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

use clap::Args;

use crate::{
    commands::{load_scope, Cli, HandledResult},
    scope::Scope,
    service::Service,
};

#[derive(Args, Debug, Clone, Default)]
pub struct NodesArgs {
    /// Position of the first node to list in each server group.
    #[arg(long, default_value_t = 0)]
    pub start: usize,

    /// Position after the last node to list in each server group. Defaults to the group's size.
    #[arg(long)]
    pub end: Option<usize>,

    /// Only list nodes running this service.
    #[arg(long)]
    pub service: Option<Service>,
}

pub fn nodes(cli: &Cli, args: &NodesArgs) -> HandledResult<()> {
    let mut scope = load_scope(cli)?;

    for line in node_lines(&mut scope, args) {
        println!("{line}");
    }

    Ok(())
}

/// Format one `<group> <node> <services>` line per node selected by `args`.
fn node_lines(scope: &mut Scope, args: &NodesArgs) -> Vec<String> {
    let mut lines = Vec::new();
    scope.apply_to_servers(
        |node, group| {
            let services = group.services_for(node).unwrap_or_default();
            if let Some(wanted) = args.service {
                if !services.contains(&wanted) {
                    return;
                }
            }
            let services: Vec<&str> = services.iter().map(|s| s.as_str()).collect();
            lines.push(format!("{} {} {}", group.name, node, services.join(",")));
        },
        args.start,
        args.end,
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ScopeConfig, ServerConfig, ServiceTargets};

    fn scope() -> Scope {
        Scope::from_config(&ScopeConfig {
            buckets: vec![],
            servers: vec![ServerConfig {
                name: "local".to_string(),
                count: 3,
                services: ServiceTargets {
                    data: 2,
                    index: 1,
                    query: 1,
                },
                ..Default::default()
            }],
        })
    }

    #[test]
    fn test_node_lines() {
        let lines = node_lines(&mut scope(), &NodesArgs::default());
        assert_eq!(
            lines,
            vec![
                "local local1 data",
                "local local2 data,index",
                "local local3 query",
            ]
        );
    }

    #[test]
    fn test_node_lines_filtered() {
        let args = NodesArgs {
            start: 1,
            end: None,
            service: Some(Service::Data),
        };
        assert_eq!(
            node_lines(&mut scope(), &args),
            vec!["local local2 data,index"]
        );
    }
}
