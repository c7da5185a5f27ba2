//! Inventory summary of a generated network, used for the console report.

use super::types::NetworkSnapshot;
use crate::blueprint::HostCategory;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InventorySummary {
    pub servers: usize,
    pub infra: usize,
    pub workstations: usize,
}

impl InventorySummary {
    pub fn from_snapshot(snapshot: &NetworkSnapshot) -> Self {
        Self {
            servers: snapshot.count(HostCategory::Server),
            infra: snapshot.count(HostCategory::Infra),
            workstations: snapshot.count(HostCategory::Workstation),
        }
    }

    pub fn total(&self) -> usize {
        self.servers + self.infra + self.workstations
    }
}

/// Host table printed after a generation pass
pub fn render_table(snapshot: &NetworkSnapshot) -> String {
    let rule = "-".repeat(85);
    let mut out = String::new();

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "{:<15} | {:<15} | {:<12} | {:<25}", "HOSTNAME", "IP", "TYPE", "BLUEPRINT");
    let _ = writeln!(out, "{}", rule);
    for node in &snapshot.nodes {
        let _ = writeln!(
            out,
            "{:<15} | {:<15} | {:<12} | {:<25}",
            node.hostname,
            node.ip.to_string(),
            node.category.as_str(),
            node.blueprint_orig
        );
    }
    let _ = writeln!(out, "{}", rule);
    out
}
