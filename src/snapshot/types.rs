//! Snapshot type definitions.
//!
//! These structures serialize to the network map document handed to the
//! delivery channel:
//!
//! ```json
//! {
//!   "network_metadata": {"id": "...", "domain": "...", "total_nodes": 2, "generated_at": "..."},
//!   "nodes": [{"id": "node-1", "ip": "192.168.1.2", "type": "server", ...}]
//! }
//! ```

use crate::blueprint::{EmulatedService, FileTree, HostCategory};
use crate::config::NetworkConfig;
use crate::host::HostPayload;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Reachability reported for a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostStatus {
    Online,
    Offline,
}

/// One synthesized decoy host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostRecord {
    pub id: String,
    pub ip: Ipv4Addr,
    pub hostname: String,
    #[serde(rename = "type")]
    pub category: HostCategory,
    pub status: HostStatus,
    pub blueprint_orig: String,
    pub os_name: String,
    pub emulated_services: Vec<EmulatedService>,
    pub file_tree: FileTree,
}

impl HostRecord {
    /// Merge allocated identity fields with a synthesized payload
    pub fn new(
        id: String,
        ip: Ipv4Addr,
        hostname: String,
        category: HostCategory,
        payload: HostPayload,
    ) -> Self {
        Self {
            id,
            ip,
            hostname,
            category,
            status: HostStatus::Online,
            blueprint_orig: payload.blueprint_orig,
            os_name: payload.os_name,
            emulated_services: payload.emulated_services,
            file_tree: payload.file_tree,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkMetadata {
    pub id: String,
    pub domain: String,
    pub total_nodes: usize,
    pub generated_at: String,
}

/// Complete output of one generation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub network_metadata: NetworkMetadata,
    pub nodes: Vec<HostRecord>,
}

impl NetworkSnapshot {
    /// Order hosts by address and attach metadata.
    ///
    /// `Ipv4Addr` orders octet by octet, so `.2` sorts before `.10`.
    pub fn assemble(
        network: &NetworkConfig,
        mut hosts: Vec<HostRecord>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        hosts.sort_by_key(|host| host.ip);

        Self {
            network_metadata: NetworkMetadata {
                id: network.id.clone(),
                domain: network.domain.clone(),
                total_nodes: hosts.len(),
                generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            },
            nodes: hosts,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn count(&self, category: HostCategory) -> usize {
        self.nodes.iter().filter(|node| node.category == category).count()
    }
}
