//! # Ansanet - Decoy network generator
//!
//! This library synthesizes a plausible fake computer network: a set of
//! decoy hosts with unique IP addresses, operating system labels, emulated
//! services and fake file trees, meant to be shown to an attacker as bait.
//!
//! ## Overview
//!
//! A generation pass turns a small set of declarative host templates
//! ("blueprints") and numeric population rules into one validated,
//! uniquely-addressed network snapshot, written as JSON for the delivery
//! channel to serve.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `config`: Typed network parameters and generation rule validation
//! - `config_loader`: Loading the network parameters YAML file
//! - `blueprint`: Blueprint template types and the category-indexed repository
//! - `host`: Host synthesizer drawing one blueprint per host
//! - `ip`: Last-octet address pool
//! - `topology`: Population planning, hostnames and host record assembly
//! - `snapshot`: Snapshot types, writer, current-snapshot store and summary
//! - `orchestrator`: One complete generation pass
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ansanet::{config_loader, orchestrator, snapshot::SnapshotStore};
//! use rand::SeedableRng;
//! use std::path::Path;
//!
//! let config = config_loader::load_config(Path::new("parameters/network.yml"))?;
//! let store = SnapshotStore::new();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//!
//! let snapshot = orchestrator::generate_network(
//!     &config,
//!     Path::new("blueprints"),
//!     Path::new("network_map.json"),
//!     &store,
//!     &mut rng,
//! )?;
//! println!("{} hosts generated", snapshot.network_metadata.total_nodes);
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! ## Configuration Format
//!
//! ```yaml
//! network:
//!   id: "ANSA-CORP-01"
//!   domain: "corp.ansanet.local"
//!   base_ip: "192.168.1"
//!   generation_rules:
//!     hosts_min: 12
//!     hosts_max: 24
//!     host_types:
//!       servers_min: 2
//!       servers_max: 4
//!       infra_min: 1
//!       infra_max: 3
//! ```
//!
//! ## Error Handling
//!
//! Module-level failures are typed (`thiserror`) so callers can tell fatal
//! causes apart; the orchestration layer reports them through `color_eyre`.

pub mod blueprint;
pub mod config;
pub mod config_loader;
pub mod host;
pub mod ip;
pub mod orchestrator;
pub mod snapshot;
pub mod topology;
