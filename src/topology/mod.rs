//! Network topology module.
//!
//! Decides how many hosts of each category a decoy network gets, gives each
//! host a unique address and a name, and assembles the host records.

pub mod naming;
pub mod planner;
pub mod types;

// Re-export key types and functions for easier access
pub use naming::{generate_hostname, node_id, DEPARTMENTS};
pub use planner::{PlanError, TopologyPlanner};
pub use types::CategoryCounts;
