//! Network snapshot module.
//!
//! A snapshot is the complete, address-ordered result of one generation pass.
//! The writer persists it as JSON and publishes it to the store, which is the
//! only place the current snapshot lives.

pub mod store;
pub mod summary;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use store::SnapshotStore;
pub use summary::{render_table, InventorySummary};
pub use types::{HostRecord, HostStatus, NetworkMetadata, NetworkSnapshot};
pub use writer::SnapshotWriter;
