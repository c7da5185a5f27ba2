//! IP address allocation module.
//!
//! Every decoy network lives in a single /24. Hosts get unique last octets
//! drawn from a shuffled pool of 2..=254.

pub mod pool;

// Re-export commonly used types
pub use pool::{host_address, AddressPool, POOL_FIRST_OCTET, POOL_LAST_OCTET};
