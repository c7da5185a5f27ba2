//! Blueprint repository module.
//!
//! Blueprints are YAML templates describing one kind of decoy host: its
//! category, OS label, emulated services and fake file tree. The repository
//! indexes a directory of them by category and re-reads a template every
//! time one is drawn.

pub mod repository;
pub mod types;

// Re-export commonly used types
pub use repository::{BlueprintRepository, RepositoryError};
pub use types::{Blueprint, EmulatedService, FileTree, HostCategory};
