//! Host synthesis module.
//!
//! Turns a host category into the emulated attributes of one decoy host by
//! drawing a blueprint from the repository, or the fixed fallback payload
//! when the category has no blueprint.

pub mod synthesizer;

pub use synthesizer::{HostPayload, HostSynthesizer, Synthesis, FALLBACK_BLUEPRINT};
