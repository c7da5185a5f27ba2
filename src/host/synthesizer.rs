use crate::blueprint::types::UNKNOWN_OS;
use crate::blueprint::{BlueprintRepository, EmulatedService, FileTree, HostCategory, RepositoryError};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Name recorded for hosts built without a template
pub const FALLBACK_BLUEPRINT: &str = "generic-fallback.yml";

/// Emulated attributes of one host, projected from a blueprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostPayload {
    pub blueprint_orig: String,
    pub os_name: String,
    pub emulated_services: Vec<EmulatedService>,
    pub file_tree: FileTree,
}

impl HostPayload {
    /// Generic host: unknown OS, answers ping, one README at the root
    pub fn fallback() -> Self {
        let mut file_tree = FileTree::new();
        file_tree.insert("/".to_string(), serde_json::json!(["README.txt"]));

        Self {
            blueprint_orig: FALLBACK_BLUEPRINT.to_string(),
            os_name: UNKNOWN_OS.to_string(),
            emulated_services: vec![EmulatedService {
                port: 0,
                name: "icmp/ping".to_string(),
            }],
            file_tree,
        }
    }
}

/// Outcome of one synthesis
#[derive(Debug, Clone, PartialEq)]
pub enum Synthesis {
    /// A real template was drawn
    Found { blueprint: String, payload: HostPayload },
    /// The category had no template
    Fallback,
}

impl Synthesis {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Synthesis::Fallback)
    }

    pub fn into_payload(self) -> HostPayload {
        match self {
            Synthesis::Found { payload, .. } => payload,
            Synthesis::Fallback => HostPayload::fallback(),
        }
    }
}

/// Draws blueprints for requested categories
#[derive(Debug, Clone, Copy)]
pub struct HostSynthesizer<'a> {
    repository: &'a BlueprintRepository,
}

impl<'a> HostSynthesizer<'a> {
    pub fn new(repository: &'a BlueprintRepository) -> Self {
        Self { repository }
    }

    /// Pick a blueprint for `category` uniformly at random and materialize it.
    ///
    /// Repeats across hosts are allowed. Only a template that became unreadable
    /// after indexing makes this fail.
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        category: HostCategory,
        rng: &mut R,
    ) -> Result<Synthesis, RepositoryError> {
        let Some(name) = self.repository.get(category).choose(rng) else {
            debug!("No blueprint for {}, using {}", category, FALLBACK_BLUEPRINT);
            return Ok(Synthesis::Fallback);
        };

        let blueprint = self.repository.fetch(name)?;
        let payload = HostPayload {
            blueprint_orig: name.clone(),
            os_name: blueprint.os_label().to_string(),
            emulated_services: blueprint.emulation.services,
            file_tree: blueprint.emulation.file_tree,
        };

        Ok(Synthesis::Found {
            blueprint: name.clone(),
            payload,
        })
    }
}
