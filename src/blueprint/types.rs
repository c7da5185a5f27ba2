//! Blueprint type definitions.
//!
//! These structures mirror the template document format:
//!
//! ```yaml
//! metadata:
//!   type: server
//!   name: "Ubuntu 22.04 LTS"
//! emulation:
//!   services:
//!     - port: 22
//!       name: ssh
//!   file_tree:
//!     "/etc": ["passwd", "hosts"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// OS label used when a template does not name its operating system
pub const UNKNOWN_OS: &str = "Unknown OS";

/// Fake filesystem facade: path -> entries (usually a list of file names)
pub type FileTree = BTreeMap<String, serde_json::Value>;

/// Host category, fixed set used for population rules and hostname prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostCategory {
    Server,
    Infra,
    Workstation,
}

impl HostCategory {
    pub const ALL: [HostCategory; 3] = [
        HostCategory::Server,
        HostCategory::Infra,
        HostCategory::Workstation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HostCategory::Server => "server",
            HostCategory::Infra => "infra",
            HostCategory::Workstation => "workstation",
        }
    }

    /// Prefix used in generated hostnames
    pub fn hostname_prefix(&self) -> &'static str {
        match self {
            HostCategory::Server => "SERV",
            HostCategory::Infra => "INFR",
            HostCategory::Workstation => "WKST",
        }
    }
}

impl fmt::Display for HostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown host category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for HostCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "server" => Ok(HostCategory::Server),
            "infra" => Ok(HostCategory::Infra),
            "workstation" => Ok(HostCategory::Workstation),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// One emulated network service exposed by a decoy host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmulatedService {
    pub port: u16,
    pub name: String,
}

/// A parsed template document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    pub metadata: BlueprintMetadata,
    #[serde(default)]
    pub emulation: Emulation,
}

impl Blueprint {
    /// OS label shown for hosts built from this blueprint
    pub fn os_label(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or(UNKNOWN_OS)
    }

    pub fn category(&self) -> HostCategory {
        self.metadata.category
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueprintMetadata {
    #[serde(rename = "type")]
    pub category: HostCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Emulation {
    #[serde(default)]
    pub services: Vec<EmulatedService>,
    #[serde(default)]
    pub file_tree: FileTree,
}
