//! Topology type definitions.

use crate::blueprint::HostCategory;

/// Host counts drawn for one generation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCounts {
    pub servers: usize,
    pub infra: usize,
    pub workstations: usize,
}

impl CategoryCounts {
    pub fn total(&self) -> usize {
        self.servers + self.infra + self.workstations
    }

    pub fn get(&self, category: HostCategory) -> usize {
        match category {
            HostCategory::Server => self.servers,
            HostCategory::Infra => self.infra,
            HostCategory::Workstation => self.workstations,
        }
    }

    /// One category tag per host, grouped by category (servers first)
    pub fn assignment_sequence(&self) -> Vec<HostCategory> {
        HostCategory::ALL
            .iter()
            .flat_map(|category| std::iter::repeat(*category).take(self.get(*category)))
            .collect()
    }
}
