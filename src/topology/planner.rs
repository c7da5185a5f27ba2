//! Topology planning.
//!
//! One pass runs in a fixed order so a seeded RNG reproduces the same network:
//!
//! 1. Validate the generation rules (no randomness drawn before this)
//! 2. Draw the total host count and check it fits the address pool
//! 3. Draw server and infra counts, workstations take the remainder
//! 4. Shuffle the address pool
//! 5. Shuffle the category sequence
//! 6. For each slot: allocate an address, name the host, synthesize it

use super::naming::{generate_hostname, node_id};
use super::types::CategoryCounts;
use crate::blueprint::RepositoryError;
use crate::config::{GenerationRules, RuleError};
use crate::host::HostSynthesizer;
use crate::ip::{host_address, AddressPool};
use crate::snapshot::HostRecord;
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

/// Fatal errors of a planning pass
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("Invalid generation rules: {0}")]
    Rules(#[from] RuleError),

    #[error("Cannot place {requested} hosts: the address pool only holds {capacity}")]
    PoolExhausted { requested: usize, capacity: usize },

    #[error("Drew {servers} servers and {infra} infra hosts for a total of {total}, workstation count would be negative")]
    WorkstationDeficit {
        total: usize,
        servers: usize,
        infra: usize,
    },

    #[error("Host synthesis failed: {0}")]
    Synthesis(#[from] RepositoryError),
}

/// Plans the hosts of one decoy network
#[derive(Debug, Clone)]
pub struct TopologyPlanner<'a> {
    rules: GenerationRules,
    base: [u8; 3],
    synthesizer: HostSynthesizer<'a>,
}

impl<'a> TopologyPlanner<'a> {
    pub fn new(rules: GenerationRules, base: [u8; 3], synthesizer: HostSynthesizer<'a>) -> Self {
        Self {
            rules,
            base,
            synthesizer,
        }
    }

    /// Validate the rules and draw the per-category host counts
    pub fn draw_counts<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<CategoryCounts, PlanError> {
        self.rules.validate()?;

        let types = &self.rules.host_types;
        let total = rng.gen_range(self.rules.hosts_min..=self.rules.hosts_max);
        if total > AddressPool::capacity() {
            return Err(PlanError::PoolExhausted {
                requested: total,
                capacity: AddressPool::capacity(),
            });
        }

        let servers = rng.gen_range(types.servers_min..=types.servers_max);
        let infra = rng.gen_range(types.infra_min..=types.infra_max);

        split_total(total, servers, infra)
    }

    /// Run a full planning pass and return the hosts in assembly order
    pub fn plan<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<HostRecord>, PlanError> {
        let counts = self.draw_counts(rng)?;
        info!(
            "Planning {} hosts: {} servers, {} infra, {} workstations",
            counts.total(),
            counts.servers,
            counts.infra,
            counts.workstations
        );

        let mut pool = AddressPool::shuffled(rng);
        let mut assignments = counts.assignment_sequence();
        assignments.shuffle(rng);

        let mut hosts = Vec::with_capacity(assignments.len());
        for (slot, category) in assignments.into_iter().enumerate() {
            let index = slot + 1;
            let octet = pool.allocate().ok_or(PlanError::PoolExhausted {
                requested: counts.total(),
                capacity: AddressPool::capacity(),
            })?;
            let hostname = generate_hostname(category, index, rng);

            let synthesis = self.synthesizer.synthesize(category, rng)?;
            if synthesis.is_fallback() {
                debug!("{} has no {} blueprint, using fallback", hostname, category);
            }

            let host = HostRecord::new(
                node_id(index),
                host_address(self.base, octet),
                hostname,
                category,
                synthesis.into_payload(),
            );
            debug!("{} -> {} ({})", host.hostname, host.ip, host.blueprint_orig);
            hosts.push(host);
        }

        Ok(hosts)
    }
}

/// Derive the workstation count from the drawn totals
fn split_total(total: usize, servers: usize, infra: usize) -> Result<CategoryCounts, PlanError> {
    let workstations = servers
        .checked_add(infra)
        .and_then(|categories| total.checked_sub(categories))
        .ok_or(PlanError::WorkstationDeficit {
            total,
            servers,
            infra,
        })?;

    Ok(CategoryCounts {
        servers,
        infra,
        workstations,
    })
}
