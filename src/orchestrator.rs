//! Generation orchestrator.
//!
//! Runs one full pass: blueprint indexing, topology planning, host synthesis
//! and snapshot writing. Any fatal error aborts the pass before the snapshot
//! file or the store is touched.

use crate::blueprint::BlueprintRepository;
use crate::config::Config;
use crate::host::HostSynthesizer;
use crate::snapshot::{HostRecord, NetworkSnapshot, SnapshotStore, SnapshotWriter};
use crate::topology::TopologyPlanner;
use color_eyre::Result;
use log::info;
use rand::Rng;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Network generator bound to one configuration and blueprint set
#[derive(Debug)]
pub struct NetworkGenerator {
    config: Config,
    base: [u8; 3],
    repository: BlueprintRepository,
    writer: SnapshotWriter,
}

impl NetworkGenerator {
    /// Validate the configuration and index the blueprint directory
    pub fn new(config: Config, blueprints_dir: &Path, output_path: impl Into<PathBuf>) -> Result<Self> {
        config.validate()?;
        let base = config.network.base_octets()?;
        let repository = BlueprintRepository::load(blueprints_dir)?;
        let writer = SnapshotWriter::new(&config.network, output_path);

        Ok(Self {
            config,
            base,
            repository,
            writer,
        })
    }

    pub fn repository(&self) -> &BlueprintRepository {
        &self.repository
    }

    pub fn output_path(&self) -> &Path {
        self.writer.output_path()
    }

    /// Plan and synthesize the hosts without writing anything
    pub fn plan<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<HostRecord>> {
        let planner = TopologyPlanner::new(
            self.config.network.generation_rules,
            self.base,
            HostSynthesizer::new(&self.repository),
        );
        Ok(planner.plan(rng)?)
    }

    /// Run a complete pass and publish the result.
    ///
    /// Takes `&mut self` so a generator never runs two passes at once.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        store: &SnapshotStore,
        rng: &mut R,
    ) -> Result<Arc<NetworkSnapshot>> {
        info!("Generating network '{}'", self.config.network.id);
        let hosts = self.plan(rng)?;
        self.writer.write(hosts, store)
    }
}

/// Load blueprints, generate one network and write it to `output_path`
pub fn generate_network<R: Rng + ?Sized>(
    config: &Config,
    blueprints_dir: &Path,
    output_path: &Path,
    store: &SnapshotStore,
    rng: &mut R,
) -> Result<Arc<NetworkSnapshot>> {
    let mut generator = NetworkGenerator::new(config.clone(), blueprints_dir, output_path)?;
    generator.generate(store, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprint::RepositoryError;
    use crate::config::{GenerationRules, HostTypeRules, NetworkConfig};
    use crate::topology::PlanError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;
    use tempfile::TempDir;

    fn config(hosts_min: usize, hosts_max: usize) -> Config {
        Config {
            general: None,
            network: NetworkConfig {
                id: "ANSA-UNIT".to_string(),
                domain: "unit.local".to_string(),
                base_ip: "10.20.30".to_string(),
                generation_rules: GenerationRules {
                    hosts_min,
                    hosts_max,
                    host_types: HostTypeRules { servers_min: 1, servers_max: 2, infra_min: 1, infra_max: 2 },
                },
            },
        }
    }

    fn blueprints() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("linux-web.yml"),
            "metadata:\n  type: server\n  name: \"Debian 12\"\nemulation:\n  services:\n    - {port: 80, name: http}\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_generate_writes_and_publishes() {
        let dir = blueprints();
        let out = TempDir::new().unwrap();
        let output = out.path().join("network_map.json");
        let store = SnapshotStore::new();
        let mut rng = StdRng::seed_from_u64(21);

        let snapshot = generate_network(&config(8, 12), dir.path(), &output, &store, &mut rng).unwrap();

        assert!(output.exists());
        assert_eq!(store.current().unwrap(), snapshot);
        assert_eq!(snapshot.network_metadata.total_nodes, snapshot.nodes.len());
        assert!((8..=12).contains(&snapshot.nodes.len()));
        assert!(snapshot.nodes.windows(2).all(|w| w[0].ip < w[1].ip));
    }

    #[test]
    fn test_fatal_plan_error_keeps_previous_snapshot() {
        let dir = blueprints();
        let out = TempDir::new().unwrap();
        let output = out.path().join("network_map.json");
        let store = SnapshotStore::new();
        let mut rng = StdRng::seed_from_u64(4);

        let first = generate_network(&config(8, 8), dir.path(), &output, &store, &mut rng).unwrap();
        let written = fs::read_to_string(&output).unwrap();

        let err = generate_network(&config(260, 270), dir.path(), &output, &store, &mut rng).unwrap_err();
        assert!(matches!(err.downcast_ref::<PlanError>(), Some(PlanError::PoolExhausted { .. })));
        assert_eq!(fs::read_to_string(&output).unwrap(), written);
        assert_eq!(store.current().unwrap(), first);
    }

    #[test]
    fn test_empty_blueprint_directory_is_fatal() {
        let dir = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();

        let err = NetworkGenerator::new(config(8, 8), dir.path(), out.path().join("map.json")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RepositoryError>(),
            Some(RepositoryError::NoBlueprints { .. })
        ));
    }

    #[test]
    fn test_plan_does_not_write() {
        let dir = blueprints();
        let out = TempDir::new().unwrap();
        let output = out.path().join("network_map.json");
        let generator = NetworkGenerator::new(config(8, 8), dir.path(), &output).unwrap();

        let hosts = generator.plan(&mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(hosts.len(), 8);
        assert!(!output.exists());
        assert_eq!(generator.repository().len(), 1);
    }
}
