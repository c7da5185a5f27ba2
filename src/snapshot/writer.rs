//! Snapshot finalization and persistence.

use super::store::SnapshotStore;
use super::types::{HostRecord, NetworkSnapshot};
use crate::config::NetworkConfig;
use chrono::{DateTime, Utc};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Writes finished host lists as the network map document
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    network: NetworkConfig,
    output_path: PathBuf,
}

impl SnapshotWriter {
    pub fn new(network: &NetworkConfig, output_path: impl Into<PathBuf>) -> Self {
        Self {
            network: network.clone(),
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Finalize `hosts` with the current time, persist and publish them
    pub fn write(&self, hosts: Vec<HostRecord>, store: &SnapshotStore) -> Result<Arc<NetworkSnapshot>> {
        self.write_at(hosts, store, Utc::now())
    }

    /// Same as `write` with an explicit generation timestamp.
    ///
    /// The file is replaced by rename and the store is only updated once the
    /// file is in place, so a failure leaves the previous snapshot current.
    pub fn write_at(
        &self,
        hosts: Vec<HostRecord>,
        store: &SnapshotStore,
        generated_at: DateTime<Utc>,
    ) -> Result<Arc<NetworkSnapshot>> {
        let snapshot = Arc::new(NetworkSnapshot::assemble(&self.network, hosts, generated_at));
        let json = snapshot.to_json().wrap_err("Failed to serialize network snapshot")?;

        self.persist(&json)?;
        store.replace(Arc::clone(&snapshot));

        info!(
            "Network snapshot with {} nodes saved to {:?}",
            snapshot.network_metadata.total_nodes, self.output_path
        );
        Ok(snapshot)
    }

    fn persist(&self, json: &str) -> Result<()> {
        if let Some(parent) = self.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create output directory '{}'", parent.display()))?;
        }

        let mut temp_path = self.output_path.clone().into_os_string();
        temp_path.push(".tmp");
        let temp_path = PathBuf::from(temp_path);

        fs::write(&temp_path, json)
            .wrap_err_with(|| format!("Failed to write '{}'", temp_path.display()))?;
        if let Err(err) = fs::rename(&temp_path, &self.output_path) {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                warn!("Failed to remove '{}': {}", temp_path.display(), cleanup);
            }
            return Err(err).wrap_err_with(|| {
                format!(
                    "Failed to move '{}' into place at '{}'",
                    temp_path.display(),
                    self.output_path.display()
                )
            });
        }
        Ok(())
    }
}
