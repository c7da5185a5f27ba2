//! Blueprint discovery and indexing.
//!
//! The repository only keeps the category -> file name index in memory.
//! Template contents are parsed again on every `fetch`, so a template edited
//! on disk is picked up by the next synthesis.

use super::types::{Blueprint, HostCategory};
use log::{debug, info, warn};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors raised while loading or reading blueprints
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse blueprint '{name}': {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("No valid blueprints found in {path}")]
    NoBlueprints { path: PathBuf },

    #[error("Blueprint '{0}' is not indexed")]
    UnknownBlueprint(String),
}

/// Index of usable blueprint documents, grouped by host category
#[derive(Debug, Clone)]
pub struct BlueprintRepository {
    root: PathBuf,
    catalog: BTreeMap<HostCategory, Vec<String>>,
}

impl BlueprintRepository {
    /// Scan `dir` for `.yml`/`.yaml` templates and index the valid ones.
    ///
    /// Individual bad documents are skipped with a warning. The load only
    /// fails when the directory cannot be read or no template at all is usable.
    pub fn load(dir: &Path) -> Result<Self, RepositoryError> {
        info!("Indexing blueprints in {:?}", dir);

        let io_err = |source| RepositoryError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && is_template_file(&path) {
                files.push(path);
            }
        }
        // read_dir order is platform dependent
        files.sort();

        let mut catalog: BTreeMap<HostCategory, Vec<String>> = HostCategory::ALL
            .iter()
            .map(|category| (*category, Vec::new()))
            .collect();

        for path in &files {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                warn!("Skipping blueprint with non UTF-8 file name: {:?}", path);
                continue;
            };
            if let Some(category) = classify_document(path, name) {
                debug!("Indexed blueprint {} as {}", name, category);
                if let Some(names) = catalog.get_mut(&category) {
                    names.push(name.to_string());
                }
            }
        }

        let repository = Self {
            root: dir.to_path_buf(),
            catalog,
        };
        if repository.is_empty() {
            return Err(RepositoryError::NoBlueprints {
                path: dir.to_path_buf(),
            });
        }

        for (category, names) in &repository.catalog {
            if names.is_empty() {
                warn!(
                    "No blueprints found for type '{}', hosts of this type will use the fallback blueprint",
                    category
                );
            }
        }

        info!("Indexed {} blueprints from {} documents", repository.len(), files.len());
        Ok(repository)
    }

    /// Blueprint names available for a category, in file name order
    pub fn get(&self, category: HostCategory) -> &[String] {
        self.catalog
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Read and parse an indexed blueprint from disk
    pub fn fetch(&self, name: &str) -> Result<Blueprint, RepositoryError> {
        if !self.catalog.values().any(|names| names.iter().any(|n| n == name)) {
            return Err(RepositoryError::UnknownBlueprint(name.to_string()));
        }

        let path = self.root.join(name);
        let content = fs::read_to_string(&path).map_err(|source| RepositoryError::Io {
            path: path.clone(),
            source,
        })?;

        serde_yaml::from_str(&content).map_err(|source| RepositoryError::Parse {
            name: name.to_string(),
            source,
        })
    }

    /// Total number of indexed blueprints across all categories
    pub fn len(&self) -> usize {
        self.catalog.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn is_template_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yml") | Some("yaml")
    )
}

/// Decide which category a template document belongs to, if any
fn classify_document(path: &Path, name: &str) -> Option<HostCategory> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Error reading {}: {}", name, e);
            return None;
        }
    };

    let document: Value = match serde_yaml::from_str(&content) {
        Ok(document) => document,
        Err(e) => {
            warn!("Error parsing {}: {}", name, e);
            return None;
        }
    };

    if !document.is_mapping() {
        debug!("Skipping {}: document is not a mapping", name);
        return None;
    }

    let Some(declared) = document
        .get("metadata")
        .and_then(|metadata| metadata.get("type"))
        .and_then(Value::as_str)
    else {
        warn!("{} missing 'metadata.type', skipping", name);
        return None;
    };

    let category = match declared.parse::<HostCategory>() {
        Ok(category) => category,
        Err(_) => {
            warn!("{} has invalid type '{}', skipping", name, declared);
            return None;
        }
    };

    // The rest of the document must also be usable at synthesis time
    if let Err(e) = serde_yaml::from_value::<Blueprint>(document) {
        warn!("{} is malformed, skipping: {}", name, e);
        return None;
    }

    Some(category)
}
