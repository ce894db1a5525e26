use crate::config::CatalogFileConfig;
use crate::record::EntityRecord;
use crate::source::EntitySource;
use crate::types::EntityKind;
use crate::ConfigError;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Catalog of characters and monsters, loaded from TOML files
#[derive(Debug, Default, Clone)]
pub struct Bestiary {
    entities: HashMap<String, EntityRecord>,
}

impl Bestiary {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all catalog files from a directory (recursively)
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let mut bestiary = Self::new();
        bestiary.load_dir(dir)?;
        info!(
            path = %dir.display(),
            entities = bestiary.len(),
            "loaded bestiary"
        );
        Ok(bestiary)
    }

    /// Load catalog files from a directory recursively
    fn load_dir(&mut self, dir: &Path) -> Result<(), ConfigError> {
        if !dir.exists() {
            return Ok(());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(dir.to_path_buf()),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ConfigError::Io {
                error: e,
                path: Some(dir.to_path_buf()),
            })?;
            let path = entry.path();

            if path.is_dir() {
                self.load_dir(&path)?;
            } else if path.extension().is_some_and(|ext| ext == "toml") {
                self.load_file(&path)?;
            }
        }

        Ok(())
    }

    /// Load a single catalog file
    fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;

        let config: CatalogFileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                error: e,
                path: path.to_path_buf(),
            })?;

        for entity in config.entities {
            let record = entity.into_record().map_err(|message| ConfigError::Validation {
                message,
                path: path.to_path_buf(),
            })?;

            if self.contains(&record.id) {
                return Err(ConfigError::Validation {
                    message: format!("duplicate entity id '{}'", record.id),
                    path: path.to_path_buf(),
                });
            }

            debug!(id = %record.id, kind = %record.kind, "registered entity");
            self.insert(record);
        }

        Ok(())
    }

    /// Add or replace a record
    pub fn insert(&mut self, record: EntityRecord) {
        self.entities.insert(record.id.clone(), record);
    }

    /// Get a record by ID
    pub fn get(&self, id: &str) -> Option<&EntityRecord> {
        self.entities.get(id)
    }

    /// Check if a record exists
    pub fn contains(&self, id: &str) -> bool {
        self.entities.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Player characters, ordered by name
    pub fn characters(&self) -> Vec<&EntityRecord> {
        let mut characters = self.of_kind(EntityKind::Character);
        characters.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        characters
    }

    /// Monsters, grouped by folder and then ordered by name
    pub fn monsters(&self) -> Vec<&EntityRecord> {
        let mut monsters = self.of_kind(EntityKind::Monster);
        monsters.sort_by(|a, b| a.catalog_cmp(b));
        monsters
    }

    fn of_kind(&self, kind: EntityKind) -> Vec<&EntityRecord> {
        self.entities.values().filter(|r| r.kind == kind).collect()
    }
}

impl EntitySource for Bestiary {
    fn entity(&self, id: &str) -> Option<&EntityRecord> {
        self.get(id)
    }
}

impl FromIterator<EntityRecord> for Bestiary {
    fn from_iter<I: IntoIterator<Item = EntityRecord>>(iter: I) -> Self {
        let mut bestiary = Bestiary::new();
        for record in iter {
            bestiary.insert(record);
        }
        bestiary
    }
}
