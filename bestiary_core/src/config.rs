use crate::record::EntityRecord;
use crate::types::EntityKind;
use serde::Deserialize;

/// TOML configuration for a catalog file
#[derive(Debug, Deserialize)]
pub struct CatalogFileConfig {
    #[serde(default)]
    pub entities: Vec<EntityConfig>,
}

/// Configuration for a single catalog entry
#[derive(Debug, Deserialize)]
pub struct EntityConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: EntityKind,
    #[serde(default)]
    pub hp: f64,
    #[serde(default)]
    pub psy: f64,
    #[serde(default)]
    pub damage: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub folder: Option<String>,
}

impl EntityConfig {
    /// Convert to a record, rejecting entries without an id or name
    pub fn into_record(self) -> Result<EntityRecord, String> {
        if self.id.trim().is_empty() {
            return Err(format!("entity '{}' has an empty id", self.name));
        }
        if self.name.trim().is_empty() {
            return Err(format!("entity '{}' has an empty name", self.id));
        }

        Ok(EntityRecord {
            id: self.id,
            name: self.name,
            kind: self.kind,
            hit_points: self.hp,
            psy_points: self.psy,
            damage_text: self.damage,
            image: self.image,
            folder: self.folder,
        })
    }
}
