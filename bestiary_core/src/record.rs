use crate::types::{EntityKind, ImageRewrite};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A character or monster as the encounter tools see it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Document id in the host application
    pub id: String,
    /// Display name, also used for token labels
    pub name: String,
    pub kind: EntityKind,
    /// Maximum hit points
    #[serde(default)]
    pub hit_points: f64,
    /// Maximum psychic points, used by monsters that have no hit points
    #[serde(default)]
    pub psy_points: f64,
    /// Free-text damage of the main weapon, e.g. "2d6+3"
    #[serde(default)]
    pub damage_text: Option<String>,
    /// Token image path
    #[serde(default)]
    pub image: String,
    /// Compendium folder the entry lives in
    #[serde(default)]
    pub folder: Option<String>,
}

impl EntityRecord {
    /// Create a record with no damage text, image or folder
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: EntityKind, hit_points: f64) -> Self {
        EntityRecord {
            id: id.into(),
            name: name.into(),
            kind,
            hit_points,
            psy_points: 0.0,
            damage_text: None,
            image: String::new(),
            folder: None,
        }
    }

    pub fn character(id: impl Into<String>, name: impl Into<String>, hit_points: f64) -> Self {
        Self::new(id, name, EntityKind::Character, hit_points)
    }

    pub fn monster(id: impl Into<String>, name: impl Into<String>, hit_points: f64) -> Self {
        Self::new(id, name, EntityKind::Monster, hit_points)
    }

    pub fn with_damage(mut self, damage_text: impl Into<String>) -> Self {
        self.damage_text = Some(damage_text.into());
        self
    }

    pub fn with_psy(mut self, psy_points: f64) -> Self {
        self.psy_points = psy_points;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    /// Hit points that count toward a side's total
    ///
    /// A monster with no hit points is measured by its psychic pool instead.
    pub fn effective_hit_points(&self) -> f64 {
        let hp = self.hit_points.max(0.0);
        if self.kind == EntityKind::Monster && hp == 0.0 {
            return self.psy_points.max(0.0);
        }
        hp
    }

    /// Token image with the asset prefix rewritten
    pub fn token_image(&self, rewrite: &ImageRewrite) -> String {
        rewrite.apply(&self.image)
    }

    /// Catalog ordering: by folder, then by name, both case-insensitive
    ///
    /// Entries without a folder sort first.
    pub fn catalog_cmp(&self, other: &Self) -> Ordering {
        let folder_a = self.folder.as_deref().unwrap_or("").to_lowercase();
        let folder_b = other.folder.as_deref().unwrap_or("").to_lowercase();
        folder_a
            .cmp(&folder_b)
            .then_with(|| self.name.to_lowercase().cmp(&other.name.to_lowercase()))
    }
}
