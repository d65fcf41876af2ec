//! Custom entity definitions stored under `entities/` in a data pack.
use std::hash::{Hash, Hasher};

use serde::Deserialize;

use crate::load_key::LoadKey;
use crate::resource::PackResource;

const fn default_true() -> bool {
    true
}

fn default_entity_type() -> String {
    "minecraft:pig".to_string()
}

/// The JSON body of an entity definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntityData {
    /// The vanilla entity type to spawn, e.g. `minecraft:zombie`.
    #[serde(rename = "type", default = "default_entity_type")]
    pub entity_type: String,
    /// Name shown above the entity.
    pub custom_name: Option<String>,
    /// Whether the custom name is always rendered.
    pub custom_name_visible: bool,
    /// Outline effect.
    pub glowing: bool,
    /// Whether the entity falls.
    #[serde(default = "default_true")]
    pub gravity: bool,
    /// Whether mob AI is enabled.
    #[serde(default = "default_true")]
    pub ai: bool,
    /// Ignores all damage except the void.
    pub invulnerable: bool,
    /// Suppresses ambient sounds.
    pub silent: bool,
    /// Overrides the max health of living entities.
    pub health: Option<f64>,
}

impl Default for EntityData {
    fn default() -> Self {
        Self {
            entity_type: default_entity_type(),
            custom_name: None,
            custom_name_visible: false,
            glowing: false,
            gravity: true,
            ai: true,
            invulnerable: false,
            silent: false,
            health: None,
        }
    }
}

/// An entity definition loaded from a data pack.
///
/// Two definitions are equal when their load keys are equal, whatever their bodies.
#[derive(Debug, Clone)]
pub struct EntityDefinition {
    load_key: LoadKey,
    data: EntityData,
}

impl EntityDefinition {
    /// Creates a definition from its parts.
    #[must_use]
    pub fn new(load_key: LoadKey, data: EntityData) -> Self {
        Self { load_key, data }
    }

    /// The parsed body.
    #[must_use]
    pub fn data(&self) -> &EntityData {
        &self.data
    }
}

impl PackResource for EntityDefinition {
    const FOLDER: &'static str = "entities";
    const NAME: &'static str = "Entity";

    type Data = EntityData;

    fn from_data(load_key: LoadKey, data: Self::Data) -> Self {
        Self::new(load_key, data)
    }

    fn load_key(&self) -> &LoadKey {
        &self.load_key
    }
}

impl PartialEq for EntityDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.load_key == other.load_key
    }
}

impl Eq for EntityDefinition {}

impl Hash for EntityDefinition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.load_key.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let data: EntityData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, EntityData::default());
        assert!(data.gravity);
        assert_eq!(data.entity_type, "minecraft:pig");
    }

    #[test]
    fn test_camel_case_fields() {
        let data: EntityData = serde_json::from_str(
            r#"{"type": "minecraft:zombie", "customName": "Bob", "customNameVisible": true, "gravity": false}"#,
        )
        .unwrap();
        assert_eq!(data.entity_type, "minecraft:zombie");
        assert_eq!(data.custom_name.as_deref(), Some("Bob"));
        assert!(data.custom_name_visible);
        assert!(!data.gravity);
    }

    #[test]
    fn test_equality_is_by_key() {
        let key = LoadKey::new("zombie").unwrap();
        let a = EntityDefinition::new(key.clone(), EntityData::default());
        let b = EntityDefinition::new(
            key,
            EntityData {
                glowing: true,
                ..EntityData::default()
            },
        );
        assert_eq!(a, b);
    }
}
