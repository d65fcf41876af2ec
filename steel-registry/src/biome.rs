//! Custom biome definitions stored under `biomes/` in a data pack.
use std::hash::{Hash, Hasher};

use serde::Deserialize;

use crate::load_key::LoadKey;
use crate::resource::PackResource;

fn default_derivative() -> String {
    "minecraft:plains".to_string()
}

/// The JSON body of a biome definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BiomeData {
    /// Display name.
    pub name: Option<String>,
    /// The vanilla biome this one reports to clients.
    #[serde(default = "default_derivative")]
    pub derivative: String,
    /// Load keys of entity definitions spawned in this biome.
    pub entity_spawners: Vec<String>,
}

impl Default for BiomeData {
    fn default() -> Self {
        Self {
            name: None,
            derivative: default_derivative(),
            entity_spawners: Vec::new(),
        }
    }
}

/// A biome definition loaded from a data pack. Equality is by load key.
#[derive(Debug, Clone)]
pub struct BiomeDefinition {
    load_key: LoadKey,
    data: BiomeData,
}

impl BiomeDefinition {
    /// Creates a definition from its parts.
    #[must_use]
    pub fn new(load_key: LoadKey, data: BiomeData) -> Self {
        Self { load_key, data }
    }

    /// The parsed body.
    #[must_use]
    pub fn data(&self) -> &BiomeData {
        &self.data
    }
}

impl PackResource for BiomeDefinition {
    const FOLDER: &'static str = "biomes";
    const NAME: &'static str = "Biome";

    type Data = BiomeData;

    fn from_data(load_key: LoadKey, data: Self::Data) -> Self {
        Self::new(load_key, data)
    }

    fn load_key(&self) -> &LoadKey {
        &self.load_key
    }
}

impl PartialEq for BiomeDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.load_key == other.load_key
    }
}

impl Eq for BiomeDefinition {}

impl Hash for BiomeDefinition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.load_key.hash(state);
    }
}
