//! Resources loaded from data packs.
//!
//! A data pack root holds one directory per pack. Every pack stores its resources as
//! JSON files grouped by kind (`entities/`, `biomes/`), and every resource is identified
//! by its [`LoadKey`]: the file path relative to the kind folder, without extension.
//!
//! The [`ResourceRegistry`] merges all packs of a root into one snapshot, keeping the
//! first definition seen for a key.

pub mod biome;
pub mod entity;
pub mod load_key;
pub mod pack;
pub mod registry;
pub mod resource;

pub use biome::{BiomeData, BiomeDefinition};
pub use entity::{EntityData, EntityDefinition};
pub use load_key::LoadKey;
pub use pack::{
    DataPackSource, FolderPackSource, JsonPackDataset, PackDataset, PackError, PackFailure,
    PackScan, ResourceLoader,
};
pub use registry::ResourceRegistry;
pub use resource::PackResource;
