//! Data packs stored as plain directories of JSON files.
use std::{
    fs,
    path::{Path, PathBuf},
};

use rustc_hash::FxHashMap;

use crate::load_key::LoadKey;
use crate::pack::{DataPackSource, PackDataset, PackError};

const RESOURCE_EXTENSION: &str = "json";

/// A directory whose sub-directories are data packs.
#[derive(Debug, Clone)]
pub struct FolderPackSource {
    root: PathBuf,
}

impl FolderPackSource {
    /// Creates a source over `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DataPackSource for FolderPackSource {
    fn pack_dirs(&self) -> Result<Vec<PathBuf>, PackError> {
        if !self.root.exists() {
            log::warn!("Packs folder {} does not exist", self.root.display());
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.root).map_err(|e| PackError::io(&self.root, e))?;

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| PackError::io(&self.root, e))?;
            let path = entry.path();
            if path.is_dir() {
                dirs.push(path);
            }
        }

        // read_dir order is platform dependent, first-wins needs a stable order
        dirs.sort();
        Ok(dirs)
    }

    fn open(&self, dir: &Path) -> Result<Box<dyn PackDataset>, PackError> {
        Ok(Box::new(JsonPackDataset::open(dir)?))
    }
}

/// An opened pack directory. Keys are discovered lazily per folder and cached until
/// the handle is dropped.
#[derive(Debug)]
pub struct JsonPackDataset {
    dir: PathBuf,
    keys: FxHashMap<String, Vec<LoadKey>>,
}

impl JsonPackDataset {
    /// Opens `dir`, which must be an existing directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, PackError> {
        let dir = dir.into();
        let metadata = fs::metadata(&dir).map_err(|e| PackError::io(&dir, e))?;
        if !metadata.is_dir() {
            return Err(PackError::MissingResource { path: dir });
        }

        log::trace!("Opened data pack {}", dir.display());
        Ok(Self {
            dir,
            keys: FxHashMap::default(),
        })
    }

    fn collect_keys(
        base: &Path,
        dir: &Path,
        keys: &mut Vec<LoadKey>,
    ) -> Result<(), PackError> {
        let entries = fs::read_dir(dir).map_err(|e| PackError::io(dir, e))?;

        for entry in entries {
            let path = entry.map_err(|e| PackError::io(dir, e))?.path();

            if path.is_dir() {
                Self::collect_keys(base, &path, keys)?;
                continue;
            }

            if path.extension().is_none_or(|ext| ext != RESOURCE_EXTENSION) {
                continue;
            }

            let Some(key) = Self::key_for(base, &path) else {
                log::warn!("Skipping resource with unusable name {}", path.display());
                continue;
            };
            keys.push(key);
        }

        Ok(())
    }

    fn key_for(base: &Path, file: &Path) -> Option<LoadKey> {
        let relative = file.strip_prefix(base).ok()?.with_extension("");
        let segments = relative
            .components()
            .map(|c| c.as_os_str().to_str())
            .collect::<Option<Vec<_>>>()?;
        LoadKey::new(segments.join("/")).ok()
    }
}

impl PackDataset for JsonPackDataset {
    fn dir(&self) -> &Path {
        &self.dir
    }

    fn possible_keys(&mut self, folder: &str) -> Result<Vec<LoadKey>, PackError> {
        if let Some(keys) = self.keys.get(folder) {
            return Ok(keys.clone());
        }

        let base = self.dir.join(folder);
        let mut keys = Vec::new();
        if base.is_dir() {
            Self::collect_keys(&base, &base, &mut keys)?;
        }
        keys.sort();

        self.keys.insert(folder.to_string(), keys.clone());
        Ok(keys)
    }

    fn load(&mut self, folder: &str, key: &LoadKey) -> Result<serde_json::Value, PackError> {
        let path = self
            .dir
            .join(folder)
            .join(format!("{key}.{RESOURCE_EXTENSION}"));
        let content = fs::read_to_string(&path).map_err(|e| PackError::io(&path, e))?;
        serde_json::from_str(&content).map_err(|source| PackError::Parse { path, source })
    }
}

impl Drop for JsonPackDataset {
    fn drop(&mut self) {
        log::trace!("Closed data pack {}", self.dir.display());
    }
}
