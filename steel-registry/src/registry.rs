//! The per-call snapshot of every resource of one kind.
use rustc_hash::FxHashMap;

use crate::load_key::LoadKey;
use crate::pack::{DataPackSource, PackError, PackFailure, PackScan, ResourceLoader};
use crate::resource::PackResource;

/// A snapshot of one resource kind merged from every pack of a source.
///
/// The first resource inserted under a key wins; later ones are dropped. Values keep
/// their insertion order.
pub struct ResourceRegistry<R> {
    by_key: FxHashMap<LoadKey, usize>,
    entries: Vec<R>,
}

impl<R: PackResource> Default for ResourceRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: PackResource> ResourceRegistry<R> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_key: FxHashMap::default(),
            entries: Vec::new(),
        }
    }

    /// Inserts `resource` unless its key is already present. Returns whether it was
    /// inserted.
    pub fn put_if_absent(&mut self, resource: R) -> bool {
        if self.by_key.contains_key(resource.load_key()) {
            return false;
        }
        self.by_key
            .insert(resource.load_key().clone(), self.entries.len());
        self.entries.push(resource);
        true
    }

    /// Gets a resource by its key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&R> {
        self.by_key.get(key).map(|&index| &self.entries[index])
    }

    /// Returns the number of resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the registry, returning resources in insertion order.
    #[must_use]
    pub fn into_values(self) -> Vec<R> {
        self.entries
    }

    /// Loads every resource of kind `R` from every pack of `source`.
    ///
    /// Only a failure to list the packs themselves is an error. A pack that cannot be
    /// opened, listed, or whose resources cannot be read is recorded in the returned
    /// failures and contributes whatever it managed to load. Each pack is closed before
    /// the next one is opened.
    pub fn scan(source: &dyn DataPackSource) -> Result<PackScan<R>, PackError> {
        let mut registry = Self::new();
        let mut failures = Vec::new();

        for dir in source.pack_dirs()? {
            let mut dataset = match source.open(&dir) {
                Ok(dataset) => dataset,
                Err(error) => {
                    failures.push(PackFailure::pack(dir, error));
                    continue;
                }
            };

            let mut loader = ResourceLoader::<R>::new(dataset.as_mut());
            let keys = match loader.possible_keys() {
                Ok(keys) => keys,
                Err(error) => {
                    failures.push(PackFailure::pack(dir, error));
                    continue;
                }
            };

            let (loaded, load_failures) = loader.load_all(&keys);
            failures.extend(load_failures);

            for resource in loaded {
                let key = resource.load_key().clone();
                if !registry.put_if_absent(resource) {
                    log::debug!(
                        "{} \"{key}\" in {} is shadowed by an earlier pack",
                        R::NAME,
                        dir.display()
                    );
                }
            }
        }

        Ok(PackScan {
            values: registry.into_values(),
            failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::entity::{EntityData, EntityDefinition};
    use crate::pack::FolderPackSource;

    fn entity(key: &str, glowing: bool) -> EntityDefinition {
        EntityDefinition::new(
            LoadKey::new(key).unwrap(),
            EntityData {
                glowing,
                ..EntityData::default()
            },
        )
    }

    #[test]
    fn test_first_insert_wins() {
        let mut registry = ResourceRegistry::new();
        assert!(registry.put_if_absent(entity("zombie", true)));
        assert!(!registry.put_if_absent(entity("zombie", false)));
        assert!(registry.put_if_absent(entity("cow", false)));

        assert_eq!(registry.len(), 2);
        assert!(registry.get("zombie").unwrap().data().glowing);
        assert!(registry.get("pig").is_none());
    }

    #[test]
    fn test_scan_records_failing_keys() {
        let temp = TempDir::new().unwrap();
        let entities = temp.path().join("a/entities");
        fs::create_dir_all(&entities).unwrap();
        fs::write(entities.join("cow.json"), "{}").unwrap();
        fs::write(entities.join("broken_pig.json"), "{ nope").unwrap();

        let scan =
            ResourceRegistry::<EntityDefinition>::scan(&FolderPackSource::new(temp.path()))
                .unwrap();
        assert_eq!(scan.values.len(), 1);
        assert_eq!(scan.failures.len(), 1);

        let failure = &scan.failures[0];
        assert_eq!(failure.key.as_deref(), Some("broken_pig"));
        assert!(matches!(failure.error, PackError::Parse { .. }));
        assert!(failure.may_hide(|key| key.contains("pig")));
        assert!(!failure.may_hide(|key| key.contains("xyz")));

        let whole_pack = PackFailure::pack(
            temp.path().join("b"),
            PackError::MissingResource {
                path: temp.path().join("b"),
            },
        );
        assert!(whole_pack.may_hide(|_| false));
    }

    #[test]
    fn test_values_keep_insertion_order() {
        let mut registry = ResourceRegistry::new();
        registry.put_if_absent(entity("pig", false));
        registry.put_if_absent(entity("cow", false));

        let keys: Vec<String> = registry
            .into_values()
            .iter()
            .map(|e| e.load_key().to_string())
            .collect();
        assert_eq!(keys, vec!["pig", "cow"]);
    }
}
