//! Access to data pack directories and the resources stored in them.
mod folder;

use std::{
    fmt::{self, Display},
    io,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::load_key::LoadKey;
use crate::resource::PackResource;

pub use folder::{FolderPackSource, JsonPackDataset};

/// An error raised while reading a data pack.
#[derive(Debug, Error)]
pub enum PackError {
    /// The filesystem refused an operation.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
    /// A resource file is not valid JSON or does not match its kind.
    #[error("Malformed resource {}: {source}", .path.display())]
    Parse {
        /// The resource file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },
    /// A key that cannot name a resource.
    #[error("Invalid load key \"{0}\"")]
    InvalidKey(String),
    /// A key was requested that the pack does not contain.
    #[error("No resource at {}", .path.display())]
    MissingResource {
        /// Where the resource was expected.
        path: PathBuf,
    },
}

impl PackError {
    /// Wraps an I/O error, mapping "not found" to [`PackError::MissingResource`].
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::MissingResource { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// The file or directory the error is about, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } | Self::MissingResource { path } => {
                Some(path)
            }
            Self::InvalidKey(_) => None,
        }
    }
}

/// A pack directory or resource that could not be loaded during a scan.
#[derive(Debug)]
pub struct PackFailure {
    /// The directory or file that failed.
    pub location: PathBuf,
    /// The resource that failed, or `None` when a whole pack could not be read and
    /// its keys are unknown.
    pub key: Option<LoadKey>,
    /// Why it failed.
    pub error: PackError,
}

impl PackFailure {
    /// A failure of a whole pack directory.
    pub fn pack(location: impl Into<PathBuf>, error: PackError) -> Self {
        Self {
            location: location.into(),
            key: None,
            error,
        }
    }

    /// Returns true if this failure may have hidden a resource whose key satisfies
    /// `accepts`. Pack-level failures may have hidden anything.
    pub fn may_hide(&self, accepts: impl FnOnce(&LoadKey) -> bool) -> bool {
        self.key.as_ref().is_none_or(accepts)
    }
}

impl From<PackError> for PackFailure {
    fn from(error: PackError) -> Self {
        Self::pack(error.path().map(Path::to_path_buf).unwrap_or_default(), error)
    }
}

impl Display for PackFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location.display(), self.error)
    }
}

/// The values collected by a scan over every pack, together with whatever failed
/// along the way.
#[derive(Debug)]
pub struct PackScan<T> {
    /// The values that were loaded.
    pub values: Vec<T>,
    /// Directories or resources that contributed nothing because they failed.
    pub failures: Vec<PackFailure>,
}

impl<T> PackScan<T> {
    /// A scan that saw no failures.
    #[must_use]
    pub fn complete(values: Vec<T>) -> Self {
        Self {
            values,
            failures: Vec::new(),
        }
    }

    /// Returns true if nothing failed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl<T> Default for PackScan<T> {
    fn default() -> Self {
        Self::complete(Vec::new())
    }
}

/// A root holding one directory per data pack.
pub trait DataPackSource: Send + Sync {
    /// The immediate children of the root that are directories, in the order they are
    /// processed.
    fn pack_dirs(&self) -> Result<Vec<PathBuf>, PackError>;

    /// Opens a pack directory. The returned handle releases its resources when dropped.
    fn open(&self, dir: &Path) -> Result<Box<dyn PackDataset>, PackError>;
}

/// An opened data pack.
pub trait PackDataset {
    /// The directory this dataset was opened from.
    fn dir(&self) -> &Path;

    /// Every key stored in `folder`.
    fn possible_keys(&mut self, folder: &str) -> Result<Vec<LoadKey>, PackError>;

    /// Reads the raw JSON of one resource.
    fn load(&mut self, folder: &str, key: &LoadKey) -> Result<serde_json::Value, PackError>;
}

/// A typed view of one resource kind inside a dataset.
pub struct ResourceLoader<'a, R> {
    dataset: &'a mut dyn PackDataset,
    _marker: PhantomData<R>,
}

impl<'a, R: PackResource> ResourceLoader<'a, R> {
    /// Creates a loader for `R` over `dataset`.
    pub fn new(dataset: &'a mut dyn PackDataset) -> Self {
        Self {
            dataset,
            _marker: PhantomData,
        }
    }

    /// The file a key of this kind is stored in.
    #[must_use]
    pub fn location(&self, key: &LoadKey) -> PathBuf {
        self.dataset
            .dir()
            .join(R::FOLDER)
            .join(format!("{key}.json"))
    }

    /// Every key of this kind in the dataset.
    pub fn possible_keys(&mut self) -> Result<Vec<LoadKey>, PackError> {
        self.dataset.possible_keys(R::FOLDER)
    }

    /// Loads and deserializes one resource.
    pub fn load(&mut self, key: &LoadKey) -> Result<R, PackError> {
        let value = self.dataset.load(R::FOLDER, key)?;
        let data = serde_json::from_value(value).map_err(|source| PackError::Parse {
            path: self.location(key),
            source,
        })?;
        Ok(R::from_data(key.clone(), data))
    }

    /// Loads every key, keeping going past resources that fail.
    pub fn load_all(&mut self, keys: &[LoadKey]) -> (Vec<R>, Vec<PackFailure>) {
        let mut loaded = Vec::with_capacity(keys.len());
        let mut failures = Vec::new();

        for key in keys {
            match self.load(key) {
                Ok(resource) => loaded.push(resource),
                Err(error) => failures.push(PackFailure {
                    location: self.location(key),
                    key: Some(key.clone()),
                    error,
                }),
            }
        }

        (loaded, failures)
    }
}
