//! The identifier of a resource inside a data pack.
use std::{
    borrow::Borrow,
    fmt::{self, Display},
    ops::Deref,
    str::FromStr,
};

use crate::pack::PackError;

/// The path of a resource file relative to its kind folder, without the `.json`
/// extension. Segments are separated by `/`, e.g. `zombie` or `mobs/husk`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadKey(String);

impl LoadKey {
    /// Validates and wraps a key.
    pub fn new(key: impl Into<String>) -> Result<Self, PackError> {
        let key = key.into();
        if Self::validate(&key) {
            Ok(Self(key))
        } else {
            Err(PackError::InvalidKey(key))
        }
    }

    /// Returns true if `key` is non-empty and made only of normal path segments.
    #[must_use]
    pub fn validate(key: &str) -> bool {
        !key.is_empty()
            && !key.contains('\\')
            && key
                .split('/')
                .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LoadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LoadKey {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Deref for LoadKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for LoadKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LoadKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
