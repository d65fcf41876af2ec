//! The contract shared by every resource kind stored in a data pack.
use serde::de::DeserializeOwned;

use crate::load_key::LoadKey;

/// A resource kind that lives in its own folder of a data pack.
pub trait PackResource: Clone + Send + Sync + 'static {
    /// The folder inside a pack directory holding this kind, e.g. `entities`.
    const FOLDER: &'static str;
    /// The display name of this kind, e.g. `Entity`.
    const NAME: &'static str;

    /// The JSON body of one resource file.
    type Data: DeserializeOwned;

    /// Builds the resource from its key and parsed body.
    fn from_data(load_key: LoadKey, data: Self::Data) -> Self;

    /// The key this resource was loaded under.
    fn load_key(&self) -> &LoadKey;
}
