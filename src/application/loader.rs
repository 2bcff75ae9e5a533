//! Multi-source loader: assembles per-source trees under one root.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::application::error::{LoadError, LoadResult};
use crate::domain::{build_tree, Value};
use crate::infrastructure::{FsReader, SourceReader};

/// Loads named sources through a [`SourceReader`] and assembles their trees
/// under a single root node keyed by logical name.
pub struct DataLoader<R = FsReader> {
    reader: R,
}

impl DataLoader<FsReader> {
    /// Loader backed by the real filesystem.
    pub fn new() -> Self {
        Self { reader: FsReader }
    }
}

impl Default for DataLoader<FsReader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SourceReader> DataLoader<R> {
    /// Loader backed by a custom [`SourceReader`].
    pub fn with_reader(reader: R) -> Self {
        Self { reader }
    }

    /// Load one source into a tree.
    ///
    /// Reads raw text via the reader, deserializes it as YAML, then casts
    /// the result into a [`Value`] tree.
    #[instrument(skip(self))]
    pub fn load_source(&self, name: &str, locator: &str) -> LoadResult<Value> {
        let raw = self.reader.read(locator).map_err(|source| LoadError::Read {
            name: name.to_string(),
            locator: locator.to_string(),
            source,
        })?;

        let document: serde_yaml::Value =
            serde_yaml::from_str(&raw).map_err(|source| LoadError::Deserialize {
                name: name.to_string(),
                locator: locator.to_string(),
                source,
            })?;

        build_tree(&document).map_err(|source| LoadError::Build {
            name: name.to_string(),
            source,
        })
    }

    /// Load every source and attach each tree under its logical name.
    ///
    /// The first source that fails to read, deserialize, or build aborts
    /// the whole load; no partial root is returned. Sources are expected to
    /// own disjoint logical names; with duplicate names the last one loaded
    /// wins the slot in the root node.
    pub fn load(&self, sources: &BTreeMap<String, String>) -> LoadResult<Value> {
        let mut root = Value::node();
        for (name, locator) in sources {
            debug!(name = %name, locator = %locator, "loading source");
            let tree = self.load_source(name, locator)?;
            root.insert(name.clone(), tree)?;
        }
        Ok(root)
    }
}
