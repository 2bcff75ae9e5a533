//! Load-time errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Errors raised while loading sources into a tree.
///
/// Every variant names the logical source that failed so callers can report
/// it; the first failure aborts the whole load.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read source {name:?} from {locator:?}")]
    Read {
        name: String,
        locator: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to deserialize source {name:?} from {locator:?}")]
    Deserialize {
        name: String,
        locator: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to build source {name:?}")]
    Build {
        name: String,
        #[source]
        source: DomainError,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;
