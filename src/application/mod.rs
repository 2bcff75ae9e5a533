//! Application layer: loading and assembly
//!
//! This layer orchestrates domain logic and depends on the I/O boundary traits.

pub mod error;
pub mod loader;

pub use error::{LoadError, LoadResult};
pub use loader::DataLoader;
