//! datapath: hierarchical data accessor.
//!
//! Loads YAML source documents into an in-memory value tree and resolves
//! dotted path expressions ("home.title") against it. Built for templating
//! and config-lookup scenarios where a caller needs one string given a
//! dotted address into possibly many merged source documents.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod util;

pub use application::{DataLoader, LoadError, LoadResult};
pub use domain::{build_tree, resolve, DomainError, DomainResult, Value};
pub use infrastructure::{FsReader, SourceReader, StaticReader};
