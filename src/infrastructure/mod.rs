//! Infrastructure layer: I/O implementations
//!
//! This layer implements the source-reading boundary trait.

pub mod traits;

pub use traits::{FsReader, SourceReader, StaticReader};
