//! Domain layer: the value tree and its algorithms
//!
//! This layer is independent of external concerns (no I/O, no source loading).

pub mod builder;
pub mod error;
pub mod resolver;
pub mod value;

pub use builder::build_tree;
pub use error::{DomainError, DomainResult};
pub use resolver::resolve;
pub use value::Value;
