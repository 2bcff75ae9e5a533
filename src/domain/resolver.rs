//! Dotted-path resolution against a value tree.

use crate::domain::error::DomainResult;
use crate::domain::value::Value;

/// Field separator in path expressions.
pub const SEPARATOR: char = '.';

/// Resolve a dotted path ("home.title") against `root` and return the
/// terminal leaf's value.
///
/// The path is split on [`SEPARATOR`] and walked left to right. The first
/// failing step aborts resolution: an absent key yields
/// [`DomainError::KeyNotFound`](crate::domain::DomainError::KeyNotFound),
/// stepping into a leaf yields
/// [`DomainError::ChildOnLeaf`](crate::domain::DomainError::ChildOnLeaf).
/// A path that ends on a node fails with
/// [`DomainError::ValueOnNode`](crate::domain::DomainError::ValueOnNode)
/// rather than returning an empty string.
///
/// Empty fields are not special-cased: "" is an ordinary key, so an empty
/// path resolves only if the root node actually carries an empty key. A
/// field name containing the separator is not expressible.
pub fn resolve<'a>(path: &str, root: &'a Value) -> DomainResult<&'a str> {
    let mut current = root;
    for field in path.split(SEPARATOR) {
        current = current.child(field)?;
    }
    current.value()
}
