//! Domain entity: the two-variant value tree.

use std::collections::BTreeMap;

use crate::domain::error::{DomainError, DomainResult};

/// A loaded data tree.
///
/// Exactly one of an inner node with named children or a terminal string
/// leaf. Trees are assembled bottom-up during loading and treated as
/// immutable afterwards; [`Value::set_title`] is the single sanctioned
/// post-construction mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// More data below this key.
    Node(BTreeMap<String, Value>),
    /// A terminal scalar.
    Leaf(String),
}

impl Value {
    /// Create an empty node.
    pub fn node() -> Self {
        Value::Node(BTreeMap::new())
    }

    /// Create a leaf holding `value`.
    pub fn leaf(value: impl Into<String>) -> Self {
        Value::Leaf(value.into())
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Value::Node(_))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Value::Leaf(_))
    }

    /// Look up the child at `key`.
    ///
    /// Valid only on a node. An absent key fails fast with
    /// [`DomainError::KeyNotFound`]; called on a leaf it fails with
    /// [`DomainError::ChildOnLeaf`]. It never silently returns empty data.
    pub fn child(&self, key: &str) -> DomainResult<&Value> {
        match self {
            Value::Node(children) => children.get(key).ok_or_else(|| DomainError::KeyNotFound {
                key: key.to_string(),
            }),
            Value::Leaf(_) => Err(DomainError::ChildOnLeaf {
                key: key.to_string(),
            }),
        }
    }

    /// Return the scalar value of a leaf.
    ///
    /// Valid only on a leaf; called on a node it fails with
    /// [`DomainError::ValueOnNode`].
    pub fn value(&self) -> DomainResult<&str> {
        match self {
            Value::Leaf(value) => Ok(value),
            Value::Node(_) => Err(DomainError::ValueOnNode),
        }
    }

    /// Attach `value` under `key`.
    ///
    /// Construction-time mutation used by the builder and the loader.
    /// Replaces an existing child with the same key (last write wins).
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> DomainResult<()> {
        let key = key.into();
        match self {
            Value::Node(children) => {
                children.insert(key, value);
                Ok(())
            }
            Value::Leaf(_) => Err(DomainError::ChildOnLeaf { key }),
        }
    }

    /// Inject a synthetic "title" leaf into this node.
    ///
    /// The one sanctioned mutation after loading, used to augment loaded
    /// data. Callers must serialize it against concurrent readers.
    pub fn set_title(&mut self, title: impl Into<String>) -> DomainResult<()> {
        match self {
            Value::Node(children) => {
                children.insert("title".to_string(), Value::Leaf(title.into()));
                Ok(())
            }
            Value::Leaf(_) => Err(DomainError::TitleOnLeaf),
        }
    }
}
