//! Tree builder: casts a generic YAML deserialization into the typed value tree.

use serde_yaml::{Mapping, Value as YamlValue};
use tracing::debug;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value::Value;

/// Build a [`Value`] tree from a deserialized YAML document.
///
/// The document must be a mapping with string keys whose values are either
/// nested mappings of the same shape or string scalars. Any other shape is
/// malformed input: the whole build aborts on the first offending entry and
/// no partial tree is returned.
pub fn build_tree(raw: &YamlValue) -> DomainResult<Value> {
    match raw {
        YamlValue::Mapping(mapping) => build_node(mapping),
        other => Err(DomainError::MalformedData(format!(
            "document root is a {}, expected a mapping",
            shape_of(other)
        ))),
    }
}

fn build_node(mapping: &Mapping) -> DomainResult<Value> {
    let mut node = Value::node();
    for (key, value) in mapping {
        let key = match key {
            YamlValue::String(s) => s.clone(),
            other => {
                return Err(DomainError::MalformedData(format!(
                    "non-string key of shape {}",
                    shape_of(other)
                )))
            }
        };
        let child = match value {
            YamlValue::Mapping(nested) => build_node(nested)?,
            YamlValue::String(s) => Value::leaf(s.clone()),
            other => {
                debug!(key = %key, shape = shape_of(other), "unsupported value shape");
                return Err(DomainError::MalformedData(format!(
                    "unsupported {} value under key {:?}",
                    shape_of(other),
                    key
                )));
            }
        };
        node.insert(key, child)?;
    }
    Ok(node)
}

fn shape_of(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "boolean",
        YamlValue::Number(_) => "number",
        YamlValue::String(_) => "string",
        YamlValue::Sequence(_) => "sequence",
        YamlValue::Mapping(_) => "mapping",
        YamlValue::Tagged(_) => "tagged value",
    }
}
