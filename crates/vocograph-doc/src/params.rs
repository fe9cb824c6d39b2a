//! Node parameter values and maps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::document::{NodeHandle, NodeId};

/// A single parameter value.
///
/// `Ref` holds the opaque stable reference of a previously created node; it is
/// how parameter-only entities (centroid channels, waveshaper anchors,
/// timeline tracks) point at their owner or target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Text(String),
    Ref {
        #[serde(rename = "ref")]
        node: NodeId,
    },
}

impl ParamValue {
    /// Returns the numeric value if this is an `Int` or `Float`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Int(v) => Some(*v as f64),
            ParamValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v as i64)
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        ParamValue::Int(v as i64)
    }
}

impl From<usize> for ParamValue {
    fn from(v: usize) -> Self {
        ParamValue::Int(v as i64)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

impl From<NodeId> for ParamValue {
    fn from(node: NodeId) -> Self {
        ParamValue::Ref { node }
    }
}

impl From<&NodeHandle> for ParamValue {
    fn from(handle: &NodeHandle) -> Self {
        ParamValue::Ref { node: handle.id }
    }
}

/// Ordered name → value parameter map.
///
/// Backed by a `BTreeMap` so the serialized operation log is byte-stable for
/// identical inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_builds_ordered_map() {
        let params = Params::new()
            .with("y", 1.5)
            .with("x", 2.0)
            .with("name", "Band 1");
        assert_eq!(params.len(), 3);
        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "x", "y"]);
    }

    #[test]
    fn test_serialized_forms() {
        let params = Params::new()
            .with("index", 3)
            .with("gain", 7.9433)
            .with("name", "Band 4")
            .with("centroid", NodeId(9));
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["index"], 3);
        assert_eq!(json["gain"], 7.9433);
        assert_eq!(json["name"], "Band 4");
        assert_eq!(json["centroid"]["ref"], 9);
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(ParamValue::Int(42).as_f64(), Some(42.0));
        assert_eq!(ParamValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(ParamValue::Text("x".into()).as_f64(), None);
    }
}
