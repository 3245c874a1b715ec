use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::types::object_path::ObjectPath;

pub type InterfaceName = String;
pub type PropertyName = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Properties of a single interface.
pub type InterfaceMap = BTreeMap<PropertyName, PropertyValue>;

/// Everything known about one inventory path, grouped by interface.
pub type Object = BTreeMap<InterfaceName, InterfaceMap>;

pub type ObjectCache = HashMap<ObjectPath, Object>;
