use std::fmt;

use serde::{Deserialize, Serialize};

/// Root under which the inventory manager hosts every object.
pub const INVENTORY_ROOT: &str = "/xyz/openbmc_project/inventory";

/// Identifier of an inventory object, relative to [`INVENTORY_ROOT`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectPath(String);

impl ObjectPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full path of the object as hosted by the inventory manager.
    pub fn absolute(&self) -> String {
        format!("{INVENTORY_ROOT}{}", self.0)
    }
}

impl From<&str> for ObjectPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectPath({})", self.0)
    }
}
