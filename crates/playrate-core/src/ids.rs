use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Handle the registry assigns to an attached media element.
///
/// Purely a bookkeeping key for detach and logging; it carries no
/// information about the element itself.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(String);

impl MediaId {
    pub fn new() -> Self {
        Self(format!("media_{}", Uuid::now_v7()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MediaId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
