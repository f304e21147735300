use std::fmt;

use serde::{Deserialize, Serialize};

/// A single environment variable applied to a running container.
///
/// `name` is the merge key: any list produced by envsync holds at most one
/// entry per name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnvEntry {
    pub name: String,
    pub value: String,
}

impl EnvEntry {
    /// Create a new entry.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for EnvEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for EnvEntry {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}
