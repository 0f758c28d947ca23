use std::fmt;

use serde::{Deserialize, Serialize};

use crate::node::NodePath;

/// A declared rule violation attributed to one node.
///
/// Two errors with the same message and path are still two errors; callers
/// decide whether to collapse them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    /// Human-readable description of the violation.
    pub message: String,
    /// Locator of the offending node.
    pub path: NodePath,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, path: &NodePath) -> Self {
        Self {
            message: message.into(),
            path: path.clone(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}
