//! The validator contract and its failure type.

use qpp_model::{Node, ValidationError};
use thiserror::Error;

/// An unexpected condition that aborts a whole validation run.
///
/// Faults are distinct from rule violations: they indicate broken rule logic
/// or malformed external configuration, never an invalid document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationFault {
    #[error("validator {validator} failed: {message}")]
    Internal {
        validator: &'static str,
        message: String,
    },
}

/// Rules bound to one template.
///
/// Implementations hold no per-document state: everything a run produces
/// goes into the `errors` list owned by that run, so one instance can serve
/// any number of concurrent runs.
pub trait NodeValidator: Send + Sync {
    /// Name used in logs and listings.
    fn name(&self) -> &'static str;

    /// Checks that need only the node and its subtree.
    fn validate_single_node(
        &self,
        node: &Node,
        errors: &mut Vec<ValidationError>,
    ) -> Result<(), ValidationFault>;

    /// Checks across every node of this validator's template in the document.
    fn validate_same_template_nodes(
        &self,
        _nodes: &[&Node],
        _errors: &mut Vec<ValidationError>,
    ) -> Result<(), ValidationFault> {
        Ok(())
    }
}
