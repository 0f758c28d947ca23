use serde::Serialize;

use qpp_model::ValidationError;

/// Errors recorded by each validation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PhaseCounts {
    pub single_node: usize,
    pub cross_node: usize,
    pub missing_required: usize,
}

/// Outcome of validating one document.
///
/// Errors are ordered by phase, then by pre-order position of the node that
/// produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub phase_counts: PhaseCounts,
}

impl ValidationReport {
    /// True when no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}
