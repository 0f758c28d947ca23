use std::path::PathBuf;

use qpp_model::ConversionMetadata;
use qpp_validate::ValidationReport;

/// Outcome of one `validate` invocation.
#[derive(Debug)]
pub struct ValidateResult {
    pub measures_source: PathBuf,
    pub measures_sha256: String,
    pub documents: Vec<DocumentResult>,
    /// Inputs that produced no verdict.
    pub failures: Vec<DocumentFailure>,
    /// True when at least one validated document has errors.
    pub has_errors: bool,
}

impl ValidateResult {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

#[derive(Debug)]
pub struct DocumentResult {
    pub source: PathBuf,
    pub metadata: ConversionMetadata,
    pub report: ValidationReport,
    /// JSON report written for this document, if any.
    pub report_path: Option<PathBuf>,
}

/// A document that could not be read, parsed or validated.
#[derive(Debug)]
pub struct DocumentFailure {
    pub source: PathBuf,
    pub error: anyhow::Error,
}

/// One line of the `templates` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRow {
    pub template: String,
    pub label: String,
    pub validator: Option<String>,
    pub required: bool,
}
