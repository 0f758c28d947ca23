//! Conversion metadata handed to the persistence layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::node::Node;
use crate::template::TemplateId;

/// Summary of one conversion attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionMetadata {
    pub file_name: String,
    pub created_date: DateTime<Utc>,
    pub tin: Option<String>,
    pub npi: Option<String>,
    pub apm: Option<String>,
    pub submission_year: Option<i64>,
    /// SHA-256 of the submitted bytes.
    pub submission_locator: Option<String>,
    pub overall_status: bool,
    pub conversion_status: bool,
    pub validation_status: bool,
    pub cpc: bool,
    pub conversion_error_locator: Option<String>,
    pub validation_error_locator: Option<String>,
}

impl ConversionMetadata {
    pub fn new(file_name: impl Into<String>, created_date: DateTime<Utc>) -> Self {
        Self {
            file_name: file_name.into(),
            created_date,
            tin: None,
            npi: None,
            apm: None,
            submission_year: None,
            submission_locator: None,
            overall_status: false,
            conversion_status: false,
            validation_status: false,
            cpc: false,
            conversion_error_locator: None,
            validation_error_locator: None,
        }
    }

    /// Copy submitter identity from the clinical document root, if present.
    #[must_use]
    pub fn with_document(mut self, root: &Node) -> Self {
        self.conversion_status = true;
        if root.template_id() != TemplateId::ClinicalDocument {
            return self;
        }
        let text = |key: &str| {
            root.value(key)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };
        self.tin = text("taxpayerIdentificationNumber");
        self.npi = text("nationalProviderIdentifier");
        self.apm = text("entityId");
        self.submission_year = text("performanceYear").and_then(|year| year.parse().ok());
        self.cpc = root
            .value("programName")
            .is_some_and(|program| program.eq_ignore_ascii_case("cpcplus"));
        self
    }

    #[must_use]
    pub fn with_submission_locator(mut self, locator: impl Into<String>) -> Self {
        self.submission_locator = Some(locator.into());
        self
    }

    /// Record the validation outcome; overall status requires both stages to pass.
    pub fn record_validation(&mut self, passed: bool, error_locator: Option<String>) {
        self.validation_status = passed;
        self.validation_error_locator = if passed { None } else { error_locator };
        self.overall_status = self.conversion_status && self.validation_status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn reads_identity_from_clinical_document() {
        let root = Node::new(TemplateId::ClinicalDocument)
            .with_value("taxpayerIdentificationNumber", "123456789")
            .with_value("nationalProviderIdentifier", "2567891421")
            .with_value("performanceYear", "2017")
            .with_value("programName", "CPCPLUS");
        let metadata = ConversionMetadata::new("file.xml", created()).with_document(&root);
        assert_eq!(metadata.tin.as_deref(), Some("123456789"));
        assert_eq!(metadata.npi.as_deref(), Some("2567891421"));
        assert_eq!(metadata.submission_year, Some(2017));
        assert!(metadata.cpc);
        assert!(metadata.conversion_status);
    }

    #[test]
    fn overall_status_follows_validation() {
        let root = Node::new(TemplateId::ClinicalDocument);
        let mut metadata = ConversionMetadata::new("file.xml", created()).with_document(&root);
        metadata.record_validation(false, Some("report.json".to_string()));
        assert!(!metadata.overall_status);
        assert_eq!(metadata.validation_error_locator.as_deref(), Some("report.json"));

        metadata.record_validation(true, Some("ignored".to_string()));
        assert!(metadata.overall_status);
        assert_eq!(metadata.validation_error_locator, None);
    }
}
