//! Template identifiers for decoded document nodes.
//!
//! Every node produced by the decoder carries exactly one `TemplateId`
//! describing its structural role. The set is closed: decoders map any
//! template they do not understand to [`TemplateId::Placeholder`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Structural role of a node in a decoded quality-reporting document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateId {
    /// Document root.
    ClinicalDocument,
    /// Improvement activity section.
    IaSection,
    /// A single improvement activity.
    IaMeasure,
    /// Yes/no answer attached to an improvement activity.
    MeasurePerformed,
    /// Performance period of the enclosing section.
    ReportingParametersAct,
    /// Quality measure section.
    MeasureSection,
    /// Reference to one eCQM and its population results.
    MeasureReferenceResults,
    /// One population result within a measure reference.
    MeasureData,
    /// Count attached to a measure data node.
    AggregateCount,
    /// Anything the decoder did not recognise.
    Placeholder,
}

impl TemplateId {
    /// All template identifiers in declaration order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::ClinicalDocument,
            Self::IaSection,
            Self::IaMeasure,
            Self::MeasurePerformed,
            Self::ReportingParametersAct,
            Self::MeasureSection,
            Self::MeasureReferenceResults,
            Self::MeasureData,
            Self::AggregateCount,
            Self::Placeholder,
        ]
    }

    /// Canonical identifier as used in serialized trees.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClinicalDocument => "CLINICAL_DOCUMENT",
            Self::IaSection => "IA_SECTION",
            Self::IaMeasure => "IA_MEASURE",
            Self::MeasurePerformed => "MEASURE_PERFORMED",
            Self::ReportingParametersAct => "REPORTING_PARAMETERS_ACT",
            Self::MeasureSection => "MEASURE_SECTION",
            Self::MeasureReferenceResults => "MEASURE_REFERENCE_RESULTS",
            Self::MeasureData => "MEASURE_DATA",
            Self::AggregateCount => "AGGREGATE_COUNT",
            Self::Placeholder => "PLACEHOLDER",
        }
    }

    /// Short camelCase segment used when building node paths.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::ClinicalDocument => "clinicalDocument",
            Self::IaSection => "iaSection",
            Self::IaMeasure => "iaMeasure",
            Self::MeasurePerformed => "measurePerformed",
            Self::ReportingParametersAct => "reportingParameters",
            Self::MeasureSection => "measureSection",
            Self::MeasureReferenceResults => "measureReference",
            Self::MeasureData => "measureData",
            Self::AggregateCount => "aggregateCount",
            Self::Placeholder => "placeholder",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ClinicalDocument => "Clinical Document",
            Self::IaSection => "Improvement Activity Section",
            Self::IaMeasure => "Improvement Activity",
            Self::MeasurePerformed => "Measure Performed",
            Self::ReportingParametersAct => "Reporting Parameters Act",
            Self::MeasureSection => "Quality Measure Section",
            Self::MeasureReferenceResults => "Measure Reference Results",
            Self::MeasureData => "Measure Data",
            Self::AggregateCount => "Aggregate Count",
            Self::Placeholder => "Placeholder",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = ModelError;

    /// Parse a canonical identifier (case-insensitive, `-` accepted for `_`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|template| template.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownTemplate(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_and_loose_forms() {
        assert_eq!(
            "MEASURE_DATA".parse::<TemplateId>().unwrap(),
            TemplateId::MeasureData
        );
        assert_eq!(
            " ia-section ".parse::<TemplateId>().unwrap(),
            TemplateId::IaSection
        );
        assert!("NOT_A_TEMPLATE".parse::<TemplateId>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for template in TemplateId::all() {
            let parsed: TemplateId = template.to_string().parse().unwrap();
            assert_eq!(parsed, *template);
        }
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&TemplateId::MeasureReferenceResults).unwrap();
        assert_eq!(json, "\"MEASURE_REFERENCE_RESULTS\"");
    }
}
