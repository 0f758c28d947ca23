//! Built-in validators, one module per template.

pub mod aggregate_count;
pub mod clinical_document;
pub mod ia_measure;
pub mod ia_section;
pub mod measure_data;
pub mod measure_performed;
pub mod measure_section;
pub mod quality_measure_id;
pub mod reporting_parameters;

pub use aggregate_count::AggregateCountValidator;
pub use clinical_document::ClinicalDocumentValidator;
pub use ia_measure::IaMeasureValidator;
pub use ia_section::IaSectionValidator;
pub use measure_data::MeasureDataValidator;
pub use measure_performed::MeasurePerformedValidator;
pub use measure_section::MeasureSectionValidator;
pub use quality_measure_id::QualityMeasureIdValidator;
pub use reporting_parameters::ReportingParametersValidator;
