//! Document root rules.

use qpp_model::{Node, TemplateId, ValidationError};

use crate::check::check;
use crate::validator::{NodeValidator, ValidationFault};

pub const PROGRAM_NAME: &str = "programName";

pub const PROGRAM_NAME_MISSING: &str = "The Clinical Document must have a program name";
pub const NO_SECTIONS: &str = "The Clinical Document must have at least one section";
pub const WRONG_CHILD_ERROR: &str = "The Clinical Document may only contain sections";
pub const MORE_THAN_ONE_DOCUMENT: &str = "A submission may contain only one Clinical Document";

const SECTIONS: &[TemplateId] = &[TemplateId::IaSection, TemplateId::MeasureSection];

#[derive(Debug, Clone, Copy, Default)]
pub struct ClinicalDocumentValidator;

impl NodeValidator for ClinicalDocumentValidator {
    fn name(&self) -> &'static str {
        "ClinicalDocumentValidator"
    }

    fn validate_single_node(
        &self,
        node: &Node,
        errors: &mut Vec<ValidationError>,
    ) -> Result<(), ValidationFault> {
        check(node, errors)
            .value(PROGRAM_NAME_MISSING, PROGRAM_NAME)
            .has_children(NO_SECTIONS)
            .only_has_children(WRONG_CHILD_ERROR, SECTIONS);
        Ok(())
    }

    fn validate_same_template_nodes(
        &self,
        nodes: &[&Node],
        errors: &mut Vec<ValidationError>,
    ) -> Result<(), ValidationFault> {
        for extra in nodes.iter().skip(1) {
            errors.push(ValidationError::new(MORE_THAN_ONE_DOCUMENT, extra.path()));
        }
        Ok(())
    }
}
