//! Quality measure section rules.

use qpp_model::{Node, TemplateId, ValidationError};

use crate::check::check;
use crate::validator::{NodeValidator, ValidationFault};

pub const NO_MEASURE_REFERENCES: &str =
    "The Quality Measure Section must have at least one Measure Reference Results";
pub const WRONG_CHILD_ERROR: &str =
    "The Quality Measure Section must contain only measure references and reporting parameters";

#[derive(Debug, Clone, Copy, Default)]
pub struct MeasureSectionValidator;

impl NodeValidator for MeasureSectionValidator {
    fn name(&self) -> &'static str {
        "MeasureSectionValidator"
    }

    fn validate_single_node(
        &self,
        node: &Node,
        errors: &mut Vec<ValidationError>,
    ) -> Result<(), ValidationFault> {
        check(node, errors)
            .child_minimum(
                NO_MEASURE_REFERENCES,
                1,
                &[TemplateId::MeasureReferenceResults],
            )
            .only_has_children(
                WRONG_CHILD_ERROR,
                &[
                    TemplateId::MeasureReferenceResults,
                    TemplateId::ReportingParametersAct,
                ],
            );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(node: &Node) -> Vec<String> {
        let mut errors = Vec::new();
        MeasureSectionValidator
            .validate_single_node(node, &mut errors)
            .unwrap();
        errors.into_iter().map(|error| error.message).collect()
    }

    #[test]
    fn missing_references_short_circuit_child_check() {
        let section =
            Node::new(TemplateId::MeasureSection).with_child(Node::new(TemplateId::IaMeasure));
        assert_eq!(messages(&section), vec![NO_MEASURE_REFERENCES]);
    }

    #[test]
    fn foreign_child_is_rejected() {
        let section = Node::new(TemplateId::MeasureSection)
            .with_child(Node::new(TemplateId::MeasureReferenceResults))
            .with_child(Node::new(TemplateId::IaMeasure));
        assert_eq!(messages(&section), vec![WRONG_CHILD_ERROR]);
    }
}
