//! Improvement activity section rules.
//!
//! A section lists at least one activity and exactly one reporting period.

use qpp_model::{Node, TemplateId, ValidationError};

use crate::check::check;
use crate::validator::{NodeValidator, ValidationFault};

pub const MINIMUM_REQUIREMENT_ERROR: &str = "The IA Section must have at least one IA Measure";
pub const REPORTING_PARAM_REQUIREMENT_ERROR: &str =
    "The IA Section must have only one Reporting Parameter ACT";
pub const WRONG_CHILD_ERROR: &str =
    "The IA Section must contain only measures and reporting parameter";

#[derive(Debug, Clone, Copy, Default)]
pub struct IaSectionValidator;

impl NodeValidator for IaSectionValidator {
    fn name(&self) -> &'static str {
        "IaSectionValidator"
    }

    fn validate_single_node(
        &self,
        node: &Node,
        errors: &mut Vec<ValidationError>,
    ) -> Result<(), ValidationFault> {
        check(node, errors)
            .child_minimum(MINIMUM_REQUIREMENT_ERROR, 1, &[TemplateId::IaMeasure])
            .child_minimum(
                REPORTING_PARAM_REQUIREMENT_ERROR,
                1,
                &[TemplateId::ReportingParametersAct],
            )
            .child_maximum(
                REPORTING_PARAM_REQUIREMENT_ERROR,
                1,
                &[TemplateId::ReportingParametersAct],
            )
            .only_has_children(
                WRONG_CHILD_ERROR,
                &[TemplateId::IaMeasure, TemplateId::ReportingParametersAct],
            );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(node: &Node) -> Vec<String> {
        let mut errors = Vec::new();
        IaSectionValidator
            .validate_single_node(node, &mut errors)
            .unwrap();
        errors.into_iter().map(|error| error.message).collect()
    }

    #[test]
    fn valid_section() {
        let node = Node::new(TemplateId::IaSection)
            .with_child(Node::new(TemplateId::IaMeasure))
            .with_child(Node::new(TemplateId::ReportingParametersAct));
        assert!(run(&node).is_empty());
    }

    #[test]
    fn missing_measure() {
        let node =
            Node::new(TemplateId::IaSection).with_child(Node::new(TemplateId::ReportingParametersAct));
        assert_eq!(run(&node), vec![MINIMUM_REQUIREMENT_ERROR]);
    }

    #[test]
    fn two_reporting_parameters() {
        let node = Node::new(TemplateId::IaSection)
            .with_child(Node::new(TemplateId::IaMeasure))
            .with_child(Node::new(TemplateId::ReportingParametersAct))
            .with_child(Node::new(TemplateId::ReportingParametersAct));
        assert_eq!(run(&node), vec![REPORTING_PARAM_REQUIREMENT_ERROR]);
    }

    #[test]
    fn foreign_child() {
        let node = Node::new(TemplateId::IaSection)
            .with_child(Node::new(TemplateId::IaMeasure))
            .with_child(Node::new(TemplateId::ReportingParametersAct))
            .with_child(Node::new(TemplateId::AggregateCount));
        assert_eq!(run(&node), vec![WRONG_CHILD_ERROR]);
    }

    #[test]
    fn empty_section_reports_first_failure_only() {
        assert_eq!(
            run(&Node::new(TemplateId::IaSection)),
            vec![MINIMUM_REQUIREMENT_ERROR]
        );
    }
}
