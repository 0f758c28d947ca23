//! Validation orchestrator.
//!
//! A run walks the tree once and then applies three phases in order:
//!
//! 1. **Single node**: each node is handed to the validator bound to its
//!    template. Unbound templates are skipped.
//! 2. **Cross node**: nodes are grouped by template (groups ordered by first
//!    appearance) and each bound validator sees its whole group once.
//! 3. **Required templates**: every required template with no node in the
//!    tree produces one error attributed to the root.
//!
//! A [`ValidationFault`] from any validator ends the run immediately.

use std::time::Instant;

use qpp_model::{Node, TemplateId, ValidationError};
use tracing::{debug, info, info_span};

use crate::registry::ValidatorRegistry;
use crate::report::{PhaseCounts, ValidationReport};
use crate::validator::ValidationFault;

/// Message recorded when a required template never appears.
pub fn missing_required_message(template_id: TemplateId) -> String {
    format!(
        "The document must contain at least one {}",
        template_id.label()
    )
}

/// Runs a [`ValidatorRegistry`] against decoded trees.
#[derive(Debug)]
pub struct ValidationEngine {
    registry: ValidatorRegistry,
}

impl ValidationEngine {
    pub fn new(registry: ValidatorRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    /// Validate one document tree.
    pub fn validate(&self, root: &Node) -> Result<ValidationReport, ValidationFault> {
        let span = info_span!("validate", root = %root.path());
        let _guard = span.enter();
        let started = Instant::now();

        let mut errors = Vec::new();
        let mut groups: Vec<(TemplateId, Vec<&Node>)> = Vec::new();

        for node in root.descendants() {
            let template_id = node.template_id();
            match groups.iter_mut().find(|(template, _)| *template == template_id) {
                Some((_, nodes)) => nodes.push(node),
                None => groups.push((template_id, vec![node])),
            }
            if let Some(validator) = self.registry.validator_for(template_id) {
                validator.validate_single_node(node, &mut errors)?;
            }
        }
        let single_node = errors.len();
        debug!(
            node_count = groups.iter().map(|(_, nodes)| nodes.len()).sum::<usize>(),
            error_count = single_node,
            "single-node phase complete"
        );

        for (template_id, nodes) in &groups {
            if let Some(validator) = self.registry.validator_for(*template_id) {
                validator.validate_same_template_nodes(nodes, &mut errors)?;
            }
        }
        let cross_node = errors.len() - single_node;
        debug!(error_count = cross_node, "cross-node phase complete");

        for template_id in self.registry.required_templates() {
            if !groups.iter().any(|(template, _)| *template == template_id) {
                debug!(template = %template_id, "required template absent");
                errors.push(ValidationError::new(
                    missing_required_message(template_id),
                    root.path(),
                ));
            }
        }
        let missing_required = errors.len() - single_node - cross_node;

        info!(
            error_count = errors.len(),
            single_node,
            cross_node,
            missing_required,
            duration_ms = started.elapsed().as_millis(),
            "validation complete"
        );

        Ok(ValidationReport {
            errors,
            phase_counts: PhaseCounts {
                single_node,
                cross_node,
                missing_required,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::check;
    use crate::validator::NodeValidator;

    struct AtMostOne;

    impl NodeValidator for AtMostOne {
        fn name(&self) -> &'static str {
            "AtMostOne"
        }

        fn validate_single_node(
            &self,
            node: &Node,
            errors: &mut Vec<ValidationError>,
        ) -> Result<(), ValidationFault> {
            check(node, errors).value("needs id", "id");
            Ok(())
        }

        fn validate_same_template_nodes(
            &self,
            nodes: &[&Node],
            errors: &mut Vec<ValidationError>,
        ) -> Result<(), ValidationFault> {
            if nodes.len() > 1 {
                errors.push(ValidationError::new("only one allowed", nodes[1].path()));
            }
            Ok(())
        }
    }

    struct Faulty;

    impl NodeValidator for Faulty {
        fn name(&self) -> &'static str {
            "Faulty"
        }

        fn validate_single_node(
            &self,
            _node: &Node,
            _errors: &mut Vec<ValidationError>,
        ) -> Result<(), ValidationFault> {
            Err(ValidationFault::Internal {
                validator: "Faulty",
                message: "boom".to_string(),
            })
        }
    }

    #[test]
    fn phases_run_in_order_and_unbound_templates_are_skipped() {
        let registry = ValidatorRegistry::new()
            .with(TemplateId::IaMeasure, AtMostOne, false)
            .unwrap();
        let engine = ValidationEngine::new(registry);
        let root = Node::new(TemplateId::IaSection)
            .with_child(Node::new(TemplateId::IaMeasure))
            .with_child(Node::new(TemplateId::Placeholder))
            .with_child(Node::new(TemplateId::IaMeasure).with_value("id", "x"));

        let report = engine.validate(&root).unwrap();
        let rendered: Vec<_> = report.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "/iaSection/iaMeasure[0]: needs id",
                "/iaSection/iaMeasure[2]: only one allowed",
            ]
        );
        assert_eq!(
            report.phase_counts,
            PhaseCounts {
                single_node: 1,
                cross_node: 1,
                missing_required: 0,
            }
        );
    }

    #[test]
    fn missing_required_template_is_reported_once_at_root() {
        let registry = ValidatorRegistry::new()
            .with(TemplateId::IaMeasure, AtMostOne, true)
            .unwrap();
        let engine = ValidationEngine::new(registry);
        let root = Node::new(TemplateId::ClinicalDocument);

        let report = engine.validate(&root).unwrap();
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.errors[0].path, *root.path());
        assert_eq!(
            report.errors[0].message,
            missing_required_message(TemplateId::IaMeasure)
        );
    }

    #[test]
    fn fault_aborts_the_run() {
        let registry = ValidatorRegistry::new()
            .with(TemplateId::IaSection, Faulty, true)
            .unwrap();
        let engine = ValidationEngine::new(registry);
        let fault = engine.validate(&Node::new(TemplateId::IaSection)).unwrap_err();
        assert!(matches!(fault, ValidationFault::Internal { validator: "Faulty", .. }));
    }
}
