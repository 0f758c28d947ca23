//! Chainable structural constraints over a single node.
//!
//! A [`Checker`] borrows the node under test and the error list of the
//! current validation run. Each constraint either records one
//! [`ValidationError`] or does nothing, so a whole rule set reads as one
//! expression:
//!
//! ```ignore
//! check(node, errors)
//!     .child_minimum(NO_MEASURES, 1, &[TemplateId::IaMeasure])
//!     .only_has_children(WRONG_CHILD, &[TemplateId::IaMeasure]);
//! ```
//!
//! In the default mode the chain stops evaluating after its first failure.
//! [`thoroughly_check`] evaluates every constraint and records every failure.

use qpp_model::{Node, TemplateId, ValidationError};
use tracing::trace;

/// Start a short-circuiting constraint chain.
pub fn check<'a>(node: &'a Node, errors: &'a mut Vec<ValidationError>) -> Checker<'a> {
    Checker::new(node, errors, false)
}

/// Start a constraint chain that records every failing constraint.
pub fn thoroughly_check<'a>(node: &'a Node, errors: &'a mut Vec<ValidationError>) -> Checker<'a> {
    Checker::new(node, errors, true)
}

/// Constraint builder bound to one node and one run's error list.
#[derive(Debug)]
pub struct Checker<'a> {
    node: &'a Node,
    errors: &'a mut Vec<ValidationError>,
    thorough: bool,
    failed: bool,
}

impl<'a> Checker<'a> {
    fn new(node: &'a Node, errors: &'a mut Vec<ValidationError>, thorough: bool) -> Self {
        Self {
            node,
            errors,
            thorough,
            failed: false,
        }
    }

    /// True once any constraint in this chain has failed.
    pub fn has_failures(&self) -> bool {
        self.failed
    }

    fn assert<F>(mut self, message: &str, holds: F) -> Self
    where
        F: FnOnce(&Node) -> bool,
    {
        if self.failed && !self.thorough {
            return self;
        }
        if !holds(self.node) {
            trace!(path = %self.node.path(), rule = message, "constraint failed");
            self.errors
                .push(ValidationError::new(message, self.node.path()));
            self.failed = true;
        }
        self
    }

    /// Fails if the attribute is absent or blank.
    pub fn value(self, message: &str, key: &str) -> Self {
        self.assert(message, |node| node.has_value(key))
    }

    /// Fails if the attribute is absent or does not parse as an integer.
    pub fn int_value(self, message: &str, key: &str) -> Self {
        self.assert(message, |node| {
            node.value(key)
                .is_some_and(|value| value.trim().parse::<i64>().is_ok())
        })
    }

    /// Fails if the attribute is absent or not one of `allowed`, ignoring surrounding whitespace.
    pub fn value_in(self, message: &str, key: &str, allowed: &[&str]) -> Self {
        self.assert(message, |node| {
            node.value(key)
                .is_some_and(|value| allowed.contains(&value.trim()))
        })
    }

    /// Fails if the node has no children at all.
    pub fn has_children(self, message: &str) -> Self {
        self.assert(message, Node::has_children)
    }

    /// Fails if fewer than `minimum` direct children have one of `templates`.
    pub fn child_minimum(self, message: &str, minimum: usize, templates: &[TemplateId]) -> Self {
        self.assert(message, |node| node.count_children_of(templates) >= minimum)
    }

    /// Fails if more than `maximum` direct children have one of `templates`.
    pub fn child_maximum(self, message: &str, maximum: usize, templates: &[TemplateId]) -> Self {
        self.assert(message, |node| node.count_children_of(templates) <= maximum)
    }

    /// Fails unless exactly `count` direct children have one of `templates`.
    pub fn child_exact(self, message: &str, count: usize, templates: &[TemplateId]) -> Self {
        self.assert(message, |node| node.count_children_of(templates) == count)
    }

    /// Fails if any direct child has a template outside `templates`.
    pub fn only_has_children(self, message: &str, templates: &[TemplateId]) -> Self {
        self.assert(message, |node| {
            node.children()
                .iter()
                .all(|child| templates.contains(&child.template_id()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(children: &[TemplateId]) -> Node {
        children
            .iter()
            .fold(Node::new(TemplateId::IaSection), |node, template| {
                node.with_child(Node::new(*template))
            })
    }

    #[test]
    fn passing_chain_records_nothing() {
        let node = section(&[TemplateId::IaMeasure, TemplateId::ReportingParametersAct]);
        let mut errors = Vec::new();
        let checker = check(&node, &mut errors)
            .has_children("no children")
            .child_minimum("min", 1, &[TemplateId::IaMeasure])
            .child_maximum("max", 1, &[TemplateId::ReportingParametersAct])
            .only_has_children(
                "wrong child",
                &[TemplateId::IaMeasure, TemplateId::ReportingParametersAct],
            );
        assert!(!checker.has_failures());
        assert!(errors.is_empty());
    }

    #[test]
    fn default_mode_stops_after_first_failure() {
        let node = section(&[TemplateId::AggregateCount]);
        let mut errors = Vec::new();
        check(&node, &mut errors)
            .child_minimum("first", 1, &[TemplateId::IaMeasure])
            .only_has_children("second", &[TemplateId::IaMeasure]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "first");
    }

    #[test]
    fn thorough_mode_records_every_failure() {
        let node = section(&[TemplateId::AggregateCount]);
        let mut errors = Vec::new();
        thoroughly_check(&node, &mut errors)
            .value("no id", "measureId")
            .child_minimum("first", 1, &[TemplateId::IaMeasure])
            .only_has_children("second", &[TemplateId::IaMeasure]);
        let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["no id", "first", "second"]);
        assert!(errors.iter().all(|e| e.path == *node.path()));
    }

    #[test]
    fn value_rejects_absent_and_blank() {
        let node = Node::new(TemplateId::MeasureData)
            .with_value("population", "")
            .with_value("measureType", "NUMER");
        let mut errors = Vec::new();
        thoroughly_check(&node, &mut errors)
            .value("population", "population")
            .value("measureType", "measureType")
            .value("missing", "missing");
        let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["population", "missing"]);
    }

    #[test]
    fn int_value_and_value_in() {
        let node = Node::new(TemplateId::AggregateCount)
            .with_value("aggregateCount", " 42 ")
            .with_value("bad", "4.2")
            .with_value("measurePerformed", "Y");
        let mut errors = Vec::new();
        thoroughly_check(&node, &mut errors)
            .int_value("count", "aggregateCount")
            .int_value("bad", "bad")
            .value_in("yes/no", "measurePerformed", &["Y", "N"])
            .value_in("absent", "absent", &["Y", "N"]);
        let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["bad", "absent"]);
    }

    #[test]
    fn child_exact_boundaries() {
        let node = section(&[TemplateId::MeasurePerformed, TemplateId::MeasurePerformed]);
        let mut errors = Vec::new();
        thoroughly_check(&node, &mut errors)
            .child_exact("two", 2, &[TemplateId::MeasurePerformed])
            .child_exact("one", 1, &[TemplateId::MeasurePerformed]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "one");
    }

    #[test]
    fn childless_node_satisfies_only_has_children() {
        let node = Node::new(TemplateId::IaSection);
        let mut errors = Vec::new();
        check(&node, &mut errors).only_has_children("wrong child", &[]);
        assert!(errors.is_empty());
    }
}
