//! Property tests for the count-bound constraints.

use proptest::prelude::*;
use qpp_model::{Node, TemplateId, ValidationError};
use qpp_validate::{check, thoroughly_check};

const CHILD_TEMPLATES: &[TemplateId] = &[
    TemplateId::IaMeasure,
    TemplateId::ReportingParametersAct,
    TemplateId::AggregateCount,
];

fn template_strategy() -> impl Strategy<Value = TemplateId> {
    prop::sample::select(CHILD_TEMPLATES.to_vec())
}

fn section(children: &[TemplateId]) -> Node {
    let mut node = Node::new(TemplateId::IaSection);
    for template in children {
        node.add_child(Node::new(*template));
    }
    node
}

fn matching(children: &[TemplateId], allowed: &[TemplateId]) -> usize {
    children
        .iter()
        .filter(|template| allowed.contains(template))
        .count()
}

proptest! {
    #[test]
    fn child_minimum_fails_iff_count_below_bound(
        children in prop::collection::vec(template_strategy(), 0..8),
        minimum in 0usize..6,
    ) {
        let node = section(&children);
        let allowed = [TemplateId::IaMeasure];
        let mut errors: Vec<ValidationError> = Vec::new();
        check(&node, &mut errors).child_minimum("min", minimum, &allowed);
        prop_assert_eq!(errors.len() == 1, matching(&children, &allowed) < minimum);
    }

    #[test]
    fn child_maximum_fails_iff_count_above_bound(
        children in prop::collection::vec(template_strategy(), 0..8),
        maximum in 0usize..6,
    ) {
        let node = section(&children);
        let allowed = [TemplateId::IaMeasure, TemplateId::AggregateCount];
        let mut errors = Vec::new();
        check(&node, &mut errors).child_maximum("max", maximum, &allowed);
        prop_assert_eq!(errors.len() == 1, matching(&children, &allowed) > maximum);
    }

    #[test]
    fn exact_count_never_violates_either_bound(
        children in prop::collection::vec(template_strategy(), 0..8),
    ) {
        let node = section(&children);
        let allowed = [TemplateId::ReportingParametersAct];
        let count = matching(&children, &allowed);
        let mut errors = Vec::new();
        thoroughly_check(&node, &mut errors)
            .child_minimum("min", count, &allowed)
            .child_maximum("max", count, &allowed)
            .child_exact("exact", count, &allowed);
        prop_assert!(errors.is_empty());
    }

    #[test]
    fn only_has_children_fails_iff_foreign_child_present(
        children in prop::collection::vec(template_strategy(), 0..8),
    ) {
        let node = section(&children);
        let allowed = [TemplateId::IaMeasure, TemplateId::ReportingParametersAct];
        let mut errors = Vec::new();
        check(&node, &mut errors).only_has_children("wrong", &allowed);
        let foreign = children.iter().any(|template| !allowed.contains(template));
        prop_assert_eq!(errors.len() == 1, foreign);
    }

    #[test]
    fn thorough_mode_records_each_independent_failure(
        children in prop::collection::vec(template_strategy(), 0..8),
    ) {
        let node = section(&children);
        let measures = matching(&children, &[TemplateId::IaMeasure]);
        let mut errors = Vec::new();
        thoroughly_check(&node, &mut errors)
            .value("id", "measureId")
            .child_minimum("min", measures + 1, &[TemplateId::IaMeasure]);
        prop_assert_eq!(errors.len(), 2);
    }
}
