use qpp_model::{Node, ValidationError};

use crate::check::check;
use crate::validator::{NodeValidator, ValidationFault};

pub const AGGREGATE_COUNT: &str = "aggregateCount";

pub const NOT_AN_INTEGER: &str = "The Aggregate Count must be an integer";

#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateCountValidator;

impl NodeValidator for AggregateCountValidator {
    fn name(&self) -> &'static str {
        "AggregateCountValidator"
    }

    fn validate_single_node(
        &self,
        node: &Node,
        errors: &mut Vec<ValidationError>,
    ) -> Result<(), ValidationFault> {
        check(node, errors).int_value(NOT_AN_INTEGER, AGGREGATE_COUNT);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qpp_model::TemplateId;

    #[test]
    fn count_must_be_whole_number() {
        for (value, valid) in [("600", true), ("-1", true), ("6.5", false), ("", false)] {
            let node = Node::new(TemplateId::AggregateCount).with_value(AGGREGATE_COUNT, value);
            let mut errors = Vec::new();
            AggregateCountValidator
                .validate_single_node(&node, &mut errors)
                .unwrap();
            assert_eq!(errors.is_empty(), valid, "value {value:?}");
        }
    }
}
