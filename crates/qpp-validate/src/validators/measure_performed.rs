use qpp_model::{Node, ValidationError};

use crate::check::check;
use crate::validator::{NodeValidator, ValidationFault};

pub const MEASURE_PERFORMED: &str = "measurePerformed";

pub const YES_OR_NO: &str = "Measure performed must be Y or N";

#[derive(Debug, Clone, Copy, Default)]
pub struct MeasurePerformedValidator;

impl NodeValidator for MeasurePerformedValidator {
    fn name(&self) -> &'static str {
        "MeasurePerformedValidator"
    }

    fn validate_single_node(
        &self,
        node: &Node,
        errors: &mut Vec<ValidationError>,
    ) -> Result<(), ValidationFault> {
        check(node, errors).value_in(YES_OR_NO, MEASURE_PERFORMED, &["Y", "N"]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qpp_model::TemplateId;

    #[test]
    fn accepts_only_y_or_n() {
        for (value, expected) in [("Y", 0), ("N", 0), ("y", 1), ("maybe", 1)] {
            let node = Node::new(TemplateId::MeasurePerformed).with_value(MEASURE_PERFORMED, value);
            let mut errors = Vec::new();
            MeasurePerformedValidator
                .validate_single_node(&node, &mut errors)
                .unwrap();
            assert_eq!(errors.len(), expected, "value {value}");
        }
    }
}
