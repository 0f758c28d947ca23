//! Improvement activity rules.

use qpp_model::{Node, TemplateId, ValidationError};

use crate::check::thoroughly_check;
use crate::validator::{NodeValidator, ValidationFault};

pub const MEASURE_ID: &str = "measureId";

pub const MEASURE_ID_MISSING: &str = "The IA Measure must have a measure id";
pub const ONE_MEASURE_PERFORMED: &str =
    "The IA Measure must have exactly one Measure Performed child";

#[derive(Debug, Clone, Copy, Default)]
pub struct IaMeasureValidator;

impl NodeValidator for IaMeasureValidator {
    fn name(&self) -> &'static str {
        "IaMeasureValidator"
    }

    fn validate_single_node(
        &self,
        node: &Node,
        errors: &mut Vec<ValidationError>,
    ) -> Result<(), ValidationFault> {
        thoroughly_check(node, errors)
            .value(MEASURE_ID_MISSING, MEASURE_ID)
            .child_exact(ONE_MEASURE_PERFORMED, 1, &[TemplateId::MeasurePerformed]);
        Ok(())
    }
}
