//! Population result rules.

use qpp_model::{Node, TemplateId, ValidationError};

use crate::check::thoroughly_check;
use crate::population::{MEASURE_POPULATION, MEASURE_TYPE};
use crate::validator::{NodeValidator, ValidationFault};

pub const MEASURE_TYPE_MISSING: &str = "The Measure Data must have a measure type";
pub const POPULATION_MISSING: &str = "The Measure Data must have a population identifier";
pub const ONE_AGGREGATE_COUNT: &str = "The Measure Data must have exactly one Aggregate Count";

#[derive(Debug, Clone, Copy, Default)]
pub struct MeasureDataValidator;

impl NodeValidator for MeasureDataValidator {
    fn name(&self) -> &'static str {
        "MeasureDataValidator"
    }

    fn validate_single_node(
        &self,
        node: &Node,
        errors: &mut Vec<ValidationError>,
    ) -> Result<(), ValidationFault> {
        thoroughly_check(node, errors)
            .value(MEASURE_TYPE_MISSING, MEASURE_TYPE)
            .value(POPULATION_MISSING, MEASURE_POPULATION)
            .child_exact(ONE_AGGREGATE_COUNT, 1, &[TemplateId::AggregateCount]);
        Ok(())
    }
}
