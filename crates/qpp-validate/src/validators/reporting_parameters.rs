//! Reporting period rules.

use qpp_model::{Node, ValidationError};

use crate::check::thoroughly_check;
use crate::validator::{NodeValidator, ValidationFault};

pub const PERFORMANCE_START: &str = "performanceStart";
pub const PERFORMANCE_END: &str = "performanceEnd";

pub const PERFORMANCE_START_MISSING: &str = "Must have a performance start";
pub const PERFORMANCE_END_MISSING: &str = "Must have a performance end";

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportingParametersValidator;

impl NodeValidator for ReportingParametersValidator {
    fn name(&self) -> &'static str {
        "ReportingParametersValidator"
    }

    fn validate_single_node(
        &self,
        node: &Node,
        errors: &mut Vec<ValidationError>,
    ) -> Result<(), ValidationFault> {
        thoroughly_check(node, errors)
            .value(PERFORMANCE_START_MISSING, PERFORMANCE_START)
            .value(PERFORMANCE_END_MISSING, PERFORMANCE_END);
        Ok(())
    }
}
