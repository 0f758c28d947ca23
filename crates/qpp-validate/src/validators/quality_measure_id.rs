//! Measure reference results rules.
//!
//! Besides its own structure, a measure reference is checked against the
//! measure configuration table: every population role that a configured
//! sub-population names must be fulfilled by one of the node's children.
//! A measure GUID missing from the table is tolerated; the catalogue does
//! not have to cover every measure a document may reference.

use std::sync::Arc;

use qpp_model::{MeasureConfigs, Node, SubPopulation, TemplateId, ValidationError};
use tracing::debug;

use crate::check::thoroughly_check;
use crate::population::PopulationRole;
use crate::validator::{NodeValidator, ValidationFault};

pub const MEASURE_ID: &str = "measureId";

pub const MEASURE_GUID_MISSING: &str = "The measure reference results must have a measure GUID";
pub const NO_CHILD_MEASURE: &str = "The measure reference results must have at least one measure";

/// Error recorded when no child fulfils `role`.
pub fn required_child_message(role: PopulationRole) -> String {
    format!("The eCQM measure requires a {}", role.label())
}

#[derive(Debug, Clone)]
pub struct QualityMeasureIdValidator {
    measures: Arc<MeasureConfigs>,
}

impl QualityMeasureIdValidator {
    pub fn new(measures: Arc<MeasureConfigs>) -> Self {
        Self { measures }
    }

    fn validate_measure_config(&self, node: &Node, errors: &mut Vec<ValidationError>) {
        let Some(guid) = node.value(MEASURE_ID) else {
            return;
        };
        let Some(config) = self.measures.get(guid) else {
            debug!(measure_id = guid, path = %node.path(), "measure not configured");
            return;
        };
        let Some(sub_populations) = config.sub_populations() else {
            return;
        };
        for sub_population in sub_populations {
            validate_sub_population(node, sub_population, errors);
        }
    }
}

/// Every role the sub-population names must be fulfilled by some child.
///
/// Expected identifiers are compared verbatim, so a blank one is only
/// satisfied by a child carrying the same blank population.
fn validate_sub_population(
    node: &Node,
    sub_population: &SubPopulation,
    errors: &mut Vec<ValidationError>,
) {
    for role in PopulationRole::all() {
        let Some(expected) = role.expected_id(sub_population) else {
            continue;
        };
        if node.children_matching(role.matcher(expected)).next().is_none() {
            errors.push(ValidationError::new(
                required_child_message(role),
                node.path(),
            ));
        }
    }
}

impl NodeValidator for QualityMeasureIdValidator {
    fn name(&self) -> &'static str {
        "QualityMeasureIdValidator"
    }

    fn validate_single_node(
        &self,
        node: &Node,
        errors: &mut Vec<ValidationError>,
    ) -> Result<(), ValidationFault> {
        thoroughly_check(node, errors)
            .value(MEASURE_GUID_MISSING, MEASURE_ID)
            .child_minimum(NO_CHILD_MEASURE, 1, &[TemplateId::MeasureData]);
        self.validate_measure_config(node, errors);
        Ok(())
    }
}
