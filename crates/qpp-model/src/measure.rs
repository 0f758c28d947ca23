//! Measure configuration as published in `measures-data.json`.
//!
//! The table is supplied from outside the validation core and is read-only
//! while documents are validated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Population identifiers that together make up one scoring strata of a measure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubPopulation {
    pub denominator_uuid: Option<String>,
    pub numerator_uuid: Option<String>,
    pub denominator_exclusions_uuid: Option<String>,
    pub denominator_exceptions_uuid: Option<String>,
    pub initial_population_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strata: Vec<String>,
}

/// One configured measure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureConfig {
    /// eCQM version GUID; this is what documents carry in `measureId`.
    pub electronic_measure_ver_uuid: Option<String>,
    /// Program measure number (e.g. "236").
    pub measure_id: Option<String>,
    pub title: Option<String>,
    pub metric_type: Option<String>,
    pub sub_population: Option<Vec<SubPopulation>>,
}

impl MeasureConfig {
    /// Configured sub-populations, `None` when the measure defines none.
    pub fn sub_populations(&self) -> Option<&[SubPopulation]> {
        self.sub_population.as_deref()
    }
}

/// Measure configurations keyed by eCQM version GUID.
#[derive(Debug, Clone, Default)]
pub struct MeasureConfigs {
    by_guid: BTreeMap<String, MeasureConfig>,
}

impl MeasureConfigs {
    /// Index configurations by GUID.
    ///
    /// Entries without a GUID cannot be referenced by a document and are
    /// skipped. Keys are stored exactly as written. A GUID listed twice is an
    /// error.
    pub fn new(configs: Vec<MeasureConfig>) -> Result<Self> {
        let mut by_guid = BTreeMap::new();
        for config in configs {
            let Some(guid) = config
                .electronic_measure_ver_uuid
                .clone()
                .filter(|guid| !guid.trim().is_empty())
            else {
                continue;
            };
            if by_guid.contains_key(&guid) {
                return Err(ModelError::DuplicateMeasure { measure_id: guid });
            }
            by_guid.insert(guid, config);
        }
        Ok(Self { by_guid })
    }

    pub fn get(&self, guid: &str) -> Option<&MeasureConfig> {
        self.by_guid.get(guid)
    }

    pub fn len(&self) -> usize {
        self.by_guid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_guid.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MeasureConfig)> {
        self.by_guid
            .iter()
            .map(|(guid, config)| (guid.as_str(), config))
    }
}
