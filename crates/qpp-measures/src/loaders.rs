use std::path::{Path, PathBuf};

use qpp_model::{MeasureConfig, MeasureConfigs};
use tracing::{debug, info};

use crate::error::MeasuresError;
use crate::hash::sha256_hex;

const MEASURES_ENV_VAR: &str = "QPP_MEASURES_DATA";
const DEFAULT_MEASURES_FILE: &str = "measures-data.json";

/// A parsed configuration table together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedMeasures {
    pub configs: MeasureConfigs,
    pub source: PathBuf,
    /// SHA-256 of the file contents, for reproducibility reports.
    pub sha256: String,
}

/// `$QPP_MEASURES_DATA` when set, else `config/measures-data.json` in the workspace.
pub fn default_measures_path() -> PathBuf {
    if let Ok(path) = std::env::var(MEASURES_ENV_VAR) {
        return PathBuf::from(path);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../config")
        .join(DEFAULT_MEASURES_FILE)
}

pub fn load_default_measure_configs() -> Result<LoadedMeasures, MeasuresError> {
    load_measure_configs(&default_measures_path())
}

pub fn load_measure_configs(path: &Path) -> Result<LoadedMeasures, MeasuresError> {
    let bytes = std::fs::read(path).map_err(|source| MeasuresError::io(path, source))?;
    let configs = parse_measure_configs(&bytes, path)?;
    let sha256 = sha256_hex(&bytes);
    info!(
        path = %path.display(),
        measure_count = configs.len(),
        sha256 = %sha256,
        "loaded measure configuration"
    );
    Ok(LoadedMeasures {
        configs,
        source: path.to_path_buf(),
        sha256,
    })
}

/// Parse the JSON array form of the configuration table.
///
/// `path` is only used to attribute errors.
pub fn parse_measure_configs(bytes: &[u8], path: &Path) -> Result<MeasureConfigs, MeasuresError> {
    let entries: Vec<MeasureConfig> =
        serde_json::from_slice(bytes).map_err(|source| MeasuresError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    let total = entries.len();
    let configs = MeasureConfigs::new(entries).map_err(|source| MeasuresError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    if configs.len() < total {
        debug!(
            skipped = total - configs.len(),
            "skipped measures without an eCQM version GUID"
        );
    }
    Ok(configs)
}
