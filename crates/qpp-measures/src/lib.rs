#![deny(unsafe_code)]

pub mod error;
pub mod hash;
pub mod loaders;

pub use crate::error::MeasuresError;
pub use crate::loaders::{
    LoadedMeasures, default_measures_path, load_default_measure_configs, load_measure_configs,
    parse_measure_configs,
};
