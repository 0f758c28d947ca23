//! Rule-based validation of decoded quality-reporting documents.
//!
//! Validators are bound to templates in a [`ValidatorRegistry`] once at
//! start-up. A [`ValidationEngine`] then runs the registry against any
//! number of trees, concurrently if desired: validators keep no state and
//! every run owns its own error list.

pub mod check;
pub mod engine;
pub mod population;
pub mod registry;
pub mod report;
pub mod validator;
pub mod validators;

pub use check::{Checker, check, thoroughly_check};
pub use engine::{ValidationEngine, missing_required_message};
pub use population::{MEASURE_POPULATION, MEASURE_TYPE, PopulationRole};
pub use registry::{Registration, RegistryError, ValidatorRegistry};
pub use report::{PhaseCounts, ValidationReport};
pub use validator::{NodeValidator, ValidationFault};
