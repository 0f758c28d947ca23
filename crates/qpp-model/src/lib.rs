pub mod error;
pub mod measure;
pub mod metadata;
pub mod node;
pub mod template;
pub mod validation;

pub use error::{ModelError, Result};
pub use measure::{MeasureConfig, MeasureConfigs, SubPopulation};
pub use metadata::ConversionMetadata;
pub use node::{Descendants, Node, NodePath};
pub use template::TemplateId;
pub use validation::ValidationError;
