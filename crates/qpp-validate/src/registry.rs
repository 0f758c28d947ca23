//! Static binding of templates to validators.

use std::collections::BTreeMap;
use std::sync::Arc;

use qpp_model::{MeasureConfigs, TemplateId};
use thiserror::Error;

use crate::validator::NodeValidator;
use crate::validators::{
    AggregateCountValidator, ClinicalDocumentValidator, IaMeasureValidator, IaSectionValidator,
    MeasureDataValidator, MeasurePerformedValidator, MeasureSectionValidator,
    QualityMeasureIdValidator, ReportingParametersValidator,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("template {template} is already bound to {existing}, cannot also bind {rejected}")]
    DuplicateBinding {
        template: TemplateId,
        existing: &'static str,
        rejected: &'static str,
    },
}

/// One template's validator and whether the template must appear in a document.
pub struct Registration {
    pub template_id: TemplateId,
    pub validator: Box<dyn NodeValidator>,
    pub required: bool,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("template_id", &self.template_id)
            .field("validator", &self.validator.name())
            .field("required", &self.required)
            .finish()
    }
}

/// Template to validator bindings, fixed once built.
#[derive(Debug, Default)]
pub struct ValidatorRegistry {
    bindings: BTreeMap<TemplateId, Registration>,
}

impl ValidatorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in rule set.
    pub fn standard(measures: Arc<MeasureConfigs>) -> Result<Self, RegistryError> {
        Self::new()
            .with(TemplateId::ClinicalDocument, ClinicalDocumentValidator, false)?
            .with(TemplateId::IaSection, IaSectionValidator, true)?
            .with(TemplateId::IaMeasure, IaMeasureValidator, false)?
            .with(TemplateId::MeasurePerformed, MeasurePerformedValidator, false)?
            .with(
                TemplateId::ReportingParametersAct,
                ReportingParametersValidator,
                false,
            )?
            .with(TemplateId::MeasureSection, MeasureSectionValidator, false)?
            .with(
                TemplateId::MeasureReferenceResults,
                QualityMeasureIdValidator::new(measures),
                true,
            )?
            .with(TemplateId::MeasureData, MeasureDataValidator, false)?
            .with(TemplateId::AggregateCount, AggregateCountValidator, false)
    }

    /// Bind `validator` to `template_id`.
    ///
    /// Binding a template twice is a configuration error.
    pub fn register<V>(
        &mut self,
        template_id: TemplateId,
        validator: V,
        required: bool,
    ) -> Result<(), RegistryError>
    where
        V: NodeValidator + 'static,
    {
        if let Some(existing) = self.bindings.get(&template_id) {
            return Err(RegistryError::DuplicateBinding {
                template: template_id,
                existing: existing.validator.name(),
                rejected: validator.name(),
            });
        }
        self.bindings.insert(
            template_id,
            Registration {
                template_id,
                validator: Box::new(validator),
                required,
            },
        );
        Ok(())
    }

    /// Builder form of [`ValidatorRegistry::register`].
    pub fn with<V>(
        mut self,
        template_id: TemplateId,
        validator: V,
        required: bool,
    ) -> Result<Self, RegistryError>
    where
        V: NodeValidator + 'static,
    {
        self.register(template_id, validator, required)?;
        Ok(self)
    }

    pub fn get(&self, template_id: TemplateId) -> Option<&Registration> {
        self.bindings.get(&template_id)
    }

    pub fn validator_for(&self, template_id: TemplateId) -> Option<&dyn NodeValidator> {
        self.get(template_id)
            .map(|registration| registration.validator.as_ref())
    }

    pub fn is_required(&self, template_id: TemplateId) -> bool {
        self.get(template_id)
            .is_some_and(|registration| registration.required)
    }

    /// Templates that must appear at least once, in template order.
    pub fn required_templates(&self) -> impl Iterator<Item = TemplateId> + '_ {
        self.bindings
            .values()
            .filter(|registration| registration.required)
            .map(|registration| registration.template_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.bindings.values()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
