use std::fs::{self, File};
use std::io::BufWriter;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use serde::Serialize;
use tracing::{Span, error, info, info_span, warn};

use qpp_measures::hash::sha256_hex;
use qpp_measures::{load_default_measure_configs, load_measure_configs};
use qpp_model::{ConversionMetadata, MeasureConfigs, Node, TemplateId, ValidationError};
use qpp_validate::{PhaseCounts, ValidationEngine, ValidatorRegistry};

use crate::cli::ValidateArgs;
use crate::types::{DocumentFailure, DocumentResult, TemplateRow, ValidateResult};

const REPORT_SUFFIX: &str = "validation.json";

/// Validate every tree in `args` against one shared engine.
///
/// Documents are validated in parallel, at most one per available core at a
/// time. A document that cannot be read or validated is recorded as a
/// failure without affecting the others. Errors mean the run could not start:
/// broken configuration or an unusable report directory.
pub fn run_validate(args: &ValidateArgs) -> Result<ValidateResult> {
    let span = info_span!("validate", documents = args.trees.len());
    let _guard = span.enter();

    let loaded = match &args.measures {
        Some(path) => load_measure_configs(path),
        None => load_default_measure_configs(),
    }
    .context("load measure configuration")?;
    let registry =
        ValidatorRegistry::standard(Arc::new(loaded.configs)).context("build validator registry")?;
    let engine = ValidationEngine::new(registry);

    if let Some(dir) = &args.report_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("create report directory {}", dir.display()))?;
    }

    let workers = thread::available_parallelism().map_or(1, NonZeroUsize::get);
    let report_dir = args.report_dir.as_deref();
    let mut documents = Vec::new();
    let mut failures = Vec::new();
    for batch in args.trees.chunks(workers) {
        for (path, outcome) in batch.iter().zip(validate_batch(&engine, batch, report_dir)) {
            match outcome {
                Ok(document) => documents.push(document),
                Err(error) => {
                    error!(
                        path = %path.display(),
                        error = format!("{error:#}"),
                        "document not validated"
                    );
                    failures.push(DocumentFailure {
                        source: path.clone(),
                        error,
                    });
                }
            }
        }
    }

    let invalid = documents
        .iter()
        .filter(|document| !document.report.is_valid())
        .count();
    info!(
        documents = documents.len(),
        invalid,
        failed = failures.len(),
        "validation run complete"
    );
    Ok(ValidateResult {
        measures_source: loaded.source,
        measures_sha256: loaded.sha256,
        documents,
        failures,
        has_errors: invalid > 0,
    })
}

/// Validate one batch of trees on scoped threads, preserving input order.
fn validate_batch(
    engine: &ValidationEngine,
    batch: &[PathBuf],
    report_dir: Option<&Path>,
) -> Vec<Result<DocumentResult>> {
    thread::scope(|scope| {
        let handles: Vec<_> = batch
            .iter()
            .map(|path| {
                let parent = Span::current();
                scope.spawn(move || {
                    let span = info_span!(parent: &parent, "document", path = %path.display());
                    let _guard = span.enter();
                    validate_document(engine, path, report_dir)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|_| Err(anyhow!("validation thread panicked")))
            })
            .collect()
    })
}

/// Read, validate and optionally report one document.
pub fn validate_document(
    engine: &ValidationEngine,
    path: &Path,
    report_dir: Option<&Path>,
) -> Result<DocumentResult> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let root: Node = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse node tree {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut metadata = ConversionMetadata::new(&file_name, Utc::now())
        .with_document(&root)
        .with_submission_locator(sha256_hex(&bytes));

    let report = engine
        .validate(&root)
        .with_context(|| format!("validate {}", path.display()))?;

    let report_path = match report_dir {
        Some(dir) if !report.is_valid() => Some(report_file(dir, path)),
        _ => None,
    };
    metadata.record_validation(
        report.is_valid(),
        report_path.as_ref().map(|path| path.display().to_string()),
    );
    if let Some(report_path) = &report_path {
        write_report(report_path, &metadata, &report.errors, report.phase_counts)?;
    }
    if !report.is_valid() {
        warn!(errors = report.error_count(), "document failed validation");
    }

    Ok(DocumentResult {
        source: path.to_path_buf(),
        metadata,
        report,
        report_path,
    })
}

fn report_file(dir: &Path, source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    dir.join(format!("{stem}.{REPORT_SUFFIX}"))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentReport<'a> {
    metadata: &'a ConversionMetadata,
    phase_counts: PhaseCounts,
    errors: &'a [ValidationError],
}

fn write_report(
    path: &Path,
    metadata: &ConversionMetadata,
    errors: &[ValidationError],
    phase_counts: PhaseCounts,
) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let report = DocumentReport {
        metadata,
        phase_counts,
        errors,
    };
    serde_json::to_writer_pretty(BufWriter::new(file), &report)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Every template with the validator the standard rule set binds to it.
pub fn template_rows() -> Result<Vec<TemplateRow>> {
    let registry = ValidatorRegistry::standard(Arc::new(MeasureConfigs::default()))
        .context("build validator registry")?;
    Ok(TemplateId::all()
        .iter()
        .map(|template| TemplateRow {
            template: template.as_str().to_string(),
            label: template.label().to_string(),
            validator: registry
                .validator_for(*template)
                .map(|validator| validator.name().to_string()),
            required: registry.is_required(*template),
        })
        .collect())
}
