//! Generation pipeline orchestration.
//!
//! One run lists the input directory, turns every SVG source into a
//! component and persists the aggregated module. A bad icon is reported and
//! skipped; only directory and persist failures stop the run.

use crate::build::discovery::{compile_excludes, discover, DiscoveryError, IconSource};
use crate::build::progress::{ProgressEvent, ProgressReporter, ProgressTracker};
use crate::build::{FileResult, GenerateOptions, GenerateOutcome, GenerationReport};
use crate::fs::{FileSystem, FsError};
use crate::naming::{NameRegistry, NamingError};
use crate::render::{aggregate, render, RenderedComponent};
use crate::svg::{self, SvgError};
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;

/// Why a single icon was left out of the artifact.
#[derive(Debug, Error)]
pub enum IconError {
    /// The file could not be read
    #[error(transparent)]
    Read(#[from] FsError),
    /// The file is not a usable SVG document
    #[error(transparent)]
    Svg(#[from] SvgError),
    /// No identifier could be derived
    #[error(transparent)]
    Naming(#[from] NamingError),
}

/// Error that stops a run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerateError {
    /// The input directory does not exist
    #[error("input directory not found: {}", .0.display())]
    InputDirectoryMissing(PathBuf),
    /// The input directory could not be listed
    #[error("failed to list {}: {source}", path.display())]
    Listing {
        /// Directory being listed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: FsError,
    },
    /// An exclude pattern is invalid
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    /// The artifact could not be written
    #[error("failed to write {}: {source}", path.display())]
    PersistFailure {
        /// Artifact or directory path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: FsError,
    },
}

/// Generation pipeline for one options set.
#[derive(Debug, Clone, Default)]
pub struct IconPipeline {
    options: GenerateOptions,
    dry_run: bool,
}

impl IconPipeline {
    /// Create a new pipeline.
    pub fn new(options: GenerateOptions) -> Self {
        Self { options, dry_run: false }
    }

    /// Set dry-run mode (build the artifact but do not write it).
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Get the options.
    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Run the pipeline over `input_dir`, writing into `output_dir`.
    pub fn run(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        fs: &impl FileSystem,
        reporter: &dyn ProgressReporter,
    ) -> Result<GenerateOutcome, GenerateError> {
        self.execute(input_dir, output_dir, fs, reporter).inspect_err(|e| {
            reporter.report(ProgressEvent::Aborted { message: e.to_string() });
        })
    }

    fn execute(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        fs: &impl FileSystem,
        reporter: &dyn ProgressReporter,
    ) -> Result<GenerateOutcome, GenerateError> {
        let start = Instant::now();

        if !fs.exists(input_dir) {
            return Err(GenerateError::InputDirectoryMissing(input_dir.to_path_buf()));
        }
        let excludes = compile_excludes(&self.options.exclude)?;
        let names = fs
            .list_files(input_dir)
            .map_err(|source| GenerateError::Listing { path: input_dir.to_path_buf(), source })?;
        let discovery = discover(input_dir, names, &excludes);

        let mut tracker = ProgressTracker::new();
        tracker.start(discovery.sources.len());
        reporter.report(ProgressEvent::Started { total_files: discovery.sources.len() });

        let mut report = GenerationReport::new();
        for entry in discovery.skipped {
            tracker.skipped();
            reporter.report(ProgressEvent::Skipped {
                file: entry.file_name.clone(),
                reason: entry.reason.clone(),
            });
            report.add_result(FileResult::skipped(entry.file_name, entry.reason));
        }

        let mut registry = NameRegistry::new();
        let mut components = Vec::with_capacity(discovery.sources.len());
        for source in &discovery.sources {
            reporter.report(ProgressEvent::ProcessingFile { file: source.file_name.clone() });
            let icon_start = Instant::now();

            match self.process_file(source, fs, &mut registry) {
                Ok(component) => {
                    let duration = icon_start.elapsed();
                    tracker.succeeded();
                    reporter.report(ProgressEvent::Succeeded {
                        file: source.file_name.clone(),
                        identifier: component.identifier.to_string(),
                        duration_ms: duration.as_millis() as u64,
                    });
                    report.add_result(FileResult::generated(
                        source.file_name.clone(),
                        component.identifier.clone(),
                        duration,
                    ));
                    components.push(component);
                }
                Err(e) => {
                    tracker.failed();
                    reporter.report(ProgressEvent::Failed {
                        file: source.file_name.clone(),
                        error: e.to_string(),
                    });
                    report.add_result(FileResult::failed(
                        source.file_name.clone(),
                        e.to_string(),
                        icon_start.elapsed(),
                    ));
                }
            }
        }

        let artifact = aggregate(&components, self.options.format);
        let output_path = output_dir.join(&self.options.output_file_name);

        if !self.dry_run {
            persist(fs, output_dir, &output_path, &artifact)?;
        }

        let written = !self.dry_run;
        let output = written.then(|| output_path.display().to_string());
        reporter.report(tracker.finished_event(output));

        report.total_duration = start.elapsed();
        Ok(GenerateOutcome { report, artifact, output_path, written })
    }

    fn process_file(
        &self,
        source: &IconSource,
        fs: &impl FileSystem,
        registry: &mut NameRegistry,
    ) -> Result<RenderedComponent, IconError> {
        let content = fs.read_file(&source.path)?;
        process_source(&content, source.stem(), &self.options, registry)
    }
}

/// Turn one SVG document into a rendered component.
///
/// The identifier is registered in `registry` only when the whole icon
/// succeeds up to naming.
pub fn process_source(
    content: &str,
    filename_stem: &str,
    options: &GenerateOptions,
    registry: &mut NameRegistry,
) -> Result<RenderedComponent, IconError> {
    let doc = svg::parse(content)?;
    let attrs = svg::extract(&doc, &options.sizes);
    let id = registry.synthesize(&attrs, filename_stem, &options.naming)?;
    Ok(render(&id, &attrs, doc.inner_markup(), options.format))
}

fn persist(
    fs: &impl FileSystem,
    output_dir: &Path,
    output_path: &Path,
    artifact: &str,
) -> Result<(), GenerateError> {
    if !fs.exists(output_dir) {
        fs.make_directories(output_dir).map_err(|source| GenerateError::PersistFailure {
            path: output_dir.to_path_buf(),
            source,
        })?;
    }
    fs.write_file(output_path, artifact)
        .map_err(|source| GenerateError::PersistFailure { path: output_path.to_path_buf(), source })
}

/// Run one generation with the given options.
pub fn generate(
    input_dir: &Path,
    output_dir: &Path,
    options: &GenerateOptions,
    fs: &impl FileSystem,
    reporter: &dyn ProgressReporter,
) -> Result<GenerateOutcome, GenerateError> {
    IconPipeline::new(options.clone()).run(input_dir, output_dir, fs, reporter)
}
