//! Generation result types.

use crate::naming::IconIdentifier;
use std::path::PathBuf;
use std::time::Duration;

/// Outcome for a single directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconStatus {
    /// A component was generated
    Generated,
    /// The entry was not an icon source
    Skipped(String),
    /// The icon could not be generated
    Failed(String),
}

impl IconStatus {
    /// Check if the status indicates failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, IconStatus::Failed(_))
    }
}

impl std::fmt::Display for IconStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconStatus::Generated => write!(f, "generated"),
            IconStatus::Skipped(reason) => write!(f, "skipped: {}", reason),
            IconStatus::Failed(err) => write!(f, "failed: {}", err),
        }
    }
}

/// Result of processing one directory entry.
#[derive(Debug, Clone)]
pub struct FileResult {
    /// File name inside the input directory
    pub file_name: String,
    /// Processing status
    pub status: IconStatus,
    /// Component name, when generated
    pub identifier: Option<IconIdentifier>,
    /// Processing duration
    pub duration: Duration,
}

impl FileResult {
    /// Create a generated result.
    pub fn generated(file_name: String, identifier: IconIdentifier, duration: Duration) -> Self {
        Self { file_name, status: IconStatus::Generated, identifier: Some(identifier), duration }
    }

    /// Create a skipped result.
    pub fn skipped(file_name: String, reason: impl Into<String>) -> Self {
        Self {
            file_name,
            status: IconStatus::Skipped(reason.into()),
            identifier: None,
            duration: Duration::ZERO,
        }
    }

    /// Create a failed result.
    pub fn failed(file_name: String, error: String, duration: Duration) -> Self {
        Self { file_name, status: IconStatus::Failed(error), identifier: None, duration }
    }
}

/// Advisory report of a generation run.
#[derive(Debug, Default, Clone)]
pub struct GenerationReport {
    /// Skipped entries first, then sources in listing order
    pub files: Vec<FileResult>,
    /// Total run duration
    pub total_duration: Duration,
}

impl GenerationReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file result.
    pub fn add_result(&mut self, result: FileResult) {
        self.files.push(result);
    }

    /// Number of generated components.
    pub fn processed(&self) -> usize {
        self.files.iter().filter(|r| r.status == IconStatus::Generated).count()
    }

    /// Number of icons that failed.
    pub fn failed(&self) -> usize {
        self.files.iter().filter(|r| r.status.is_failure()).count()
    }

    /// Number of skipped entries.
    pub fn skipped(&self) -> usize {
        self.files.iter().filter(|r| matches!(r.status, IconStatus::Skipped(_))).count()
    }

    /// Check if every icon was generated.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Generated identifiers in output order.
    pub fn identifiers(&self) -> Vec<&IconIdentifier> {
        self.files.iter().filter_map(|r| r.identifier.as_ref()).collect()
    }

    /// Failed file results.
    pub fn failures(&self) -> Vec<&FileResult> {
        self.files.iter().filter(|r| r.status.is_failure()).collect()
    }

    /// Format a summary of the run.
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        let processed = self.processed();
        let skipped = self.skipped();
        let failed = self.failed();

        if failed > 0 {
            lines.push(format!(
                "Generated {} icons with {} failed, {} skipped",
                processed, failed, skipped
            ));
            for file in self.failures() {
                lines.push(format!("  - {}: {}", file.file_name, file.status));
            }
        } else {
            lines.push(format!(
                "Generated {} icons, {} skipped in {:?}",
                processed, skipped, self.total_duration
            ));
        }

        lines.join("\n")
    }
}

/// Everything a successful run produced.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// Per-file report
    pub report: GenerationReport,
    /// Full artifact text
    pub artifact: String,
    /// Where the artifact belongs
    pub output_path: PathBuf,
    /// Whether the artifact was written (false on dry runs)
    pub written: bool,
}
