//! Generation progress reporting.
//!
//! Reporters observe a run; they never influence its outcome. Console output
//! is human readable, JSON output is one object per line.
//!
//! # Example
//!
//! ```ignore
//! use svgicons::build::progress::{ConsoleProgress, ProgressEvent, ProgressReporter};
//!
//! let reporter = ConsoleProgress::new();
//! reporter.report(ProgressEvent::Started { total_files: 2 });
//! reporter.report(ProgressEvent::Succeeded {
//!     file: "home.svg".to_string(),
//!     identifier: "Home".to_string(),
//!     duration_ms: 1,
//! });
//! ```

use serde::Serialize;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Events emitted during a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ProgressEvent {
    /// Listing done, processing about to begin
    Started {
        /// Number of SVG sources to process
        total_files: usize,
    },
    /// An SVG source is being processed
    ProcessingFile {
        /// File name
        file: String,
    },
    /// A component was generated
    Succeeded {
        /// File name
        file: String,
        /// Component name
        identifier: String,
        /// Duration in milliseconds
        duration_ms: u64,
    },
    /// An icon could not be generated; the run continues
    Failed {
        /// File name
        file: String,
        /// Error message
        error: String,
    },
    /// A directory entry was left out
    Skipped {
        /// File name
        file: String,
        /// Reason for skipping
        reason: String,
    },
    /// The run stopped without producing an artifact
    Aborted {
        /// Error message
        message: String,
    },
    /// The run completed
    Finished {
        /// Number of generated components
        processed: usize,
        /// Number of failed icons
        failed: usize,
        /// Number of skipped entries
        skipped: usize,
        /// Artifact path, absent on dry runs
        #[serde(skip_serializing_if = "Option::is_none")]
        output: Option<String>,
        /// Total duration in milliseconds
        duration_ms: u64,
    },
}

/// Trait for progress reporters.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event.
    fn report(&self, event: ProgressEvent);

    /// Check if this reporter wants verbose output.
    fn is_verbose(&self) -> bool {
        false
    }
}

/// A progress reporter that discards all events.
#[derive(Debug, Default)]
pub struct NullProgress;

impl NullProgress {
    /// Create a new null progress reporter.
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for NullProgress {
    fn report(&self, _event: ProgressEvent) {}
}

/// Console progress reporter with optional colors.
pub struct ConsoleProgress {
    use_colors: bool,
    verbose: bool,
    current: AtomicUsize,
    total: AtomicUsize,
    output: Mutex<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for ConsoleProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleProgress")
            .field("use_colors", &self.use_colors)
            .field("verbose", &self.verbose)
            .field("current", &self.current)
            .field("total", &self.total)
            .finish()
    }
}

impl ConsoleProgress {
    /// Create a console reporter writing to stderr.
    ///
    /// Colors are enabled when stderr is a terminal.
    pub fn new() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stderr),
            verbose: false,
            current: AtomicUsize::new(0),
            total: AtomicUsize::new(0),
            output: Mutex::new(Box::new(std::io::stderr())),
        }
    }

    /// Create a console progress reporter that writes to a custom output.
    pub fn with_output<W: Write + Send + 'static>(output: W) -> Self {
        Self {
            use_colors: false,
            verbose: false,
            current: AtomicUsize::new(0),
            total: AtomicUsize::new(0),
            output: Mutex::new(Box::new(output)),
        }
    }

    /// Set whether to use colors.
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set verbose mode.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}\x1b[0m", color, text)
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.color(text, "\x1b[32m")
    }

    fn yellow(&self, text: &str) -> String {
        self.color(text, "\x1b[33m")
    }

    fn red(&self, text: &str) -> String {
        self.color(text, "\x1b[31m")
    }

    fn cyan(&self, text: &str) -> String {
        self.color(text, "\x1b[36m")
    }

    fn bold(&self, text: &str) -> String {
        self.color(text, "\x1b[1m")
    }

    fn writeln(&self, line: &str) {
        if let Ok(mut output) = self.output.lock() {
            let _ = writeln!(output, "{}", line);
        }
    }

    /// Advance the counter and return `[n/total]`.
    fn step(&self) -> String {
        let current = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        format!("[{}/{}]", current, self.total.load(Ordering::SeqCst))
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleProgress {
    fn report(&self, event: ProgressEvent) {
        let tag = self.cyan("[generate]");
        match event {
            ProgressEvent::Started { total_files } => {
                self.total.store(total_files, Ordering::SeqCst);
                self.current.store(0, Ordering::SeqCst);
                self.writeln(&format!(
                    "{} Generating {} icon{}...",
                    tag,
                    total_files,
                    if total_files == 1 { "" } else { "s" }
                ));
            }
            ProgressEvent::ProcessingFile { file } => {
                if self.verbose {
                    self.writeln(&format!("{} Processing {}...", tag, file));
                }
            }
            ProgressEvent::Succeeded { file, identifier, duration_ms } => {
                let step = self.step();
                if self.verbose {
                    self.writeln(&format!(
                        "{} {} {} {} -> {} ({})",
                        tag,
                        step,
                        self.green("ok"),
                        file,
                        identifier,
                        format_duration(duration_ms)
                    ));
                }
            }
            ProgressEvent::Failed { file, error } => {
                let step = self.step();
                self.writeln(&format!("{} {} {} {}", tag, step, self.red("FAILED"), file));
                self.writeln(&format!("        {}", self.red(&error)));
            }
            ProgressEvent::Skipped { file, reason } => {
                if self.verbose {
                    self.writeln(&format!(
                        "{} {} {} ({})",
                        tag,
                        self.yellow("skipped"),
                        file,
                        reason
                    ));
                }
            }
            ProgressEvent::Aborted { message } => {
                self.writeln(&format!("{} {}", self.red("[error]"), message));
            }
            ProgressEvent::Finished { processed, failed, skipped, output, duration_ms } => {
                let duration_str = format_duration(duration_ms);
                let target = match output {
                    Some(path) => format!(" -> {}", path),
                    None => String::new(),
                };
                if failed == 0 {
                    self.writeln(&format!(
                        "\n{} {} {} generated, {} skipped in {}{}",
                        self.green("[done]"),
                        self.bold(&processed.to_string()),
                        if processed == 1 { "icon" } else { "icons" },
                        skipped,
                        duration_str,
                        target
                    ));
                } else {
                    self.writeln(&format!(
                        "\n{} {} generated, {} skipped, {} {} in {}{}",
                        self.yellow("[done]"),
                        processed,
                        skipped,
                        failed,
                        if failed == 1 { "failure" } else { "failures" },
                        duration_str,
                        target
                    ));
                }
            }
        }
    }

    fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// JSON progress reporter for machine-readable output.
pub struct JsonProgress {
    output: Mutex<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for JsonProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonProgress").finish()
    }
}

impl JsonProgress {
    /// Create a new JSON progress reporter writing to stderr.
    pub fn new() -> Self {
        Self { output: Mutex::new(Box::new(std::io::stderr())) }
    }

    /// Create a JSON progress reporter that writes to a custom output.
    pub fn with_output<W: Write + Send + 'static>(output: W) -> Self {
        Self { output: Mutex::new(Box::new(output)) }
    }
}

impl Default for JsonProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for JsonProgress {
    fn report(&self, event: ProgressEvent) {
        let Ok(json) = serde_json::to_string(&event) else {
            return;
        };
        if let Ok(mut output) = self.output.lock() {
            let _ = writeln!(output, "{}", json);
        }
    }
}

/// Reporter that keeps every event in memory.
#[derive(Debug, Default)]
pub struct CollectingProgress {
    events: Mutex<Vec<ProgressEvent>>,
}

impl CollectingProgress {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far.
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl ProgressReporter for CollectingProgress {
    fn report(&self, event: ProgressEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

/// Running counters for one generation run.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    start_time: Option<Instant>,
    total: usize,
    processed: usize,
    failed: usize,
    skipped: usize,
}

impl ProgressTracker {
    /// Create a new progress tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a run over `total_files` sources.
    pub fn start(&mut self, total_files: usize) {
        self.start_time = Some(Instant::now());
        self.total = total_files;
        self.processed = 0;
        self.failed = 0;
        self.skipped = 0;
    }

    /// Record a generated component.
    pub fn succeeded(&mut self) {
        self.processed += 1;
    }

    /// Record a failed icon.
    pub fn failed(&mut self) {
        self.failed += 1;
    }

    /// Record a skipped entry.
    pub fn skipped(&mut self) {
        self.skipped += 1;
    }

    /// Get the elapsed time since the run started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or(Duration::ZERO)
    }

    /// Get the elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }

    /// Get the completion percentage.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            ((self.processed + self.failed) as f64 / self.total as f64) * 100.0
        }
    }

    /// Build the `Finished` event from current state.
    pub fn finished_event(&self, output: Option<String>) -> ProgressEvent {
        ProgressEvent::Finished {
            processed: self.processed,
            failed: self.failed,
            skipped: self.skipped,
            output,
            duration_ms: self.elapsed_ms(),
        }
    }
}

/// Format a duration in milliseconds to a human-readable string.
pub(crate) fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.1}s", ms as f64 / 1000.0)
    } else {
        let minutes = ms / 60_000;
        let seconds = (ms % 60_000) / 1000;
        format!("{}m {}s", minutes, seconds)
    }
}
