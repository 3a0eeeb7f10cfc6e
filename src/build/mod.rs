//! Generation pipeline module for svgicons
//!
//! Turns a directory of `.svg` files into one module of icon components.
//!
//! # Overview
//!
//! The pipeline consists of:
//! - **Discovery**: Split the directory listing into SVG sources and skipped entries
//! - **Processing**: Parse, extract, name and render each source
//! - **Persisting**: Aggregate the components and write the artifact
//!
//! # Example
//!
//! ```ignore
//! use svgicons::build::{GenerateContext, IconPipeline, NullProgress};
//! use svgicons::config::load_config;
//! use svgicons::fs::OsFileSystem;
//!
//! let config = load_config(None)?;
//! let context = GenerateContext::new(config, project_root);
//! let pipeline = IconPipeline::new(context.options());
//!
//! let outcome = pipeline.run(&context.src_dir(), &context.out_dir(), &OsFileSystem, &NullProgress)?;
//! println!("{}", outcome.report.summary());
//! ```

pub mod context;
pub mod discovery;
pub mod pipeline;
pub mod progress;
pub mod result;

pub use context::*;
pub use discovery::*;
pub use pipeline::*;
pub use progress::{
    CollectingProgress, ConsoleProgress, JsonProgress, NullProgress, ProgressEvent,
    ProgressReporter, ProgressTracker,
};
pub use result::*;
