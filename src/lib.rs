//! svgicons - Library for turning SVG files into UI icon components
//!
//! This library provides functionality to:
//! - Parse SVG documents leniently and extract their presentation attributes
//! - Derive unique, valid component names for a batch of icons
//! - Render each icon as a sized, colorable component and aggregate the module
//!
//! The entry point is [`build::generate`] (or [`build::IconPipeline`]).

pub mod build;
pub mod cli;
pub mod config;
pub mod fs;
pub mod naming;
pub mod render;
pub mod svg;

pub use build::{generate, GenerateError, GenerateOptions, GenerateOutcome, IconPipeline};
