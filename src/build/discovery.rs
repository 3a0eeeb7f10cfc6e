//! Icon source discovery.
//!
//! Splits a directory listing into SVG sources and skipped entries. Listing
//! order is preserved.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error during source discovery.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Invalid exclude pattern
    #[error("Invalid glob pattern '{0}': {1}")]
    InvalidPattern(String, glob::PatternError),
}

/// An SVG file selected for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSource {
    /// File name inside the input directory
    pub file_name: String,
    /// Full path
    pub path: PathBuf,
}

impl IconSource {
    /// File name without its extension.
    pub fn stem(&self) -> &str {
        match self.file_name.rfind('.') {
            Some(idx) => &self.file_name[..idx],
            None => &self.file_name,
        }
    }
}

/// Directory entry left out of the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// File name
    pub file_name: String,
    /// Why it was skipped
    pub reason: String,
}

/// Result of classifying one directory listing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Discovery {
    /// Sources to process, in listing order
    pub sources: Vec<IconSource>,
    /// Entries left out, in listing order
    pub skipped: Vec<SkippedEntry>,
}

/// Compile exclude patterns.
pub fn compile_excludes(patterns: &[String]) -> Result<Vec<glob::Pattern>, DiscoveryError> {
    patterns
        .iter()
        .map(|p| glob::Pattern::new(p).map_err(|e| DiscoveryError::InvalidPattern(p.clone(), e)))
        .collect()
}

/// Check if a file name has the `.svg` extension (any case).
pub fn is_svg_file(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

/// Classify the entries of `dir`.
pub fn discover(dir: &Path, names: Vec<String>, excludes: &[glob::Pattern]) -> Discovery {
    let mut discovery = Discovery::default();

    for file_name in names {
        if !is_svg_file(&file_name) {
            discovery.skipped.push(SkippedEntry { file_name, reason: "not an SVG file".into() });
            continue;
        }

        if let Some(pattern) = excludes.iter().find(|p| p.matches(&file_name)) {
            let reason = format!("excluded by '{}'", pattern.as_str());
            discovery.skipped.push(SkippedEntry { file_name, reason });
            continue;
        }

        let path = dir.join(&file_name);
        discovery.sources.push(IconSource { file_name, path });
    }

    discovery
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_is_svg_file() {
        assert!(is_svg_file("home.svg"));
        assert!(is_svg_file("HOME.SVG"));
        assert!(is_svg_file("arrow.left.Svg"));
        assert!(!is_svg_file("home.svgz"));
        assert!(!is_svg_file("svg"));
        assert!(!is_svg_file(".svg"));
        assert!(!is_svg_file("readme.md"));
    }

    #[test]
    fn test_discover_keeps_listing_order() {
        let found = discover(Path::new("icons"), names(&["b.svg", "a.svg", "c.SVG"]), &[]);
        let files: Vec<&str> = found.sources.iter().map(|s| s.file_name.as_str()).collect();
        assert_eq!(files, vec!["b.svg", "a.svg", "c.SVG"]);
        assert_eq!(found.sources[0].path, PathBuf::from("icons/b.svg"));
        assert!(found.skipped.is_empty());
    }

    #[test]
    fn test_discover_skips_non_svg() {
        let found = discover(Path::new("."), names(&["notes.txt", "home.svg", ".DS_Store"]), &[]);
        assert_eq!(found.sources.len(), 1);
        assert_eq!(found.skipped.len(), 2);
        assert_eq!(found.skipped[0].file_name, "notes.txt");
        assert_eq!(found.skipped[0].reason, "not an SVG file");
    }

    #[test]
    fn test_discover_applies_excludes() {
        let excludes = compile_excludes(&names(&["*-old.svg", "draft_*"])).unwrap();
        let found = discover(
            Path::new("."),
            names(&["home.svg", "home-old.svg", "draft_bell.svg"]),
            &excludes,
        );
        assert_eq!(found.sources.len(), 1);
        assert_eq!(found.sources[0].file_name, "home.svg");
        assert_eq!(found.skipped[0].reason, "excluded by '*-old.svg'");
        assert_eq!(found.skipped[1].reason, "excluded by 'draft_*'");
    }

    #[test]
    fn test_compile_excludes_rejects_bad_pattern() {
        let result = compile_excludes(&names(&["[oops"]));
        assert!(matches!(result, Err(DiscoveryError::InvalidPattern(p, _)) if p == "[oops"));
    }

    #[test]
    fn test_stem() {
        let source = IconSource { file_name: "arrow-left.svg".into(), path: PathBuf::new() };
        assert_eq!(source.stem(), "arrow-left");
        let dotted = IconSource { file_name: "a.b.svg".into(), path: PathBuf::new() };
        assert_eq!(dotted.stem(), "a.b");
    }
}
