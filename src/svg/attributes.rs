//! Presentation attribute extraction.

use super::reader::ParsedSvg;

/// Fallback sizes for icons without explicit `width`/`height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeDefaults {
    /// Default width
    pub width: String,
    /// Default height
    pub height: String,
}

impl Default for SizeDefaults {
    fn default() -> Self {
        Self { width: "24px".to_string(), height: "24px".to_string() }
    }
}

/// Attributes of one icon that drive naming and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconAttributes {
    /// Width, verbatim or defaulted
    pub width: String,
    /// Height, verbatim or defaulted
    pub height: String,
    /// `viewBox`, verbatim when present
    pub view_box: Option<String>,
    /// Title with all whitespace removed, when non-empty
    pub raw_title: Option<String>,
}

/// Extract icon attributes from a parsed document.
///
/// The title is taken from the root `title` attribute first and from a
/// direct `<title>` child second. All whitespace is removed from it.
pub fn extract(doc: &ParsedSvg, defaults: &SizeDefaults) -> IconAttributes {
    let width = doc.attribute("width").map(str::to_string).unwrap_or_else(|| defaults.width.clone());
    let height =
        doc.attribute("height").map(str::to_string).unwrap_or_else(|| defaults.height.clone());
    let view_box = doc.attribute("viewBox").map(str::to_string);

    let raw_title = doc
        .attribute("title")
        .and_then(strip_whitespace)
        .or_else(|| doc.child_element("title").and_then(|t| strip_whitespace(&t.text)));

    IconAttributes { width, height, view_box, raw_title }
}

fn strip_whitespace(text: &str) -> Option<String> {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        None
    } else {
        Some(stripped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::parse;

    fn attrs(svg: &str) -> IconAttributes {
        extract(&parse(svg).unwrap(), &SizeDefaults::default())
    }

    #[test]
    fn test_explicit_sizes_kept_verbatim() {
        let a = attrs(r#"<svg width="1.5em" height="16" viewBox="0 0 16 16"/>"#);
        assert_eq!(a.width, "1.5em");
        assert_eq!(a.height, "16");
        assert_eq!(a.view_box.as_deref(), Some("0 0 16 16"));
    }

    #[test]
    fn test_missing_sizes_use_defaults() {
        let defaults = SizeDefaults { width: "32px".to_string(), height: "48px".to_string() };
        let a = extract(&parse("<svg/>").unwrap(), &defaults);
        assert_eq!(a.width, "32px");
        assert_eq!(a.height, "48px");
        assert_eq!(a.view_box, None);
        assert_eq!(a.raw_title, None);
    }

    #[test]
    fn test_title_attribute_preferred() {
        let a = attrs(r#"<svg title="Home"><title>Ignored</title></svg>"#);
        assert_eq!(a.raw_title.as_deref(), Some("Home"));
    }

    #[test]
    fn test_title_child_used_as_fallback() {
        let a = attrs("<svg><title>\n  Arrow  Left \n</title><path/></svg>");
        assert_eq!(a.raw_title.as_deref(), Some("ArrowLeft"));
    }

    #[test]
    fn test_blank_title_attribute_falls_through() {
        let a = attrs(r#"<svg title="   "><title>Bell</title></svg>"#);
        assert_eq!(a.raw_title.as_deref(), Some("Bell"));
    }

    #[test]
    fn test_blank_titles_are_absent() {
        let a = attrs(r#"<svg title=" "><title>  </title></svg>"#);
        assert_eq!(a.raw_title, None);
    }

    #[test]
    fn test_nested_title_is_not_used() {
        let a = attrs("<svg><g><title>Deep</title></g></svg>");
        assert_eq!(a.raw_title, None);
    }
}
