//! Component identifier synthesis.
//!
//! Every icon in a batch gets a component name that starts with a letter,
//! contains only ASCII letters and digits, and is unique within the batch.
//! Names come from the icon title when there is one, optionally from the file
//! name, and otherwise from a per-run fallback sequence (`Icon1`, `Icon2`, ...).
//! Collisions are resolved with a numeric suffix (`ArrowLeft`, `ArrowLeft2`, ...).

use crate::svg::IconAttributes;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Separator runs between words of a title.
static WORD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("static regex"));

/// Prefix for generated names and for names that would start with a digit.
const FALLBACK_PREFIX: &str = "Icon";

/// Error while deriving an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    /// Normalization left nothing usable
    #[error("cannot derive an identifier from '{0}'")]
    EmptyIdentifier(String),
    /// A string that is not a valid identifier
    #[error("'{0}' is not a valid identifier")]
    InvalidIdentifier(String),
}

/// A validated component name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconIdentifier(String);

impl IconIdentifier {
    /// Validate and wrap a name.
    pub fn new(name: impl Into<String>) -> Result<Self, NamingError> {
        let name = name.into();
        if is_valid_identifier(&name) {
            Ok(Self(name))
        } else {
            Err(NamingError::InvalidIdentifier(name))
        }
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IconIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check `^[A-Za-z][A-Za-z0-9]*$`.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Convert arbitrary text to UpperCamelCase.
///
/// Splits on runs of non-alphanumeric characters and upper-cases the first
/// letter of every word. The rest of each word is kept as written.
///
/// ```
/// use svgicons::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("arrow-left"), "ArrowLeft");
/// assert_eq!(to_camel_case("chevron_down 2"), "ChevronDown2");
/// assert_eq!(to_camel_case("iOS"), "IOS");
/// ```
pub fn to_camel_case(text: &str) -> String {
    WORD_SEPARATOR
        .split(text)
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Naming options for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingPolicy {
    /// Alphanumeric suffix appended to every name (e.g. `Icon`)
    pub suffix: String,
    /// Use the file name when an icon has no title
    pub use_file_names: bool,
}

/// Per-run naming state: the names handed out so far and the fallback counter.
#[derive(Debug, Clone)]
pub struct NameRegistry {
    used: HashSet<String>,
    order: Vec<IconIdentifier>,
    next_fallback: usize,
}

impl Default for NameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl NameRegistry {
    /// Create an empty registry with the fallback counter at 1.
    pub fn new() -> Self {
        Self { used: HashSet::new(), order: Vec::new(), next_fallback: 1 }
    }

    /// Next value the fallback counter will hand out.
    pub fn fallback_counter(&self) -> usize {
        self.next_fallback
    }

    /// Whether a name is already taken in this run.
    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Identifiers handed out so far, in order.
    pub fn identifiers(&self) -> &[IconIdentifier] {
        &self.order
    }

    /// Derive and register a unique identifier for one icon.
    pub fn synthesize(
        &mut self,
        attrs: &IconAttributes,
        filename_stem: &str,
        policy: &NamingPolicy,
    ) -> Result<IconIdentifier, NamingError> {
        let base = match &attrs.raw_title {
            Some(title) => normalize(title, &policy.suffix)
                .ok_or_else(|| NamingError::EmptyIdentifier(title.clone()))?,
            None => {
                let from_file = if policy.use_file_names {
                    normalize(filename_stem, &policy.suffix)
                } else {
                    None
                };
                match from_file {
                    Some(name) => name,
                    None => self.next_fallback_name(&policy.suffix),
                }
            }
        };

        let name = self.disambiguate(base);
        let identifier = IconIdentifier::new(name)?;
        self.register(identifier.clone());
        Ok(identifier)
    }

    /// Draw fallback numbers until one yields a free name.
    fn next_fallback_name(&mut self, suffix: &str) -> String {
        loop {
            let n = self.next_fallback;
            self.next_fallback += 1;
            let name = with_suffix(format!("{}{}", FALLBACK_PREFIX, n), suffix);
            if !self.used.contains(&name) {
                return name;
            }
        }
    }

    /// Append the smallest free numeric suffix starting at 2.
    fn disambiguate(&self, base: String) -> String {
        if !self.used.contains(&base) {
            return base;
        }
        (2..)
            .map(|n| format!("{}{}", base, n))
            .find(|candidate| !self.used.contains(candidate))
            .unwrap_or(base)
    }

    fn register(&mut self, identifier: IconIdentifier) {
        self.used.insert(identifier.as_str().to_string());
        self.order.push(identifier);
    }
}

/// Camel-case `text`, make it start with a letter and append the suffix.
fn normalize(text: &str, suffix: &str) -> Option<String> {
    let camel = to_camel_case(text);
    if camel.is_empty() {
        return None;
    }
    let camel = if camel.starts_with(|c: char| c.is_ascii_digit()) {
        format!("{}{}", FALLBACK_PREFIX, camel)
    } else {
        camel
    };
    Some(with_suffix(camel, suffix))
}

fn with_suffix(name: String, suffix: &str) -> String {
    if suffix.is_empty() || name.ends_with(suffix) {
        name
    } else {
        name + suffix
    }
}
