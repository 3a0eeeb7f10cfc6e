//! Component rendering and module aggregation.
//!
//! Each icon becomes one function component whose size and color are
//! parameters. The module ends with a single export statement.
//!
//! # Output Format
//!
//! ```text
//! function Home({ height = "24px", width = "24px", className, color = "currentColor", ...rest }) {
//!   return (
//!     <svg width={width} height={height} viewBox="0 0 24 24" className={className} {...rest}>
//!       <g fill={color}><path d="..."/></g>
//!     </svg>
//!   );
//! }
//!
//! export { Home };
//! ```

use crate::naming::IconIdentifier;
use crate::svg::IconAttributes;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Target syntax of the generated module.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JavaScript with JSX
    #[default]
    Jsx,
    /// TypeScript with JSX
    Tsx,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jsx => "jsx",
            OutputFormat::Tsx => "tsx",
        }
    }

    /// Default artifact file name (`icons.<ext>`).
    pub fn default_file_name(&self) -> String {
        format!("icons.{}", self.extension())
    }

    /// Declarations emitted once at the top of the module.
    fn prelude(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Jsx => None,
            OutputFormat::Tsx => Some(
                "import type { SVGProps } from \"react\";\n\ntype IconProps = SVGProps<SVGSVGElement>;",
            ),
        }
    }

    /// Type annotation for the props parameter.
    fn props_annotation(&self) -> &'static str {
        match self {
            OutputFormat::Jsx => "",
            OutputFormat::Tsx => ": IconProps",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Source text of one generated component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedComponent {
    /// Component name
    pub identifier: IconIdentifier,
    /// Declaration source
    pub source: String,
}

/// Render one icon component.
///
/// `inner_markup` is placed inside the color group exactly as given.
pub fn render(
    id: &IconIdentifier,
    attrs: &IconAttributes,
    inner_markup: &str,
    format: OutputFormat,
) -> RenderedComponent {
    let view_box = match &attrs.view_box {
        Some(vb) => format!(" viewBox=\"{}\"", jsx_attribute(vb)),
        None => String::new(),
    };

    let source = format!(
        "function {id}({{ height = {height}, width = {width}, className, color = \"currentColor\", ...rest }}{props}) {{\n\
        \x20 return (\n\
        \x20   <svg width={{width}} height={{height}}{view_box} className={{className}} {{...rest}}>\n\
        \x20     <g fill={{color}}>{inner}</g>\n\
        \x20   </svg>\n\
        \x20 );\n\
        }}",
        id = id,
        height = js_string(&attrs.height),
        width = js_string(&attrs.width),
        props = format.props_annotation(),
        view_box = view_box,
        inner = inner_markup,
    );

    RenderedComponent { identifier: id.clone(), source }
}

/// Assemble rendered components into one module.
///
/// Components keep their order. The export statement lists each identifier
/// once, in the same order.
pub fn aggregate(components: &[RenderedComponent], format: OutputFormat) -> String {
    let mut sections: Vec<&str> = Vec::with_capacity(components.len() + 1);
    if let Some(prelude) = format.prelude() {
        sections.push(prelude);
    }
    sections.extend(components.iter().map(|c| c.source.as_str()));

    let mut seen = HashSet::new();
    let exported: Vec<&str> = components
        .iter()
        .map(|c| c.identifier.as_str())
        .filter(|name| seen.insert(*name))
        .collect();

    let export = if exported.is_empty() {
        "export {};".to_string()
    } else {
        format!("export {{ {} }};", exported.join(", "))
    };

    let mut module = sections.join("\n\n");
    if !module.is_empty() {
        module.push_str("\n\n");
    }
    module.push_str(&export);
    module.push('\n');
    module
}

/// Quote a value as a JavaScript string literal.
fn js_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Encode a value for a double-quoted JSX attribute.
fn jsx_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
