//! Lenient SVG reader.
//!
//! Tokenizes icon sources with `quick-xml` and keeps byte offsets so that the
//! markup inside the root `<svg>` element can be handed to the renderer
//! exactly as it appears in the file.

use quick_xml::escape::unescape;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

/// Error while reading an SVG document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SvgError {
    /// The content has no usable `<svg>` root element
    #[error("malformed SVG document: {0}")]
    MalformedDocument(String),
}

/// Kind of a direct child of the root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// An element, including everything it contains
    Element,
    /// Character data (text, CDATA, entity references)
    Text,
    /// A comment
    Comment,
    /// Processing instructions and anything else
    Other,
}

/// A direct child of the root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgNode {
    /// Node kind
    pub kind: NodeKind,
    /// Qualified tag name for elements
    pub name: Option<String>,
    /// Raw markup of the node as found in the source
    pub markup: String,
    /// Decoded text content (elements: text between their tags)
    pub text: String,
}

/// Parsed SVG document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSvg {
    root: String,
    attributes: Vec<(String, String)>,
    children: Vec<SvgNode>,
    inner_markup: String,
}

impl ParsedSvg {
    /// Qualified name of the root element.
    pub fn root_name(&self) -> &str {
        &self.root
    }

    /// Root attributes in source order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Value of a root attribute. The first occurrence wins.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    /// Direct children of the root element in source order.
    pub fn children(&self) -> &[SvgNode] {
        &self.children
    }

    /// First direct child element with the given local name.
    pub fn child_element(&self, local: &str) -> Option<&SvgNode> {
        self.children.iter().find(|n| {
            n.kind == NodeKind::Element && n.name.as_deref().map(local_name) == Some(local)
        })
    }

    /// Everything between the root start and end tags, byte-for-byte.
    pub fn inner_markup(&self) -> &str {
        &self.inner_markup
    }
}

/// Strip a namespace prefix from a qualified name.
fn local_name(name: &str) -> &str {
    name.rsplit_once(':').map(|(_, local)| local).unwrap_or(name)
}

/// Child element being collected while its subtree is read.
struct OpenChild {
    name: String,
    start: usize,
    inner_start: usize,
    /// Names of the elements still open inside this subtree, the child first
    open: Vec<String>,
}

impl OpenChild {
    fn finish(self, content: &str, inner_close: usize, markup_end: usize) -> SvgNode {
        SvgNode {
            kind: NodeKind::Element,
            text: decode_text(&content[self.inner_start..inner_close]),
            name: Some(self.name),
            markup: content[self.start..markup_end].to_string(),
        }
    }
}

/// Parse SVG content into a [`ParsedSvg`].
///
/// The parse is lenient: a leading byte order mark is ignored, a bare `&` is
/// kept as text, end tag names are not matched against start tags, namespace
/// prefixes are not resolved and a root that is never closed is accepted. A
/// root end tag met while children are still open closes those children.
/// Only the absence of an `<svg>` root (or a hard syntax error before the
/// root closes) is rejected.
pub fn parse(content: &str) -> Result<ParsedSvg, SvgError> {
    // Offsets below index the same buffer the reader sees
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = Reader::from_str(content);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_dangling_amp = true;

    let (root, attributes, inner_start) = read_root(&mut reader, content)?;
    let Some(inner_start) = inner_start else {
        // Self-closing root
        return Ok(ParsedSvg { root, attributes, children: Vec::new(), inner_markup: String::new() });
    };

    let mut children: Vec<SvgNode> = Vec::new();
    let mut open: Option<OpenChild> = None;
    let mut inner_end = content.len();

    loop {
        let start = reader.buffer_position() as usize;
        let event = reader
            .read_event()
            .map_err(|e| SvgError::MalformedDocument(format!("{} at byte {}", e, start)))?;
        let end = reader.buffer_position() as usize;

        // Inside a child element subtree: only track nesting
        if let Some(mut child) = open.take() {
            match event {
                Event::Start(e) => {
                    child.open.push(tag_name(&e));
                    open = Some(child);
                }
                Event::End(e) => {
                    let name = end_name(&e);
                    if name == root && !child.open.contains(&name) {
                        // Root closed over unclosed children
                        children.push(child.finish(content, start, start));
                        inner_end = start;
                        break;
                    }
                    child.open.pop();
                    if child.open.is_empty() {
                        children.push(child.finish(content, start, end));
                    } else {
                        open = Some(child);
                    }
                }
                Event::Eof => {
                    children.push(child.finish(content, content.len(), content.len()));
                    break;
                }
                _ => open = Some(child),
            }
            continue;
        }

        match event {
            Event::Start(e) => {
                let name = tag_name(&e);
                open = Some(OpenChild { open: vec![name.clone()], name, start, inner_start: end });
            }
            Event::Empty(e) => children.push(SvgNode {
                kind: NodeKind::Element,
                name: Some(tag_name(&e)),
                markup: content[start..end].to_string(),
                text: String::new(),
            }),
            Event::End(_) => {
                inner_end = start;
                break;
            }
            Event::Eof => break,
            Event::Text(_) | Event::CData(_) => push_text(&mut children, &content[start..end]),
            Event::Comment(_) => children.push(SvgNode {
                kind: NodeKind::Comment,
                name: None,
                markup: content[start..end].to_string(),
                text: String::new(),
            }),
            // Entity references arrive as their own event
            _ if content[start..end].starts_with('&') => {
                push_text(&mut children, &content[start..end])
            }
            _ => children.push(SvgNode {
                kind: NodeKind::Other,
                name: None,
                markup: content[start..end].to_string(),
                text: String::new(),
            }),
        }
    }

    Ok(ParsedSvg {
        root,
        attributes,
        children,
        inner_markup: content[inner_start..inner_end].to_string(),
    })
}

/// Read up to and including the root start tag.
///
/// Returns the root name, its attributes and the byte offset where its
/// content starts (`None` for a self-closing root).
fn read_root(
    reader: &mut Reader<&[u8]>,
    content: &str,
) -> Result<(String, Vec<(String, String)>, Option<usize>), SvgError> {
    loop {
        let position = reader.buffer_position() as usize;
        let event = reader
            .read_event()
            .map_err(|e| SvgError::MalformedDocument(format!("{} at byte {}", e, position)))?;

        let (element, self_closing) = match event {
            Event::Start(e) => (e, false),
            Event::Empty(e) => (e, true),
            Event::Eof => {
                let reason = if content.trim().is_empty() {
                    "document is empty"
                } else {
                    "no root element found"
                };
                return Err(SvgError::MalformedDocument(reason.to_string()));
            }
            // Declarations, doctypes, comments and stray text before the root
            _ => continue,
        };

        let name = tag_name(&element);
        if local_name(&name) != "svg" {
            return Err(SvgError::MalformedDocument(format!(
                "expected root element 'svg', found '{}'",
                name
            )));
        }

        let attributes = read_attributes(&element);
        let inner_start = if self_closing { None } else { Some(reader.buffer_position() as usize) };
        return Ok((name, attributes, inner_start));
    }
}

/// Collect the attributes of a start tag, unescaping values.
///
/// Attributes are read HTML-style: unquoted values (`width=24`) are kept and
/// a key without a value maps to an empty string. Anything still unreadable
/// is skipped rather than failing the document.
fn read_attributes(element: &BytesStart<'_>) -> Vec<(String, String)> {
    element
        .html_attributes()
        .with_checks(false)
        .filter_map(Result::ok)
        .map(|attr| {
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let raw = String::from_utf8_lossy(&attr.value).into_owned();
            (key, decode_text(&raw))
        })
        .collect()
}

fn tag_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.name().as_ref()).into_owned()
}

fn end_name(element: &BytesEnd<'_>) -> String {
    String::from_utf8_lossy(element.name().as_ref()).into_owned()
}

/// Append character data, merging with a preceding text node.
fn push_text(children: &mut Vec<SvgNode>, raw: &str) {
    if let Some(last) = children.last_mut() {
        if last.kind == NodeKind::Text {
            last.markup.push_str(raw);
            last.text = decode_text(&last.markup);
            return;
        }
    }
    children.push(SvgNode {
        kind: NodeKind::Text,
        name: None,
        markup: raw.to_string(),
        text: decode_text(raw),
    });
}

/// Decode raw character data: strip CDATA markers and tags, resolve entities.
///
/// Unknown entities are left as written.
fn decode_text(raw: &str) -> String {
    let mut plain = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(open) = rest.find('<') {
        plain.push_str(&unescape_lenient(&rest[..open]));
        let tail = &rest[open..];
        if let Some(cdata) = tail.strip_prefix("<![CDATA[") {
            let close = cdata.find("]]>").unwrap_or(cdata.len());
            plain.push_str(&cdata[..close]);
            rest = cdata.get(close + 3..).unwrap_or("");
        } else {
            let close = tail.find('>').map(|i| i + 1).unwrap_or(tail.len());
            rest = &tail[close..];
        }
    }
    plain.push_str(&unescape_lenient(rest));
    plain
}

fn unescape_lenient(raw: &str) -> String {
    match unescape(raw) {
        Ok(text) => text.into_owned(),
        Err(_) => raw.to_string(),
    }
}
