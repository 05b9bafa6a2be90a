//! XML to documentation tree parser.
//!
//! Whitespace-only text between elements is dropped, the same way a
//! non-whitespace-preserving XML loader treats insignificant whitespace.
//! Entity references and CDATA are folded into the surrounding text.

use std::borrow::Cow;
use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use xmldoc_renderer::{DocNode, Element};

use crate::error::ParseError;

/// Wrapper used by [`parse_fragment`].
const FRAGMENT_ROOT: &str = "member";

/// Maximum element nesting accepted by the parser.
pub const MAX_DEPTH: usize = 256;

/// Parse an XML document into its root element.
///
/// Anything before the root (declaration, comments, doctype) is skipped, as is
/// anything after it. Element names are stored without namespace prefix.
///
/// # Errors
///
/// Returns an error if the XML is malformed, has no root element, nests
/// deeper than [`MAX_DEPTH`], or ends before the root is closed.
pub fn parse_document(xml: &str) -> Result<Element, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    // Open elements, innermost last.
    let mut stack: Vec<Element> = Vec::new();
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                if stack.len() >= MAX_DEPTH {
                    return Err(ParseError::TooDeep(MAX_DEPTH));
                }
                stack.push(start_element(&reader, &e)?);
            }
            Event::Empty(e) => {
                let element = start_element(&reader, &e)?;
                match stack.last_mut() {
                    Some(parent) => parent.push_child(element),
                    None => return Ok(element),
                }
            }
            Event::End(_) => {
                let Some(mut element) = stack.pop() else {
                    return Err(ParseError::MissingRoot);
                };
                drop_blank_text(&mut element);
                match stack.last_mut() {
                    Some(parent) => parent.push_child(element),
                    None => return Ok(element),
                }
            }
            Event::Text(e) => {
                if let Some(parent) = stack.last_mut() {
                    let text = reader.decoder().decode(&e)?;
                    parent.push_text(&text);
                }
            }
            Event::GeneralRef(e) => {
                if let Some(parent) = stack.last_mut() {
                    let entity = reader.decoder().decode(&e)?;
                    parent.push_text(&decode_entity(&entity));
                }
            }
            Event::CData(e) => {
                if let Some(parent) = stack.last_mut() {
                    parent.push_text(&String::from_utf8_lossy(&e));
                }
            }
            Event::Eof => {
                return Err(match stack.pop() {
                    Some(open) => ParseError::Unclosed(open.name().to_owned()),
                    None => ParseError::MissingRoot,
                });
            }
            // Comments, declarations, processing instructions, doctype.
            _ => {}
        }
        buf.clear();
    }
}

/// Parse the body of a documentation block, such as
/// `<summary>...</summary><remarks>...</remarks>`, into a `<member>` element.
///
/// # Errors
///
/// Returns an error if the fragment is not well-formed XML.
pub fn parse_fragment(xml: &str) -> Result<Element, ParseError> {
    parse_document(&format!("<{FRAGMENT_ROOT}>{xml}</{FRAGMENT_ROOT}>"))
}

fn start_element<R: BufRead>(
    reader: &Reader<R>,
    e: &BytesStart<'_>,
) -> Result<Element, ParseError> {
    let local_name = e.local_name();
    let name = reader.decoder().decode(local_name.as_ref())?;
    let mut element = Element::new(name.into_owned());
    for attr in e.attributes() {
        let attr = attr?;
        let key = reader.decoder().decode(attr.key.as_ref())?;
        if key.starts_with("xmlns") {
            continue;
        }
        let value = attr.unescape_value().map_or_else(
            |_| String::from_utf8_lossy(&attr.value).into_owned(),
            Cow::into_owned,
        );
        element.set_attr(key.into_owned(), value);
    }
    Ok(element)
}

fn drop_blank_text(element: &mut Element) {
    element.retain_children(|child| match child {
        DocNode::Text(text) => !text.trim().is_empty(),
        DocNode::Element(_) => true,
    });
}

/// Decode an entity reference name (`amp`, `#x41`) to its text.
///
/// Unknown names are kept as the original reference.
fn decode_entity(entity: &str) -> Cow<'static, str> {
    let decoded = match entity {
        "lt" => "<",
        "gt" => ">",
        "amp" => "&",
        "apos" => "'",
        "quot" => "\"",
        s if s.starts_with('#') => {
            let code = if let Some(hex) = s.strip_prefix("#x").or_else(|| s.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()
            } else {
                s[1..].parse::<u32>().ok()
            };
            return code
                .and_then(char::from_u32)
                .map_or_else(|| Cow::Owned(format!("&{entity};")), |c| Cow::Owned(c.to_string()));
        }
        _ => return Cow::Owned(format!("&{entity};")),
    };
    Cow::Borrowed(decoded)
}
