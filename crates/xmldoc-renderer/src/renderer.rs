//! Documentation tree renderer.

use std::fmt::{self, Write};

use crate::node::{DocNode, Element, ListKind};
use crate::options::RenderOptions;
use crate::tags::{TagContext, enclosing_tags, needs_term_separator};
use crate::util::{capitalize, cref_display_name};
use crate::writer::HtmlWriter;

/// Section whose heading can be suppressed.
const SUMMARY: &str = "summary";

/// Render a documentation tree to an HTML string.
///
/// `root` is the member element whose children are the sections (`summary`,
/// `remarks`, ...). `None` means no documentation and yields an empty string.
///
/// # Example
///
/// ```
/// use xmldoc_renderer::{Element, RenderOptions, render_all};
///
/// let doc = Element::new("member")
///     .with_child(Element::new("summary").with_text("Adds two numbers."));
/// let html = render_all(Some(&doc), &RenderOptions::new().without_indentation());
/// assert_eq!(html, "<h1>Summary</h1>Adds two numbers.");
/// ```
#[must_use]
pub fn render_all(root: Option<&Element>, options: &RenderOptions) -> String {
    let Some(root) = root else {
        return String::new();
    };
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = render_into(&mut out, Some(root), options);
    out
}

/// Render a documentation tree into an existing writer.
///
/// Same output as [`render_all`], for embedding into a page under construction.
///
/// # Errors
///
/// Returns an error only if the underlying writer fails.
pub fn render_into<W: Write + ?Sized>(
    out: &mut W,
    root: Option<&Element>,
    options: &RenderOptions,
) -> fmt::Result {
    let Some(root) = root else {
        return Ok(());
    };

    let mut writer = if options.no_indentation {
        HtmlWriter::compact(out)
    } else {
        HtmlWriter::indented(out, options.line_ending)
    };

    if let Some(name) = options.section.as_deref() {
        match root.element(name) {
            Some(section) => render_children(&mut writer, section, false)?,
            None => tracing::debug!(section = name, "Section not found in documentation"),
        }
        return Ok(());
    }

    for section in root.elements() {
        if !(options.suppress_summary_heading && section.name() == SUMMARY) {
            render_heading(&mut writer, section.name(), options)?;
        }
        render_children(&mut writer, section, false)?;
    }
    Ok(())
}

fn render_heading<'a, W: Write + ?Sized>(
    writer: &mut HtmlWriter<'a, W>,
    name: &str,
    options: &'a RenderOptions,
) -> fmt::Result {
    match options.heading_class() {
        Some(class) => writer.start_tag(options.heading_tag(), &[("class", class)])?,
        None => writer.start_tag(options.heading_tag(), &[])?,
    }
    writer.text(&capitalize(name))?;
    writer.end_tag()
}

fn render_children<W: Write + ?Sized>(
    writer: &mut HtmlWriter<'_, W>,
    element: &Element,
    in_table: bool,
) -> fmt::Result {
    for child in element.children() {
        match child {
            DocNode::Text(text) => writer.text(text)?,
            DocNode::Element(inner) => render_element(writer, inner, element, in_table)?,
        }
    }
    Ok(())
}

fn render_element<W: Write + ?Sized>(
    writer: &mut HtmlWriter<'_, W>,
    element: &Element,
    parent: &Element,
    in_table: bool,
) -> fmt::Result {
    let in_table = in_table || parent.list_kind() == Some(ListKind::Table);
    let ctx = TagContext::of(element, Some(parent), in_table);
    let tags = enclosing_tags(&ctx);

    for &tag in tags {
        writer.start_tag(tag, &[])?;
    }

    if element.is_empty() {
        writer.text(empty_element_text(element))?;
    } else {
        render_children(writer, element, in_table)?;
    }

    if needs_term_separator(&ctx) {
        writer.text(": ")?;
    }

    for _ in tags {
        writer.end_tag()?;
    }
    Ok(())
}

/// Text standing in for the content of a self-closing reference tag.
fn empty_element_text(element: &Element) -> &str {
    let non_empty = |name: &str| element.attr(name).filter(|value| !value.is_empty());
    match element.name() {
        "see" => non_empty("cref")
            .map(cref_display_name)
            .or_else(|| non_empty("langword"))
            .unwrap_or_default(),
        "paramref" | "typeparamref" => element.attr("name").unwrap_or_default(),
        _ => "",
    }
}

/// A code element that may carry XML documentation.
pub trait Documented {
    /// The member element holding the documentation sections, if any.
    fn documentation(&self) -> Option<&Element>;

    /// Render the documentation to HTML. Undocumented elements yield `""`.
    fn render_documentation(&self, options: &RenderOptions) -> String {
        render_all(self.documentation(), options)
    }

    /// Render the documentation into an existing writer.
    ///
    /// # Errors
    ///
    /// Returns an error only if the writer fails.
    fn write_documentation(&self, out: &mut dyn Write, options: &RenderOptions) -> fmt::Result {
        render_into(out, self.documentation(), options)
    }
}
