//! Indenting HTML writer.
//!
//! Block-level tags put their content on its own indented line; inline tags
//! never inject whitespace. Tabs are written lazily, right before the first
//! output that follows a newline, so closing tags of nested blocks line up
//! with their opening tags.

use std::borrow::Cow;
use std::fmt::{self, Write};

use crate::options::LineEnding;

/// Tags rendered without surrounding line breaks.
const INLINE_TAGS: &[&str] = &[
    "a", "abbr", "acronym", "b", "bdo", "big", "button", "cite", "code", "dd", "del", "dfn",
    "dt", "em", "font", "i", "ins", "kbd", "label", "li", "nobr", "p", "q", "s", "samp", "span",
    "strike", "strong", "sub", "sup", "td", "textarea", "th", "tt", "u", "var",
];

const INDENT: &str = "\t";

/// Whether a tag is laid out inline by the pretty printer.
#[must_use]
pub fn is_inline_tag(tag: &str) -> bool {
    INLINE_TAGS.iter().any(|inline| inline.eq_ignore_ascii_case(tag))
}

/// Escape text for use in HTML content or a double-quoted attribute value.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Streaming HTML writer with optional pretty-printing.
pub struct HtmlWriter<'a, W: Write + ?Sized> {
    out: &'a mut W,
    /// Newline sequence, `None` when pretty-printing is disabled.
    newline: Option<&'static str>,
    level: usize,
    tabs_pending: bool,
    open: Vec<(&'a str, bool)>,
}

impl<'a, W: Write + ?Sized> HtmlWriter<'a, W> {
    /// Create a writer that pretty-prints with the given line ending.
    pub fn indented(out: &'a mut W, line_ending: LineEnding) -> Self {
        Self::with_newline(out, Some(line_ending.as_str()))
    }

    /// Create a writer that never injects whitespace.
    pub fn compact(out: &'a mut W) -> Self {
        Self::with_newline(out, None)
    }

    fn with_newline(out: &'a mut W, newline: Option<&'static str>) -> Self {
        Self {
            out,
            newline,
            level: 0,
            tabs_pending: false,
            open: Vec::new(),
        }
    }

    /// Open a tag with the given (unescaped) attributes.
    pub fn start_tag(&mut self, tag: &'a str, attrs: &[(&str, &str)]) -> fmt::Result {
        self.write_raw("<")?;
        self.write_raw(tag)?;
        for (name, value) in attrs {
            self.write_raw(" ")?;
            self.write_raw(name)?;
            self.write_raw("=\"")?;
            self.write_raw(&escape_html(value))?;
            self.write_raw("\"")?;
        }
        self.write_raw(">")?;

        let inline = is_inline_tag(tag);
        self.open.push((tag, inline));
        if !inline {
            self.line_break()?;
            self.level += 1;
        }
        Ok(())
    }

    /// Close the most recently opened tag. Does nothing if no tag is open.
    pub fn end_tag(&mut self) -> fmt::Result {
        let Some((tag, inline)) = self.open.pop() else {
            return Ok(());
        };
        if !inline {
            self.line_break()?;
            self.level = self.level.saturating_sub(1);
        }
        self.write_raw("</")?;
        self.write_raw(tag)?;
        self.write_raw(">")
    }

    /// Write escaped text.
    pub fn text(&mut self, text: &str) -> fmt::Result {
        if text.is_empty() {
            return Ok(());
        }
        self.write_raw(&escape_html(text))
    }

    fn write_raw(&mut self, s: &str) -> fmt::Result {
        self.flush_tabs()?;
        self.out.write_str(s)
    }

    fn line_break(&mut self) -> fmt::Result {
        let Some(newline) = self.newline else {
            return Ok(());
        };
        self.flush_tabs()?;
        self.out.write_str(newline)?;
        self.tabs_pending = true;
        Ok(())
    }

    fn flush_tabs(&mut self) -> fmt::Result {
        if self.tabs_pending {
            self.tabs_pending = false;
            for _ in 0..self.level {
                self.out.write_str(INDENT)?;
            }
        }
        Ok(())
    }
}
