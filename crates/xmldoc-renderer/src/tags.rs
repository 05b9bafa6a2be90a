//! Mapping from documentation tags to HTML tags.

use crate::node::{Element, ListKind};

/// Everything the tag mapping depends on for one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagContext<'a> {
    /// Tag name of the element.
    pub tag: &'a str,
    /// Tag name of the parent element, if any.
    pub parent: Option<&'a str>,
    /// Whether the element is inside a table list.
    pub in_table: bool,
    /// The element's own list kind (only set for `list`).
    pub list_kind: Option<ListKind>,
    /// Whether the element has `term` or `description` children.
    pub has_columns: bool,
}

impl<'a> TagContext<'a> {
    /// Build the context for `element` under `parent`.
    #[must_use]
    pub fn of(element: &'a Element, parent: Option<&'a Element>, in_table: bool) -> Self {
        Self {
            tag: element.name(),
            parent: parent.map(Element::name),
            in_table,
            list_kind: element.list_kind(),
            has_columns: element.element("term").is_some()
                || element.element("description").is_some(),
        }
    }
}

/// HTML tags wrapping an element's content, outermost first.
///
/// Unknown tags map to no wrapper, so only their content is rendered.
#[must_use]
pub fn enclosing_tags(ctx: &TagContext<'_>) -> &'static [&'static str] {
    match (ctx.tag, ctx.in_table, ctx.parent) {
        ("para", ..) => &["p"],
        ("list", ..) => match ctx.list_kind {
            Some(ListKind::Number) => &["ol"],
            Some(ListKind::Table) => &["table"],
            Some(ListKind::Bullet) | None => &["ul"],
        },
        ("listheader", true, _) if !ctx.has_columns => &["tr", "th"],
        ("item", true, _) if !ctx.has_columns => &["tr", "td"],
        ("listheader" | "item", true, _) => &["tr"],
        ("listheader" | "item", false, _) => &["li"],
        ("term" | "description", true, Some("listheader")) => &["th"],
        ("term" | "description", true, Some("item")) => &["td"],
        ("term", ..) | ("see" | "paramref" | "typeparamref", ..) => &["strong"],
        ("c", ..) => &["code"],
        ("code", ..) => &["pre"],
        _ => &[],
    }
}

/// Whether a `term` gets a trailing `": "` separator.
#[must_use]
pub fn needs_term_separator(ctx: &TagContext<'_>) -> bool {
    ctx.tag == "term" && !ctx.in_table
}
