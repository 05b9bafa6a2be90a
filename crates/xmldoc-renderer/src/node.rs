//! Documentation tree model.
//!
//! A documentation block is a tree of [`DocNode`]s: character data and
//! elements. Trees are built once (by a parser or by hand) and only read
//! during rendering.

/// A node in a documentation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocNode {
    /// Character data, already unescaped.
    Text(String),
    /// A tagged element with attributes and children.
    Element(Element),
}

impl DocNode {
    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Return the element if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }
}

impl From<Element> for DocNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for DocNode {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for DocNode {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// An element of a documentation tree.
///
/// Attribute order and child order are preserved as inserted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<DocNode>,
}

impl Element {
    /// Create an element with no attributes and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute. A later value for the same name replaces the earlier one.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<DocNode>) -> Self {
        self.push_child(child);
        self
    }

    /// Append several child nodes.
    #[must_use]
    pub fn with_children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<DocNode>,
    {
        for child in children {
            self.push_child(child);
        }
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(DocNode::Text(text.into()))
    }

    /// Tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the named attribute, if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes in document order.
    #[must_use]
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Child nodes in document order.
    #[must_use]
    pub fn children(&self) -> &[DocNode] {
        &self.children
    }

    /// Child elements, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(DocNode::as_element)
    }

    /// First child element with the given tag name.
    #[must_use]
    pub fn element(&self, name: &str) -> Option<&Element> {
        self.elements().find(|child| child.name == name)
    }

    /// Whether the element has no child nodes at all (`<see cref="..."/>`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Concatenated text of all descendant text nodes.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Kind of list this element describes, or `None` if it is not a `list`.
    ///
    /// Unknown or missing `type` attributes fall back to [`ListKind::Bullet`].
    #[must_use]
    pub fn list_kind(&self) -> Option<ListKind> {
        if self.name != "list" {
            return None;
        }
        Some(match self.attr("type") {
            Some("number") => ListKind::Number,
            Some("table") => ListKind::Table,
            _ => ListKind::Bullet,
        })
    }

    /// Set an attribute in place.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    /// Append a child node. Adjacent text is merged into one text node.
    pub fn push_child(&mut self, child: impl Into<DocNode>) {
        match child.into() {
            DocNode::Text(text) => self.push_text(&text),
            element @ DocNode::Element(_) => self.children.push(element),
        }
    }

    /// Append character data, extending the last child if it is text.
    pub fn push_text(&mut self, text: &str) {
        if let Some(DocNode::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(DocNode::Text(text.to_owned()));
        }
    }

    /// Keep only the children for which `keep` returns `true`.
    pub fn retain_children<F>(&mut self, keep: F)
    where
        F: FnMut(&DocNode) -> bool,
    {
        self.children.retain(keep);
    }
}

fn collect_text(element: &Element, out: &mut String) {
    for child in &element.children {
        match child {
            DocNode::Text(text) => out.push_str(text),
            DocNode::Element(inner) => collect_text(inner, out),
        }
    }
}

/// Kind of a documentation `list`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    /// `<ul>`
    Bullet,
    /// `<ol>`
    Number,
    /// `<table>`
    Table,
}
