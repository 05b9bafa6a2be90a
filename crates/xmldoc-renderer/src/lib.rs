//! Renders XML documentation comments to HTML.
//!
//! A documentation block (`<summary>`, `<remarks>`, `<value>`, `<returns>` and
//! the inline tags they contain) is modelled as a tree of [`DocNode`]s. The
//! renderer walks that tree once and writes equivalent HTML: paragraphs,
//! bulleted, numbered and table lists, emphasis for references, and code.
//!
//! # Architecture
//!
//! - [`enclosing_tags`]: pure mapping from a documentation tag (plus its table
//!   context) to the HTML tags wrapping its content
//! - [`HtmlWriter`]: escaping writer with optional pretty-printing
//! - [`render_all`] / [`render_into`]: section orchestration and the recursive walk
//!
//! # Example
//!
//! ```
//! use xmldoc_renderer::{Element, RenderOptions, render_all};
//!
//! let doc = Element::new("member").with_child(
//!     Element::new("summary")
//!         .with_text("Returns ")
//!         .with_child(Element::new("see").with_attr("langword", "null"))
//!         .with_text(" when empty."),
//! );
//! let options = RenderOptions::new()
//!     .with_section("summary")
//!     .without_indentation();
//!
//! assert_eq!(
//!     render_all(Some(&doc), &options),
//!     "Returns <strong>null</strong> when empty."
//! );
//! ```

mod node;
mod options;
mod renderer;
mod tags;
mod util;
mod writer;

pub use node::{DocNode, Element, ListKind};
pub use options::{DEFAULT_HEADING_TAG, LineEnding, RenderOptions};
pub use renderer::{Documented, render_all, render_into};
pub use tags::{TagContext, enclosing_tags, needs_term_separator};
pub use util::{capitalize, cref_display_name};
pub use writer::{HtmlWriter, escape_html, is_inline_tag};
