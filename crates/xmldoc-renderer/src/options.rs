//! Rendering options.

/// Default tag for section headings.
pub const DEFAULT_HEADING_TAG: &str = "h1";

/// Newline sequence used by the pretty printer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The newline characters.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Options controlling how a documentation tree is rendered.
///
/// The default renders every section with an `<h1>` heading and indented output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Render only the first section with this name, without heading or wrapper.
    pub section: Option<String>,
    /// Tag used for section headings (`h1` when unset).
    pub heading_tag: Option<String>,
    /// CSS class for section headings. Ignored when empty or when `section` is set.
    pub heading_class: Option<String>,
    /// Suppress all pretty-printing whitespace.
    pub no_indentation: bool,
    /// Omit the heading of the `summary` section.
    pub suppress_summary_heading: bool,
    /// Newline used when pretty-printing.
    pub line_ending: LineEnding,
}

impl RenderOptions {
    /// Create options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render only the named section.
    #[must_use]
    pub fn with_section(mut self, name: impl Into<String>) -> Self {
        self.section = Some(name.into());
        self
    }

    /// Use a different heading tag.
    #[must_use]
    pub fn with_heading_tag(mut self, tag: impl Into<String>) -> Self {
        self.heading_tag = Some(tag.into());
        self
    }

    /// Add a CSS class to section headings.
    #[must_use]
    pub fn with_heading_class(mut self, class: impl Into<String>) -> Self {
        self.heading_class = Some(class.into());
        self
    }

    /// Disable pretty-printing.
    #[must_use]
    pub fn without_indentation(mut self) -> Self {
        self.no_indentation = true;
        self
    }

    /// Omit the `summary` heading.
    #[must_use]
    pub fn with_summary_heading_suppressed(mut self) -> Self {
        self.suppress_summary_heading = true;
        self
    }

    /// Select the pretty-printer newline.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Effective heading tag.
    #[must_use]
    pub fn heading_tag(&self) -> &str {
        self.heading_tag.as_deref().unwrap_or(DEFAULT_HEADING_TAG)
    }

    /// Effective heading class, `None` when unset or empty.
    #[must_use]
    pub fn heading_class(&self) -> Option<&str> {
        self.heading_class.as_deref().filter(|class| !class.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_heading_tag() {
        assert_eq!(RenderOptions::new().heading_tag(), "h1");
        assert_eq!(
            RenderOptions::new().with_heading_tag("h3").heading_tag(),
            "h3"
        );
    }

    #[test]
    fn test_empty_heading_class_is_ignored() {
        assert_eq!(RenderOptions::new().heading_class(), None);
        assert_eq!(RenderOptions::new().with_heading_class("").heading_class(), None);
        assert_eq!(
            RenderOptions::new().with_heading_class("Style").heading_class(),
            Some("Style")
        );
    }

    #[test]
    fn test_line_ending_strings() {
        assert_eq!(LineEnding::default().as_str(), "\n");
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
    }
}
