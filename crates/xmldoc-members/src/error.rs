//! Error types for documentation file handling.

use std::path::PathBuf;

/// Error while parsing documentation XML.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// XML syntax error.
    #[error("XML parse error")]
    Xml(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    /// Encoding error during XML parsing.
    #[error("encoding error")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// The input contains no element.
    #[error("document has no root element")]
    MissingRoot,

    /// The input ended inside an element.
    #[error("unclosed element <{0}>")]
    Unclosed(String),

    /// Elements are nested deeper than the parser accepts.
    #[error("elements nested deeper than {0} levels")]
    TooDeep(usize),
}

/// Error from documentation file operations.
#[derive(Debug, thiserror::Error)]
pub enum MembersError {
    /// Reading a documentation file failed.
    #[error("failed to read {}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Documentation XML is malformed.
    #[error("invalid documentation XML: {0}")]
    Parse(#[from] ParseError),

    /// The root element is not `<doc>`.
    #[error("not a documentation file: root element is <{0}>")]
    NotDocumentation(String),

    /// A member id lacks a known `X:` prefix or a name.
    #[error("invalid member id: {0:?}")]
    InvalidMemberId(String),
}
