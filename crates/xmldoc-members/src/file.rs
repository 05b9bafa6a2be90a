//! Compiler-generated documentation files.
//!
//! ```xml
//! <doc>
//!   <assembly><name>Acme.Services</name></assembly>
//!   <members>
//!     <member name="T:Acme.Services.Widget">
//!       <summary>...</summary>
//!     </member>
//!   </members>
//! </doc>
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use xmldoc_renderer::{DocNode, Element};

use crate::error::MembersError;
use crate::member::MemberId;
use crate::parser::parse_document;

/// First-level sections kept by [`DocumentationFile::member`].
pub const RENDERED_SECTIONS: &[&str] = &["summary", "remarks", "value", "returns"];

const DOCUMENTATION_EXTENSION: &str = "xml";

/// A parsed documentation file indexed by member id.
#[derive(Debug, Clone)]
pub struct DocumentationFile {
    assembly: Option<String>,
    members: Vec<Element>,
    index: HashMap<String, usize>,
}

impl DocumentationFile {
    /// Read and parse a documentation file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a documentation file.
    pub fn load(path: &Path) -> Result<Self, MembersError> {
        let xml = std::fs::read_to_string(path).map_err(|source| MembersError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::parse(&xml)?;
        tracing::debug!(
            path = %path.display(),
            members = file.members.len(),
            "Loaded documentation file"
        );
        Ok(file)
    }

    /// Parse documentation XML.
    ///
    /// # Errors
    ///
    /// Returns an error if the XML is malformed or its root is not `<doc>`.
    pub fn parse(xml: &str) -> Result<Self, MembersError> {
        let root = parse_document(xml)?;
        if root.name() != "doc" {
            return Err(MembersError::NotDocumentation(root.name().to_owned()));
        }

        let assembly = root
            .element("assembly")
            .and_then(|assembly| assembly.element("name"))
            .map(|name| name.text_content().trim().to_owned());

        let mut members = Vec::new();
        let mut index = HashMap::new();
        for member in root
            .element("members")
            .into_iter()
            .flat_map(Element::elements)
            .filter(|element| element.name() == "member")
        {
            let Some(name) = member.attr("name") else {
                tracing::trace!("Skipping member without name attribute");
                continue;
            };
            // First definition wins.
            index.entry(name.to_owned()).or_insert(members.len());
            members.push(member.clone());
        }

        Ok(Self {
            assembly,
            members,
            index,
        })
    }

    /// Assembly name from `<assembly><name>`.
    #[must_use]
    pub fn assembly(&self) -> Option<&str> {
        self.assembly.as_deref()
    }

    /// Number of documented members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the file documents no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member id strings in document order.
    pub fn member_ids(&self) -> impl Iterator<Item = &str> {
        self.members.iter().filter_map(|member| member.attr("name"))
    }

    /// The `<member>` element exactly as it appears in the file.
    #[must_use]
    pub fn raw_member(&self, id: &MemberId) -> Option<&Element> {
        self.index
            .get(&id.to_string())
            .map(|&position| &self.members[position])
    }

    /// Documentation for a member, reduced to the rendered sections.
    ///
    /// First-level elements other than [`RENDERED_SECTIONS`] (`param`,
    /// `exception`, `example`, ...) are removed from the returned copy.
    #[must_use]
    pub fn member(&self, id: &MemberId) -> Option<Element> {
        let mut member = self.raw_member(id)?.clone();
        member.retain_children(|child| match child {
            DocNode::Element(section) => RENDERED_SECTIONS.contains(&section.name()),
            DocNode::Text(_) => true,
        });
        Some(member)
    }
}

/// Find the documentation file belonging to a compiled unit.
///
/// Each candidate is a path to a compiled unit (e.g. `bin/Acme.Services.dll`).
/// The first candidate that exists and has an `.xml` sibling with the same
/// stem wins.
pub fn locate_documentation_file<I, P>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if !candidate.is_file() {
            continue;
        }
        let xml = candidate.with_extension(DOCUMENTATION_EXTENSION);
        if xml.is_file() {
            tracing::debug!(path = %xml.display(), "Found documentation file");
            return Some(xml);
        }
    }
    None
}
