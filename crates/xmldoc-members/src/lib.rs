//! XML documentation file lookup.
//!
//! Compilers emit doc comments into an `.xml` file next to the compiled unit.
//! This crate reads such files into [`xmldoc_renderer::Element`] trees and
//! looks members up by id:
//!
//! - [`parse_document`] / [`parse_fragment`]: XML to documentation tree
//! - [`DocumentationFile`]: member index with section filtering
//! - [`locate_documentation_file`]: find the `.xml` beside a compiled unit
//! - [`OperationDocs`]: cached request/response DTO documentation
//!
//! # Example
//!
//! ```
//! use xmldoc_members::{DocumentationFile, MemberId};
//! use xmldoc_renderer::{RenderOptions, render_all};
//!
//! let file = DocumentationFile::parse(
//!     r#"<doc><members>
//!         <member name="T:Acme.Widget">
//!             <summary>A widget.</summary>
//!             <example>Not rendered.</example>
//!         </member>
//!     </members></doc>"#,
//! )?;
//! let id: MemberId = "T:Acme.Widget".parse()?;
//! let html = render_all(
//!     file.member(&id).as_ref(),
//!     &RenderOptions::new().without_indentation(),
//! );
//! assert_eq!(html, "<h1>Summary</h1>A widget.");
//! # Ok::<(), xmldoc_members::MembersError>(())
//! ```

mod error;
mod file;
mod member;
mod operation;
mod parser;

pub use error::{MembersError, ParseError};
pub use file::{DocumentationFile, RENDERED_SECTIONS, locate_documentation_file};
pub use member::{MemberId, MemberKind};
pub use operation::{DtoDoc, OperationDoc, OperationDocs, PropertyDoc, PropertyInfo, TypeInfo};
pub use parser::{MAX_DEPTH, parse_document, parse_fragment};
