//! Documentation for service operations and their request/response DTOs.
//!
//! Type shapes are supplied by the caller as [`TypeInfo`] values; this module
//! joins them with a [`DocumentationFile`] and caches the result per request
//! type.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use xmldoc_renderer::{Documented, Element};

use crate::error::MembersError;
use crate::file::{DocumentationFile, locate_documentation_file};
use crate::member::MemberId;

/// Suffix appended to a request type's full name to find its response type.
const RESPONSE_SUFFIX: &str = "Response";

/// A public instance property of a type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyInfo {
    /// Property name.
    pub name: String,
    /// Short name of the property's type (`String`, `Int32[]`).
    pub type_name: String,
}

/// Shape of a request or response type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeInfo {
    /// Short type name.
    pub name: String,
    /// Namespace-qualified type name.
    pub full_name: String,
    /// Public instance properties.
    pub properties: Vec<PropertyInfo>,
}

impl TypeInfo {
    /// Create a type with no properties. The short name is the last segment of
    /// `full_name`.
    pub fn new(full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let name = full_name
            .rsplit(['.', '+'])
            .next()
            .unwrap_or_default()
            .to_owned();
        Self {
            name,
            full_name,
            properties: Vec::new(),
        }
    }

    /// Add a property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.properties.push(PropertyInfo {
            name: name.into(),
            type_name: type_name.into(),
        });
        self
    }
}

/// Documentation of one DTO property.
#[derive(Clone, Debug)]
pub struct PropertyDoc {
    /// Property name.
    pub name: String,
    /// Short name of the property type.
    pub property_type: String,
    /// Member documentation, `None` if undocumented.
    pub documentation: Option<Element>,
}

impl Documented for PropertyDoc {
    fn documentation(&self) -> Option<&Element> {
        self.documentation.as_ref()
    }
}

/// Documentation of a request or response DTO.
#[derive(Clone, Debug)]
pub struct DtoDoc {
    /// Short type name.
    pub name: String,
    /// Type documentation, `None` if undocumented.
    pub documentation: Option<Element>,
    /// Properties sorted by name.
    pub properties: Vec<PropertyDoc>,
}

impl DtoDoc {
    fn build(info: &TypeInfo, docs: Option<&DocumentationFile>) -> Self {
        let mut properties: Vec<PropertyDoc> = info
            .properties
            .iter()
            .map(|property| PropertyDoc {
                name: property.name.clone(),
                property_type: property.type_name.clone(),
                documentation: docs.and_then(|docs| {
                    docs.member(&MemberId::of_property(&info.full_name, &property.name))
                }),
            })
            .collect();
        properties.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            name: info.name.clone(),
            documentation: docs.and_then(|docs| docs.member(&MemberId::of_type(&info.full_name))),
            properties,
        }
    }
}

impl Documented for DtoDoc {
    fn documentation(&self) -> Option<&Element> {
        self.documentation.as_ref()
    }
}

/// Documentation of a service operation.
#[derive(Clone, Debug)]
pub struct OperationDoc {
    /// Operation name (the request type's short name).
    pub name: String,
    /// Request DTO.
    pub request: DtoDoc,
    /// Response DTOs. Holds at most one entry, found by naming convention.
    pub responses: Vec<DtoDoc>,
}

impl OperationDoc {
    /// Build documentation for a request type and its optional response type.
    #[must_use]
    pub fn build(
        request: &TypeInfo,
        response: Option<&TypeInfo>,
        docs: Option<&DocumentationFile>,
    ) -> Self {
        Self {
            name: request.name.clone(),
            request: DtoDoc::build(request, docs),
            responses: response
                .map(|response| DtoDoc::build(response, docs))
                .into_iter()
                .collect(),
        }
    }
}

impl Documented for OperationDoc {
    fn documentation(&self) -> Option<&Element> {
        self.request.documentation()
    }
}

/// Known types plus their documentation, with a per-request-type cache.
#[derive(Debug)]
pub struct OperationDocs {
    types: HashMap<String, TypeInfo>,
    documentation: Option<DocumentationFile>,
    cache: Mutex<HashMap<String, Arc<OperationDoc>>>,
}

impl OperationDocs {
    /// Create from known types and an optional documentation file.
    pub fn new<I>(types: I, documentation: Option<DocumentationFile>) -> Self
    where
        I: IntoIterator<Item = TypeInfo>,
    {
        Self {
            types: types
                .into_iter()
                .map(|info| (info.full_name.clone(), info))
                .collect(),
            documentation,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Create from known types, locating documentation next to a compiled unit.
    ///
    /// A missing documentation file is not an error: every member is then
    /// undocumented.
    ///
    /// # Errors
    ///
    /// Returns an error if a documentation file is found but cannot be read or parsed.
    pub fn load<I, C, P>(types: I, candidates: C) -> Result<Self, MembersError>
    where
        I: IntoIterator<Item = TypeInfo>,
        C: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let documentation = match locate_documentation_file(candidates) {
            Some(path) => Some(DocumentationFile::load(&path)?),
            None => {
                tracing::debug!("No documentation file found, operations are undocumented");
                None
            }
        };
        Ok(Self::new(types, documentation))
    }

    /// The documentation file in use, if any.
    #[must_use]
    pub fn documentation(&self) -> Option<&DocumentationFile> {
        self.documentation.as_ref()
    }

    /// Documentation for the operation whose request type has `full_name`.
    ///
    /// Returns `None` for unknown types. Results are cached; later calls for
    /// the same type return the same instance.
    pub fn for_request_type(&self, full_name: &str) -> Option<Arc<OperationDoc>> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(doc) = cache.get(full_name) {
            tracing::trace!(request_type = full_name, "Operation documentation cache hit");
            return Some(Arc::clone(doc));
        }

        let request = self.types.get(full_name)?;
        let response = self.types.get(&format!("{full_name}{RESPONSE_SUFFIX}"));
        let doc = Arc::new(OperationDoc::build(
            request,
            response,
            self.documentation.as_ref(),
        ));
        tracing::debug!(
            request_type = full_name,
            has_response = response.is_some(),
            "Built operation documentation"
        );
        cache.insert(full_name.to_owned(), Arc::clone(&doc));
        Some(doc)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use xmldoc_renderer::RenderOptions;

    use super::*;

    const DOC: &str = r#"<?xml version="1.0"?>
<doc>
    <assembly><name>Acme.Tests</name></assembly>
    <members>
        <member name="T:Acme.Tests.DocumentedService">
            <summary>A mock service that is documented.</summary>
            <remarks>Remarks for <see cref="T:Acme.Tests.DocumentedService"/>.</remarks>
        </member>
        <member name="P:Acme.Tests.DocumentedService.StringProperty">
            <summary>Gets or sets a string.</summary>
            <value>A <see cref="T:System.String"/> value; never <see langword="null"/>.</value>
        </member>
        <member name="P:Acme.Tests.DocumentedService.ArrayProperty">
            <summary>Gets or sets an array property.</summary>
            <value>An array of integers; never <see langword="null"/>.</value>
        </member>
        <member name="P:Acme.Tests.DocumentedService.Child">
            <summary>Gets or sets a child object.</summary>
            <exception cref="T:System.ArgumentNullException">Thrown whenever.</exception>
        </member>
        <member name="T:Acme.Tests.DocumentedServiceResponse">
            <summary>Response to <see cref="T:Acme.Tests.DocumentedService"/>.</summary>
        </member>
        <member name="P:Acme.Tests.DocumentedServiceResponse.StringProperty">
            <summary>A string property.</summary>
        </member>
    </members>
</doc>
"#;

    fn documented_types() -> Vec<TypeInfo> {
        vec![
            TypeInfo::new("Acme.Tests.DocumentedService")
                .with_property("StringProperty", "String")
                .with_property("ArrayProperty", "Int32[]")
                .with_property("Child", "DocumentedChild"),
            TypeInfo::new("Acme.Tests.DocumentedServiceResponse")
                .with_property("StringProperty", "String"),
            TypeInfo::new("Acme.Tests.UndocumentedService")
                .with_property("StringProperty", "String")
                .with_property("ArrayProperty", "Int32[]"),
        ]
    }

    fn docs() -> OperationDocs {
        OperationDocs::new(
            documented_types(),
            Some(DocumentationFile::parse(DOC).unwrap()),
        )
    }

    #[test]
    fn test_type_info_short_name() {
        assert_eq!(TypeInfo::new("Acme.Tests.Widget").name, "Widget");
        assert_eq!(TypeInfo::new("Acme.Outer+Inner").name, "Inner");
        assert_eq!(TypeInfo::new("Widget").name, "Widget");
    }

    #[test]
    fn test_documented_service() {
        let docs = docs();
        let doc = docs
            .for_request_type("Acme.Tests.DocumentedService")
            .unwrap();

        assert_eq!(doc.name, "DocumentedService");
        assert_eq!(doc.request.name, "DocumentedService");
        let request_doc = doc.request.documentation.as_ref().unwrap();
        assert!(request_doc.element("summary").is_some());
        assert!(request_doc.element("remarks").is_some());

        let props = &doc.request.properties;
        let names: Vec<&str> = props.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["ArrayProperty", "Child", "StringProperty"]);

        assert_eq!(props[0].property_type, "Int32[]");
        let array_doc = props[0].documentation.as_ref().unwrap();
        assert!(array_doc.element("summary").is_some());
        assert!(array_doc.element("value").is_some());

        assert_eq!(props[1].property_type, "DocumentedChild");
        let child_doc = props[1].documentation.as_ref().unwrap();
        assert!(child_doc.element("summary").is_some());
        assert!(child_doc.element("value").is_none());
        assert!(child_doc.element("exception").is_none());

        assert_eq!(props[2].property_type, "String");
        assert!(props[2].documentation.is_some());

        assert_eq!(doc.responses.len(), 1);
        let response = &doc.responses[0];
        assert_eq!(response.name, "DocumentedServiceResponse");
        assert!(response.documentation.is_some());
        assert_eq!(response.properties.len(), 1);
        assert_eq!(response.properties[0].name, "StringProperty");
        assert_eq!(response.properties[0].property_type, "String");
        assert!(response.properties[0].documentation.is_some());
    }

    #[test]
    fn test_undocumented_service() {
        let docs = docs();
        let doc = docs
            .for_request_type("Acme.Tests.UndocumentedService")
            .unwrap();

        assert_eq!(doc.name, "UndocumentedService");
        assert!(doc.request.documentation.is_none());
        assert!(doc.responses.is_empty());

        let props = &doc.request.properties;
        assert_eq!(props.len(), 2);
        assert_eq!(props[0].name, "ArrayProperty");
        assert_eq!(props[0].property_type, "Int32[]");
        assert!(props[0].documentation.is_none());
        assert_eq!(props[1].name, "StringProperty");
        assert!(props[1].documentation.is_none());

        assert_eq!(doc.render_documentation(&RenderOptions::new()), "");
    }

    #[test]
    fn test_unknown_request_type() {
        assert!(docs().for_request_type("Acme.Tests.Missing").is_none());
    }

    #[test]
    fn test_cache_returns_same_instance() {
        let docs = docs();
        let first = docs
            .for_request_type("Acme.Tests.DocumentedService")
            .unwrap();
        let second = docs
            .for_request_type("Acme.Tests.DocumentedService")
            .unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_render_property_value() {
        let docs = docs();
        let doc = docs
            .for_request_type("Acme.Tests.DocumentedService")
            .unwrap();
        let string_property = &doc.request.properties[2];
        let options = RenderOptions::new()
            .with_section("value")
            .without_indentation();
        assert_eq!(
            string_property.render_documentation(&options),
            "A <strong>String</strong> value; never <strong>null</strong>."
        );
    }

    #[test]
    fn test_operation_renders_request_documentation() {
        let docs = docs();
        let doc = docs
            .for_request_type("Acme.Tests.DocumentedService")
            .unwrap();
        let options = RenderOptions::new()
            .without_indentation()
            .with_summary_heading_suppressed();
        assert_eq!(
            doc.render_documentation(&options),
            "A mock service that is documented.<h1>Remarks</h1>Remarks for <strong>DocumentedService</strong>."
        );
    }

    #[test]
    fn test_load_without_documentation_file() {
        let dir = tempfile::tempdir().unwrap();
        let docs = OperationDocs::load(documented_types(), [dir.path().join("Acme.Tests.dll")])
            .unwrap();
        assert!(docs.documentation().is_none());

        let doc = docs
            .for_request_type("Acme.Tests.DocumentedService")
            .unwrap();
        assert!(doc.request.documentation.is_none());
        assert_eq!(doc.responses.len(), 1);
    }

    #[test]
    fn test_load_with_documentation_file() {
        let dir = tempfile::tempdir().unwrap();
        let dll = dir.path().join("Acme.Tests.dll");
        fs::write(&dll, b"binary").unwrap();
        fs::write(dir.path().join("Acme.Tests.xml"), DOC).unwrap();

        let docs = OperationDocs::load(documented_types(), [&dll]).unwrap();
        assert_eq!(
            docs.documentation().and_then(DocumentationFile::assembly),
            Some("Acme.Tests")
        );
        let doc = docs
            .for_request_type("Acme.Tests.DocumentedService")
            .unwrap();
        assert!(doc.request.documentation.is_some());
    }

    #[test]
    fn test_load_rejects_malformed_documentation() {
        let dir = tempfile::tempdir().unwrap();
        let dll = dir.path().join("Acme.Tests.dll");
        fs::write(&dll, b"binary").unwrap();
        fs::write(dir.path().join("Acme.Tests.xml"), "<doc><members>").unwrap();

        assert!(OperationDocs::load(documented_types(), [&dll]).is_err());
    }
}
