use super::{Hash, RelationshipElement, SpdxId};

/// Kinds of graph node an element can be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    SoftwareAgent,
    SpdxDocument,
    File,
    Package,
    Relationship,
}

impl ElementKind {
    /// SPDX 3 JSON-LD type name
    pub fn type_name(&self) -> &'static str {
        match self {
            ElementKind::SoftwareAgent => "SoftwareAgent",
            ElementKind::SpdxDocument => "SpdxDocument",
            ElementKind::File => "software_File",
            ElementKind::Package => "software_Package",
            ElementKind::Relationship => "Relationship",
        }
    }

    /// Identifier-safe form used in generated suffixes
    pub fn slug(&self) -> &'static str {
        match self {
            ElementKind::SoftwareAgent => "software-agent",
            ElementKind::SpdxDocument => "spdx-document",
            ElementKind::File => "software-file",
            ElementKind::Package => "software-package",
            ElementKind::Relationship => "relationship",
        }
    }
}

/// File node: a logical name and, when the file was present, its digest
#[derive(Debug, Clone, PartialEq)]
pub struct FileElement {
    pub name: String,
    pub hash: Option<Hash>,
}

/// Package node
#[derive(Debug, Clone, PartialEq)]
pub struct PackageElement {
    pub name: String,
    pub version: Option<String>,
    pub comment: Option<String>,
}

/// Variant-specific data of an element
#[derive(Debug, Clone, PartialEq)]
pub enum ElementBody {
    SoftwareAgent { name: String },
    File(FileElement),
    Package(PackageElement),
    Relationship(RelationshipElement),
}

/// Element entity: a typed node of the document graph
///
/// The identifier and the creation-info reference are left empty at
/// construction and filled in once by the builder on registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    spdx_id: Option<SpdxId>,
    creation_info: Option<String>,
    body: ElementBody,
}

impl Element {
    pub fn new(body: ElementBody) -> Self {
        Self {
            spdx_id: None,
            creation_info: None,
            body,
        }
    }

    pub fn software_agent(name: impl Into<String>) -> Self {
        Self::new(ElementBody::SoftwareAgent { name: name.into() })
    }

    pub fn file(name: impl Into<String>, hash: Option<Hash>) -> Self {
        Self::new(ElementBody::File(FileElement {
            name: name.into(),
            hash,
        }))
    }

    pub fn package(package: PackageElement) -> Self {
        Self::new(ElementBody::Package(package))
    }

    pub fn relationship(relationship: RelationshipElement) -> Self {
        Self::new(ElementBody::Relationship(relationship))
    }

    /// Sets the identifier of an element built outside the builder
    ///
    /// Registration never overwrites an identifier set this way.
    pub fn with_id(mut self, spdx_id: SpdxId) -> Self {
        self.spdx_id = Some(spdx_id);
        self
    }

    pub fn id(&self) -> Option<&SpdxId> {
        self.spdx_id.as_ref()
    }

    pub fn creation_info(&self) -> Option<&str> {
        self.creation_info.as_deref()
    }

    pub fn body(&self) -> &ElementBody {
        &self.body
    }

    pub fn kind(&self) -> ElementKind {
        match &self.body {
            ElementBody::SoftwareAgent { .. } => ElementKind::SoftwareAgent,
            ElementBody::File(_) => ElementKind::File,
            ElementBody::Package(_) => ElementKind::Package,
            ElementBody::Relationship(_) => ElementKind::Relationship,
        }
    }

    pub fn as_file(&self) -> Option<&FileElement> {
        match &self.body {
            ElementBody::File(file) => Some(file),
            _ => None,
        }
    }

    pub fn as_relationship(&self) -> Option<&RelationshipElement> {
        match &self.body {
            ElementBody::Relationship(rel) => Some(rel),
            _ => None,
        }
    }

    /// Returns true if `other` describes the same subject as this element
    ///
    /// Files compare by logical name, ignoring a leading `./`, and digest.
    /// Other kinds compare by their whole body.
    pub fn describes_same(&self, other: &Element) -> bool {
        match (&self.body, &other.body) {
            (ElementBody::File(a), ElementBody::File(b)) => {
                logical_name(&a.name) == logical_name(&b.name) && a.hash == b.hash
            }
            (a, b) => a == b,
        }
    }

    /// Assigns an identifier unless one is already present
    pub(crate) fn assign_id_if_missing(&mut self, make_id: impl FnOnce() -> SpdxId) {
        if self.spdx_id.is_none() {
            self.spdx_id = Some(make_id());
        }
    }

    pub(crate) fn stamp_creation_info(&mut self, creation_info: &str) {
        self.creation_info = Some(creation_info.to_string());
    }
}

fn logical_name(name: &str) -> &str {
    name.strip_prefix("./").unwrap_or(name)
}
