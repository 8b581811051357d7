use super::{Element, ElementKind, SpdxId};

/// SpdxDocument aggregate: the root container of the graph
///
/// Elements keep their insertion order and are unique by identifier.
#[derive(Debug, Clone)]
pub struct SpdxDocument {
    spdx_id: SpdxId,
    name: String,
    creation_info: String,
    elements: Vec<Element>,
    root_elements: Vec<SpdxId>,
}

impl SpdxDocument {
    pub fn new(spdx_id: SpdxId, name: String, creation_info: &str) -> Self {
        Self {
            spdx_id,
            name,
            creation_info: creation_info.to_string(),
            elements: Vec::new(),
            root_elements: Vec::new(),
        }
    }

    pub fn id(&self) -> &SpdxId {
        &self.spdx_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn creation_info(&self) -> &str {
        &self.creation_info
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn root_elements(&self) -> &[SpdxId] {
        &self.root_elements
    }

    pub fn element(&self, spdx_id: &SpdxId) -> Option<&Element> {
        self.position(spdx_id).map(|index| &self.elements[index])
    }

    pub fn elements_of_kind(&self, kind: ElementKind) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.kind() == kind)
    }

    /// Appends an element, keeping the held one when the identifier is taken
    ///
    /// Returns the element stored under the identifier and whether it was
    /// newly inserted. Elements without an identifier are always appended.
    pub(crate) fn insert(&mut self, element: Element) -> (&Element, bool) {
        let existing = element.id().and_then(|id| self.position(id));
        match existing {
            Some(index) => (&self.elements[index], false),
            None => {
                self.elements.push(element);
                let last = self.elements.len() - 1;
                (&self.elements[last], true)
            }
        }
    }

    /// Marks an element as a root element of the document
    pub fn add_root_element(&mut self, spdx_id: SpdxId) {
        if !self.root_elements.contains(&spdx_id) {
            self.root_elements.push(spdx_id);
        }
    }

    fn position(&self, spdx_id: &SpdxId) -> Option<usize> {
        self.elements
            .iter()
            .position(|e| e.id() == Some(spdx_id))
    }
}
