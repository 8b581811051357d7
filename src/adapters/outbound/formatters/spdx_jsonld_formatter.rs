use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{
    CreationInfo, Element, ElementBody, ElementKind, Hash, SpdxDocument,
};
use crate::shared::Result;
use serde::Serialize;

/// JSON-LD context of the SPDX 3.0.1 vocabulary
pub const SPDX_CONTEXT: &str = "https://spdx.org/rdf/3.0.1/spdx-context.jsonld";

/// Profiles the emitted document conforms to
const PROFILE_CONFORMANCE: &[&str] = &["core", "software"];

#[derive(Debug, Serialize)]
struct Envelope<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@graph")]
    graph: Vec<GraphNode<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GraphNode<'a> {
    CreationInfo(CreationInfoNode<'a>),
    Document(DocumentNode<'a>),
    Element(ElementNode<'a>),
}

#[derive(Debug, Serialize)]
struct CreationInfoNode<'a> {
    #[serde(rename = "@id")]
    id: &'a str,
    #[serde(rename = "type")]
    node_type: &'static str,
    #[serde(rename = "specVersion")]
    spec_version: &'a str,
    created: &'a str,
    #[serde(rename = "createdBy")]
    created_by: Vec<&'a str>,
    comment: &'a str,
}

#[derive(Debug, Serialize)]
struct DocumentNode<'a> {
    #[serde(rename = "type")]
    node_type: &'static str,
    #[serde(rename = "spdxId")]
    spdx_id: &'a str,
    #[serde(rename = "creationInfo")]
    creation_info: &'a str,
    name: &'a str,
    #[serde(rename = "profileConformance")]
    profile_conformance: &'static [&'static str],
    element: Vec<&'a str>,
    #[serde(rename = "rootElement", skip_serializing_if = "Vec::is_empty")]
    root_element: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct ElementNode<'a> {
    #[serde(rename = "type")]
    node_type: &'static str,
    #[serde(rename = "spdxId")]
    spdx_id: &'a str,
    #[serde(rename = "creationInfo")]
    creation_info: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
    #[serde(
        rename = "software_packageVersion",
        skip_serializing_if = "Option::is_none"
    )]
    package_version: Option<&'a str>,
    #[serde(rename = "verifiedUsing", skip_serializing_if = "Vec::is_empty")]
    verified_using: Vec<HashNode<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<Vec<&'a str>>,
    #[serde(rename = "relationshipType", skip_serializing_if = "Option::is_none")]
    relationship_type: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct HashNode<'a> {
    #[serde(rename = "type")]
    node_type: &'static str,
    algorithm: &'static str,
    #[serde(rename = "hashValue")]
    hash_value: &'a str,
}

/// SpdxJsonLdFormatter adapter for generating SPDX 3.0.1 JSON-LD
///
/// This adapter implements the SbomFormatter port. The output is always
/// framed as a single `@graph`: the creation-info blank node first, then the
/// document, then every element in registration order.
pub struct SpdxJsonLdFormatter;

impl SpdxJsonLdFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpdxJsonLdFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SpdxJsonLdFormatter {
    fn format(&self, document: &SpdxDocument, creation_info: &CreationInfo) -> Result<String> {
        let mut graph = Vec::with_capacity(document.elements().len() + 2);
        graph.push(GraphNode::CreationInfo(self.build_creation_info(creation_info)));
        graph.push(GraphNode::Document(self.build_document(document)?));
        for element in document.elements() {
            graph.push(GraphNode::Element(self.build_element(element)?));
        }

        let envelope = Envelope {
            context: SPDX_CONTEXT,
            graph,
        };
        serde_json::to_string_pretty(&envelope).map_err(Into::into)
    }
}

impl SpdxJsonLdFormatter {
    fn build_creation_info<'a>(&self, info: &'a CreationInfo) -> CreationInfoNode<'a> {
        CreationInfoNode {
            id: info.id(),
            node_type: "CreationInfo",
            spec_version: info.spec_version(),
            created: info.created(),
            created_by: info.created_by().iter().map(|id| id.as_str()).collect(),
            comment: info.comment(),
        }
    }

    fn build_document<'a>(&self, document: &'a SpdxDocument) -> Result<DocumentNode<'a>> {
        let element = document
            .elements()
            .iter()
            .map(element_id)
            .collect::<Result<Vec<_>>>()?;

        Ok(DocumentNode {
            node_type: ElementKind::SpdxDocument.type_name(),
            spdx_id: document.id().as_str(),
            creation_info: document.creation_info(),
            name: document.name(),
            profile_conformance: PROFILE_CONFORMANCE,
            element,
            root_element: document
                .root_elements()
                .iter()
                .map(|id| id.as_str())
                .collect(),
        })
    }

    fn build_element<'a>(&self, element: &'a Element) -> Result<ElementNode<'a>> {
        let creation_info = element.creation_info().ok_or_else(|| {
            anyhow::anyhow!(
                "element {} was not stamped with creation info",
                element_id(element).unwrap_or("<unassigned>")
            )
        })?;

        let mut node = ElementNode {
            node_type: element.kind().type_name(),
            spdx_id: element_id(element)?,
            creation_info,
            name: None,
            comment: None,
            package_version: None,
            verified_using: Vec::new(),
            from: None,
            to: None,
            relationship_type: None,
        };

        match element.body() {
            ElementBody::SoftwareAgent { name } => {
                node.name = Some(name.as_str());
            }
            ElementBody::File(file) => {
                node.name = Some(file.name.as_str());
                node.verified_using = file.hash.iter().map(build_hash).collect();
            }
            ElementBody::Package(package) => {
                node.name = Some(package.name.as_str());
                node.comment = package.comment.as_deref();
                node.package_version = package.version.as_deref();
            }
            ElementBody::Relationship(rel) => {
                node.from = Some(rel.from().as_str());
                node.to = Some(rel.to().iter().map(|id| id.as_str()).collect());
                node.relationship_type = Some(rel.relationship_type().as_str());
            }
        }

        Ok(node)
    }
}

fn build_hash(hash: &Hash) -> HashNode<'_> {
    HashNode {
        node_type: "Hash",
        algorithm: hash.algorithm().as_str(),
        hash_value: hash.value(),
    }
}

fn element_id(element: &Element) -> Result<&str> {
    element
        .id()
        .map(|id| id.as_str())
        .ok_or_else(|| anyhow::anyhow!("{} element has no identifier", element.kind().type_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::SbomBuilder;
    use crate::sbom_generation::domain::{
        PackageElement, RelationshipElement, RelationshipType, RunContext,
    };
    use serde_json::Value;
    use uuid::Uuid;

    const DIGEST: &str = "0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8";

    fn fixed_builder() -> SbomBuilder {
        let token = Uuid::parse_str("7d444840-9dc0-11d1-b245-5ffdce74fad2").unwrap();
        let context =
            RunContext::with_token(token, "2024-01-01T00:00:00Z".to_string(), "unit test");
        SbomBuilder::with_context(context, false)
    }

    fn format(builder: &SbomBuilder) -> Value {
        let output = SpdxJsonLdFormatter::new()
            .format(builder.document(), builder.context().creation_info())
            .unwrap();
        serde_json::from_str(&output).unwrap()
    }

    fn nodes_of_type<'v>(json: &'v Value, node_type: &str) -> Vec<&'v Value> {
        json["@graph"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|n| n["type"] == node_type)
            .collect()
    }

    #[test]
    fn test_format_envelope() {
        let json = format(&fixed_builder());

        assert_eq!(json["@context"], SPDX_CONTEXT);
        let graph = json["@graph"].as_array().unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph[0]["type"], "CreationInfo");
        assert_eq!(graph[0]["@id"], "_:creationinfo");
        assert_eq!(graph[0]["specVersion"], "3.0.1");
        assert_eq!(graph[0]["created"], "2024-01-01T00:00:00Z");
        assert_eq!(graph[0]["comment"], "unit test");
        assert_eq!(graph[1]["type"], "SpdxDocument");
        assert_eq!(graph[2]["type"], "SoftwareAgent");
        assert_eq!(graph[0]["createdBy"][0], graph[2]["spdxId"]);
    }

    #[test]
    fn test_format_document_lists_elements() {
        let mut builder = fixed_builder();
        builder.register(Element::file("src/hello.c", None), Some("file-src-hello-c"));
        let json = format(&builder);

        let document = nodes_of_type(&json, "SpdxDocument")[0];
        let element = document["element"].as_array().unwrap();
        assert_eq!(element.len(), 2);
        assert_eq!(
            element[1],
            "urn:spdx-builder:7d4448409dc011d1b2455ffdce74fad2-file-src-hello-c"
        );
        assert!(document.get("rootElement").is_none());
    }

    #[test]
    fn test_format_file_with_and_without_hash() {
        let mut builder = fixed_builder();
        builder.register(
            Element::file("src/hello.c", Some(Hash::sha256(DIGEST.to_string()).unwrap())),
            Some("file-src-hello-c"),
        );
        builder.register(Element::file("src/hello.o", None), Some("file-src-hello-o"));
        let json = format(&builder);

        let files = nodes_of_type(&json, "software_File");
        assert_eq!(files.len(), 2);
        assert_eq!(files[0]["name"], "src/hello.c");
        assert_eq!(files[0]["creationInfo"], "_:creationinfo");
        assert_eq!(files[0]["verifiedUsing"][0]["type"], "Hash");
        assert_eq!(files[0]["verifiedUsing"][0]["algorithm"], "sha256");
        assert_eq!(files[0]["verifiedUsing"][0]["hashValue"], DIGEST);
        assert_eq!(files[1]["name"], "src/hello.o");
        assert!(files[1].get("verifiedUsing").is_none());
    }

    #[test]
    fn test_format_package_and_relationship() {
        let mut builder = fixed_builder();
        let file_id = builder
            .register(Element::file("out/app", None), Some("file-out-app"))
            .id()
            .cloned()
            .unwrap();
        let package_id = builder
            .register(
                Element::package(PackageElement {
                    name: "app".to_string(),
                    version: Some("1.2.3".to_string()),
                    comment: Some("release build".to_string()),
                }),
                None,
            )
            .id()
            .cloned()
            .unwrap();
        let rel = RelationshipElement::new(
            package_id.clone(),
            vec![file_id.clone()],
            RelationshipType::HasDistributionArtifact,
        )
        .unwrap();
        builder.register(Element::relationship(rel), None);
        builder.add_root_element(package_id.clone());
        let json = format(&builder);

        let package = nodes_of_type(&json, "software_Package")[0];
        assert_eq!(package["name"], "app");
        assert_eq!(package["comment"], "release build");
        assert_eq!(package["software_packageVersion"], "1.2.3");

        let relationship = nodes_of_type(&json, "Relationship")[0];
        assert_eq!(relationship["from"], package_id.as_str());
        assert_eq!(relationship["to"][0], file_id.as_str());
        assert_eq!(relationship["relationshipType"], "hasDistributionArtifact");

        let document = nodes_of_type(&json, "SpdxDocument")[0];
        assert_eq!(document["rootElement"][0], package_id.as_str());
    }
}
