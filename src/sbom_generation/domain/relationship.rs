use super::SpdxId;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// Relationship kinds the document can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipType {
    /// A package is distributed as the target file
    HasDistributionArtifact,
}

impl RelationshipType {
    /// SPDX 3 vocabulary name of the relationship type
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::HasDistributionArtifact => "hasDistributionArtifact",
        }
    }
}

/// Typed, directed edge from one element to one or more elements
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipElement {
    from: SpdxId,
    to: Vec<SpdxId>,
    relationship_type: RelationshipType,
}

impl RelationshipElement {
    pub fn new(from: SpdxId, to: Vec<SpdxId>, relationship_type: RelationshipType) -> Result<Self> {
        if to.is_empty() {
            return Err(SbomError::Validation {
                message: format!(
                    "relationship '{}' from {} needs at least one target",
                    relationship_type.as_str(),
                    from
                ),
            }
            .into());
        }

        Ok(Self {
            from,
            to,
            relationship_type,
        })
    }

    pub fn from(&self) -> &SpdxId {
        &self.from
    }

    pub fn to(&self) -> &[SpdxId] {
        &self.to
    }

    pub fn relationship_type(&self) -> RelationshipType {
        self.relationship_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_new() {
        let from = SpdxId::new("urn:x-package".to_string());
        let to = SpdxId::new("urn:x-file".to_string());
        let rel = RelationshipElement::new(
            from.clone(),
            vec![to.clone()],
            RelationshipType::HasDistributionArtifact,
        )
        .unwrap();

        assert_eq!(rel.from(), &from);
        assert_eq!(rel.to(), &[to]);
        assert_eq!(rel.relationship_type().as_str(), "hasDistributionArtifact");
    }

    #[test]
    fn test_relationship_requires_target() {
        let from = SpdxId::new("urn:x-package".to_string());
        let err =
            RelationshipElement::new(from, vec![], RelationshipType::HasDistributionArtifact)
                .unwrap_err();
        assert!(err.to_string().contains("at least one target"));
    }
}
