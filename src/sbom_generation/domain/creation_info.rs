use super::SpdxId;

/// SPDX version written into every creation-info record
pub const SPEC_VERSION: &str = "3.0.1";

/// Blank-node identifier of the run's single creation-info record
pub const CREATION_INFO_ID: &str = "_:creationinfo";

/// CreationInfo value object shared by every element created in a run
#[derive(Debug, Clone)]
pub struct CreationInfo {
    created: String,
    created_by: Vec<SpdxId>,
    comment: String,
    spec_version: String,
}

impl CreationInfo {
    pub fn new(created: String, created_by: Vec<SpdxId>, comment: String) -> Self {
        Self {
            created,
            created_by,
            comment,
            spec_version: SPEC_VERSION.to_string(),
        }
    }

    /// Blank-node reference stamped onto elements
    pub fn id(&self) -> &'static str {
        CREATION_INFO_ID
    }

    pub fn created(&self) -> &str {
        &self.created
    }

    pub fn created_by(&self) -> &[SpdxId] {
        &self.created_by
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn spec_version(&self) -> &str {
        &self.spec_version
    }
}
