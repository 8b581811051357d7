use super::{CreationInfo, ElementKind, SpdxId};
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Scheme and authority every identifier of a run starts with
const ID_SCHEME: &str = "urn:spdx-builder:";

/// Suffix of the authoring software agent of every run
pub const AGENT_SUFFIX: &str = "agent";

/// RunContext value object holding the identity of a single invocation
///
/// One context is created per run. It owns the random run token that
/// namespaces every identifier and the single creation-info record every
/// element references. Contexts are plain values, so independent runs in the
/// same process never share state.
#[derive(Debug, Clone)]
pub struct RunContext {
    token: Uuid,
    prefix: String,
    creation_info: CreationInfo,
}

impl RunContext {
    /// Creates a context with a fresh token, stamped with the current UTC time
    pub fn new(comment: &str) -> Self {
        let created = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        Self::with_token(Uuid::new_v4(), created, comment)
    }

    pub fn with_token(token: Uuid, created: String, comment: &str) -> Self {
        let prefix = format!("{}{}", ID_SCHEME, token.simple());
        let agent_id = SpdxId::new(format!("{}-{}", prefix, AGENT_SUFFIX));
        let creation_info = CreationInfo::new(created, vec![agent_id], comment.to_string());

        Self {
            token,
            prefix,
            creation_info,
        }
    }

    pub fn token(&self) -> &Uuid {
        &self.token
    }

    /// Prefix shared by every identifier minted in this run
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn creation_info(&self) -> &CreationInfo {
        &self.creation_info
    }

    /// Identifier for an explicit, stable name
    ///
    /// The same suffix always yields the same identifier within a run.
    pub fn identifier(&self, suffix: &str) -> SpdxId {
        SpdxId::new(format!("{}-{}", self.prefix, suffix))
    }

    /// Identifier with a fresh 128-bit random suffix
    pub fn random_identifier(&self) -> SpdxId {
        self.identifier(&Uuid::new_v4().simple().to_string())
    }

    /// Identifier for a node without a natural name, tagged with its kind
    pub fn identifier_for(&self, kind: ElementKind) -> SpdxId {
        self.identifier(&format!("{}-{}", kind.slug(), Uuid::new_v4().simple()))
    }

    /// Identifier of the run's authoring agent
    pub fn agent_id(&self) -> SpdxId {
        self.identifier(AGENT_SUFFIX)
    }
}
