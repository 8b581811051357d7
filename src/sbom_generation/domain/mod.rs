pub mod creation_info;
pub mod document;
pub mod element;
pub mod hash;
pub mod relationship;
pub mod run_context;
pub mod spdx_id;

pub use creation_info::{CreationInfo, CREATION_INFO_ID, SPEC_VERSION};
pub use document::SpdxDocument;
pub use element::{Element, ElementBody, ElementKind, FileElement, PackageElement};
pub use hash::{Hash, HashAlgorithm};
pub use relationship::{RelationshipElement, RelationshipType};
pub use run_context::RunContext;
pub use spdx_id::SpdxId;
