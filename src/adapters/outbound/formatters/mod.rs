/// Formatter adapters for serializing the document graph
mod spdx_jsonld_formatter;

pub use spdx_jsonld_formatter::{SpdxJsonLdFormatter, SPDX_CONTEXT};
