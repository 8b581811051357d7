use crate::ports::outbound::{OutputPresenter, SbomFormatter};
use crate::sbom_generation::domain::{Element, RunContext, SpdxDocument, SpdxId};
use crate::shared::Result;

/// Name of the authoring software agent
pub const TOOL_NAME: &str = "spdx-builder";

/// Explicit suffix of the document identifier
pub const DOCUMENT_SUFFIX: &str = "document";

/// Explicit suffix of the authoring agent identifier
pub const AGENT_SUFFIX: &str = crate::sbom_generation::domain::run_context::AGENT_SUFFIX;

/// SbomBuilder - owner of the run identity and the document graph
///
/// Every element enters the graph through [`SbomBuilder::register`], which
/// assigns the identifier and stamps the shared creation-info.
#[derive(Debug)]
pub struct SbomBuilder {
    context: RunContext,
    document: SpdxDocument,
    verbose: bool,
}

impl SbomBuilder {
    /// Starts a run with a fresh run token
    ///
    /// Registers the authoring agent, which becomes the document's sole
    /// element.
    pub fn initialize(verbose: bool, comment: &str) -> Self {
        Self::with_context(RunContext::new(comment), verbose)
    }

    /// Starts a run from an existing context
    pub fn with_context(context: RunContext, verbose: bool) -> Self {
        let document = SpdxDocument::new(
            context.identifier(DOCUMENT_SUFFIX),
            format!("{} SBOM", TOOL_NAME),
            context.creation_info().id(),
        );

        let mut builder = Self {
            context,
            document,
            verbose,
        };
        builder.register(Element::software_agent(TOOL_NAME), Some(AGENT_SUFFIX));
        builder
    }

    pub fn context(&self) -> &RunContext {
        &self.context
    }

    pub fn document(&self) -> &SpdxDocument {
        &self.document
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// `<prefix>-<suffix>`, stable for the same suffix within the run
    pub fn make_identifier(&self, suffix: &str) -> SpdxId {
        self.context.identifier(suffix)
    }

    /// `<prefix>-<random>`
    pub fn make_random_identifier(&self) -> SpdxId {
        self.context.random_identifier()
    }

    /// `<prefix>-<kind>-<random>` for elements without a natural name
    pub fn make_identifier_for(&self, element: &Element) -> SpdxId {
        self.context.identifier_for(element.kind())
    }

    /// First free form of `suffix` for `element`
    ///
    /// Returns `suffix` itself when it is unused or already names an element
    /// describing the same subject, otherwise `suffix-2`, `suffix-3`, ...
    pub fn unique_suffix(&self, element: &Element, suffix: &str) -> String {
        let mut candidate = suffix.to_string();
        let mut counter = 1;
        while let Some(held) = self.document.element(&self.context.identifier(&candidate)) {
            if held.describes_same(element) {
                break;
            }
            counter += 1;
            candidate = format!("{}-{}", suffix, counter);
        }
        candidate
    }

    /// Adds an element to the document
    ///
    /// An element without an identifier gets one from `explicit_suffix`, made
    /// unique with [`SbomBuilder::unique_suffix`], or a kind-tagged random
    /// one. An existing identifier is never replaced. If the document already
    /// holds an element with the resulting identifier, the held element is
    /// kept and returned.
    pub fn register(&mut self, mut element: Element, explicit_suffix: Option<&str>) -> &Element {
        if element.id().is_none() {
            let spdx_id = match explicit_suffix {
                Some(suffix) => self
                    .context
                    .identifier(&self.unique_suffix(&element, suffix)),
                None => self.context.identifier_for(element.kind()),
            };
            element.assign_id_if_missing(|| spdx_id);
        }
        element.stamp_creation_info(self.context.creation_info().id());

        let (held, _) = self.document.insert(element);
        held
    }

    /// Marks a registered element as a root of the document
    pub fn add_root_element(&mut self, spdx_id: SpdxId) {
        self.document.add_root_element(spdx_id);
    }

    /// Serializes the graph and hands it to the presenter
    pub fn write<F, P>(&self, formatter: &F, presenter: &P) -> Result<()>
    where
        F: SbomFormatter + ?Sized,
        P: OutputPresenter + ?Sized,
    {
        let content = formatter.format(&self.document, self.context.creation_info())?;
        presenter.present(&content)
    }

    /// Full node graph for inspection, only when verbose
    pub fn debug_dump(&self) -> Option<String> {
        if !self.verbose {
            return None;
        }
        Some(format!(
            "{:#?}\n{:#?}",
            self.context.creation_info(),
            self.document
        ))
    }
}
