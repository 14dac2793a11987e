//! Drives the field table against one front-matter subtree.

use roxmltree::{Document, Node};
use tracing::debug;

use crate::error::CiteError;
use crate::fields::{FieldLabel, FIELD_SPECS};
use crate::front::capture_front;
use crate::registry::{self, Extractor, Formatter, Registry};
use crate::selector::Selector;

/// Renders one citation line per front-matter subtree.
///
/// Construct once per process: the field table and the per-field tables
/// are fixed and read-only, and `assemble` keeps no state between
/// documents.
#[derive(Debug, Clone)]
pub struct Assembler {
    fields: Vec<(FieldLabel, Selector)>,
    extractors: Registry<Extractor>,
    formatters: Registry<Formatter>,
    separators: Registry<&'static str>,
}

impl Assembler {
    pub fn new() -> Result<Self, CiteError> {
        let mut fields = Vec::with_capacity(FIELD_SPECS.len());
        for spec in FIELD_SPECS {
            fields.push((spec.label, Selector::parse(spec.locator)?));
        }
        Ok(Assembler {
            fields,
            extractors: registry::extractors(),
            formatters: registry::formatters(),
            separators: registry::separators(),
        })
    }

    /// The whole per-document pipeline: capture the front matter, parse
    /// the fragment, assemble the citation. `Ok(None)` when the document
    /// has no `<front>` element.
    pub fn cite(&self, xml: &str) -> Result<Option<String>, CiteError> {
        let Some(front) = capture_front(xml)? else {
            return Ok(None);
        };
        let doc = Document::parse(&front)?;
        Ok(Some(self.assemble(doc.root_element())))
    }

    /// Assemble the citation line for one front-matter subtree.
    ///
    /// Fields are processed independently, in table order. A field that
    /// matches nothing contributes an empty segment but its separator is
    /// still appended, so an absent field can leave a double space in the
    /// line; the tests pin that exact output, trailing space included.
    pub fn assemble(&self, front: Node) -> String {
        let mut out = String::new();
        for (label, selector) in &self.fields {
            let values: Vec<String> = selector
                .select(front)
                .into_iter()
                .map(|node| self.extractors.get(*label).extract(node))
                .collect();
            debug!(field = %label, matches = values.len(), "extracted field");
            out.push_str(&self.formatters.get(*label).format(&values));
            out.push_str(self.separators.get(*label));
        }
        out
    }
}
