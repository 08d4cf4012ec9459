//! Extraction stage: Doxygen compound XML to [`ClassModel`]
//!
//! Combines the compound reader with the line heuristics and the
//! canonical member ordering.

mod classifier;
mod compound;

pub use classifier::{classify, detect_access, infer_type, strip_attributes, Classified};
pub use compound::{parse_compound, CompoundDoc, MemberLine};

use tracing::{debug, trace};

use crate::core::{ClassModel, PipelineError};

/// Options controlling extraction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Append a best-effort ` : <type>` guess to every member line
    pub infer_types: bool,
}

/// The extraction stage
///
/// Turns one compound document into a sorted [`ClassModel`]. Construction
/// is cheap; one extractor can be reused across a whole batch.
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    /// Extractor without type inference
    pub fn new() -> Self {
        Self::with_options(ExtractOptions::default())
    }

    /// Extractor with the type-aware variant enabled
    pub fn with_types() -> Self {
        Self::with_options(ExtractOptions { infer_types: true })
    }

    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extract a class model from one compound document.
    ///
    /// Malformed XML is the only error; structural gaps degrade (missing
    /// compound name leaves `name` unset, member lines without a
    /// reference are skipped).
    pub fn extract(&self, xml: &str) -> Result<ClassModel, PipelineError> {
        let doc = parse_compound(xml)?;
        debug!(
            name = doc.name.as_deref().unwrap_or("<unnamed>"),
            members = doc.members.len(),
            "parsed compound document"
        );

        let mut model = ClassModel::new(doc.name);
        for member in &doc.members {
            let text = strip_attributes(&member.text);
            let access = detect_access(&text);

            match classify(&text, &member.name) {
                Classified::Function { name, params } => {
                    let line = format!("{} {}({})", access.glyph(), name, params);
                    model.add_function(self.with_type(line, &text));
                }
                Classified::Variable { name } => {
                    let line = format!("{} {}", access.glyph(), name);
                    model.add_variable(self.with_type(line, &text));
                }
                Classified::Unrecognized => {
                    // Parenthesized line the signature pattern cannot
                    // split; keep the raw text as the signature.
                    trace!(line = %text, "signature pattern did not match");
                    let line = format!("{} {}", access.glyph(), text);
                    model.add_function(self.with_type(line, &text));
                }
            }
        }

        model.sort_members();
        Ok(model)
    }

    fn with_type(&self, line: String, text: &str) -> String {
        if self.options.infer_types {
            format!("{} : {}", line, infer_type(text))
        } else {
            line
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}
