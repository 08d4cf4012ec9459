//! Diagram stage: [`ClassModel`] to a draw.io document
//!
//! Splits the work the way the rest of the pipeline does: a layout pass
//! that positions cells and assigns ids, and a writer pass that
//! serializes the positioned tree.

mod layout;
pub mod style;
mod writer;

pub use layout::{lay_out, CellIds, DiagramLayout, RowCell, RowKind};
pub use writer::write_document;

use tracing::debug;

use crate::core::{ClassModel, PipelineError};

/// The diagram-building stage
pub struct DiagramBuilder;

impl DiagramBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the serialized diagram document for one class model.
    pub fn build(&self, model: &ClassModel) -> Result<String, PipelineError> {
        let layout = lay_out(model);
        debug!(
            label = %layout.label,
            rows = layout.rows.len(),
            "laid out class diagram"
        );
        write_document(&layout)
    }
}

impl Default for DiagramBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_produces_document() {
        let mut model = ClassModel::named("Player");
        model.add_variable("+ health");
        model.add_function("+ Jump()");

        let xml = DiagramBuilder::new().build(&model).unwrap();

        assert!(xml.contains("mxGraphModel"));
        assert!(xml.contains("value=\"Player\""));
        assert!(xml.contains("value=\"+ health\""));
        assert!(xml.contains("value=\"+ Jump()\""));
    }

    #[test]
    fn test_build_counts_cells() {
        let mut model = ClassModel::named("Player");
        model.add_variable("+ a");
        model.add_variable("+ b");
        model.add_function("+ F()");

        let xml = DiagramBuilder::new().build(&model).unwrap();

        // background, layer, container, V+F member rows, one separator
        assert_eq!(xml.matches("<mxCell ").count(), 3 + 3 + 1);
    }
}
