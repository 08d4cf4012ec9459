//! Doxydraw - Convert Doxygen compound XML into draw.io class diagrams
//!
//! A library for extracting class metadata out of Doxygen's per-class
//! compound XML export and rendering it as a draw.io class-diagram
//! document, with a plain-text class description as the intermediate
//! format between the two stages.
//!
//! # Quick Start
//!
//! ```rust
//! let xml = r#"<doxygen>
//!   <compoundname>Player</compoundname>
//!   <codeline refkind="member">public<sp/>void<sp/><ref refid="a1">Jump</ref>()</codeline>
//! </doxygen>"#;
//!
//! let model = doxydraw::extract(xml).unwrap();
//! let diagram = doxydraw::build_diagram(&model).unwrap();
//! assert!(diagram.contains("value=\"+ Jump()\""));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual stages:
//!
//! ```rust
//! use doxydraw::description::{parse_description, write_description};
//! use doxydraw::diagram::DiagramBuilder;
//! use doxydraw::extract::Extractor;
//!
//! let xml = "<doxygen><compoundname>Player</compoundname></doxygen>";
//!
//! // Extract with the type-aware variant
//! let model = Extractor::with_types().extract(xml).unwrap();
//!
//! // The textual description is the contract between the stages
//! let text = write_description(&model);
//! assert_eq!(parse_description(&text), model);
//!
//! // Render the diagram document
//! let builder = DiagramBuilder::new();
//! let document = builder.build(&model).unwrap();
//! assert!(document.starts_with("<?xml"));
//! ```

pub mod batch;
pub mod core;
pub mod description;
pub mod diagram;
pub mod extract;

pub use core::*;

/// Extract a class model from one Doxygen compound document
///
/// This is the simplest way to run the extraction stage, without type
/// inference.
///
/// # Arguments
/// * `xml` - One compound document (the per-class XML file Doxygen emits)
///
/// # Returns
/// * `Ok(ClassModel)` - Extracted, canonically sorted class metadata
/// * `Err` - If the document is not well-formed XML
pub fn extract(xml: &str) -> anyhow::Result<ClassModel> {
    Ok(extract::Extractor::new().extract(xml)?)
}

/// Extract a class model with best-effort type guesses appended
///
/// Identical to [`extract`], plus a ` : <type>` suffix on every member
/// line. The guess is the first token left after stripping modifiers and
/// is knowingly wrong for multi-word and generic types.
pub fn extract_with_types(xml: &str) -> anyhow::Result<ClassModel> {
    Ok(extract::Extractor::with_types().extract(xml)?)
}

/// Serialize a class model to the textual description format
pub fn describe(model: &ClassModel) -> String {
    description::write_description(model)
}

/// Build the draw.io document for a class model
///
/// # Example
/// ```rust
/// use doxydraw::ClassModel;
///
/// let mut model = ClassModel::named("Player");
/// model.add_variable("+ health");
/// let document = doxydraw::build_diagram(&model).unwrap();
/// assert!(document.contains("value=\"Player\""));
/// ```
pub fn build_diagram(model: &ClassModel) -> anyhow::Result<String> {
    Ok(diagram::DiagramBuilder::new().build(model)?)
}
