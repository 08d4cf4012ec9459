//! Textual class description codec
//!
//! The description format is the sole contract between the extraction
//! stage and the diagram builder: three fixed, line-prefixed sections in
//! fixed order.
//!
//! ```text
//! Class Name: Player
//! Member functions:
//! + Jump()
//! Member variables:
//! + health
//! ```
//!
//! An absent class name is written as the literal `None` marker and read
//! back as absent, so writing and re-parsing a model is lossless.

use crate::core::ClassModel;

/// Prefix of the class name line
pub const NAME_PREFIX: &str = "Class Name:";
/// Header opening the function section
pub const FUNCTIONS_HEADER: &str = "Member functions:";
/// Header opening the variable section
pub const VARIABLES_HEADER: &str = "Member variables:";

/// Marker written when the source document had no compound name
pub const UNNAMED_MARKER: &str = "None";

/// Serialize a class model to the description format.
pub fn write_description(model: &ClassModel) -> String {
    let mut out = String::new();
    out.push_str(NAME_PREFIX);
    out.push(' ');
    out.push_str(model.name.as_deref().unwrap_or(UNNAMED_MARKER));
    out.push('\n');

    out.push_str(FUNCTIONS_HEADER);
    out.push('\n');
    for line in &model.functions {
        out.push_str(line);
        out.push('\n');
    }

    out.push_str(VARIABLES_HEADER);
    out.push('\n');
    for line in &model.variables {
        out.push_str(line);
        out.push('\n');
    }

    out
}

/// Parse the description format back into a class model.
///
/// The parser is tolerant: unknown lines before the first section header
/// are ignored, empty lines are skipped, and a missing name line leaves
/// the name unset.
pub fn parse_description(input: &str) -> ClassModel {
    #[derive(PartialEq)]
    enum Section {
        Preamble,
        Functions,
        Variables,
    }

    let mut model = ClassModel::new(None);
    let mut section = Section::Preamble;

    for line in input.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(NAME_PREFIX) {
            let name = rest.trim();
            model.name = if name.is_empty() || name == UNNAMED_MARKER {
                None
            } else {
                Some(name.to_string())
            };
        } else if line.starts_with(FUNCTIONS_HEADER) {
            section = Section::Functions;
        } else if line.starts_with(VARIABLES_HEADER) {
            section = Section::Variables;
        } else if !line.is_empty() {
            match section {
                Section::Functions => model.add_function(line),
                Section::Variables => model.add_variable(line),
                Section::Preamble => {}
            }
        }
    }

    model
}
