//! mxfile serialization
//!
//! Writes a positioned layout as a pretty-printed draw.io document:
//! mxfile → diagram → mxGraphModel → root → mxCell tree, two-space
//! indentation, XML declaration, fixed header attributes.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::core::PipelineError;

use super::layout::{DiagramLayout, RowKind};
use super::style;

type XmlWriter = Writer<Vec<u8>>;

fn write_geometry(
    writer: &mut XmlWriter,
    attributes: &[(&str, String)],
) -> Result<(), PipelineError> {
    let mut geometry = BytesStart::new("mxGeometry");
    for (key, value) in attributes {
        geometry.push_attribute((*key, value.as_str()));
    }
    geometry.push_attribute(("as", "geometry"));
    writer.write_event(Event::Empty(geometry))?;
    Ok(())
}

/// Serialize a diagram layout to an mxfile document string.
pub fn write_document(layout: &DiagramLayout) -> Result<String, PipelineError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut mxfile = BytesStart::new("mxfile");
    mxfile.push_attribute(("host", style::FILE_HOST));
    mxfile.push_attribute(("agent", style::FILE_AGENT));
    mxfile.push_attribute(("version", style::FILE_VERSION));
    writer.write_event(Event::Start(mxfile))?;

    let mut diagram = BytesStart::new("diagram");
    diagram.push_attribute(("id", style::PAGE_ID));
    diagram.push_attribute(("name", style::PAGE_NAME));
    writer.write_event(Event::Start(diagram))?;

    let mut graph_model = BytesStart::new("mxGraphModel");
    for (key, value) in style::CANVAS_ATTRIBUTES {
        graph_model.push_attribute((*key, *value));
    }
    writer.write_event(Event::Start(graph_model))?;

    writer.write_event(Event::Start(BytesStart::new("root")))?;

    // Baseline cells required by the node-parenting convention.
    let mut background = BytesStart::new("mxCell");
    background.push_attribute(("id", layout.background_id.to_string().as_str()));
    writer.write_event(Event::Empty(background))?;

    let mut base_layer = BytesStart::new("mxCell");
    base_layer.push_attribute(("id", layout.layer_id.to_string().as_str()));
    base_layer.push_attribute(("parent", layout.background_id.to_string().as_str()));
    writer.write_event(Event::Empty(base_layer))?;

    // Class container.
    let mut container = BytesStart::new("mxCell");
    container.push_attribute(("id", layout.container_id.to_string().as_str()));
    container.push_attribute(("value", layout.label.as_str()));
    container.push_attribute(("style", style::SWIMLANE_STYLE));
    container.push_attribute(("vertex", "1"));
    container.push_attribute(("parent", layout.layer_id.to_string().as_str()));
    writer.write_event(Event::Start(container))?;
    write_geometry(
        &mut writer,
        &[
            ("x", style::BOX_X.to_string()),
            ("y", style::BOX_Y.to_string()),
            ("width", style::BOX_WIDTH.to_string()),
            ("height", style::BOX_HEIGHT.to_string()),
        ],
    )?;
    writer.write_event(Event::End(BytesEnd::new("mxCell")))?;

    // Member rows and the separator, already positioned.
    for row in &layout.rows {
        let mut cell = BytesStart::new("mxCell");
        cell.push_attribute(("id", row.id.to_string().as_str()));
        if let Some(value) = &row.value {
            cell.push_attribute(("value", value.as_str()));
        }
        let cell_style = match row.kind {
            RowKind::Member => style::ROW_STYLE,
            RowKind::Separator => style::SEPARATOR_STYLE,
        };
        cell.push_attribute(("style", cell_style));
        cell.push_attribute(("vertex", "1"));
        cell.push_attribute(("parent", layout.container_id.to_string().as_str()));
        writer.write_event(Event::Start(cell))?;
        write_geometry(
            &mut writer,
            &[
                ("y", row.y.to_string()),
                ("width", style::BOX_WIDTH.to_string()),
                ("height", row.height.to_string()),
            ],
        )?;
        writer.write_event(Event::End(BytesEnd::new("mxCell")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("root")))?;
    writer.write_event(Event::End(BytesEnd::new("mxGraphModel")))?;
    writer.write_event(Event::End(BytesEnd::new("diagram")))?;
    writer.write_event(Event::End(BytesEnd::new("mxfile")))?;

    let bytes = writer.into_inner();
    String::from_utf8(bytes).map_err(|e| PipelineError::render(e.to_string()))
}
