//! Diagram layout
//!
//! Positions the class box and its member rows: variables first, then one
//! separator, then functions, all stacked under the swimlane header by a
//! running vertical cursor. Cell ids come from an explicit generator
//! scoped to one build; ids within a document are unique and never
//! reused.

use crate::core::ClassModel;

use super::style;

/// Monotonically increasing cell-id generator for one document build
#[derive(Debug, Default)]
pub struct CellIds {
    next: usize,
}

impl CellIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> usize {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// What a positioned row renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A member line (text cell)
    Member,
    /// The horizontal rule between variables and functions
    Separator,
}

/// One positioned child cell of the class container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCell {
    pub id: usize,
    pub kind: RowKind,
    /// Member line text; `None` for the separator
    pub value: Option<String>,
    /// Vertical offset inside the container
    pub y: u32,
    pub height: u32,
}

/// Fully positioned diagram for one class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramLayout {
    /// Background cell id (always 0)
    pub background_id: usize,
    /// Root layer cell id (always 1)
    pub layer_id: usize,
    /// Class container id (always 2)
    pub container_id: usize,
    /// Container label: the class name with any `.cs` suffix removed,
    /// or the literal `None` marker
    pub label: String,
    /// Stacked child cells in emission order
    pub rows: Vec<RowCell>,
}

/// Lay out one class model.
pub fn lay_out(model: &ClassModel) -> DiagramLayout {
    let mut ids = CellIds::new();
    let background_id = ids.allocate();
    let layer_id = ids.allocate();
    let container_id = ids.allocate();

    let label = model
        .name
        .as_deref()
        .unwrap_or(crate::description::UNNAMED_MARKER)
        .replace(".cs", "");

    let mut rows = Vec::with_capacity(model.member_count() + 1);
    let mut cursor = style::HEADER_HEIGHT;

    for line in &model.variables {
        rows.push(RowCell {
            id: ids.allocate(),
            kind: RowKind::Member,
            value: Some(line.clone()),
            y: cursor,
            height: style::ROW_HEIGHT,
        });
        cursor += style::ROW_HEIGHT;
    }

    rows.push(RowCell {
        id: ids.allocate(),
        kind: RowKind::Separator,
        value: None,
        y: cursor,
        height: style::SEPARATOR_HEIGHT,
    });
    cursor += style::SEPARATOR_HEIGHT;

    for line in &model.functions {
        rows.push(RowCell {
            id: ids.allocate(),
            kind: RowKind::Member,
            value: Some(line.clone()),
            y: cursor,
            height: style::ROW_HEIGHT,
        });
        cursor += style::ROW_HEIGHT;
    }

    DiagramLayout {
        background_id,
        layer_id,
        container_id,
        label,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(variables: &[&str], functions: &[&str]) -> ClassModel {
        let mut m = ClassModel::named("Player");
        for v in variables {
            m.add_variable(*v);
        }
        for f in functions {
            m.add_function(*f);
        }
        m
    }

    #[test]
    fn test_cell_ids_are_sequential() {
        let mut ids = CellIds::new();
        assert_eq!(ids.allocate(), 0);
        assert_eq!(ids.allocate(), 1);
        assert_eq!(ids.allocate(), 2);
    }

    #[test]
    fn test_baseline_ids() {
        let layout = lay_out(&model(&[], &[]));
        assert_eq!(layout.background_id, 0);
        assert_eq!(layout.layer_id, 1);
        assert_eq!(layout.container_id, 2);
    }

    #[test]
    fn test_row_count_is_members_plus_separator() {
        let layout = lay_out(&model(&["+ a", "+ b"], &["+ F()", "+ G()", "+ H()"]));
        assert_eq!(layout.rows.len(), 2 + 3 + 1);
        assert_eq!(
            layout
                .rows
                .iter()
                .filter(|r| r.kind == RowKind::Separator)
                .count(),
            1
        );
    }

    #[test]
    fn test_separator_offset() {
        let variables = ["+ a", "+ b", "- c"];
        let layout = lay_out(&model(&variables, &["+ F()"]));
        let separator = layout
            .rows
            .iter()
            .find(|r| r.kind == RowKind::Separator)
            .unwrap();
        assert_eq!(separator.y, 26 + 26 * variables.len() as u32);
        assert_eq!(separator.height, 8);
    }

    #[test]
    fn test_last_function_offset() {
        let layout = lay_out(&model(&["+ a", "+ b"], &["+ F()", "+ G()"]));
        let last = layout.rows.last().unwrap();
        // 26 + 26*V + 8 + 26*(F-1)
        assert_eq!(last.y, 26 + 26 * 2 + 8 + 26);
        assert_eq!(last.height, 26);
    }

    #[test]
    fn test_row_ids_continue_after_container() {
        let layout = lay_out(&model(&["+ a"], &["+ F()"]));
        let ids: Vec<usize> = layout.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 4, 5]);
    }

    #[test]
    fn test_label_strips_cs_suffix() {
        let layout = lay_out(&ClassModel::named("Player.cs"));
        assert_eq!(layout.label, "Player");
    }

    #[test]
    fn test_unnamed_model_gets_marker_label() {
        let layout = lay_out(&ClassModel::new(None));
        assert_eq!(layout.label, "None");
    }

    #[test]
    fn test_empty_model_still_has_separator() {
        let layout = lay_out(&model(&[], &[]));
        assert_eq!(layout.rows.len(), 1);
        assert_eq!(layout.rows[0].kind, RowKind::Separator);
        assert_eq!(layout.rows[0].y, 26);
    }
}
