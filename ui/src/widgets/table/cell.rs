//! A single data cell: plain text, or an inline edit form when it is the
//! table's active edit target.
//!
//! The cell owns its input buffer, kept in egui's temp memory under an id
//! derived from the cell coordinate. The table owns the edit target and is the
//! only one that leaves edit mode.

use egui::{Id, Label, Sense, TextEdit, Ui};
use usergrid_business::{ColumnDef, Record};

use super::columns::EDIT_INPUT_WIDTH;

/// What the user did with a cell this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellEvent {
    /// Asked for edit mode.
    Clicked,
    /// Pressed "Save" with the buffer contents.
    Saved(String),
}

#[inline]
fn buffer_id(record: &Record, column: &ColumnDef) -> Id {
    Id::new(("usergrid_cell_buffer", record.id(), column.id))
}

/// Current value as plain text, the seed of the edit buffer.
fn raw_text(record: &Record, column: &ColumnDef) -> String {
    record
        .value(&column.id)
        .map(|value| value.to_string())
        .unwrap_or_default()
}

/// Renders one cell and reports the interaction, if any.
pub fn render_cell(
    ui: &mut Ui,
    record: &Record,
    column: &ColumnDef,
    editing: bool,
) -> Option<CellEvent> {
    if editing && !column.id.is_id() {
        render_edit_form(ui, record, column)
    } else {
        render_display(ui, record, column)
    }
}

fn render_display(ui: &mut Ui, record: &Record, column: &ColumnDef) -> Option<CellEvent> {
    let value = record.value(&column.id);
    let text = column.display(value.as_deref());
    let response = ui.add(Label::new(text).sense(Sense::click()));

    if response.clicked() && !column.id.is_id() {
        let seed = raw_text(record, column);
        ui.data_mut(|data| data.insert_temp(buffer_id(record, column), seed));
        return Some(CellEvent::Clicked);
    }
    None
}

fn render_edit_form(ui: &mut Ui, record: &Record, column: &ColumnDef) -> Option<CellEvent> {
    let id = buffer_id(record, column);
    let mut buffer = ui
        .data_mut(|data| data.get_temp::<String>(id))
        .unwrap_or_else(|| raw_text(record, column));

    let saved = ui
        .horizontal(|ui| {
            ui.add(TextEdit::singleline(&mut buffer).desired_width(EDIT_INPUT_WIDTH));
            ui.button("Save").clicked()
        })
        .inner;

    if saved {
        ui.data_mut(|data| data.remove::<String>(id));
        Some(CellEvent::Saved(buffer))
    } else {
        ui.data_mut(|data| data.insert_temp(id, buffer));
        None
    }
}
