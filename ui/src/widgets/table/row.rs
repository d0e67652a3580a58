//! Row rendering for the users table.

use egui::{Frame, InnerResponse, Margin, Ui};
use usergrid_business::{CellCoord, ColumnDef, Record, TableAction, TableState};

use super::cell::{CellEvent, render_cell};
use super::columns::{SELECT_WIDTH, column_width};

/// Helper to create a data cell with padding.
fn data_cell<R>(ui: &mut Ui, width: f32, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE.inner_margin(Margin::symmetric(8, 6)).show(ui, |ui| {
        ui.set_min_width(width);
        add_contents(ui)
    })
}

/// Renders the selection checkbox and one cell per column.
///
/// Interactions are pushed to `actions`; the caller applies them once the
/// iteration over the visible rows is done.
pub fn render_row(
    ui: &mut Ui,
    record: &Record,
    state: &TableState,
    columns: &[ColumnDef],
    actions: &mut Vec<TableAction>,
) {
    let id = record.id();

    data_cell(ui, SELECT_WIDTH, |ui| {
        let mut checked = state.is_selected(id);
        if ui.checkbox(&mut checked, "").changed() {
            actions.push(TableAction::ToggleSelection(id));
        }
    });

    for column in columns {
        let editing = state.is_editing(id, column.id);
        let event = data_cell(ui, column_width(&column.id), |ui| {
            render_cell(ui, record, column, editing)
        })
        .inner;

        let cell = CellCoord::new(id, column.id);
        match event {
            Some(CellEvent::Clicked) => actions.push(TableAction::ClickCell(cell)),
            Some(CellEvent::Saved(value)) => actions.push(TableAction::SaveCell { cell, value }),
            None => {}
        }
    }
}
