//! The users table widget.
//!
//! Split into smaller, focused components:
//! - `columns`: Column widths
//! - `header`: Controls and the sortable header row
//! - `row`: Row rendering with the selection checkbox
//! - `cell`: Display / inline-edit cell

mod cell;
pub mod columns;
pub mod header;
mod row;

use std::sync::Arc;

use egui::{Color32, Frame, Grid, Margin, Response, ScrollArea, Stroke, Ui};
use usergrid_business::{ColumnDef, Limit, Record, TableAction, TableState};

pub use cell::CellEvent;

/// Border color for the table frame (subtle gray)
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Interactive table over a dataset supplied by the caller.
///
/// Columns and the default limit are fixed at construction. The dataset is
/// passed on every frame; when it is a different `Arc` than last time the local
/// snapshot is replaced.
#[derive(Debug)]
pub struct UserTable {
    state: TableState,
    columns: Vec<ColumnDef>,
}

impl UserTable {
    pub fn new(columns: Vec<ColumnDef>, default_limit: Limit) -> Self {
        Self {
            state: TableState::new(default_limit),
            columns,
        }
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut TableState {
        &mut self.state
    }

    pub fn show(&mut self, ui: &mut Ui, data: &Arc<Vec<Record>>) -> Response {
        self.state.sync_source(data);

        // Collect actions (avoiding borrow issues), apply after rendering.
        let mut actions: Vec<TableAction> = Vec::new();
        let state = &self.state;
        let columns = &self.columns;

        let response = ui.vertical(|ui| {
            header::render_controls(ui, state, columns, &mut actions);
            ui.add_space(8.0);

            Frame::NONE
                .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
                .inner_margin(Margin::ZERO)
                .show(ui, |ui| {
                    ScrollArea::vertical().show(ui, |ui| {
                        Grid::new("users_table")
                            .num_columns(columns.len() + 1)
                            .striped(true)
                            .spacing([16.0, 0.0])
                            .show(ui, |ui| {
                                header::render_column_headers(ui, state, columns, &mut actions);
                                ui.end_row();

                                for record in state.visible_rows() {
                                    row::render_row(ui, record, state, columns, &mut actions);
                                    ui.end_row();
                                }
                            });
                    });
                });
        });

        for action in actions {
            self.state.apply(action);
        }

        response.response
    }
}
