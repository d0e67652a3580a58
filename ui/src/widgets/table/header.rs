//! Controls above the table and the column header row.

use egui::{Button, ComboBox, Frame, InnerResponse, Margin, TextEdit, Ui};
use usergrid_business::{ColumnDef, Limit, SortSpec, TableAction, TableState};

use super::columns::{SELECT_WIDTH, column_width};

/// Hover text of the delete control in the selection column header.
pub const DELETE_SELECTED_HINT: &str = "Delete selected";
/// Label of the delete control.
pub const DELETE_SELECTED_LABEL: &str = "🗑";

/// Arrow shown next to the sorted column's title.
#[inline]
pub fn sort_arrow(sort: &SortSpec, column: &ColumnDef) -> Option<&'static str> {
    sort.is_sorted_by(&column.id)
        .then_some(if sort.ascending { "⬆" } else { "⬇" })
}

/// Header text for a column, with the sort arrow when it is the sort column.
pub fn header_text(sort: &SortSpec, column: &ColumnDef) -> String {
    match sort_arrow(sort, column) {
        Some(arrow) => format!("{} {arrow}", column.title),
        None => column.title.clone(),
    }
}

/// Helper to create a header cell with padding.
fn header_cell<R>(ui: &mut Ui, width: f32, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE.inner_margin(Margin::symmetric(8, 8)).show(ui, |ui| {
        ui.set_min_width(width);
        add_contents(ui)
    })
}

/// Renders the search box, the "Sort by" selector and the limit selector.
pub fn render_controls(
    ui: &mut Ui,
    state: &TableState,
    columns: &[ColumnDef],
    actions: &mut Vec<TableAction>,
) {
    ui.horizontal(|ui| {
        ui.label("Search:");
        let mut search = state.search().to_owned();
        let response = ui.add(
            TextEdit::singleline(&mut search)
                .id_salt("idSearchInput")
                .hint_text("id"),
        );
        if response.changed() {
            actions.push(TableAction::SetSearch(search));
        }
    });

    ui.horizontal(|ui| {
        ui.label("Sort by:");
        let current = state.sort().column;
        let selected_text = current
            .and_then(|id| columns.iter().find(|column| column.id == id))
            .map(|column| column.title.as_str())
            .unwrap_or("—");

        let mut picked = current;
        ComboBox::from_id_salt("sortByInput")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for column in columns {
                    ui.selectable_value(&mut picked, Some(column.id), column.title.as_str());
                }
            });
        if let Some(column) = picked.filter(|_| picked != current) {
            actions.push(TableAction::SelectSortColumn(column));
        }
    });

    ui.horizontal(|ui| {
        ui.label("Limit displayed:");
        let mut limit = state.limit();
        ComboBox::from_id_salt("limitInput")
            .selected_text(limit.to_string())
            .show_ui(ui, |ui| {
                for option in Limit::ALL {
                    ui.selectable_value(&mut limit, option, option.to_string());
                }
            });
        if limit != state.limit() {
            actions.push(TableAction::SetLimit(limit));
        }
    });
}

/// Renders the header row: the delete control, then one sortable header per column.
pub fn render_column_headers(
    ui: &mut Ui,
    state: &TableState,
    columns: &[ColumnDef],
    actions: &mut Vec<TableAction>,
) {
    header_cell(ui, SELECT_WIDTH, |ui| {
        let delete = ui
            .add(Button::new(DELETE_SELECTED_LABEL).frame(false))
            .on_hover_text(DELETE_SELECTED_HINT);
        if delete.clicked() {
            actions.push(TableAction::DeleteSelected);
        }
    });

    for column in columns {
        header_cell(ui, column_width(&column.id), |ui| {
            let text = header_text(state.sort(), column);
            if ui.add(Button::new(text).frame(false)).clicked() {
                actions.push(TableAction::ClickHeader(column.id));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_text_shows_direction_on_sorted_column_only() {
        let first = ColumnDef::new("firstname", "First name");
        let last = ColumnDef::new("lastname", "Last name");
        let mut sort = SortSpec::default();
        assert_eq!(header_text(&sort, &first), "First name");

        sort.click_header(first.id);
        assert_eq!(header_text(&sort, &first), "First name ⬆");
        assert_eq!(header_text(&sort, &last), "Last name");

        sort.click_header(first.id);
        assert_eq!(header_text(&sort, &first), "First name ⬇");
    }
}
