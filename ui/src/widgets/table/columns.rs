//! Column sizing for the users table.

use usergrid_business::ColumnId;

/// Fixed column widths for consistent table layout
pub const ID_WIDTH: f32 = 35.0;
pub const FIELD_WIDTH: f32 = 100.0;
pub const SELECT_WIDTH: f32 = 24.0;
pub const EDIT_INPUT_WIDTH: f32 = 60.0;

/// Width of a data column. The id column is kept narrow.
#[inline]
pub fn column_width(column: &ColumnId) -> f32 {
    if column.is_id() { ID_WIDTH } else { FIELD_WIDTH }
}
