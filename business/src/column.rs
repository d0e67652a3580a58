//! Column identifiers and caller-supplied column definitions.

use std::fmt;

use ustr::Ustr;

use crate::FieldValue;

/// Field name of the identity column.
pub const ID_COLUMN: &str = "id";

/// Interned field name addressing a record column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnId(Ustr);

impl ColumnId {
    pub fn new(name: &str) -> Self {
        Self(Ustr::from(name))
    }

    /// The identity column.
    pub fn id() -> Self {
        Self::new(ID_COLUMN)
    }

    /// Whether this is the identity column, which is never editable.
    #[inline]
    pub fn is_id(&self) -> bool {
        self.0.as_str() == ID_COLUMN
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ColumnId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Turns a field value into the text shown in a cell.
pub type RenderFn = fn(&FieldValue) -> String;

fn render_plain(value: &FieldValue) -> String {
    value.to_string()
}

/// Immutable description of one visible column.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub id: ColumnId,
    pub title: String,
    pub render: RenderFn,
}

impl ColumnDef {
    /// Column that renders its value as plain text.
    pub fn new(id: &str, title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(id),
            title: title.into(),
            render: render_plain,
        }
    }

    pub fn with_render(mut self, render: RenderFn) -> Self {
        self.render = render;
        self
    }

    /// Display text for a possibly missing value.
    pub fn display(&self, value: Option<&FieldValue>) -> String {
        value.map(self.render).unwrap_or_default()
    }
}
