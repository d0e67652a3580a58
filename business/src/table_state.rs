//! Interactive state of the users table.
//!
//! `TableState` owns the local snapshot and every control the user can touch:
//! search term, sort, row limit, selection and the single cell being edited.
//! The UI stays dumb: it reads [`TableState::visible_rows`] to render and reports
//! what happened as [`TableAction`]s, which are applied after the frame's
//! iteration over the rows is done.

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, warn};

use crate::view::derive_view;
use crate::{ColumnId, FieldValue, Limit, LimitError, Record, RecordId, SortSpec};

/// Coordinate of the cell in inline-edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub row: RecordId,
    pub column: ColumnId,
}

impl CellCoord {
    pub fn new(row: RecordId, column: ColumnId) -> Self {
        Self { row, column }
    }
}

/// A user interaction with the table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableAction {
    ToggleSelection(RecordId),
    /// Click on a column header.
    ClickHeader(ColumnId),
    /// Pick a column in the "Sort by" selector.
    SelectSortColumn(ColumnId),
    SetLimit(Limit),
    SetSearch(String),
    DeleteSelected,
    ClickCell(CellCoord),
    SaveCell { cell: CellCoord, value: String },
}

#[derive(Debug, Clone, Default)]
pub struct TableState {
    snapshot: Vec<Record>,
    /// Upstream dataset the snapshot was last copied from.
    source: Option<Arc<Vec<Record>>>,
    search: String,
    sort: SortSpec,
    limit: Limit,
    selection: BTreeSet<RecordId>,
    active_edit: Option<CellCoord>,
}

impl TableState {
    pub fn new(default_limit: Limit) -> Self {
        Self {
            limit: default_limit,
            ..Self::default()
        }
    }

    /// Table seeded with a snapshot, without an upstream source.
    pub fn with_records(default_limit: Limit, records: Vec<Record>) -> Self {
        Self {
            snapshot: records,
            ..Self::new(default_limit)
        }
    }

    pub fn snapshot(&self) -> &[Record] {
        &self.snapshot
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn limit(&self) -> Limit {
        self.limit
    }

    pub fn selection(&self) -> &BTreeSet<RecordId> {
        &self.selection
    }

    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selection.contains(&id)
    }

    pub fn active_edit(&self) -> Option<CellCoord> {
        self.active_edit
    }

    /// Whether `(row, column)` renders as an edit form.
    pub fn is_editing(&self, row: RecordId, column: ColumnId) -> bool {
        !column.is_id() && self.active_edit == Some(CellCoord::new(row, column))
    }

    /// The rows to render, recomputed from the current state.
    pub fn visible_rows(&self) -> Vec<&Record> {
        derive_view(&self.snapshot, self.limit, &self.sort, &self.search)
    }

    /// Copies the upstream dataset into the snapshot when it is a different
    /// dataset than last time. Local edits and deletions are discarded.
    ///
    /// Returns `true` if the snapshot was replaced.
    pub fn sync_source(&mut self, source: &Arc<Vec<Record>>) -> bool {
        if self
            .source
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, source))
        {
            return false;
        }

        debug!("Replacing table snapshot with {} records", source.len());
        self.snapshot = source.to_vec();
        self.source = Some(Arc::clone(source));
        true
    }

    pub fn apply(&mut self, action: TableAction) {
        debug!("Table action: {action:?}");
        match action {
            TableAction::ToggleSelection(id) => self.toggle_selection(id),
            TableAction::ClickHeader(column) => self.click_header(column),
            TableAction::SelectSortColumn(column) => self.sort.select_column(column),
            TableAction::SetLimit(limit) => self.set_limit(limit),
            TableAction::SetSearch(term) => self.set_search(term),
            TableAction::DeleteSelected => {
                self.delete_selected();
            }
            TableAction::ClickCell(cell) => {
                self.click_cell(cell.row, cell.column);
            }
            TableAction::SaveCell { cell, value } => self.save_cell(cell.row, cell.column, value),
        }
    }

    pub fn toggle_selection(&mut self, id: RecordId) {
        if !self.selection.remove(&id) {
            self.selection.insert(id);
        }
    }

    pub fn click_header(&mut self, column: ColumnId) {
        self.sort.click_header(column);
    }

    pub fn set_limit(&mut self, limit: Limit) {
        self.limit = limit;
    }

    /// Sets the limit from a raw number, rejecting values outside [`Limit::ALL`].
    pub fn set_limit_value(&mut self, value: usize) -> Result<(), LimitError> {
        let limit = Limit::try_from(value).inspect_err(|err| warn!("{err}"))?;
        self.set_limit(limit);
        Ok(())
    }

    /// Stores the search box text verbatim.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Removes every selected record from the whole snapshot, visible or not.
    ///
    /// The selection itself is kept. Returns the number of removed records.
    pub fn delete_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }

        let before = self.snapshot.len();
        let selection = &self.selection;
        self.snapshot.retain(|record| !selection.contains(&record.id()));
        let removed = before - self.snapshot.len();
        debug!("Deleted {removed} selected records");
        removed
    }

    /// Puts a cell into edit mode. The `id` column is never editable.
    ///
    /// Returns `true` if the cell is now the active edit target.
    pub fn click_cell(&mut self, row: RecordId, column: ColumnId) -> bool {
        if column.is_id() {
            return false;
        }
        self.active_edit = Some(CellCoord::new(row, column));
        true
    }

    /// Writes the raw text into the record's field and leaves edit mode.
    ///
    /// The value is stored as a string even if the field used to be numeric.
    /// Unknown rows leave the snapshot untouched.
    pub fn save_cell(&mut self, row: RecordId, column: ColumnId, value: String) {
        match self.snapshot.iter_mut().find(|record| record.id() == row) {
            Some(record) => {
                record.set(column, FieldValue::Str(value));
            }
            None => debug!("Save ignored, record {row} is not in the snapshot"),
        }
        self.active_edit = None;
    }
}
