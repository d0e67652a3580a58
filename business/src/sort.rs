use crate::ColumnId;

/// Single-column sort. No column means snapshot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: Option<ColumnId>,
    pub ascending: bool,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            column: None,
            ascending: true,
        }
    }
}

impl SortSpec {
    /// Header click: flips direction on the current sort column, otherwise switches
    /// column and keeps the previous direction.
    pub fn click_header(&mut self, column: ColumnId) {
        if self.column == Some(column) {
            self.ascending = !self.ascending;
        } else {
            self.column = Some(column);
        }
    }

    /// "Sort by" selector: sets the column without touching direction.
    pub fn select_column(&mut self, column: ColumnId) {
        self.column = Some(column);
    }

    pub fn is_sorted_by(&self, column: &ColumnId) -> bool {
        self.column.as_ref() == Some(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_column_flips_direction() {
        let firstname = ColumnId::new("firstname");
        let mut sort = SortSpec::default();

        sort.click_header(firstname);
        assert_eq!(sort.column, Some(firstname));
        assert!(sort.ascending);

        sort.click_header(firstname);
        assert!(!sort.ascending);

        sort.click_header(firstname);
        assert!(sort.ascending);
    }

    #[test]
    fn new_column_keeps_direction() {
        let mut sort = SortSpec::default();
        sort.click_header(ColumnId::new("firstname"));
        sort.click_header(ColumnId::new("firstname"));
        assert!(!sort.ascending);

        sort.click_header(ColumnId::new("country"));
        assert!(sort.is_sorted_by(&ColumnId::new("country")));
        assert!(!sort.ascending, "direction must carry over to the new column");
    }

    #[test]
    fn select_column_never_flips() {
        let country = ColumnId::new("country");
        let mut sort = SortSpec::default();
        sort.select_column(country);
        sort.select_column(country);
        assert!(sort.ascending);
        assert!(sort.is_sorted_by(&country));
    }
}
