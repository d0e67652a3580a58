//! Derivation of the visible row set.
//!
//! The pipeline always runs in the same order: truncate to the limit, sort,
//! then filter by the search term. Because the cap comes first, search and sort
//! only ever see the first `limit` records of the snapshot.

use std::cmp::Ordering;

use crate::{Limit, Record, RecordId, SortSpec, comparator};

/// Parses the search box the way it is matched against ids.
///
/// Surrounding whitespace is ignored, the rest must be an integer. Anything else
/// yields `None`, which matches no record. This is stricter than a prefix parse
/// such as JavaScript's `parseInt`: `"12abc"` does not find record 12.
pub fn parse_search(term: &str) -> Option<RecordId> {
    term.trim().parse::<i64>().ok().map(RecordId)
}

/// Computes the rows to render from the current snapshot and controls.
pub fn derive_view<'a>(
    snapshot: &'a [Record],
    limit: Limit,
    sort: &SortSpec,
    search: &str,
) -> Vec<&'a Record> {
    let mut rows: Vec<&Record> = snapshot.iter().take(limit.value()).collect();

    if let Some(column) = sort.column {
        merge_sort_by(&mut rows, &|a: &&Record, b: &&Record| {
            comparator::compare_optional(
                a.value(&column).as_deref(),
                b.value(&column).as_deref(),
                sort.ascending,
            )
        });
    }

    if !search.is_empty() {
        let wanted = parse_search(search);
        rows.retain(|record| Some(record.id()) == wanted);
    }

    rows
}

/// Stable merge sort that tolerates comparators which are not a total order.
///
/// Mixed-kind columns compare as equal to everything of the other kind, which is
/// not transitive; `slice::sort_by` is allowed to panic on such input.
fn merge_sort_by<T: Copy>(items: &mut Vec<T>, compare: &dyn Fn(&T, &T) -> Ordering) {
    if items.len() < 2 {
        return;
    }

    let mut right = items.split_off(items.len() / 2);
    merge_sort_by(items, compare);
    merge_sort_by(&mut right, compare);

    let left = std::mem::take(items);
    items.reserve(left.len() + right.len());

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let next = match (left.peek().copied(), right.peek().copied()) {
            (Some(l), Some(r)) if compare(&r, &l) == Ordering::Less => right.next(),
            (Some(_), _) => left.next(),
            (None, Some(_)) => right.next(),
            (None, None) => break,
        };
        items.extend(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColumnId;

    fn people(count: i64) -> Vec<Record> {
        (1..=count)
            .map(|id| Record::new(id).with("firstname", format!("name-{id:04}")))
            .collect()
    }

    fn ids(rows: &[&Record]) -> Vec<i64> {
        rows.iter().map(|r| r.id().0).collect()
    }

    #[test]
    fn unsorted_view_keeps_snapshot_order() {
        let snapshot = people(5);
        let rows = derive_view(&snapshot, Limit::L10, &SortSpec::default(), "");
        assert_eq!(ids(&rows), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn truncates_before_sorting() {
        let snapshot = people(30);
        let sort = SortSpec {
            column: Some(ColumnId::id()),
            ascending: false,
        };
        let rows = derive_view(&snapshot, Limit::L10, &sort, "");
        assert_eq!(rows.len(), 10);
        // Highest id of the first ten, not of the whole snapshot.
        assert_eq!(rows[0].id(), RecordId(10));
    }

    #[test]
    fn limit_applies_before_search() {
        let snapshot = people(30);
        let sort = SortSpec::default();

        assert!(derive_view(&snapshot, Limit::L10, &sort, "15").is_empty());
        assert_eq!(ids(&derive_view(&snapshot, Limit::L25, &sort, "15")), vec![15]);
    }

    #[test]
    fn non_integer_search_matches_nothing() {
        let snapshot = people(20);
        let sort = SortSpec::default();

        for term in ["abc", "1.5", "12abc", "-", " ", "0x1"] {
            assert!(
                derive_view(&snapshot, Limit::L25, &sort, term).is_empty(),
                "term {term:?} should match nothing"
            );
        }
    }

    #[test]
    fn parse_search_rejects_trailing_garbage() {
        assert_eq!(parse_search("12"), Some(RecordId(12)));
        assert_eq!(parse_search("-4"), Some(RecordId(-4)));
        assert_eq!(parse_search("12abc"), None);
        assert_eq!(parse_search("12 34"), None);
    }

    #[test]
    fn search_tolerates_surrounding_whitespace() {
        let snapshot = people(5);
        let rows = derive_view(&snapshot, Limit::L10, &SortSpec::default(), " 3 ");
        assert_eq!(ids(&rows), vec![3]);
    }

    #[test]
    fn mixed_kinds_do_not_reorder() {
        let snapshot = vec![
            Record::new(1).with("age", "unknown"),
            Record::new(2).with("age", 40_i64),
            Record::new(3).with("age", "n/a"),
        ];
        let sort = SortSpec {
            column: Some(ColumnId::new("age")),
            ascending: true,
        };
        let rows = derive_view(&snapshot, Limit::L10, &sort, "");
        // The number sits between the strings and compares equal to both.
        assert_eq!(ids(&rows), vec![1, 2, 3]);
    }

    #[test]
    fn merge_sort_is_stable() {
        let mut pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
        merge_sort_by(&mut pairs, &|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        assert_eq!(pairs, vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn flipping_direction_reverses_rows() {
        let snapshot = vec![
            Record::new(1).with("firstname", "Carol"),
            Record::new(2).with("firstname", "alice"),
            Record::new(3).with("firstname", "Bob"),
        ];
        let column = ColumnId::new("firstname");
        let asc = SortSpec {
            column: Some(column),
            ascending: true,
        };
        let desc = SortSpec {
            column: Some(column),
            ascending: false,
        };

        let mut ascending = ids(&derive_view(&snapshot, Limit::L10, &asc, ""));
        let descending = ids(&derive_view(&snapshot, Limit::L10, &desc, ""));
        assert_eq!(ascending, vec![2, 3, 1]);
        ascending.reverse();
        assert_eq!(ascending, descending);
    }
}
