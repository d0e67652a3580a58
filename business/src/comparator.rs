//! Ordering of scalar field values.

use std::cmp::Ordering;
use std::sync::LazyLock;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use log::warn;

use crate::FieldValue;

/// Root-locale collator built from the compiled CLDR data.
static COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    Collator::try_new(Default::default(), CollatorOptions::default())
        .inspect_err(|err| warn!("Collator unavailable, sorting text case-folded: {err}"))
        .ok()
});

/// Orders two field values for a single-column sort.
///
/// Strings follow Unicode collation at the root locale, so accents and case are
/// secondary to the base letters and "b" sorts before "B". Collation-equal
/// strings fall back to raw text order. Numbers compare numerically. Mixed
/// kinds, and NaN, compare as equal so a stable sort leaves them where they were.
pub fn compare(a: &FieldValue, b: &FieldValue, ascending: bool) -> Ordering {
    let ordering = match (a, b) {
        (FieldValue::Str(a), FieldValue::Str(b)) => compare_text(a, b),
        (FieldValue::Num(a), FieldValue::Num(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    };

    if ascending {
        ordering
    } else {
        ordering.reverse()
    }
}

/// Orders optional values. A missing value behaves like a value of another kind.
pub fn compare_optional(a: Option<&FieldValue>, b: Option<&FieldValue>, ascending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare(a, b, ascending),
        _ => Ordering::Equal,
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    let collated = match COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase)),
    };
    collated.then_with(|| a.cmp(b))
}
