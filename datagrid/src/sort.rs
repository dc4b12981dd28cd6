//! Single-column sorting.

use std::cmp::Ordering;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::column::ColumnDescriptor;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9, oldest first).
    #[default]
    Ascending,
    /// Descending order (Z-A, 9-0, newest first).
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Returns `true` for [`SortDirection::Ascending`].
    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// The active sort: which column, which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Index of the sort column in the full column list.
    pub column: usize,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortState {
    /// Ascending sort on a column.
    pub fn ascending(column: usize) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on a column.
    pub fn descending(column: usize) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }

    /// The sort state after activating the header of `column`.
    ///
    /// Activating the current sort column flips its direction; any other
    /// column starts ascending.
    pub fn toggled(current: Option<SortState>, column: usize) -> Self {
        match current {
            Some(state) if state.column == column => Self {
                column,
                direction: state.direction.flipped(),
            },
            _ => Self::ascending(column),
        }
    }
}

/// Stable-sort `rows` (indices into `source`) by `column`'s sort key.
///
/// Does nothing when the column is not sortable or has no sort key. Records
/// without a key sort before every keyed record in ascending order.
pub fn apply_sort<T>(
    source: &[T],
    rows: &mut [usize],
    column: &ColumnDescriptor<T>,
    direction: SortDirection,
) {
    if !column.can_sort() {
        trace!("column '{}' is not sortable, keeping order", column.label);
        return;
    }
    let mut keyed: Vec<_> = rows
        .iter()
        .map(|&i| (column.sort_key(&source[i]), i))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.cmp(b)));
    for (slot, (_, i)) in rows.iter_mut().zip(keyed) {
        *slot = i;
    }
    trace!(
        "sorted {} rows by '{}' {:?}",
        rows.len(),
        column.label,
        direction
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Task {
        title: &'static str,
        priority: Option<i64>,
    }

    fn tasks() -> Vec<Task> {
        vec![
            Task {
                title: "b",
                priority: Some(2),
            },
            Task {
                title: "a",
                priority: Some(1),
            },
            Task {
                title: "c",
                priority: Some(2),
            },
            Task {
                title: "d",
                priority: None,
            },
        ]
    }

    fn priority() -> ColumnDescriptor<Task> {
        ColumnDescriptor::new("Priority").sort_by(|t: &Task| t.priority.map(Into::into))
    }

    fn titles(source: &[Task], rows: &[usize]) -> Vec<&'static str> {
        rows.iter().map(|&i| source[i].title).collect()
    }

    #[test]
    fn test_ascending_is_stable_with_missing_first() {
        let source = tasks();
        let mut rows = vec![0, 1, 2, 3];
        apply_sort(&source, &mut rows, &priority(), SortDirection::Ascending);
        assert_eq!(titles(&source, &rows), vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn test_descending_keeps_tie_order() {
        let source = tasks();
        let mut rows = vec![0, 1, 2, 3];
        apply_sort(&source, &mut rows, &priority(), SortDirection::Descending);
        assert_eq!(titles(&source, &rows), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_unsortable_column_is_noop() {
        let source = tasks();
        let mut rows = vec![3, 0, 1];
        apply_sort(
            &source,
            &mut rows,
            &priority().with_sortable(false),
            SortDirection::Ascending,
        );
        assert_eq!(rows, vec![3, 0, 1]);

        let no_key = ColumnDescriptor::<Task>::new("Title").with_sortable(true);
        apply_sort(&source, &mut rows, &no_key, SortDirection::Descending);
        assert_eq!(rows, vec![3, 0, 1]);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(SortState::toggled(None, 2), SortState::ascending(2));
        assert_eq!(
            SortState::toggled(Some(SortState::ascending(2)), 2),
            SortState::descending(2)
        );
        assert_eq!(
            SortState::toggled(Some(SortState::descending(2)), 2),
            SortState::ascending(2)
        );
        assert_eq!(
            SortState::toggled(Some(SortState::descending(1)), 2),
            SortState::ascending(2)
        );
    }
}
