//! View derivation: filter, then sort.

use log::debug;

use crate::column::ColumnDescriptor;
use crate::filter::{FilterInputs, apply_filters};
use crate::sort::{SortState, apply_sort};

/// Derive the view of `source`.
///
/// Returns indices into `source`: the records every filter keeps, ordered by
/// the sort column when it exists and is sortable, otherwise in source order.
/// Always recomputes from scratch over the whole source.
pub fn recompute<T>(
    source: &[T],
    columns: &[ColumnDescriptor<T>],
    inputs: &FilterInputs,
    sort: Option<SortState>,
) -> Vec<usize> {
    let mut rows = apply_filters(source, columns, inputs);
    if let Some(sort) = sort
        && let Some(column) = columns.get(sort.column)
        && column.can_sort()
    {
        apply_sort(source, &mut rows, column, sort.direction);
    }
    debug!("view recomputed: {} of {} rows", rows.len(), source.len());
    rows
}
