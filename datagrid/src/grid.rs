//! The interactive grid.
//!
//! [`Grid`] owns everything one grid instance needs: the source records, the
//! column descriptors, raw filter inputs, the sort, the derived view,
//! selection, paging and column visibility. Every mutation that can change the
//! view recomputes it before returning, then drops selected keys that are no
//! longer in the view and clamps the current page.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::io::Write;
use std::ops::Range;

use log::{debug, trace};

use crate::column::ColumnDescriptor;
use crate::config::GridConfig;
use crate::error::GridError;
use crate::export;
use crate::filter::FilterInputs;
use crate::navigation::{NavCommand, target_index};
use crate::pagination::Pagination;
use crate::selection::{RowAction, Selection, SelectionMode};
use crate::sort::SortState;
use crate::view::recompute;
use crate::visibility::ColumnVisibility;

/// Trait for records that can be displayed in a [`Grid`].
///
/// The key identifies a record across re-filtering and re-sorting; selection
/// follows keys, not view positions.
///
/// # Example
///
/// ```
/// use datagrid::GridRecord;
///
/// struct User {
///     id: u32,
///     name: String,
/// }
///
/// impl GridRecord for User {
///     type Key = u32;
///
///     fn key(&self) -> u32 {
///         self.id
///     }
/// }
/// ```
pub trait GridRecord {
    /// The key type used to identify this record.
    type Key: Clone + Eq + Hash + fmt::Debug;

    /// Return a stable, unique key for this record.
    fn key(&self) -> Self::Key;
}

/// Row-activation handler.
pub type ActivateHandler<T> = Box<dyn FnMut(&T) + Send>;

/// An interactive, filterable, sortable grid over an in-memory collection.
pub struct Grid<T: GridRecord> {
    source: Vec<T>,
    columns: Vec<ColumnDescriptor<T>>,
    inputs: FilterInputs,
    sort: Option<SortState>,
    /// View rows as indices into `source`.
    rows: Vec<usize>,
    selection: Selection<T::Key>,
    visibility: ColumnVisibility,
    pagination: Pagination,
    page: usize,
    last_activated: Option<T::Key>,
    on_activate: Option<ActivateHandler<T>>,
}

impl<T: GridRecord> Grid<T> {
    /// Create an empty grid with the default configuration.
    pub fn new(columns: Vec<ColumnDescriptor<T>>) -> Self {
        let config = GridConfig::default();
        let mut grid = Self {
            source: Vec::new(),
            visibility: ColumnVisibility::all(&columns),
            columns,
            inputs: FilterInputs::new(),
            sort: None,
            rows: Vec::new(),
            selection: Selection::new(config.selection_mode),
            pagination: Pagination::new(config.page_size),
            page: 0,
            last_activated: None,
            on_activate: None,
        };
        grid.refresh();
        grid
    }

    /// Create an empty grid with a validated configuration.
    pub fn with_config(
        columns: Vec<ColumnDescriptor<T>>,
        config: GridConfig,
    ) -> Result<Self, GridError> {
        config.validate(columns.len())?;
        let mut grid = Self::new(columns);
        grid.selection = Selection::new(config.selection_mode);
        grid.pagination = Pagination::new(config.page_size);
        grid.sort = config.initial_sort;
        grid.refresh();
        Ok(grid)
    }

    /// Set the initial records.
    pub fn with_rows(mut self, rows: Vec<T>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Register the row-activation handler.
    pub fn on_activate(mut self, handler: impl FnMut(&T) + Send + 'static) -> Self {
        self.on_activate = Some(Box::new(handler));
        self
    }

    /// Replace the row-activation handler.
    pub fn set_on_activate(&mut self, handler: impl FnMut(&T) + Send + 'static) {
        self.on_activate = Some(Box::new(handler));
    }

    fn refresh(&mut self) {
        self.rows = recompute(&self.source, &self.columns, &self.inputs, self.sort);

        let present: HashSet<T::Key> = self
            .rows
            .iter()
            .map(|&i| self.source[i].key())
            .collect();
        let dropped = self.selection.retain(|key| present.contains(key));
        if dropped > 0 {
            debug!("dropped {} selected rows no longer in view", dropped);
        }
        self.page = self.pagination.clamp_page(self.page, self.rows.len());
    }

    // -------------------------------------------------------------------------
    // Source access
    // -------------------------------------------------------------------------

    /// Replace the source records.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.source = rows;
        self.refresh();
    }

    /// Mutate the source records in place, then recompute.
    pub fn update_rows<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Vec<T>),
    {
        f(&mut self.source);
        self.refresh();
    }

    /// All source records, unfiltered and in their original order.
    pub fn source(&self) -> &[T] {
        &self.source
    }

    // -------------------------------------------------------------------------
    // Column access
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> &[ColumnDescriptor<T>] {
        &self.columns
    }

    /// Replace the column definitions.
    ///
    /// Filter inputs and the sort follow their column by label to its new
    /// position. An input is dropped when its column is gone or offers a
    /// different filter kind; the sort is cleared when its column is gone or
    /// no longer sorts. New columns start visible.
    pub fn set_columns(&mut self, columns: Vec<ColumnDescriptor<T>>) {
        let known: HashSet<&str> = self
            .columns
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        for column in &columns {
            if !known.contains(column.label.as_str()) {
                self.visibility.set_visible(&column.label, true);
            }
        }
        self.visibility.retain_columns(&columns);

        let previous = &self.columns;
        self.inputs.remap(|old| {
            let was = previous.get(old)?;
            columns
                .iter()
                .position(|c| c.label == was.label && c.filter_kind == was.filter_kind)
        });
        let had_sort = self.sort.is_some();
        self.sort = self.sort.and_then(|sort| {
            let was = previous.get(sort.column)?;
            let column = columns
                .iter()
                .position(|c| c.label == was.label && c.can_sort())?;
            Some(SortState { column, ..sort })
        });
        if had_sort && self.sort.is_none() {
            debug!("sort cleared by column change");
        }

        self.columns = columns;
        self.refresh();
    }

    // -------------------------------------------------------------------------
    // View access
    // -------------------------------------------------------------------------

    /// Get the number of rows in the view.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the view is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a view row by index.
    pub fn row(&self, index: usize) -> Option<&T> {
        self.rows.get(index).map(|&i| &self.source[i])
    }

    /// Iterate the view in order.
    pub fn rows(&self) -> impl Iterator<Item = &T> + '_ {
        self.rows.iter().map(|&i| &self.source[i])
    }

    /// The view as indices into [`Grid::source`].
    pub fn view_indices(&self) -> &[usize] {
        &self.rows
    }

    /// Find the view index of a record by key.
    pub fn index_of(&self, key: &T::Key) -> Option<usize> {
        self.rows.iter().position(|&i| self.source[i].key() == *key)
    }

    fn key_at(&self, index: usize) -> Option<T::Key> {
        self.row(index).map(GridRecord::key)
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Get the raw filter inputs.
    pub fn filter_inputs(&self) -> &FilterInputs {
        &self.inputs
    }

    /// Set a column's text query or selected option.
    pub fn set_filter_value(&mut self, column: usize, value: impl Into<String>) {
        self.inputs.set_value(column, value);
        self.refresh();
    }

    /// Set both bounds of a column's range filter.
    pub fn set_filter_range(&mut self, column: usize, min: Option<String>, max: Option<String>) {
        self.inputs.set_range(column, min, max);
        self.refresh();
    }

    /// Set the lower bound of a column's range filter.
    pub fn set_filter_min(&mut self, column: usize, min: Option<String>) {
        self.inputs.set_min(column, min);
        self.refresh();
    }

    /// Set the upper bound of a column's range filter.
    pub fn set_filter_max(&mut self, column: usize, max: Option<String>) {
        self.inputs.set_max(column, max);
        self.refresh();
    }

    /// Clear one column's filter input.
    pub fn clear_filter(&mut self, column: usize) {
        if self.inputs.clear(column) {
            self.refresh();
        }
    }

    /// Clear every filter input.
    pub fn reset_filters(&mut self) {
        self.inputs.reset();
        self.refresh();
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get current sort state.
    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    /// Activate a column header.
    ///
    /// Sorting the current sort column flips its direction; any other sortable
    /// column sorts ascending. Returns the new sort state, or `None` if the
    /// column cannot sort.
    pub fn toggle_sort(&mut self, column: usize) -> Option<SortState> {
        if !self.columns.get(column).is_some_and(ColumnDescriptor::can_sort) {
            trace!("ignoring sort on column {}", column);
            return None;
        }
        let sort = SortState::toggled(self.sort, column);
        self.sort = Some(sort);
        self.refresh();
        Some(sort)
    }

    /// Set sort by column index and direction. Returns `false` if the column
    /// cannot sort.
    pub fn set_sort(&mut self, sort: SortState) -> bool {
        if !self.columns.get(sort.column).is_some_and(ColumnDescriptor::can_sort) {
            return false;
        }
        self.sort = Some(sort);
        self.refresh();
        true
    }

    /// Clear sort state, restoring source order.
    pub fn clear_sort(&mut self) {
        if self.sort.take().is_some() {
            self.refresh();
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get the selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    /// Get the selection state.
    pub fn selection(&self) -> &Selection<T::Key> {
        &self.selection
    }

    /// Handle the selection control (checkbox) of a view row.
    pub fn toggle(&mut self, index: usize) -> RowAction {
        let Some(key) = self.key_at(index) else {
            return RowAction::Ignored;
        };
        self.selection.toggle(key)
    }

    /// Handle a tap on a view row's content.
    ///
    /// Tapping a selected row activates it; any other row becomes selected.
    pub fn tap(&mut self, index: usize) -> RowAction {
        let Some(key) = self.key_at(index) else {
            return RowAction::Ignored;
        };
        match self.selection.tap(key) {
            RowAction::Activated => self.activate(index),
            action => action,
        }
    }

    fn activate(&mut self, index: usize) -> RowAction {
        let Some(&source_index) = self.rows.get(index) else {
            return RowAction::Ignored;
        };
        let record = &self.source[source_index];
        let key = record.key();
        debug!("activating row {} ({:?})", index, key);
        self.last_activated = Some(key);
        if let Some(handler) = self.on_activate.as_mut() {
            handler(record);
        }
        RowAction::Activated
    }

    /// Clear all selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Select every row in the view (Multi mode only).
    /// Returns the number of rows newly selected.
    pub fn select_all(&mut self) -> usize {
        let keys: Vec<T::Key> = self.rows().map(GridRecord::key).collect();
        self.selection.select_all(keys)
    }

    /// Check if a view row is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.key_at(index)
            .is_some_and(|key| self.selection.is_selected(&key))
    }

    /// Get the number of selected rows.
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// The view index of the selected row (Single mode).
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.get_single().and_then(|key| self.index_of(key))
    }

    /// View indices of all selected rows, in view order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.rows()
            .enumerate()
            .filter(|(_, row)| self.selection.is_selected(&row.key()))
            .map(|(i, _)| i)
            .collect()
    }

    /// All selected rows, in view order.
    pub fn selected_rows(&self) -> Vec<&T> {
        self.rows()
            .filter(|row| self.selection.is_selected(&row.key()))
            .collect()
    }

    /// The key of the last activated row.
    pub fn last_activated(&self) -> Option<&T::Key> {
        self.last_activated.as_ref()
    }

    // -------------------------------------------------------------------------
    // Keyboard navigation
    // -------------------------------------------------------------------------

    /// Handle a keyboard command.
    ///
    /// Only single selection navigates; in multi mode every command is
    /// ignored. Movement selects the landing row and moves the current page to
    /// it. [`NavCommand::Activate`] activates the selected row, if any.
    pub fn navigate(&mut self, command: NavCommand) -> RowAction {
        if self.selection.mode() != SelectionMode::Single {
            trace!("ignoring {:?} in multi selection", command);
            return RowAction::Ignored;
        }
        if command == NavCommand::Activate {
            return match self.selected_index() {
                Some(index) => self.activate(index),
                None => RowAction::Ignored,
            };
        }
        let Some(target) = target_index(
            command,
            self.selected_index(),
            self.rows.len(),
            self.pagination.page_size(),
        ) else {
            return RowAction::Ignored;
        };
        let Some(key) = self.key_at(target) else {
            return RowAction::Ignored;
        };
        trace!("{:?} -> row {}", command, target);
        self.selection.select(key);
        self.page = self.pagination.page_of(target);
        RowAction::Selected
    }

    // -------------------------------------------------------------------------
    // Paging
    // -------------------------------------------------------------------------

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    /// The current page (zero-based).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages in the view.
    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.rows.len())
    }

    /// Go to a page, clamped to the pages that exist. Returns the new page.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.page = self.pagination.clamp_page(page, self.rows.len());
        self.page
    }

    /// View index range of the current page.
    pub fn page_range(&self) -> Range<usize> {
        self.pagination.page_range(self.page, self.rows.len())
    }

    /// Rows of the current page.
    pub fn page_rows(&self) -> Vec<&T> {
        self.page_range().filter_map(|i| self.row(i)).collect()
    }

    // -------------------------------------------------------------------------
    // Column visibility
    // -------------------------------------------------------------------------

    /// Get the column visibility.
    pub fn visibility(&self) -> &ColumnVisibility {
        &self.visibility
    }

    /// Show or hide a column by label. Returns whether it is now visible.
    pub fn toggle_column(&mut self, label: &str) -> bool {
        self.visibility.toggle(label)
    }

    /// Replace the visible label set.
    pub fn set_visibility(&mut self, visibility: ColumnVisibility) {
        self.visibility = visibility;
    }

    /// Columns to render, in their configured order.
    pub fn visible_columns(&self) -> Vec<&ColumnDescriptor<T>> {
        self.visibility.visible_columns(&self.columns)
    }

    // -------------------------------------------------------------------------
    // Export
    // -------------------------------------------------------------------------

    /// Export the view as CSV over every column.
    pub fn export_csv(&self) -> String {
        export::serialize(self.rows(), &self.columns)
    }

    /// Export the view as CSV over the visible columns only.
    pub fn export_visible_csv(&self) -> String {
        export::serialize(self.rows(), &self.visible_columns())
    }

    /// Stream the view as CSV over every column into `writer`.
    pub fn write_csv<W: Write>(&self, writer: &mut W) -> Result<(), GridError> {
        export::write_csv(writer, self.rows(), &self.columns)?;
        Ok(())
    }
}

impl<T> fmt::Debug for Grid<T>
where
    T: GridRecord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("columns", &self.columns)
            .field("source_len", &self.source.len())
            .field("rows", &self.rows)
            .field("inputs", &self.inputs)
            .field("sort", &self.sort)
            .field("selection", &self.selection)
            .field("page", &self.page)
            .field("last_activated", &self.last_activated)
            .finish_non_exhaustive()
    }
}
