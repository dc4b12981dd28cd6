//! Raw filter input state.

use std::collections::HashMap;

/// The raw input one column's filter currently holds.
///
/// Inputs are kept exactly as typed; parsing happens when filters are
/// applied, so a half-typed bound simply filters nothing yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterInput {
    /// Text query or selected option.
    Value(String),
    /// Min/max bounds of a number or date range.
    Range {
        min: Option<String>,
        max: Option<String>,
    },
}

impl FilterInput {
    /// Returns `true` if this input would filter nothing regardless of kind.
    pub fn is_blank(&self) -> bool {
        match self {
            FilterInput::Value(value) => value.trim().is_empty(),
            FilterInput::Range { min, max } => {
                min.as_deref().is_none_or(|s| s.trim().is_empty())
                    && max.as_deref().is_none_or(|s| s.trim().is_empty())
            }
        }
    }
}

/// Filter inputs for every column, keyed by column index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInputs {
    inputs: HashMap<usize, FilterInput>,
}

impl FilterInputs {
    /// Create an empty input set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the input of a column.
    pub fn get(&self, column: usize) -> Option<&FilterInput> {
        self.inputs.get(&column)
    }

    /// Set the text query or selected option of a column.
    pub fn set_value(&mut self, column: usize, value: impl Into<String>) {
        self.inputs.insert(column, FilterInput::Value(value.into()));
    }

    /// Set both bounds of a column's range.
    pub fn set_range(&mut self, column: usize, min: Option<String>, max: Option<String>) {
        self.inputs.insert(column, FilterInput::Range { min, max });
    }

    /// Set the lower bound of a column's range, keeping the upper bound.
    pub fn set_min(&mut self, column: usize, min: Option<String>) {
        let max = self.range_bound(column, |_, max| max);
        self.set_range(column, min, max);
    }

    /// Set the upper bound of a column's range, keeping the lower bound.
    pub fn set_max(&mut self, column: usize, max: Option<String>) {
        let min = self.range_bound(column, |min, _| min);
        self.set_range(column, min, max);
    }

    fn range_bound(
        &self,
        column: usize,
        pick: impl FnOnce(Option<String>, Option<String>) -> Option<String>,
    ) -> Option<String> {
        match self.inputs.get(&column) {
            Some(FilterInput::Range { min, max }) => pick(min.clone(), max.clone()),
            _ => None,
        }
    }

    /// Clear one column's input. Returns `true` if there was one.
    pub fn clear(&mut self, column: usize) -> bool {
        self.inputs.remove(&column).is_some()
    }

    /// Clear every input.
    pub fn reset(&mut self) {
        self.inputs.clear();
    }

    /// Move every input to the column `relocate` assigns it.
    ///
    /// Inputs mapped to `None` are dropped.
    pub fn remap(&mut self, mut relocate: impl FnMut(usize) -> Option<usize>) {
        self.inputs = std::mem::take(&mut self.inputs)
            .into_iter()
            .filter_map(|(column, input)| relocate(column).map(|to| (to, input)))
            .collect();
    }

    /// Returns `true` if no column holds a non-blank input.
    pub fn is_empty(&self) -> bool {
        self.inputs.values().all(FilterInput::is_blank)
    }
}
