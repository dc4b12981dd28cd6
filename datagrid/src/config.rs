//! Grid configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::selection::SelectionMode;
use crate::sort::SortState;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration for a [`Grid`](crate::Grid).
///
/// # Example
///
/// ```
/// use datagrid::{GridConfig, SelectionMode, SortState};
///
/// let config = GridConfig::default()
///     .with_page_size(25)
///     .with_selection_mode(SelectionMode::Multi)
///     .with_initial_sort(SortState::descending(1));
/// assert_eq!(config.page_size, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Rows per page, used for paging and page-wise navigation.
    ///
    /// Default: 10
    pub page_size: usize,

    /// Selection discipline.
    ///
    /// Default: single selection
    pub selection_mode: SelectionMode,

    /// Sort applied before the first header activation.
    ///
    /// Default: none (source order)
    pub initial_sort: Option<SortState>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            selection_mode: SelectionMode::Single,
            initial_sort: None,
        }
    }
}

impl GridConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the selection mode.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Sets the initial sort.
    pub fn with_initial_sort(mut self, sort: SortState) -> Self {
        self.initial_sort = Some(sort);
        self
    }

    /// Check the config against a grid with `column_count` columns.
    pub fn validate(&self, column_count: usize) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if let Some(sort) = self.initial_sort
            && sort.column >= column_count
        {
            return Err(ConfigError::SortColumnOutOfRange {
                index: sort.column,
                columns: column_count,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortDirection;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GridConfig::new().validate(0), Ok(()));
    }

    #[test]
    fn test_zero_page_size() {
        let config = GridConfig::default().with_page_size(0);
        assert_eq!(config.validate(3), Err(ConfigError::ZeroPageSize));
    }

    #[test]
    fn test_sort_column_out_of_range() {
        let config = GridConfig::default().with_initial_sort(SortState::ascending(3));
        assert_eq!(
            config.validate(3),
            Err(ConfigError::SortColumnOutOfRange {
                index: 3,
                columns: 3,
            })
        );
        assert_eq!(config.validate(4), Ok(()));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: GridConfig = serde_json::from_str(
            r#"{"selection_mode":"multi","initial_sort":{"column":1,"direction":"descending"}}"#,
        )
        .unwrap();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.selection_mode, SelectionMode::Multi);
        assert_eq!(
            config.initial_sort,
            Some(SortState {
                column: 1,
                direction: SortDirection::Descending,
            })
        );
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = GridConfig::default().with_page_size(50);
        let json = serde_json::to_string(&config).unwrap();
        let back: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
