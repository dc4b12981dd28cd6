//! Render-agnostic data grid engine
//!
//! Turns an in-memory collection plus declarative column descriptors into a
//! filtered, sorted view with selection, keyboard navigation, paging, column
//! visibility and CSV export. Rendering, text inputs and clipboard/file
//! access belong to the host; the grid only consumes raw inputs and exposes
//! derived state.

pub mod column;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod grid;
pub mod navigation;
pub mod pagination;
pub mod selection;
pub mod sort;
pub mod value;
pub mod view;
pub mod visibility;

pub use column::{ColumnDescriptor, FilterKind};
pub use config::GridConfig;
pub use error::{ConfigError, ExportError, GridError};
pub use filter::{FilterInput, FilterInputs};
pub use grid::{Grid, GridRecord};
pub use navigation::NavCommand;
pub use pagination::Pagination;
pub use selection::{RowAction, Selection, SelectionMode};
pub use sort::{SortDirection, SortState};
pub use value::SortKey;
pub use visibility::ColumnVisibility;

pub mod prelude {
    pub use crate::column::{ColumnDescriptor, FilterKind};
    pub use crate::config::GridConfig;
    pub use crate::error::GridError;
    pub use crate::grid::{Grid, GridRecord};
    pub use crate::navigation::NavCommand;
    pub use crate::selection::{RowAction, SelectionMode};
    pub use crate::sort::{SortDirection, SortState};
    pub use crate::value::SortKey;
}
