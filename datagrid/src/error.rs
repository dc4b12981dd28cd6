//! Error types

/// Invalid grid configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Paging needs at least one row per page.
    #[error("page size must be at least 1")]
    ZeroPageSize,

    /// The initial sort names a column that does not exist.
    #[error("sort column {index} out of range ({columns} columns)")]
    SortColumnOutOfRange { index: usize, columns: usize },
}

/// Failure writing exported text to a sink.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The underlying writer failed.
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Any error the grid reports.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
