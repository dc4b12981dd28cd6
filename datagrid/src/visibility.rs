//! Column visibility.
//!
//! Visibility only affects what is rendered. Filtering, sorting and export
//! keep working over the full column list.

use std::collections::HashSet;

use crate::column::ColumnDescriptor;

/// The set of column labels currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnVisibility {
    visible: HashSet<String>,
}

impl ColumnVisibility {
    /// Show every column of `columns`.
    pub fn all<T>(columns: &[ColumnDescriptor<T>]) -> Self {
        Self {
            visible: columns.iter().map(|c| c.label.clone()).collect(),
        }
    }

    /// Show exactly the given labels.
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            visible: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if a label is shown.
    pub fn is_visible(&self, label: &str) -> bool {
        self.visible.contains(label)
    }

    /// Show or hide a label. Returns whether it is now visible.
    pub fn toggle(&mut self, label: &str) -> bool {
        if self.visible.remove(label) {
            false
        } else {
            self.visible.insert(label.to_string());
            true
        }
    }

    /// Show or hide a label explicitly.
    pub fn set_visible(&mut self, label: &str, visible: bool) {
        if visible {
            self.visible.insert(label.to_string());
        } else {
            self.visible.remove(label);
        }
    }

    /// Forget labels that no column in `columns` carries.
    pub fn retain_columns<T>(&mut self, columns: &[ColumnDescriptor<T>]) {
        self.visible
            .retain(|label| columns.iter().any(|c| &c.label == label));
    }

    /// The visible labels.
    pub fn labels(&self) -> &HashSet<String> {
        &self.visible
    }

    /// Columns of `all` whose label is shown, in their original order.
    pub fn visible_columns<'a, T>(
        &self,
        all: &'a [ColumnDescriptor<T>],
    ) -> Vec<&'a ColumnDescriptor<T>> {
        visible_columns(all, &self.visible)
    }
}

/// Columns of `all` whose label is in `visible`, in their original order.
pub fn visible_columns<'a, T>(
    all: &'a [ColumnDescriptor<T>],
    visible: &HashSet<String>,
) -> Vec<&'a ColumnDescriptor<T>> {
    all.iter().filter(|c| visible.contains(&c.label)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<ColumnDescriptor<()>> {
        ["Id", "Name", "Due", "Owner"]
            .into_iter()
            .map(ColumnDescriptor::new)
            .collect()
    }

    fn labels(columns: Vec<&ColumnDescriptor<()>>) -> Vec<&str> {
        columns.into_iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_all_visible_by_default() {
        let columns = columns();
        let visibility = ColumnVisibility::all(&columns);
        assert_eq!(
            labels(visibility.visible_columns(&columns)),
            vec!["Id", "Name", "Due", "Owner"]
        );
    }

    #[test]
    fn test_order_follows_columns_not_labels() {
        let columns = columns();
        let visibility = ColumnVisibility::with_labels(["Owner", "Id"]);
        assert_eq!(labels(visibility.visible_columns(&columns)), vec!["Id", "Owner"]);
    }

    #[test]
    fn test_toggle() {
        let columns = columns();
        let mut visibility = ColumnVisibility::all(&columns);
        assert!(!visibility.toggle("Due"));
        assert_eq!(
            labels(visibility.visible_columns(&columns)),
            vec!["Id", "Name", "Owner"]
        );
        assert!(visibility.toggle("Due"));
        assert_eq!(columns.len(), 4);
    }

    #[test]
    fn test_retain_columns() {
        let columns = columns();
        let mut visibility = ColumnVisibility::with_labels(["Id", "Gone"]);
        visibility.retain_columns(&columns);
        assert!(visibility.is_visible("Id"));
        assert!(!visibility.is_visible("Gone"));
    }
}
