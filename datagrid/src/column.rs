//! Column descriptors.
//!
//! A [`ColumnDescriptor`] declares how one column reads a record: what it
//! sorts by, how it exports to CSV and which filter it offers. Descriptors are
//! built once with the builder methods and never change afterwards.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::value::SortKey;

/// Shared accessor closure reading a value out of a record.
pub type Accessor<T, R> = Arc<dyn Fn(&T) -> R + Send + Sync>;

/// The matching strategy a column offers for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKind {
    /// No filter.
    #[default]
    None,
    /// Case-insensitive substring match.
    Text,
    /// Inclusive numeric range.
    NumberRange,
    /// Inclusive `YYYY-MM-DD` date range.
    DateRange,
    /// Exact match against one of a fixed set of options.
    Select,
}

impl FilterKind {
    /// Returns `true` if this kind takes a min/max pair as input.
    pub fn is_range(&self) -> bool {
        matches!(self, FilterKind::NumberRange | FilterKind::DateRange)
    }
}

/// A table column definition.
///
/// # Example
///
/// ```
/// use datagrid::ColumnDescriptor;
///
/// struct Task {
///     title: String,
///     priority: i64,
/// }
///
/// let title = ColumnDescriptor::new("Title")
///     .sort_by(|t: &Task| Some(t.title.clone().into()))
///     .text_filter(|t: &Task| t.title.clone());
///
/// let priority = ColumnDescriptor::new("Priority")
///     .numeric()
///     .sort_by(|t: &Task| Some(t.priority.into()))
///     .number_filter(|t: &Task| t.priority as f64);
///
/// assert!(title.sortable);
/// assert!(priority.numeric_alignment);
/// ```
pub struct ColumnDescriptor<T> {
    /// Header text, also the column's name for visibility toggling.
    pub label: String,
    /// Render cells right-aligned.
    pub numeric_alignment: bool,
    /// Whether activating the header sorts by this column.
    pub sortable: bool,
    /// Which filter this column offers.
    pub filter_kind: FilterKind,
    /// Options offered by a [`FilterKind::Select`] filter.
    pub options: Vec<String>,
    sort_key: Option<Accessor<T, Option<SortKey>>>,
    csv_value: Option<Accessor<T, Option<String>>>,
    filter_text: Option<Accessor<T, String>>,
    filter_number: Option<Accessor<T, f64>>,
    filter_date: Option<Accessor<T, NaiveDate>>,
    filter_select: Option<Accessor<T, String>>,
}

impl<T> ColumnDescriptor<T> {
    /// Create a column with only a label: not sortable, no filter, exports
    /// empty cells.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            numeric_alignment: false,
            sortable: false,
            filter_kind: FilterKind::None,
            options: Vec::new(),
            sort_key: None,
            csv_value: None,
            filter_text: None,
            filter_number: None,
            filter_date: None,
            filter_select: None,
        }
    }

    /// Right-align this column's cells.
    pub fn numeric(mut self) -> Self {
        self.numeric_alignment = true;
        self
    }

    /// Set the sort key accessor and mark the column sortable.
    pub fn sort_by(mut self, key: impl Fn(&T) -> Option<SortKey> + Send + Sync + 'static) -> Self {
        self.sort_key = Some(Arc::new(key));
        self.sortable = true;
        self
    }

    /// Override whether the column is sortable.
    ///
    /// A column with a sort key can still be rendered unsortable; its key is
    /// then only used as the CSV fallback.
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Set the accessor producing this column's CSV cell.
    pub fn csv_by(mut self, value: impl Fn(&T) -> Option<String> + Send + Sync + 'static) -> Self {
        self.csv_value = Some(Arc::new(value));
        self
    }

    /// Offer a case-insensitive substring filter over `text`.
    pub fn text_filter(mut self, text: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        self.filter_kind = FilterKind::Text;
        self.filter_text = Some(Arc::new(text));
        self
    }

    /// Offer an inclusive numeric range filter over `number`.
    pub fn number_filter(mut self, number: impl Fn(&T) -> f64 + Send + Sync + 'static) -> Self {
        self.filter_kind = FilterKind::NumberRange;
        self.filter_number = Some(Arc::new(number));
        self
    }

    /// Offer an inclusive date range filter over `date`.
    pub fn date_filter(mut self, date: impl Fn(&T) -> NaiveDate + Send + Sync + 'static) -> Self {
        self.filter_kind = FilterKind::DateRange;
        self.filter_date = Some(Arc::new(date));
        self
    }

    /// Offer an exact-match filter over `value` with the given options.
    pub fn select_filter<I, S>(
        mut self,
        options: I,
        value: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter_kind = FilterKind::Select;
        self.options = options.into_iter().map(Into::into).collect();
        self.filter_select = Some(Arc::new(value));
        self
    }

    /// Set the filter kind without touching accessors.
    ///
    /// A kind whose accessor is missing filters nothing.
    pub fn with_filter_kind(mut self, kind: FilterKind) -> Self {
        self.filter_kind = kind;
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Returns `true` if the sort engine can order rows by this column.
    pub fn can_sort(&self) -> bool {
        self.sortable && self.sort_key.is_some()
    }

    /// Extract the sort key of a record.
    pub fn sort_key(&self, record: &T) -> Option<SortKey> {
        self.sort_key.as_ref().and_then(|key| key(record))
    }

    /// Extract the explicit CSV value of a record.
    pub fn csv_value(&self, record: &T) -> Option<String> {
        self.csv_value.as_ref().and_then(|value| value(record))
    }

    /// Resolve the exported cell of a record.
    ///
    /// Resolution order: the CSV accessor, then the stringified sort key, then
    /// the empty string.
    pub fn csv_field(&self, record: &T) -> String {
        if let Some(value) = self.csv_value(record) {
            return value;
        }
        if let Some(key) = self.sort_key(record) {
            return key.to_string();
        }
        String::new()
    }

    pub(crate) fn filter_text(&self) -> Option<&Accessor<T, String>> {
        self.filter_text.as_ref()
    }

    pub(crate) fn filter_number(&self) -> Option<&Accessor<T, f64>> {
        self.filter_number.as_ref()
    }

    pub(crate) fn filter_date(&self) -> Option<&Accessor<T, NaiveDate>> {
        self.filter_date.as_ref()
    }

    pub(crate) fn filter_select(&self) -> Option<&Accessor<T, String>> {
        self.filter_select.as_ref()
    }

    /// Returns `true` if the column's filter kind has its accessor.
    pub fn has_active_filter(&self) -> bool {
        match self.filter_kind {
            FilterKind::None => false,
            FilterKind::Text => self.filter_text.is_some(),
            FilterKind::NumberRange => self.filter_number.is_some(),
            FilterKind::DateRange => self.filter_date.is_some(),
            FilterKind::Select => self.filter_select.is_some(),
        }
    }
}

impl<T> Clone for ColumnDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            numeric_alignment: self.numeric_alignment,
            sortable: self.sortable,
            filter_kind: self.filter_kind,
            options: self.options.clone(),
            sort_key: self.sort_key.clone(),
            csv_value: self.csv_value.clone(),
            filter_text: self.filter_text.clone(),
            filter_number: self.filter_number.clone(),
            filter_date: self.filter_date.clone(),
            filter_select: self.filter_select.clone(),
        }
    }
}

impl<T> AsRef<ColumnDescriptor<T>> for ColumnDescriptor<T> {
    fn as_ref(&self) -> &ColumnDescriptor<T> {
        self
    }
}

impl<T> fmt::Debug for ColumnDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("label", &self.label)
            .field("numeric_alignment", &self.numeric_alignment)
            .field("sortable", &self.sortable)
            .field("filter_kind", &self.filter_kind)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
