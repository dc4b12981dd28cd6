//! Filter evaluation.

use chrono::NaiveDate;
use log::trace;

use crate::column::{ColumnDescriptor, FilterKind};
use crate::value::parse_date;

use super::input::{FilterInput, FilterInputs};

/// Apply every column's filter to `source`.
///
/// Returns the indices of the matching records in source order. Columns are
/// applied one after another, each narrowing what the previous one kept.
/// Inputs that cannot be interpreted (unparsable bounds, a missing accessor,
/// a range typed into a text column) filter nothing.
pub fn apply_filters<T>(
    source: &[T],
    columns: &[ColumnDescriptor<T>],
    inputs: &FilterInputs,
) -> Vec<usize> {
    let mut rows: Vec<usize> = (0..source.len()).collect();
    for (index, column) in columns.iter().enumerate() {
        let Some(input) = inputs.get(index) else {
            continue;
        };
        let before = rows.len();
        narrow(source, &mut rows, column, input);
        if rows.len() != before {
            trace!(
                "filter '{}' narrowed {} -> {} rows",
                column.label,
                before,
                rows.len()
            );
        }
    }
    rows
}

/// Narrow `rows` by one column's filter.
pub fn narrow<T>(
    source: &[T],
    rows: &mut Vec<usize>,
    column: &ColumnDescriptor<T>,
    input: &FilterInput,
) {
    match (column.filter_kind, input) {
        (FilterKind::Text, FilterInput::Value(raw)) => {
            let Some(text) = column.filter_text() else {
                return;
            };
            let needle = raw.trim().to_lowercase();
            if needle.is_empty() {
                return;
            }
            rows.retain(|&i| text(&source[i]).to_lowercase().contains(&needle));
        }
        (FilterKind::Select, FilterInput::Value(raw)) => {
            let Some(select) = column.filter_select() else {
                return;
            };
            if raw.trim().is_empty() {
                return;
            }
            rows.retain(|&i| select(&source[i]) == *raw);
        }
        (FilterKind::NumberRange, FilterInput::Range { min, max }) => {
            let Some(number) = column.filter_number() else {
                return;
            };
            let min = min.as_deref().and_then(parse_number);
            let max = max.as_deref().and_then(parse_number);
            if min.is_none() && max.is_none() {
                return;
            }
            rows.retain(|&i| in_range(number(&source[i]), min, max));
        }
        (FilterKind::DateRange, FilterInput::Range { min, max }) => {
            let Some(date) = column.filter_date() else {
                return;
            };
            let min = min.as_deref().and_then(parse_date);
            let max = max.as_deref().and_then(parse_date);
            if min.is_none() && max.is_none() {
                return;
            }
            rows.retain(|&i| in_range::<NaiveDate>(date(&source[i]), min, max));
        }
        _ => {}
    }
}

/// Parse a numeric bound. Blank, malformed and NaN input is unset.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

fn in_range<V: PartialOrd>(value: V, min: Option<V>, max: Option<V>) -> bool {
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        score: f64,
        day: NaiveDate,
        tier: &'static str,
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Alpha",
                score: 1.0,
                day: day(1),
                tier: "gold",
            },
            Row {
                name: "Beta",
                score: 2.5,
                day: day(10),
                tier: "silver",
            },
            Row {
                name: "Gamma",
                score: 4.0,
                day: day(20),
                tier: "gold",
            },
        ]
    }

    fn columns() -> Vec<ColumnDescriptor<Row>> {
        vec![
            ColumnDescriptor::new("Name").text_filter(|r: &Row| r.name.to_string()),
            ColumnDescriptor::new("Score").number_filter(|r: &Row| r.score),
            ColumnDescriptor::new("Day").date_filter(|r: &Row| r.day),
            ColumnDescriptor::new("Tier")
                .select_filter(["gold", "silver"], |r: &Row| r.tier.to_string()),
        ]
    }

    #[test]
    fn test_no_inputs_keeps_everything() {
        assert_eq!(
            apply_filters(&rows(), &columns(), &FilterInputs::new()),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_text_filter_trims_and_ignores_case() {
        let mut inputs = FilterInputs::new();
        inputs.set_value(0, "  MM ");
        assert_eq!(apply_filters(&rows(), &columns(), &inputs), vec![2]);
    }

    #[test]
    fn test_number_range_bounds_are_inclusive() {
        let mut inputs = FilterInputs::new();
        inputs.set_range(1, Some("2.5".into()), Some("4".into()));
        assert_eq!(apply_filters(&rows(), &columns(), &inputs), vec![1, 2]);
    }

    #[test]
    fn test_unparsable_bound_is_unset() {
        let mut inputs = FilterInputs::new();
        inputs.set_range(1, Some("abc".into()), Some("2.5".into()));
        assert_eq!(apply_filters(&rows(), &columns(), &inputs), vec![0, 1]);

        inputs.set_range(1, Some("abc".into()), Some("NaN".into()));
        assert_eq!(apply_filters(&rows(), &columns(), &inputs), vec![0, 1, 2]);
    }

    #[test]
    fn test_date_range() {
        let mut inputs = FilterInputs::new();
        inputs.set_range(2, Some("2024-05-10".into()), None);
        assert_eq!(apply_filters(&rows(), &columns(), &inputs), vec![1, 2]);

        inputs.set_range(2, Some("2024-13-01".into()), Some("2024-05-10".into()));
        assert_eq!(apply_filters(&rows(), &columns(), &inputs), vec![0, 1]);
    }

    #[test]
    fn test_select_is_exact() {
        let mut inputs = FilterInputs::new();
        inputs.set_value(3, "gold");
        assert_eq!(apply_filters(&rows(), &columns(), &inputs), vec![0, 2]);

        inputs.set_value(3, "gol");
        assert!(apply_filters(&rows(), &columns(), &inputs).is_empty());
    }

    #[test]
    fn test_blank_select_matches_everything() {
        let mut inputs = FilterInputs::new();
        inputs.set_value(3, "");
        assert_eq!(apply_filters(&rows(), &columns(), &inputs), vec![0, 1, 2]);

        inputs.set_value(3, "  ");
        assert!(inputs.get(3).is_some_and(FilterInput::is_blank));
        assert_eq!(apply_filters(&rows(), &columns(), &inputs), vec![0, 1, 2]);
    }

    #[test]
    fn test_mismatched_input_shape_is_inert() {
        let mut inputs = FilterInputs::new();
        inputs.set_range(0, Some("a".into()), None);
        inputs.set_value(1, "2");
        assert_eq!(apply_filters(&rows(), &columns(), &inputs), vec![0, 1, 2]);
    }

    #[test]
    fn test_missing_accessor_is_inert() {
        let columns =
            vec![ColumnDescriptor::<Row>::new("Name").with_filter_kind(FilterKind::Text)];
        let mut inputs = FilterInputs::new();
        inputs.set_value(0, "zzz");
        assert_eq!(apply_filters(&rows(), &columns, &inputs), vec![0, 1, 2]);
    }

    #[test]
    fn test_filters_compose_sequentially() {
        let mut inputs = FilterInputs::new();
        inputs.set_value(3, "gold");
        inputs.set_range(1, Some("2".into()), None);
        assert_eq!(apply_filters(&rows(), &columns(), &inputs), vec![2]);
    }
}
