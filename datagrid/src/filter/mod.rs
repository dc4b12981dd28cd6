//! Per-column filtering.
//!
//! Raw inputs live in [`FilterInputs`]; [`apply_filters`] turns them into
//! predicates according to each column's [`FilterKind`](crate::FilterKind).

mod engine;
mod input;

pub use engine::{apply_filters, narrow, parse_number};
pub use input::{FilterInput, FilterInputs};
