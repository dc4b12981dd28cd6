//! Orderable values extracted from records by column accessors.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

/// Date format used for parsing filter bounds and rendering date keys.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A value a column sorts by.
///
/// Each variant orders by the natural ordering of its semantic type:
/// numbers numerically, text by ordinal (byte-wise) comparison, dates
/// chronologically. Integers and floats compare with each other numerically.
///
/// # Example
///
/// ```
/// use datagrid::SortKey;
///
/// let priority = SortKey::from(3i64);
/// let name = SortKey::from("Alpha");
/// assert!(SortKey::from(2.5) < priority);
/// assert_eq!(name.to_string(), "Alpha");
/// ```
#[derive(Debug, Clone)]
pub enum SortKey {
    /// Whole number.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Text, compared ordinally.
    Text(String),
    /// Calendar date.
    Date(NaiveDate),
}

impl SortKey {
    /// Returns the type name of this key.
    pub fn type_name(&self) -> &'static str {
        match self {
            SortKey::Int(_) => "int",
            SortKey::Float(_) => "float",
            SortKey::Text(_) => "text",
            SortKey::Date(_) => "date",
        }
    }

    /// Rank used to order keys of unrelated types against each other.
    fn rank(&self) -> u8 {
        match self {
            SortKey::Int(_) | SortKey::Float(_) => 0,
            SortKey::Date(_) => 1,
            SortKey::Text(_) => 2,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Int(a), SortKey::Int(b)) => a.cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => {
                unsigned_zero(*a).total_cmp(&unsigned_zero(*b))
            }
            (SortKey::Int(a), SortKey::Float(b)) => cmp_int_float(*a, *b),
            (SortKey::Float(a), SortKey::Int(b)) => cmp_int_float(*b, *a).reverse(),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// 2^63, the first float above `i64::MAX`.
const I64_END: f64 = 9_223_372_036_854_775_808.0;

/// Folds `-0.0` into `0.0` so both compare equal to `Int(0)`.
fn unsigned_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

/// Compares an integer with a float without rounding the integer.
///
/// Agrees with `f64::total_cmp` on where NaN goes: positive NaN above
/// everything, negative NaN below.
fn cmp_int_float(int: i64, float: f64) -> Ordering {
    if float.is_nan() {
        return if float.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if float >= I64_END {
        return Ordering::Less;
    }
    if float < -I64_END {
        return Ordering::Greater;
    }
    let whole = float.trunc();
    int.cmp(&(whole as i64))
        .then_with(|| 0.0f64.total_cmp(&unsigned_zero(float - whole)))
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Int(v) => write!(f, "{}", v),
            SortKey::Float(v) => write!(f, "{}", v),
            SortKey::Text(v) => f.write_str(v),
            SortKey::Date(v) => write!(f, "{}", v.format(DATE_FORMAT)),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<i32> for SortKey {
    fn from(v: i32) -> Self {
        SortKey::Int(v.into())
    }
}

impl From<i64> for SortKey {
    fn from(v: i64) -> Self {
        SortKey::Int(v)
    }
}

impl From<u32> for SortKey {
    fn from(v: u32) -> Self {
        SortKey::Int(v.into())
    }
}

impl From<f64> for SortKey {
    fn from(v: f64) -> Self {
        SortKey::Float(v)
    }
}

impl From<String> for SortKey {
    fn from(v: String) -> Self {
        SortKey::Text(v)
    }
}

impl From<&str> for SortKey {
    fn from(v: &str) -> Self {
        SortKey::Text(v.to_string())
    }
}

impl From<NaiveDate> for SortKey {
    fn from(v: NaiveDate) -> Self {
        SortKey::Date(v)
    }
}

/// Parses a `YYYY-MM-DD` string, returning `None` for anything malformed.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}
