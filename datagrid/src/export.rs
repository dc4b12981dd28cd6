//! CSV export.
//!
//! Fields containing a comma, a double quote or a line break are wrapped in
//! double quotes with internal quotes doubled. Every line, the last one
//! included, ends with `\n`.

use std::borrow::Cow;
use std::io::Write;

use log::debug;

use crate::column::ColumnDescriptor;
use crate::error::ExportError;

/// Escape one CSV field.
pub fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn push_line<'a>(out: &mut String, fields: impl IntoIterator<Item = Cow<'a, str>>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&field);
    }
    out.push('\n');
}

fn header_line<T, C>(columns: &[C]) -> String
where
    C: AsRef<ColumnDescriptor<T>>,
{
    let mut line = String::new();
    push_line(
        &mut line,
        columns.iter().map(|c| escape_field(&c.as_ref().label)),
    );
    line
}

fn record_line<T, C>(record: &T, columns: &[C]) -> String
where
    C: AsRef<ColumnDescriptor<T>>,
{
    let fields: Vec<String> = columns
        .iter()
        .map(|c| c.as_ref().csv_field(record))
        .collect();
    let mut line = String::new();
    push_line(&mut line, fields.iter().map(|f| escape_field(f)));
    line
}

/// Serialize `rows` under `columns` to CSV text.
///
/// The first line holds the column labels; every record produces one line
/// with its fields resolved through [`ColumnDescriptor::csv_field`].
pub fn serialize<'a, T, C>(rows: impl IntoIterator<Item = &'a T>, columns: &[C]) -> String
where
    T: 'a,
    C: AsRef<ColumnDescriptor<T>>,
{
    let mut out = header_line::<T, C>(columns);
    let mut count = 0usize;
    for record in rows {
        out.push_str(&record_line::<T, C>(record, columns));
        count += 1;
    }
    debug!("serialized {} rows x {} columns", count, columns.len());
    out
}

/// Stream `rows` under `columns` as CSV into `writer`.
pub fn write_csv<'a, T, C, W>(
    writer: &mut W,
    rows: impl IntoIterator<Item = &'a T>,
    columns: &[C],
) -> Result<(), ExportError>
where
    T: 'a,
    C: AsRef<ColumnDescriptor<T>>,
    W: Write,
{
    writer.write_all(header_line::<T, C>(columns).as_bytes())?;
    for record in rows {
        writer.write_all(record_line::<T, C>(record, columns).as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}
