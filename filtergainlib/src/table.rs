//! Bordered plain-text tables.
//!
//! This module turns an ordered list of records into a `TextTable` and
//! renders it as:
//!
//! ```text
//! +----------------+------+
//! | Frequency (Hz) | Gain |
//! +----------------+------+
//! | 0.0            | 1.0  |
//! +----------------+------+
//! ```
//!
//! The renderer does no numeric formatting of its own. Cell text is taken
//! as-is from each record, so any rounding has to happen before a value
//! reaches the table.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A row that can be laid out as named columns.
///
/// Every record passed to one table must yield the same column names in the
/// same order; the first record defines the header.
pub trait Record {
    /// Ordered (column name, cell text) pairs.
    fn fields(&self) -> Vec<(String, String)>;
}

impl<K, V> Record for Vec<(K, V)>
where
    K: AsRef<str>,
    V: Display,
{
    fn fields(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(key, value)| (key.as_ref().to_string(), value.to_string()))
            .collect()
    }
}

/// Natural text form of a real number.
///
/// Uses the shortest representation that round-trips, with `.0` appended to
/// integral values so that `10` prints as `10.0`. `NaN` and infinities print
/// as `NaN`, `inf` and `-inf`. Small and large magnitudes stay positional
/// (`1e-5` prints as `0.00001`); there is no switch to exponent notation.
pub fn format_real(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Headers plus already-stringified rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TextTable {
    /// Build a table from records, taking column names from the first one.
    ///
    /// Cells of later records are matched to columns by position.
    pub fn from_records<R: Record>(records: &[R]) -> Self {
        let mut rows = records.iter().map(R::fields);
        let Some(first) = rows.next() else {
            return TextTable::default();
        };

        let (headers, first_cells): (Vec<String>, Vec<String>) = first.into_iter().unzip();
        let mut table_rows = vec![first_cells];
        table_rows.extend(rows.map(|fields| fields.into_iter().map(|(_, cell)| cell).collect()));

        TextTable {
            headers,
            rows: table_rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Width of each column: the longest of its header and cells, in chars.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    /// Render the bordered table. An empty table renders as an empty string.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let widths = self.column_widths();
        let separator = separator_line(&widths);

        let mut out = String::new();
        out.push_str(&separator);
        out.push_str(&format_row(&self.headers, &widths));
        out.push_str(&separator);
        for row in &self.rows {
            out.push_str(&format_row(row, &widths));
        }
        out.push_str(&separator);
        out
    }
}

impl Display for TextTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Render records as a bordered table.
pub fn render<R: Record>(records: &[R]) -> String {
    TextTable::from_records(records).render()
}

/// `+------+---+` with each column padded by one space on both sides.
fn separator_line(widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+\n", segments.join("+"))
}

/// `| a    | b |` with every cell left-justified to its column width.
fn format_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, &width)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            format!("{:<width$}", cell, width = width)
        })
        .collect();
    format!("| {} |\n", padded.join(" | "))
}
