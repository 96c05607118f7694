//! A minimal tabular frame for worksheet reads and writes.

use indexmap::IndexMap;
use serde_json::Value;

/// Ordered rows sharing an ordered set of column names.
///
/// Columns are optional; a frame built from raw cell values without a header
/// row is positional and labels its columns by index when converted to
/// records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFrame {
    columns: Option<Vec<String>>,
    rows: Vec<Vec<Value>>,
}

impl DataFrame {
    pub fn new(columns: Option<Vec<String>>, rows: Vec<Vec<Value>>) -> Self {
        DataFrame { columns, rows }
    }

    /// Positional frame with no header.
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Self {
        DataFrame { columns: None, rows }
    }

    /// Build a frame from ordered records. Column order follows first
    /// appearance across the records; missing cells become null.
    pub fn from_records(records: Vec<IndexMap<String, Value>>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = records
            .into_iter()
            .map(|mut record| {
                columns
                    .iter()
                    .map(|col| record.swap_remove(col.as_str()).unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        DataFrame {
            columns: Some(columns),
            rows,
        }
    }

    /// Build a frame from raw cell rows using the row at `header_row`
    /// (0-based) as column names. Rows at or before `header_row` are
    /// discarded, including any above it. An out-of-bounds `header_row`
    /// produces a positional frame over all rows.
    pub fn with_header_row(mut values: Vec<Vec<Value>>, header_row: usize) -> Self {
        if header_row >= values.len() {
            return Self::from_rows(values);
        }

        let rows = values.split_off(header_row + 1);
        let header = match values.pop() {
            Some(row) => row,
            None => return Self::from_rows(rows),
        };

        let columns = header.into_iter().map(cell_to_string).collect();
        DataFrame {
            columns: Some(columns),
            rows,
        }
    }

    pub fn columns(&self) -> Option<&[String]> {
        self.columns.as_deref()
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        match &self.columns {
            Some(cols) => cols.len(),
            None => self.rows.iter().map(Vec::len).max().unwrap_or(0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_none()
    }

    /// Rows as ordered column-name → value mappings. Positional frames label
    /// columns "0", "1", …; short rows pad with null.
    pub fn records(&self) -> Vec<IndexMap<String, Value>> {
        let labels = self.column_labels();
        self.rows
            .iter()
            .map(|row| {
                labels
                    .iter()
                    .enumerate()
                    .map(|(i, label)| {
                        (label.clone(), row.get(i).cloned().unwrap_or(Value::Null))
                    })
                    .collect()
            })
            .collect()
    }

    fn column_labels(&self) -> Vec<String> {
        match &self.columns {
            Some(cols) => cols.clone(),
            None => (0..self.num_columns()).map(|i| i.to_string()).collect(),
        }
    }

    /// Cell grid for writing back to a worksheet: the header row (if any)
    /// followed by the data rows, with nulls written as empty strings.
    pub(crate) fn to_values(&self) -> Vec<Vec<Value>> {
        let mut values = Vec::with_capacity(self.rows.len() + 1);
        if let Some(cols) = &self.columns {
            values.push(cols.iter().map(|c| Value::String(c.clone())).collect());
        }
        for row in &self.rows {
            values.push(
                row.iter()
                    .map(|cell| match cell {
                        Value::Null => Value::String(String::new()),
                        other => other.clone(),
                    })
                    .collect(),
            );
        }
        values
    }
}

/// Render a header cell as a column name.
pub(crate) fn cell_to_string(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Parse a formatted cell back into a typed value: integers, floats and
/// TRUE/FALSE literals. Everything else, including empty strings, stays
/// as-is.
pub(crate) fn infer_cell(cell: Value) -> Value {
    let Value::String(s) = cell else { return cell };
    if s.is_empty() {
        return Value::String(s);
    }
    if let Ok(i) = s.parse::<i64>() {
        return Value::from(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        if f.is_finite() {
            return Value::from(f);
        }
    }
    match s.as_str() {
        "TRUE" => Value::Bool(true),
        "FALSE" => Value::Bool(false),
        _ => Value::String(s),
    }
}
