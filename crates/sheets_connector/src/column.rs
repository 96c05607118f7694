//! Column-letter formatting for A1 notation.

use crate::errors::{Result, SheetsError};

/// Convert a 1-indexed column number into its spreadsheet letter label.
///
/// This is bijective base-26, not plain base-26: there is no zero digit, so
/// 26 maps to "Z" and 27 rolls over to "AA" (1→"A", 52→"AZ", 53→"BA").
pub fn to_sheet_column(n: i64) -> Result<String> {
    if n < 1 {
        return Err(SheetsError::InvalidColumnNumber(n));
    }

    let mut n = n;
    let mut label = String::new();
    while n > 0 {
        n -= 1;
        label.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }

    Ok(label)
}

/// Build the A1 range covering a header row of `ncols` columns ("A1:C1" for
/// three columns).
pub fn header_range(ncols: usize) -> Result<String> {
    let last = to_sheet_column(ncols as i64)?;
    Ok(format!("A1:{last}1"))
}
