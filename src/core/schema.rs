//! Header validation and typed row parsing for the housing CSV layout.

use crate::domain::model::{House, HouseDocument, EXPECTED_HEADERS};
use crate::utils::error::{EtlError, Result};
use csv::StringRecord;

/// Fails with [`EtlError::Schema`] unless `header` is exactly [`EXPECTED_HEADERS`].
///
/// Case- and order-sensitive; cells are compared as the CSV reader returned them.
pub fn validate_header(header: &StringRecord) -> Result<()> {
    if header.iter().eq(EXPECTED_HEADERS.iter().copied()) {
        return Ok(());
    }

    Err(EtlError::Schema {
        expected: EXPECTED_HEADERS.iter().map(|h| h.to_string()).collect(),
        found: header.iter().map(str::to_string).collect(),
    })
}

/// Converts one data row into a [`House`].
///
/// `value` goes through `f64` and is truncated toward zero, so `452600.9`
/// becomes `452600`. `income` keeps its float value. The remaining columns
/// are base-10 integers.
pub fn parse_row(row: &StringRecord) -> Result<House> {
    let line = line_of(row);

    if row.len() != EXPECTED_HEADERS.len() {
        return Err(EtlError::RowLength {
            line,
            expected: EXPECTED_HEADERS.len(),
            found: row.len(),
        });
    }

    Ok(House {
        value: parse_truncated(row, 0, line)?,
        income: parse_float(row, 1, line)?,
        age: parse_integer(row, 2, line)?,
        rooms: parse_integer(row, 3, line)?,
        bedrooms: parse_integer(row, 4, line)?,
        population: parse_integer(row, 5, line)?,
        households: parse_integer(row, 6, line)?,
    })
}

/// Parses every row in order and wraps the result. Stops at the first bad row.
pub fn assemble(rows: &[StringRecord]) -> Result<HouseDocument> {
    let houses = rows.iter().map(parse_row).collect::<Result<Vec<_>>>()?;
    Ok(HouseDocument::new(houses))
}

fn line_of(row: &StringRecord) -> u64 {
    row.position().map(|p| p.line()).unwrap_or(0)
}

fn malformed(row: &StringRecord, index: usize, line: u64, expected: &'static str) -> EtlError {
    EtlError::MalformedField {
        line,
        column: EXPECTED_HEADERS[index],
        value: row[index].to_string(),
        expected,
    }
}

fn parse_float(row: &StringRecord, index: usize, line: u64) -> Result<f64> {
    match row[index].parse::<f64>() {
        // NaN and infinities have no JSON number form.
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(malformed(row, index, line, "number")),
    }
}

fn parse_truncated(row: &StringRecord, index: usize, line: u64) -> Result<i64> {
    let truncated = parse_float(row, index, line)?.trunc();

    // i64::MAX as f64 rounds up to 2^63, hence the half-open range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(malformed(row, index, line, "number"));
    }

    Ok(truncated as i64)
}

fn parse_integer(row: &StringRecord, index: usize, line: u64) -> Result<i64> {
    row[index]
        .parse::<i64>()
        .map_err(|_| malformed(row, index, line, "integer"))
}
