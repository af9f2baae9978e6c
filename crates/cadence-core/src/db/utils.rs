//! Row decoding helpers shared by the query modules.

use std::{fmt::Display, str::FromStr};

use jiff::Timestamp;
use rusqlite::{types::Type, Row};

/// Reads a text column and parses it, reporting parse failures as a
/// conversion error on that column.
pub(crate) fn parse_column<T>(row: &Row, index: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw: String = row.get(index)?;
    raw.parse::<T>().map_err(|e| conversion_error(index, &raw, e))
}

/// Like [`parse_column`] for nullable columns.
pub(crate) fn parse_optional_column<T>(row: &Row, index: usize) -> rusqlite::Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = row.get(index)?;
    raw.map(|raw| raw.parse::<T>().map_err(|e| conversion_error(index, &raw, e)))
        .transpose()
}

/// Reads an RFC 3339 timestamp column.
pub(crate) fn timestamp_column(row: &Row, index: usize) -> rusqlite::Result<Timestamp> {
    parse_column(row, index)
}

/// Reads an INTEGER id column.
pub(crate) fn id_column(row: &Row, index: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(index)? as u64)
}

fn conversion_error(index: usize, raw: &str, err: impl Display) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        index,
        Type::Text,
        format!("Invalid value '{raw}': {err}").into(),
    )
}
