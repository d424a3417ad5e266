use thiserror::Error;

/// Rejection reasons for a raw export. Any of these means the whole
/// file is unsupported; the caller must not attempt per-row salvage.
#[derive(Debug, Error)]
#[error("{self:?}")]
pub enum ExportError {
    /// The table lacks one of the `Key`/`Time`/`Value` columns.
    MissingColumns,
    /// A `Time` cell could not be coerced to a UNIX timestamp.
    InvalidTimestamp(String),
    /// A row timestamp falls outside the representable datetime range.
    TimestampOutOfRange(i64),
    /// The export contains no `"sleep"`-kind rows at all.
    NoSleepRows,
    /// No sleep row matches the supported schema signature
    /// (`version == 2`, `has_stage == true`, an `items` array).
    UnsupportedSchema,
    Read(#[from] csv::Error),
}
