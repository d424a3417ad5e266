use std::io::Read;
use std::path::Path;

use crate::ExportError;

/// One row of the raw export table. `value` stays opaque here; the
/// parser decodes it per `key` kind.
#[derive(Clone, Debug, PartialEq)]
pub struct RawExportRow {
    pub key: String,
    pub time: i64,
    pub value: String,
}

const KEY_COLUMN: &str = "Key";
const TIME_COLUMN: &str = "Time";
const VALUE_COLUMN: &str = "Value";

pub fn read_export_path(path: &Path) -> Result<Vec<RawExportRow>, ExportError> {
    let reader = csv::Reader::from_path(path)?;
    read_rows(reader)
}

pub fn read_export<R: Read>(reader: R) -> Result<Vec<RawExportRow>, ExportError> {
    read_rows(csv::Reader::from_reader(reader))
}

fn read_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<RawExportRow>, ExportError> {
    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h == name);

    let (Some(key_idx), Some(time_idx), Some(value_idx)) = (
        column(KEY_COLUMN),
        column(TIME_COLUMN),
        column(VALUE_COLUMN),
    ) else {
        return Err(ExportError::MissingColumns);
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let key = record.get(key_idx).unwrap_or_default();
        let time = record.get(time_idx).unwrap_or_default();
        let value = record.get(value_idx).unwrap_or_default();

        rows.push(RawExportRow {
            key: key.to_owned(),
            time: coerce_timestamp(time)?,
            value: value.to_owned(),
        });
    }

    Ok(rows)
}

/// `Time` cells are epoch seconds but some exports write them as
/// floats; both are accepted.
fn coerce_timestamp(cell: &str) -> Result<i64, ExportError> {
    if let Ok(unix) = cell.trim().parse::<i64>() {
        return Ok(unix);
    }

    cell.trim()
        .parse::<f64>()
        .map(|unix| unix as i64)
        .map_err(|_| ExportError::InvalidTimestamp(cell.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_and_ignores_extra_columns() {
        let csv = "Sid,Key,Time,Value,UpdateTime\n\
                   1,sleep,1740000000,\"{}\",1740000001\n\
                   1,steps,1740000100,\"{}\",1740000101\n";
        let rows = read_export(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, "sleep");
        assert_eq!(rows[0].time, 1740000000);
        assert_eq!(rows[1].key, "steps");
    }

    #[test]
    fn coerces_float_timestamps() {
        let csv = "Key,Time,Value\nheart_rate,1740000000.0,\"{}\"\n";
        let rows = read_export(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].time, 1740000000);
    }

    #[test]
    fn missing_value_column_is_rejected() {
        let csv = "Key,Time\nsleep,1740000000\n";
        let err = read_export(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ExportError::MissingColumns));
    }

    #[test]
    fn garbage_timestamp_is_rejected() {
        let csv = "Key,Time,Value\nsleep,yesterday,\"{}\"\n";
        let err = read_export(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ExportError::InvalidTimestamp(_)));
    }
}
