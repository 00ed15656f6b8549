//! Spreadsheet decoding for the extraction pipeline.

use serde_json::{json, Map, Value};

use formpilot_protocols::error::ExtractError;

/// Decode CSV content into `{columns, row_count, data}` JSON.
///
/// Excel formats are reported as unsupported; only CSV is decoded.
pub fn spreadsheet_to_json(bytes: &[u8], filename: &str) -> Result<Value, ExtractError> {
    let lower = filename.to_lowercase();
    if lower.ends_with(".xlsx") || lower.ends_with(".xls") {
        return Err(ExtractError::Spreadsheet(filename.to_string()));
    }

    let mut reader = csv::Reader::from_reader(bytes);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| ExtractError::Decode(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut data = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ExtractError::Decode(e.to_string()))?;
        let mut row = Map::new();
        for (column, value) in columns.iter().zip(record.iter()) {
            row.insert(column.clone(), Value::String(value.to_string()));
        }
        data.push(Value::Object(row));
    }

    Ok(json!({
        "columns": columns,
        "row_count": data.len(),
        "data": data,
    }))
}
