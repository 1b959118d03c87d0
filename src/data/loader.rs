use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;

use super::model::{Dataset, Record, Value};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse a JSON dataset.  Dispatch by top-level shape.
///
/// Supported orientations:
/// * array of flat objects – records orientation, the default
///   `df.to_json(orient='records')`
/// * object with `columns` and `data` – split ("dataframe") orientation,
///   each row zipped positionally against the column list
pub fn load_json_str(text: &str) -> Result<Dataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let dataset = match &root {
        JsonValue::Array(rows) => records_from_json(rows)?,
        JsonValue::Object(map) if map.contains_key("columns") && map.contains_key("data") => {
            columnar_from_json(&root)?
        }
        _ => bail!("Expected a top-level array of records or a columns/data object"),
    };

    log::info!(
        "parsed JSON dataset: {} records, {} columns",
        dataset.len(),
        dataset.columns().len()
    );
    Ok(dataset)
}

/// Parse delimited text with a header row.  Cell types are guessed per
/// value: integer, then float, then bool; empty cells become null and
/// anything else stays a string.
pub fn load_csv_str(text: &str) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;

        let mut record = Record::new();
        for (col_idx, header) in headers.iter().enumerate() {
            let cell = row.get(col_idx).unwrap_or("");
            record.insert(header.clone(), guess_value(cell));
        }
        records.push(record);
    }

    let dataset = Dataset::from_records(records);
    log::info!(
        "parsed CSV dataset: {} records, {} columns",
        dataset.len(),
        headers.len()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Records orientation
// ---------------------------------------------------------------------------

fn records_from_json(rows: &[JsonValue]) -> Result<Dataset> {
    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let record: Record = obj
            .iter()
            .map(|(column, value)| (column.clone(), json_to_value(value)))
            .collect();
        records.push(record);
    }

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Split orientation
// ---------------------------------------------------------------------------

/// Split-orientation frame: `{"columns": [...], "index": [...], "data":
/// [[...], ...]}`.  The `index` field is accepted and ignored.  Rows
/// shorter than the column list pad with nulls; extra cells are dropped.
fn columnar_from_json(root: &JsonValue) -> Result<Dataset> {
    let columns: Vec<String> = root
        .get("columns")
        .and_then(|c| c.as_array())
        .context("'columns' must be an array")?
        .iter()
        .enumerate()
        .map(|(i, col)| {
            col.as_str()
                .map(str::to_string)
                .with_context(|| format!("columns[{i}] is not a string"))
        })
        .collect::<Result<_>>()?;

    let data = root
        .get("data")
        .and_then(|d| d.as_array())
        .context("'data' must be an array of rows")?;

    let mut records = Vec::with_capacity(data.len());
    for (i, row) in data.iter().enumerate() {
        let cells = row
            .as_array()
            .with_context(|| format!("Row {i} is not an array"))?;

        let mut record = Record::new();
        for (col_idx, column) in columns.iter().enumerate() {
            let value = cells.get(col_idx).map(json_to_value).unwrap_or(Value::Null);
            record.insert(column.clone(), value);
        }
        records.push(record);
    }

    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Cell conversion helpers
// ---------------------------------------------------------------------------

fn json_to_value(val: &JsonValue) -> Value {
    match val {
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Null => Value::Null,
        other => Value::String(other.to_string()),
    }
}

fn guess_value(s: &str) -> Value {
    if s.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return Value::Float(f);
    }
    if s == "true" || s == "false" {
        return Value::Bool(s == "true");
    }
    Value::String(s.to_string())
}
