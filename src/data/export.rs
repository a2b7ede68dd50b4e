use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};
use parquet::arrow::ArrowWriter;
use serde_json::{Map, Number, Value as JsonValue};

use super::table::Table;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Write a table to a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` – two `Float64` columns named after the table labels
/// * `.json`    – `[{ "x": -2.0, "y": 4.0 }, ...]`
/// * `.csv`     – header row with the labels, one row per sample
pub fn export_table(table: &Table, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => write_parquet(table, path),
        "json" => write_json(table, path),
        "csv" => write_csv(table, path),
        other => bail!("Unsupported file extension: .{other}"),
    }?;

    log::info!("Wrote {} rows to {}", table.num_rows(), path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    writer
        .write_record(table.column_names())
        .context("writing CSV header")?;

    for (row_no, row) in table.rows().enumerate() {
        writer
            .write_record([row.x.to_string(), row.y.to_string()])
            .with_context(|| format!("writing CSV row {row_no}"))?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON writer
// ---------------------------------------------------------------------------

/// Records-oriented, the layout `df.to_json(orient='records')` produces.
fn write_json(table: &Table, path: &Path) -> Result<()> {
    let names = table.column_names();
    let records: Vec<JsonValue> = table
        .rows()
        .enumerate()
        .map(|(row_no, row)| {
            let mut obj = Map::new();
            obj.insert(names[0].clone(), json_number(row.x, row_no)?);
            obj.insert(names[1].clone(), json_number(row.y, row_no)?);
            Ok(JsonValue::Object(obj))
        })
        .collect::<Result<_>>()?;

    let file = File::create(path).context("creating JSON file")?;
    serde_json::to_writer_pretty(file, &records).context("writing JSON")?;
    Ok(())
}

fn json_number(v: f64, row: usize) -> Result<JsonValue> {
    Number::from_f64(v)
        .map(JsonValue::Number)
        .with_context(|| format!("Row {row}: {v} cannot be represented in JSON"))
}

// ---------------------------------------------------------------------------
// Parquet writer
// ---------------------------------------------------------------------------

fn write_parquet(table: &Table, path: &Path) -> Result<()> {
    let file = File::create(path).context("creating parquet file")?;
    let mut writer =
        ArrowWriter::try_new(file, table.schema(), None).context("creating parquet writer")?;
    writer
        .write(table.batch())
        .context("writing parquet record batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}
