use std::sync::Arc;

use arrow::array::{ArrayRef, AsArray, Float64Array};
use arrow::datatypes::{DataType, Field, Float64Type, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use super::error::{Error, Result};
use super::model::Curve;

pub const DEFAULT_LABELS: [&str; 2] = ["x", "y"];

// ---------------------------------------------------------------------------
// TableRow – one sample index
// ---------------------------------------------------------------------------

/// A single row: the sample and its transformed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    pub x: f64,
    pub y: f64,
}

// ---------------------------------------------------------------------------
// Table – two labelled Float64 columns backed by a RecordBatch
// ---------------------------------------------------------------------------

/// Paired columnar view of a [`Curve`], one row per sample.
///
/// Column 0 holds the samples, column 1 the transformed values, both
/// non-nullable `Float64`.
#[derive(Debug, Clone)]
pub struct Table {
    batch: RecordBatch,
}

impl Table {
    /// Build a table with the default `"x"`, `"y"` labels.
    pub fn from_curve(curve: &Curve) -> Result<Self> {
        Self::with_labels(curve, DEFAULT_LABELS)
    }

    pub fn with_labels<S: AsRef<str>>(curve: &Curve, labels: [S; 2]) -> Result<Self> {
        let [x_label, y_label] = labels;
        let (x_label, y_label) = (x_label.as_ref(), y_label.as_ref());
        if x_label == y_label {
            return Err(Error::DuplicateLabel(x_label.to_string()));
        }

        let schema = Arc::new(Schema::new(vec![
            Field::new(x_label, DataType::Float64, false),
            Field::new(y_label, DataType::Float64, false),
        ]));
        let x: ArrayRef = Arc::new(Float64Array::from(curve.x().as_slice().to_vec()));
        let y: ArrayRef = Arc::new(Float64Array::from(curve.y().as_slice().to_vec()));

        let batch = RecordBatch::try_new(schema, vec![x, y])?;
        Ok(Self { batch })
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    /// Column labels in display order.
    pub fn column_names(&self) -> Vec<String> {
        self.schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    pub fn schema(&self) -> SchemaRef {
        self.batch.schema()
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    /// The sample column.
    pub fn x_values(&self) -> &Float64Array {
        self.batch.column(0).as_primitive::<Float64Type>()
    }

    /// The transformed column.
    pub fn y_values(&self) -> &Float64Array {
        self.batch.column(1).as_primitive::<Float64Type>()
    }

    pub fn row(&self, index: usize) -> Option<TableRow> {
        if index >= self.num_rows() {
            return None;
        }
        Some(TableRow {
            x: self.x_values().value(index),
            y: self.y_values().value(index),
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = TableRow> + '_ {
        self.x_values()
            .values()
            .iter()
            .zip(self.y_values().values().iter())
            .map(|(&x, &y)| TableRow { x, y })
    }

    /// Boxed text rendering for terminals.
    pub fn pretty(&self) -> Result<String> {
        Ok(pretty_format_batches(std::slice::from_ref(&self.batch))?.to_string())
    }
}
