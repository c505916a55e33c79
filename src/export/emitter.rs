//! CSV row emission for reconciled meter chunks.
//!
//! Output layout:
//! ```text
//! Time,Consumption,FeedIn,Purchased,SelfConsumption,Production
//! 2024-01-01 00:00,0.4210,0.0000,0.4210,0.0000,0.0000
//! ```
//! Timestamps are `YYYY-MM-DD hh:mm` so rows sort chronologically as text.
//! Values are kilowatts with exactly four decimals; a sample the API left
//! without a value is written as zero.

use chrono::NaiveDateTime;
use std::io::Write;

use crate::error::{ContractError, OutputError, Result};
use crate::export::reconcile::ColumnMap;
use crate::model::{MeterSeries, MeterType};

/// Timestamp format of incoming samples.
const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format of the Time column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Decimal places written for every value.
pub const VALUE_PRECISION: usize = 4;

/// Label of the first column.
pub const TIME_LABEL: &str = "Time";

/// Header row: the time label followed by the meter names in column order.
pub fn header() -> Vec<&'static str> {
    std::iter::once(TIME_LABEL)
        .chain(MeterType::ALL.iter().map(|meter| meter.api_name()))
        .collect()
}

/// Formats a value with fixed precision, writing negative zero as zero.
pub fn format_value(value: f64) -> String {
    let scale = 10f64.powi(VALUE_PRECISION as i32);
    let rounded = (value * scale).round() / scale;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", VALUE_PRECISION, rounded)
}

/// Converts an API sample timestamp to the output format.
pub fn format_timestamp(text: &str) -> Result<String, ContractError> {
    NaiveDateTime::parse_from_str(text, API_TIMESTAMP_FORMAT)
        .map(|timestamp| timestamp.format(TIMESTAMP_FORMAT).to_string())
        .map_err(|e| ContractError::timestamp(text, e))
}

/// Writes reconciled chunks to a CSV sink.
pub struct RowEmitter<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> RowEmitter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new().from_writer(sink),
            rows: 0,
        }
    }

    /// Data rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn write_header(&mut self) -> Result<(), OutputError> {
        self.writer.write_record(header())?;
        Ok(())
    }

    /// Writes one row per sample of the chunk, preceded by the header on
    /// the first chunk of the run.
    ///
    /// All meters must carry the same number of samples; the timestamps are
    /// taken from the first output column.
    ///
    /// # Returns
    /// The number of data rows written for this chunk.
    pub fn emit_chunk(
        &mut self,
        meters: &[MeterSeries],
        columns: &ColumnMap,
        is_first: bool,
    ) -> Result<usize> {
        let time_series = &meters[columns[0]];
        let sample_count = time_series.values.len();
        for &position in columns {
            let series = &meters[position];
            if series.values.len() != sample_count {
                return Err(ContractError::misaligned(
                    series.meter_type.clone(),
                    sample_count,
                    series.values.len(),
                )
                .into());
            }
        }

        if is_first {
            self.write_header()?;
        }

        let mut record: Vec<String> = Vec::with_capacity(columns.len() + 1);
        for index in 0..sample_count {
            record.clear();
            record.push(format_timestamp(&time_series.values[index].date)?);
            record.extend(
                columns
                    .iter()
                    .map(|&position| format_value(meters[position].values[index].value_or_zero())),
            );
            self.writer
                .write_record(&record)
                .map_err(OutputError::from)?;
        }

        self.rows += sample_count;
        Ok(sample_count)
    }

    /// Flushes and returns the underlying sink.
    pub fn into_inner(self) -> Result<W, OutputError> {
        self.writer
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}
