//! The export run: walk the site's history and stream it to CSV.

use chrono::Duration;
use std::io::Write;
use std::sync::Arc;

use crate::error::{ContractError, Result};
use crate::export::emitter::RowEmitter;
use crate::export::reconcile::map_columns;
use crate::export::walker::DateRangeWalker;
use crate::model::{DateRange, SiteDataSource, TimeUnit};

/// Totals of a finished export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Exported window, end exclusive
    pub range: DateRange,
    /// powerDetails requests issued
    pub chunks: usize,
    /// Data rows written, header excluded
    pub rows: usize,
}

/// Extends the vendor's last recorded day to an exclusive bound so the
/// final day is part of the export.
pub fn export_range(recorded: DateRange) -> Result<DateRange, ContractError> {
    let end = recorded
        .end
        .checked_add_signed(Duration::days(1))
        .ok_or_else(|| ContractError::invalid_period(recorded.start, recorded.end))?;
    DateRange::new(recorded.start, end)
}

/// Runs one full export against a data source.
pub struct Exporter {
    source: Arc<dyn SiteDataSource>,
}

impl Exporter {
    pub fn new(source: Arc<dyn SiteDataSource>) -> Self {
        Self { source }
    }

    /// Fetches the site's history chunk by chunk and writes it to `sink`.
    ///
    /// Chunks are requested one at a time, in order. Any failure aborts
    /// the run; rows already written stay in the sink.
    pub async fn run<W: Write>(&self, sink: W) -> Result<ExportSummary> {
        let range = export_range(self.source.data_period().await?)?;
        let days = (range.end - range.start).num_days() as usize;
        tracing::info!(
            "Exporting {} to {} (exclusive), about {} rows",
            range.start,
            range.end,
            days * TimeUnit::QuarterOfAnHour.samples_per_day()
        );

        let mut emitter = RowEmitter::new(sink);
        let mut chunks = 0;
        for chunk in DateRangeWalker::new(range).chunks() {
            let meters = self.source.power_details(chunk).await?;
            let columns = map_columns(&meters)?;
            let rows = emitter.emit_chunk(&meters, &columns, chunk.start == range.start)?;
            chunks += 1;
            tracing::info!("Exported chunk {}: {} rows", chunk, rows);
        }
        let rows = emitter.rows();
        emitter.into_inner()?;

        let summary = ExportSummary {
            range,
            chunks,
            rows,
        };
        tracing::info!(
            "Finished export: {} chunks, {} rows",
            summary.chunks,
            summary.rows
        );
        Ok(summary)
    }
}
