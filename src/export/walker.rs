//! Splits a site's history into request-sized windows.
//!
//! The powerDetails endpoint rejects quarter-hour queries spanning more
//! than about a month, so the export walks the history in 4-week steps.

use chrono::{Duration, NaiveDate};

use crate::model::{Chunk, DateRange};

/// Widest window requested in one powerDetails call.
pub const CHUNK_WIDTH: Duration = Duration::weeks(4);

/// Produces chunk boundaries across a date range on demand.
///
/// The walker holds no position of its own: each call to
/// [`DateRangeWalker::boundaries`] or [`DateRangeWalker::chunks`] starts a
/// fresh pass from the range start.
#[derive(Debug, Clone, Copy)]
pub struct DateRangeWalker {
    start: NaiveDate,
    end: NaiveDate,
    step: Duration,
}

impl DateRangeWalker {
    pub fn new(range: DateRange) -> Self {
        Self::with_step(range, CHUNK_WIDTH)
    }

    pub fn with_step(range: DateRange, step: Duration) -> Self {
        Self {
            start: range.start,
            end: range.end,
            step,
        }
    }

    /// Chunk start dates: `start`, then every step that is still before `end`.
    ///
    /// Always yields at least `start`, so a zero-width range still produces
    /// one chunk.
    pub fn boundaries(&self) -> Boundaries {
        Boundaries {
            next: Some(self.start),
            end: self.end,
            step: self.step,
        }
    }

    /// Chunks with each end clamped to the range end.
    pub fn chunks(&self) -> Chunks {
        Chunks {
            boundaries: self.boundaries(),
        }
    }
}

/// Lazy iterator over chunk start dates.
#[derive(Debug, Clone)]
pub struct Boundaries {
    next: Option<NaiveDate>,
    end: NaiveDate,
    step: Duration,
}

impl Iterator for Boundaries {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        // non-positive steps and date overflow both end the walk
        self.next = current
            .checked_add_signed(self.step)
            .filter(|next| *next > current && *next < self.end);
        Some(current)
    }
}

/// Lazy iterator over clamped chunks.
#[derive(Debug, Clone)]
pub struct Chunks {
    boundaries: Boundaries,
}

impl Iterator for Chunks {
    type Item = Chunk;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.boundaries.next()?;
        let end = start
            .checked_add_signed(self.boundaries.step)
            .map_or(self.boundaries.end, |end| end.min(self.boundaries.end));
        Some(Chunk {
            start,
            end: end.max(start),
        })
    }
}
