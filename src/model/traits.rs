use crate::error::Result;
use async_trait::async_trait;

use super::responses::MeterSeries;
use super::types::{Chunk, DateRange};

/// Trait for types that can supply a site's recorded history.
///
/// The SolarEdge HTTP site implements this; tests substitute canned
/// responses. Implementors must be thread-safe (Send + Sync) so a
/// source can be shared behind an `Arc`.
#[async_trait]
pub trait SiteDataSource: Send + Sync {
    /// Returns the first and last recorded day as reported by the vendor.
    ///
    /// The end date is the last day with data, not an exclusive bound.
    async fn data_period(&self) -> Result<DateRange>;

    /// Fetches the five meters for one chunk.
    ///
    /// # Returns
    /// The meters in the order the API returned them; callers must not
    /// assume that order matches the request.
    async fn power_details(&self, chunk: Chunk) -> Result<Vec<MeterSeries>>;
}
