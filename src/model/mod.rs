//! Model definitions for SolarEdge meter data.
//!
//! This module provides the meter vocabulary, the date windows the exporter
//! walks, the wire types of the vendor responses and the data-source trait
//! the export pipeline runs against.

pub mod responses;
pub mod traits;
pub mod types;

// Re-export commonly used items at the module level
pub use responses::{DataPeriodResponse, MeterSeries, PowerDetailsResponse};
pub use traits::SiteDataSource;
pub use types::{Chunk, DateRange, MeterType, PowerUnit, TimeUnit};
