//! Chunked export of a site's meter history to CSV.
//!
//! Data flows walker → fetch → reconcile → emit, one chunk at a time.

pub mod emitter;
pub mod pipeline;
pub mod reconcile;
pub mod sink;
pub mod walker;

pub use pipeline::{ExportSummary, Exporter};
pub use sink::open_sink;
