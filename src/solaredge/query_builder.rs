//! Query parameter builders for SolarEdge API requests.

use chrono::NaiveDate;

use crate::model::{Chunk, MeterType, PowerUnit, TimeUnit};

/// Resolution every powerDetails request asks for.
pub const TIME_UNIT: TimeUnit = TimeUnit::QuarterOfAnHour;

/// Unit every powerDetails request asks for.
pub const POWER_UNIT: PowerUnit = PowerUnit::Kilowatt;

/// Formats a day boundary as the API's `YYYY-MM-DD hh:mm:ss` timestamp.
fn midnight(date: NaiveDate) -> String {
    format!("{} 00:00:00", date.format("%Y-%m-%d"))
}

/// Comma-separated `meters` parameter covering all five meters.
pub fn meters_param() -> String {
    MeterType::ALL
        .iter()
        .map(|meter| meter.request_name())
        .collect::<Vec<_>>()
        .join(",")
}

/// Builds the powerDetails query for one chunk.
///
/// # Format
/// ```text
/// timeUnit=QUARTER_OF_AN_HOUR&unit=kw&startTime=2024-01-01 00:00:00
///   &endTime=2024-01-29 00:00:00&meters=CONSUMPTION,FEEDIN,...
/// ```
pub fn power_details_query(chunk: Chunk) -> Vec<(&'static str, String)> {
    vec![
        ("timeUnit", TIME_UNIT.to_string()),
        ("unit", POWER_UNIT.to_string()),
        ("startTime", midnight(chunk.start)),
        ("endTime", midnight(chunk.end)),
        ("meters", meters_param()),
    ]
}
