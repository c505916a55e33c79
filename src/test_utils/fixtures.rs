//! Test fixtures and common test data.
//!
//! Meter values are generated deterministically: the integer part is the
//! meter's output column plus one, the fraction encodes the sample index.
//! A row whose columns come out as 1.x, 2.x, ... 5.x is correctly ordered.

use chrono::{Duration, NaiveDate};
use serde_json::{json, Value};

use crate::model::responses::Sample;
use crate::model::{Chunk, MeterSeries, MeterType, TimeUnit};

/// Shorthand for a calendar date in tests.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Deterministic value of a meter at a sample index.
pub fn sample_value(meter: MeterType, index: usize) -> f64 {
    (meter.column() + 1) as f64 + (index % 1000) as f64 / 1000.0
}

/// One meter's quarter-hour samples for every day of the chunk.
pub fn meter_series(meter: MeterType, chunk: Chunk) -> MeterSeries {
    let days = (chunk.end - chunk.start).num_days().max(0) as usize;
    let count = days * TimeUnit::QuarterOfAnHour.samples_per_day();
    let midnight = chunk.start.and_hms_opt(0, 0, 0).unwrap();

    let values = (0..count)
        .map(|index| Sample {
            date: (midnight + Duration::minutes(15 * index as i64))
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            value: Some(sample_value(meter, index)),
        })
        .collect();

    MeterSeries {
        meter_type: meter.api_name().to_string(),
        values,
    }
}

/// All five meters for a chunk, in the given response order.
pub fn chunk_meters(chunk: Chunk, order: &[MeterType]) -> Vec<MeterSeries> {
    order.iter().map(|&meter| meter_series(meter, chunk)).collect()
}

/// dataPeriod response body.
pub fn data_period_body(start: &str, end: &str) -> String {
    json!({"dataPeriod": {"startDate": start, "endDate": end}}).to_string()
}

/// dataPeriod response body for a site without data.
pub fn empty_data_period_body() -> String {
    json!({"dataPeriod": {"startDate": null, "endDate": null}}).to_string()
}

/// powerDetails response body. Samples without a value omit the field, as
/// the vendor does.
pub fn power_details_body(meters: &[MeterSeries]) -> String {
    let meters: Vec<Value> = meters
        .iter()
        .map(|series| {
            let values: Vec<Value> = series
                .values
                .iter()
                .map(|sample| match sample.value {
                    Some(value) => json!({"date": sample.date, "value": value}),
                    None => json!({"date": sample.date}),
                })
                .collect();
            json!({"type": series.meter_type, "values": values})
        })
        .collect();

    json!({
        "powerDetails": {
            "timeUnit": "QUARTER_OF_AN_HOUR",
            "unit": "kW",
            "meters": meters
        }
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PowerDetailsResponse;

    #[test]
    fn test_meter_series_covers_chunk() {
        let chunk = Chunk {
            start: date(2024, 1, 1),
            end: date(2024, 1, 3),
        };
        let series = meter_series(MeterType::FeedIn, chunk);

        assert_eq!(series.values.len(), 192);
        assert_eq!(series.values[0].date, "2024-01-01 00:00:00");
        assert_eq!(series.values[191].date, "2024-01-02 23:45:00");
        assert_eq!(series.values[0].value, Some(2.0));
    }

    #[test]
    fn test_power_details_body_parses() {
        let chunk = Chunk {
            start: date(2024, 1, 1),
            end: date(2024, 1, 2),
        };
        let mut meters = chunk_meters(chunk, &MeterType::ALL);
        meters[0].values[0].value = None;

        let parsed: PowerDetailsResponse =
            serde_json::from_str(&power_details_body(&meters)).unwrap();

        assert_eq!(parsed.power_details.meters, meters);
    }
}
