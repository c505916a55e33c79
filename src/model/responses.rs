//! Wire shapes of the SolarEdge monitoring API responses.
//!
//! Only the fields the exporter reads are modelled; anything else in the
//! body is ignored by serde.

use serde_derive::Deserialize;

/// Body of `GET /site/{id}/dataPeriod`.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DataPeriodResponse {
    pub data_period: DataPeriod,
}

/// First and last recorded day, `YYYY-MM-DD`. Both are null for a site
/// that never reported.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DataPeriod {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Body of `GET /site/{id}/powerDetails`.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PowerDetailsResponse {
    pub power_details: PowerDetails,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PowerDetails {
    #[serde(default)]
    pub time_unit: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub meters: Vec<MeterSeries>,
}

/// One meter's samples for a chunk, in the order the API returned them.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MeterSeries {
    #[serde(rename = "type")]
    pub meter_type: String,
    #[serde(default)]
    pub values: Vec<Sample>,
}

/// A 15-minute sample. The API omits `value` for intervals without data.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Sample {
    pub date: String,
    #[serde(default)]
    pub value: Option<f64>,
}

impl Sample {
    /// Sample value with absent readings treated as zero.
    pub fn value_or_zero(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }
}
