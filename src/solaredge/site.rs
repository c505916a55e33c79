//! SolarEdge site endpoints used by the exporter.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::{ContractError, Result};
use crate::model::{
    Chunk, DateRange, DataPeriodResponse, MeterSeries, PowerDetailsResponse, SiteDataSource,
};
use crate::solaredge::client::Client;
use crate::solaredge::query_builder::power_details_query;

/// A single monitored site, addressed through an authenticated client.
pub struct Site {
    client: Client,
    site_id: u64,
}

impl Site {
    /// Creates a new Site instance.
    pub fn new(client: Client, site_id: u64) -> Self {
        Self { client, site_id }
    }

    fn path(&self, endpoint: &str) -> String {
        format!("/site/{}/{}", self.site_id, endpoint)
    }
}

fn parse_day(text: &str) -> Result<NaiveDate, ContractError> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|e| ContractError::timestamp(text, e))
}

#[async_trait]
impl SiteDataSource for Site {
    async fn data_period(&self) -> Result<DateRange> {
        let response: DataPeriodResponse = self
            .client
            .get_json(&self.path("dataPeriod"), &[])
            .await?;
        let period = response.data_period;

        let (start, end) = match (period.start_date, period.end_date) {
            (Some(start), Some(end)) => (parse_day(&start)?, parse_day(&end)?),
            _ => return Err(ContractError::NoData.into()),
        };
        tracing::info!("Site {} has data from {} to {}", self.site_id, start, end);

        Ok(DateRange::new(start, end)?)
    }

    async fn power_details(&self, chunk: Chunk) -> Result<Vec<MeterSeries>> {
        let response: PowerDetailsResponse = self
            .client
            .get_json(&self.path("powerDetails"), &power_details_query(chunk))
            .await?;
        let details = response.power_details;
        tracing::debug!(
            "powerDetails {}: {} meters, timeUnit={:?}, unit={:?}",
            chunk,
            details.meters.len(),
            details.time_unit,
            details.unit
        );

        Ok(details.meters)
    }
}
