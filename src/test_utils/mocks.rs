//! Mock implementations and server helpers for testing.
//!
//! [`FakeSiteSource`] stands in for the SolarEdge site in pipeline tests;
//! [`MockSolarEdgeServerBuilder`] serves the real endpoints over HTTP for
//! end-to-end runs.

use async_trait::async_trait;
use chrono::NaiveDate;
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::sync::Mutex;

use crate::error::{ApiError, Result};
use crate::model::{Chunk, DateRange, MeterSeries, MeterType, SiteDataSource};
use crate::test_utils::fixtures::{chunk_meters, data_period_body, power_details_body};

/// In-memory site with a fixed recorded history.
///
/// Every call returns the meters in a different rotation of the canonical
/// order, the way the vendor shuffles them.
pub struct FakeSiteSource {
    period: DateRange,
    requests: Mutex<Vec<Chunk>>,
    fail_on_call: Option<usize>,
    renamed_meter: Option<String>,
}

impl FakeSiteSource {
    /// Creates a source whose dataPeriod spans `start..=last_day`.
    pub fn new(start: NaiveDate, last_day: NaiveDate) -> Self {
        Self {
            period: DateRange::new(start, last_day).unwrap(),
            requests: Mutex::new(Vec::new()),
            fail_on_call: None,
            renamed_meter: None,
        }
    }

    /// Makes the `call`-th powerDetails request (0-based) fail with a 500.
    pub fn failing_on(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    /// Replaces the type name of the first returned meter.
    pub fn with_meter_renamed(mut self, name: impl Into<String>) -> Self {
        self.renamed_meter = Some(name.into());
        self
    }

    /// Chunks requested so far, in request order.
    pub fn requests(&self) -> Vec<Chunk> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SiteDataSource for FakeSiteSource {
    async fn data_period(&self) -> Result<DateRange> {
        Ok(self.period)
    }

    async fn power_details(&self, chunk: Chunk) -> Result<Vec<MeterSeries>> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(chunk);
            requests.len() - 1
        };

        if self.fail_on_call == Some(call) {
            return Err(ApiError::ServerError {
                status: 500,
                message: "Internal Server Error".to_string(),
            }
            .into());
        }

        let mut order = MeterType::ALL;
        order.rotate_left(call % MeterType::COUNT);
        let mut meters = chunk_meters(chunk, &order);
        if let Some(name) = &self.renamed_meter {
            meters[0].meter_type = name.clone();
        }
        Ok(meters)
    }
}

/// Builder for creating mockito server mocks for SolarEdge endpoints.
pub struct MockSolarEdgeServerBuilder {
    server: ServerGuard,
    mocks: Vec<Mock>,
}

impl MockSolarEdgeServerBuilder {
    /// Creates a new mock server builder.
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    /// Gets the server URL.
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Adds a mock for the dataPeriod endpoint.
    pub async fn mock_data_period(mut self, site_id: u64, start: &str, end: &str) -> Self {
        let mock = self
            .server
            .mock("GET", format!("/site/{}/dataPeriod", site_id).as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(data_period_body(start, end))
            .expect(1)
            .create_async()
            .await;

        self.mocks.push(mock);
        self
    }

    /// Adds a mock answering one chunk's powerDetails request with meters
    /// in the given order.
    pub async fn mock_power_details(
        mut self,
        site_id: u64,
        chunk: Chunk,
        order: &[MeterType],
    ) -> Self {
        let start = format!("{} 00:00:00", chunk.start.format("%Y-%m-%d"));
        let end = format!("{} 00:00:00", chunk.end.format("%Y-%m-%d"));
        let mock = self
            .server
            .mock("GET", format!("/site/{}/powerDetails", site_id).as_str())
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("startTime".into(), start),
                Matcher::UrlEncoded("endTime".into(), end),
            ]))
            .with_status(200)
            .with_body(power_details_body(&chunk_meters(chunk, order)))
            .expect(1)
            .create_async()
            .await;

        self.mocks.push(mock);
        self
    }

    /// Adds a mock for an error response.
    pub async fn mock_error(mut self, path: &str, status: u16, body: &str) -> Self {
        let mock = self
            .server
            .mock("GET", path)
            .match_query(Matcher::Any)
            .with_status(status as usize)
            .with_body(body)
            .create_async()
            .await;

        self.mocks.push(mock);
        self
    }

    /// Asserts every registered mock was hit the expected number of times.
    pub async fn assert_all(&self) {
        for mock in &self.mocks {
            mock.assert_async().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::date;

    #[tokio::test]
    async fn test_fake_source_rotates_meter_order() {
        let source = FakeSiteSource::new(date(2024, 1, 1), date(2024, 1, 1));
        let chunk = Chunk {
            start: date(2024, 1, 1),
            end: date(2024, 1, 2),
        };

        let first = source.power_details(chunk).await.unwrap();
        let second = source.power_details(chunk).await.unwrap();

        assert_eq!(first[0].meter_type, "Consumption");
        assert_eq!(second[0].meter_type, "FeedIn");
        assert_eq!(source.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_mock_solaredge_server_builder() {
        let builder = MockSolarEdgeServerBuilder::new()
            .await
            .mock_error("/site/1/dataPeriod", 403, "Invalid token")
            .await;

        assert!(builder.url().starts_with("http://"));
    }
}
