use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use crate::error::ContractError;

/// Energy-flow meters reported by the SolarEdge powerDetails endpoint.
///
/// Declaration order is the CSV column order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum MeterType {
    /// Total site consumption
    Consumption,
    /// Power exported to the grid
    FeedIn,
    /// Power imported from the grid
    Purchased,
    /// Production consumed on site
    SelfConsumption,
    /// Total PV production
    Production,
}

impl MeterType {
    /// Number of meters, and of value columns.
    pub const COUNT: usize = 5;

    /// All meters in output column order.
    pub const ALL: [MeterType; Self::COUNT] = [
        MeterType::Consumption,
        MeterType::FeedIn,
        MeterType::Purchased,
        MeterType::SelfConsumption,
        MeterType::Production,
    ];

    /// Output column index (0-based, excluding the time column).
    pub fn column(self) -> usize {
        match self {
            MeterType::Consumption => 0,
            MeterType::FeedIn => 1,
            MeterType::Purchased => 2,
            MeterType::SelfConsumption => 3,
            MeterType::Production => 4,
        }
    }

    /// Name used in the `type` field of a response meter.
    pub fn api_name(self) -> &'static str {
        match self {
            MeterType::Consumption => "Consumption",
            MeterType::FeedIn => "FeedIn",
            MeterType::Purchased => "Purchased",
            MeterType::SelfConsumption => "SelfConsumption",
            MeterType::Production => "Production",
        }
    }

    /// Token used in the `meters` request parameter.
    pub fn request_name(self) -> &'static str {
        match self {
            MeterType::Consumption => "CONSUMPTION",
            MeterType::FeedIn => "FEEDIN",
            MeterType::Purchased => "PURCHASED",
            MeterType::SelfConsumption => "SELFCONSUMPTION",
            MeterType::Production => "PRODUCTION",
        }
    }
}

impl fmt::Display for MeterType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

impl FromStr for MeterType {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MeterType::ALL
            .into_iter()
            .find(|meter| meter.api_name() == s)
            .ok_or_else(|| ContractError::UnknownMeter(s.to_string()))
    }
}

/// Sampling resolution requested from powerDetails.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TimeUnit {
    QuarterOfAnHour,
}

impl TimeUnit {
    /// Number of samples in one day at this resolution.
    pub fn samples_per_day(self) -> usize {
        match self {
            TimeUnit::QuarterOfAnHour => 96,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimeUnit::QuarterOfAnHour => write!(f, "QUARTER_OF_AN_HOUR"),
        }
    }
}

/// Power unit requested from powerDetails.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PowerUnit {
    Kilowatt,
}

impl fmt::Display for PowerUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PowerUnit::Kilowatt => write!(f, "kw"),
        }
    }
}

/// A span of calendar days, `start` inclusive.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ContractError> {
        if start > end {
            return Err(ContractError::invalid_period(start, end));
        }
        Ok(Self { start, end })
    }
}

/// One powerDetails request window, `[start 00:00, end 00:00)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Chunk {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
