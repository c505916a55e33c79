//! Maps the meters of a powerDetails response onto output columns.
//!
//! The API returns the five requested meters in a different order on
//! every call, so positions are resolved by meter name each time.

use crate::error::ContractError;
use crate::model::{MeterSeries, MeterType};

/// For each output column, the index of its meter in `meters`.
pub type ColumnMap = [usize; MeterType::COUNT];

/// Builds the column permutation for one response.
///
/// Every requested meter must appear exactly once; an unknown, repeated or
/// absent meter is a contract violation.
pub fn map_columns(meters: &[MeterSeries]) -> Result<ColumnMap, ContractError> {
    let mut slots: [Option<usize>; MeterType::COUNT] = [None; MeterType::COUNT];

    for (position, series) in meters.iter().enumerate() {
        let meter: MeterType = series.meter_type.parse()?;
        let slot = &mut slots[meter.column()];
        if slot.is_some() {
            return Err(ContractError::DuplicateMeter(series.meter_type.clone()));
        }
        *slot = Some(position);
    }

    let mut columns: ColumnMap = [0; MeterType::COUNT];
    for meter in MeterType::ALL {
        columns[meter.column()] =
            slots[meter.column()].ok_or_else(|| ContractError::MissingMeter(meter.to_string()))?;
    }
    Ok(columns)
}
