//! Car Status packet (ID 7).

use serde::Serialize;

use crate::cursor::{ByteCursor, read_car_records};
use crate::error::DecodeResult;
use crate::header::HEADER_SIZE;
use crate::NUM_CARS;

/// Size of one CarStatusData entry (packet format 2024).
pub const CAR_STATUS_ENTRY_SIZE: usize = 55;
/// Full Car Status packet size.
pub const CAR_STATUS_PACKET_SIZE: usize = HEADER_SIZE + NUM_CARS * CAR_STATUS_ENTRY_SIZE;

/// Fuel and tyre state for a single car.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CarStatusData {
    /// Fuel remaining in kg.
    pub fuel_in_tank: f32,
    /// Estimated laps of fuel remaining.
    pub fuel_remaining_laps: f32,
    /// Actual tyre compound code (see [`crate::tyre_compound_name`]).
    pub actual_tyre_compound: u8,
    /// Laps since tyres were fitted.
    pub tyres_age_laps: u8,
}

impl CarStatusData {
    /// Reads one entry, consuming exactly [`CAR_STATUS_ENTRY_SIZE`] bytes.
    pub fn read(r: &mut ByteCursor<'_>) -> DecodeResult<Self> {
        r.record("CarStatusData", CAR_STATUS_ENTRY_SIZE, |r| {
            r.skip(1)?; // tractionControl (0)
            r.skip(1)?; // antiLockBrakes (1)
            r.skip(1)?; // fuelMix (2)
            r.skip(1)?; // frontBrakeBias (3)
            r.skip(1)?; // pitLimiterStatus (4)
            let fuel_in_tank = r.f32_le()?; // 5-8
            let _fuel_capacity = r.f32_le()?; // 9-12
            let fuel_remaining_laps = r.f32_le()?; // 13-16
            r.skip(2)?; // maxRPM (17-18)
            r.skip(2)?; // idleRPM (19-20)
            r.skip(1)?; // maxGears (21)
            r.skip(1)?; // drsAllowed (22)
            r.skip(2)?; // drsActivationDistance (23-24)
            let actual_tyre_compound = r.u8()?; // 25
            r.skip(1)?; // visualTyreCompound (26)
            let tyres_age_laps = r.u8()?; // 27
            r.skip(1)?; // vehicleFiaFlags (28)
            r.skip(4)?; // enginePowerICE (29-32)
            r.skip(4)?; // enginePowerMGUK (33-36)
            r.skip(4)?; // ersStoreEnergy (37-40)
            r.skip(1)?; // ersDeployMode (41)
            r.skip(4)?; // ersHarvestedThisLapMGUK (42-45)
            r.skip(4)?; // ersHarvestedThisLapMGUH (46-49)
            r.skip(4)?; // ersDeployedThisLap (50-53)
            r.skip(1)?; // networkPaused (54)

            Ok(Self {
                fuel_in_tank,
                fuel_remaining_laps,
                actual_tyre_compound,
                tyres_age_laps,
            })
        })
    }

    /// Reads all 22 entries.
    pub fn read_all(r: &mut ByteCursor<'_>) -> DecodeResult<Vec<Self>> {
        read_car_records(r, Self::read)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::encode_car_status;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn fuel_capacity_is_skipped_between_kept_fuel_fields() -> TestResult {
        let status = CarStatusData {
            fuel_in_tank: 32.5,
            fuel_remaining_laps: 12.25,
            actual_tyre_compound: 18,
            tyres_age_laps: 9,
        };
        let mut bytes = encode_car_status(&status);
        // Poison the capacity slot; it must not leak into either kept field.
        bytes
            .get_mut(9..13)
            .ok_or("slice")?
            .copy_from_slice(&110.0f32.to_le_bytes());

        let mut c = ByteCursor::new(&bytes);
        assert_eq!(CarStatusData::read(&mut c)?, status);
        assert_eq!(c.offset(), CAR_STATUS_ENTRY_SIZE);
        Ok(())
    }

    #[test]
    fn packet_without_all_22_entries_fails() {
        let raw = vec![0u8; CAR_STATUS_ENTRY_SIZE * (NUM_CARS - 1)];
        let mut c = ByteCursor::new(&raw);
        assert!(CarStatusData::read_all(&mut c).is_err());
    }
}
