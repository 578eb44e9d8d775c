//! Car Telemetry packet (ID 6).

use serde::Serialize;

use crate::cursor::{ByteCursor, read_car_records};
use crate::error::DecodeResult;
use crate::header::HEADER_SIZE;
use crate::NUM_CARS;

/// Size of one CarTelemetryData entry.
pub const CAR_TELEMETRY_ENTRY_SIZE: usize = 60;
/// `mfdPanelIndex` + `mfdPanelIndexSecondaryPlayer` + `suggestedGear`.
pub const CAR_TELEMETRY_TRAILER_SIZE: usize = 3;
/// Full Car Telemetry packet size.
pub const CAR_TELEMETRY_PACKET_SIZE: usize =
    HEADER_SIZE + NUM_CARS * CAR_TELEMETRY_ENTRY_SIZE + CAR_TELEMETRY_TRAILER_SIZE;

/// Driver inputs and drivetrain state for a single car.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CarTelemetryData {
    /// Speed in km/h.
    pub speed_kmh: u16,
    /// Throttle position 0.0–1.0.
    pub throttle: f32,
    /// Steering input −1.0–1.0.
    pub steer: f32,
    /// Brake position 0.0–1.0.
    pub brake: f32,
    /// Gear: −1 = reverse, 0 = neutral, 1–8 = forward.
    pub gear: i8,
    pub engine_rpm: u16,
}

impl CarTelemetryData {
    /// Reads one entry, consuming exactly [`CAR_TELEMETRY_ENTRY_SIZE`] bytes.
    pub fn read(r: &mut ByteCursor<'_>) -> DecodeResult<Self> {
        r.record("CarTelemetryData", CAR_TELEMETRY_ENTRY_SIZE, |r| {
            let speed_kmh = r.u16_le()?; // 0-1
            let throttle = r.f32_le()?; // 2-5
            let steer = r.f32_le()?; // 6-9
            let brake = r.f32_le()?; // 10-13
            r.skip(1)?; // clutch (14)
            let gear = r.i8()?; // 15
            let engine_rpm = r.u16_le()?; // 16-17
            r.skip(1)?; // drs (18)
            r.skip(1)?; // revLightsPercent (19)
            r.skip(2)?; // revLightsBitValue (20-21)
            r.skip(8)?; // brakesTemperature[4] u16 (22-29)
            r.skip(4)?; // tyresSurfaceTemperature[4] (30-33)
            r.skip(4)?; // tyresInnerTemperature[4] (34-37)
            r.skip(2)?; // engineTemperature (38-39)
            r.skip(16)?; // tyresPressure[4] f32 (40-55)
            r.skip(4)?; // surfaceType[4] (56-59)

            Ok(Self {
                speed_kmh,
                throttle,
                steer,
                brake,
                gear,
                engine_rpm,
            })
        })
    }

    /// Reads all 22 entries plus the MFD / suggested-gear trailer.
    pub fn read_all(r: &mut ByteCursor<'_>) -> DecodeResult<Vec<Self>> {
        let cars = read_car_records(r, Self::read)?;
        r.skip(1)?; // mfdPanelIndex
        r.skip(1)?; // mfdPanelIndexSecondaryPlayer
        r.skip(1)?; // suggestedGear
        Ok(cars)
    }
}
