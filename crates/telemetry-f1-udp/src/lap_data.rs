//! Lap Data packet (ID 2).
//!
//! Sector times are sent as a millisecond remainder (`u16`) plus a whole
//! minutes part (`u8`); [`sector_time_ms`] recombines them.

use serde::Serialize;

use crate::cursor::{ByteCursor, read_car_records};
use crate::error::DecodeResult;
use crate::header::HEADER_SIZE;
use crate::NUM_CARS;

/// Size of one LapData entry.
pub const LAP_DATA_ENTRY_SIZE: usize = 57;
/// `timeTrialPBCarIdx` + `timeTrialRivalCarIdx` after the car array.
pub const LAP_DATA_TRAILER_SIZE: usize = 2;
/// Full Lap Data packet size.
pub const LAP_DATA_PACKET_SIZE: usize =
    HEADER_SIZE + NUM_CARS * LAP_DATA_ENTRY_SIZE + LAP_DATA_TRAILER_SIZE;

const MS_PER_MINUTE: u32 = 60_000;

/// Recombines a split sector time into milliseconds.
pub fn sector_time_ms(minutes: u8, ms_remainder: u16) -> u32 {
    u32::from(minutes) * MS_PER_MINUTE + u32::from(ms_remainder)
}

/// Lap timing for a single car.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LapData {
    pub last_lap_time_ms: u32,
    pub current_lap_time_ms: u32,
    pub sector1_time_ms: u32,
    pub sector2_time_ms: u32,
    /// Distance round the current lap in metres; negative before the line.
    pub lap_distance: f32,
    pub car_position: u8,
    pub current_lap_num: u8,
    /// 0 none, 1 pitting, 2 in pit area.
    pub pit_status: u8,
    pub grid_position: u8,
    /// 0 in garage, 1 flying lap, 2 in lap, 3 out lap, 4 on track.
    pub driver_status: u8,
}

impl LapData {
    /// Reads one entry, consuming exactly [`LAP_DATA_ENTRY_SIZE`] bytes.
    pub fn read(r: &mut ByteCursor<'_>) -> DecodeResult<Self> {
        r.record("LapData", LAP_DATA_ENTRY_SIZE, |r| {
            let last_lap_time_ms = r.u32_le()?;
            let current_lap_time_ms = r.u32_le()?;
            let sector1_ms = r.u16_le()?;
            let sector1_minutes = r.u8()?;
            let sector2_ms = r.u16_le()?;
            let sector2_minutes = r.u8()?;
            r.skip(2)?; // deltaToCarInFrontMSPart
            r.skip(1)?; // deltaToCarInFrontMinutesPart
            r.skip(2)?; // deltaToRaceLeaderMSPart
            r.skip(1)?; // deltaToRaceLeaderMinutesPart
            let lap_distance = r.f32_le()?;
            r.skip(4)?; // totalDistance
            r.skip(4)?; // safetyCarDelta
            let car_position = r.u8()?;
            let current_lap_num = r.u8()?;
            let pit_status = r.u8()?;
            r.skip(1)?; // numPitStops
            r.skip(1)?; // sector
            r.skip(1)?; // currentLapInvalid
            r.skip(1)?; // penalties
            r.skip(1)?; // totalWarnings
            r.skip(1)?; // cornerCuttingWarnings
            r.skip(1)?; // numUnservedDriveThroughPens
            r.skip(1)?; // numUnservedStopGoPens
            let grid_position = r.u8()?;
            let driver_status = r.u8()?;
            r.skip(1)?; // resultStatus
            r.skip(1)?; // pitLaneTimerActive
            r.skip(2)?; // pitLaneTimeInLaneInMS
            r.skip(2)?; // pitStopTimerInMS
            r.skip(1)?; // pitStopShouldServePen
            r.skip(4)?; // speedTrapFastestSpeed
            r.skip(1)?; // speedTrapFastestLap

            Ok(Self {
                last_lap_time_ms,
                current_lap_time_ms,
                sector1_time_ms: sector_time_ms(sector1_minutes, sector1_ms),
                sector2_time_ms: sector_time_ms(sector2_minutes, sector2_ms),
                lap_distance,
                car_position,
                current_lap_num,
                pit_status,
                grid_position,
                driver_status,
            })
        })
    }

    /// Reads all 22 entries plus the packet trailer.
    pub fn read_all(r: &mut ByteCursor<'_>) -> DecodeResult<Vec<Self>> {
        let laps = read_car_records(r, Self::read)?;
        r.skip(1)?; // timeTrialPBCarIdx
        r.skip(1)?; // timeTrialRivalCarIdx
        Ok(laps)
    }
}
