//! Session packet (ID 1).
//!
//! Only the leading conditions block and the two trailing sector-start floats
//! are materialized. Everything in between (marshal zones, weather forecast
//! samples, assists, ...) is skipped as one block.

use serde::Serialize;

use crate::cursor::ByteCursor;
use crate::error::DecodeResult;
use crate::header::HEADER_SIZE;

/// Bytes of the leading block read field by field.
pub const SESSION_LEADING_FIELDS_SIZE: usize = 8;
/// Unused bytes between `trackId` and the sector-start floats.
pub const SESSION_SKIPPED_BLOCK_SIZE: usize = 708;
/// `sector2LapDistanceStart` + `sector3LapDistanceStart`.
pub const SESSION_TRAILING_FIELDS_SIZE: usize = 8;
/// Full Session packet size for packet format 2024.
pub const SESSION_PACKET_SIZE: usize = HEADER_SIZE
    + SESSION_LEADING_FIELDS_SIZE
    + SESSION_SKIPPED_BLOCK_SIZE
    + SESSION_TRAILING_FIELDS_SIZE;

/// Session conditions at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SessionData {
    /// 0 clear .. 5 storm.
    pub weather: u8,
    /// Track temperature in °C.
    pub track_temperature: i8,
    /// Air temperature in °C.
    pub air_temperature: i8,
    pub total_laps: u8,
    /// Track length in metres.
    pub track_length: u16,
    /// Session type code; 15 is a race.
    pub session_type: u8,
    /// Track id, -1 when unknown.
    pub track_id: i8,
    /// Start of sector 2 as a fraction of lap length.
    pub sector2_lap_distance_start: f32,
    /// Start of sector 3 as a fraction of lap length.
    pub sector3_lap_distance_start: f32,
}

impl SessionData {
    /// Reads the session body that follows the header.
    pub fn read(r: &mut ByteCursor<'_>) -> DecodeResult<Self> {
        let weather = r.u8()?;
        let track_temperature = r.i8()?;
        let air_temperature = r.i8()?;
        let total_laps = r.u8()?;
        let track_length = r.u16_le()?;
        let session_type = r.u8()?;
        let track_id = r.i8()?;
        r.skip(SESSION_SKIPPED_BLOCK_SIZE)?;
        let sector2_lap_distance_start = r.f32_le()?;
        let sector3_lap_distance_start = r.f32_le()?;

        Ok(Self {
            weather,
            track_temperature,
            air_temperature,
            total_laps,
            track_length,
            session_type,
            track_id,
            sector2_lap_distance_start,
            sector3_lap_distance_start,
        })
    }
}
