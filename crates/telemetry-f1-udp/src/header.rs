//! The packet header shared by every F1 UDP packet kind.

use serde::Serialize;

use crate::cursor::ByteCursor;
use crate::error::DecodeResult;

/// Size of the packet header in bytes.
///
/// `u16` + 4×`u8` + `u8` + `u64` + `f32` + 2×`u32` + 2×`u8`.
pub const HEADER_SIZE: usize = 29;

/// Packet-type codes carried in the header's `packetId` byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PacketKind {
    Session,
    LapData,
    Participants,
    CarTelemetry,
    CarStatus,
    CarDamage,
    /// A code this decoder has no layout for (motion, events, setups, ...).
    Unknown(u8),
}

impl PacketKind {
    pub const SESSION_ID: u8 = 1;
    pub const LAP_DATA_ID: u8 = 2;
    pub const PARTICIPANTS_ID: u8 = 4;
    pub const CAR_TELEMETRY_ID: u8 = 6;
    pub const CAR_STATUS_ID: u8 = 7;
    pub const CAR_DAMAGE_ID: u8 = 10;

    /// The wire code for this kind.
    pub fn id(self) -> u8 {
        match self {
            Self::Session => Self::SESSION_ID,
            Self::LapData => Self::LAP_DATA_ID,
            Self::Participants => Self::PARTICIPANTS_ID,
            Self::CarTelemetry => Self::CAR_TELEMETRY_ID,
            Self::CarStatus => Self::CAR_STATUS_ID,
            Self::CarDamage => Self::CAR_DAMAGE_ID,
            Self::Unknown(id) => id,
        }
    }
}

impl From<u8> for PacketKind {
    fn from(id: u8) -> Self {
        match id {
            Self::SESSION_ID => Self::Session,
            Self::LAP_DATA_ID => Self::LapData,
            Self::PARTICIPANTS_ID => Self::Participants,
            Self::CAR_TELEMETRY_ID => Self::CarTelemetry,
            Self::CAR_STATUS_ID => Self::CarStatus,
            Self::CAR_DAMAGE_ID => Self::CarDamage,
            other => Self::Unknown(other),
        }
    }
}

/// Parsed fields from the 29-byte PacketHeader.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PacketHeader {
    /// Protocol revision, e.g. `2024`.
    pub packet_format: u16,
    pub game_year: u8,
    pub game_major_version: u8,
    pub game_minor_version: u8,
    pub packet_version: u8,
    pub packet_id: u8,
    pub session_uid: u64,
    /// Session timestamp in seconds.
    pub session_time: f32,
    /// Simulation tick this packet belongs to; the cross-packet join key.
    pub frame_identifier: u32,
    /// Tick counter that does not reset on flashbacks.
    pub overall_frame_identifier: u32,
    pub player_car_index: u8,
    /// 255 when there is no second player.
    pub secondary_player_car_index: u8,
}

impl PacketHeader {
    /// Reads the header from the cursor, consuming exactly [`HEADER_SIZE`] bytes.
    ///
    /// Only bounds are checked; the packet format is not validated.
    pub fn read(r: &mut ByteCursor<'_>) -> DecodeResult<Self> {
        Ok(Self {
            packet_format: r.u16_le()?,
            game_year: r.u8()?,
            game_major_version: r.u8()?,
            game_minor_version: r.u8()?,
            packet_version: r.u8()?,
            packet_id: r.u8()?,
            session_uid: r.u64_le()?,
            session_time: r.f32_le()?,
            frame_identifier: r.u32_le()?,
            overall_frame_identifier: r.u32_le()?,
            player_car_index: r.u8()?,
            secondary_player_car_index: r.u8()?,
        })
    }

    pub fn kind(&self) -> PacketKind {
        PacketKind::from(self.packet_id)
    }
}

/// Parse the packet header from the start of a raw datagram.
pub fn parse_header(raw: &[u8]) -> DecodeResult<PacketHeader> {
    PacketHeader::read(&mut ByteCursor::new(raw))
}
