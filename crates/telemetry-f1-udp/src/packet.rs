//! Packet dispatch: header first, then the body decoder for its kind.

use serde::Serialize;
use tracing::trace;

use crate::car_damage::CarDamageData;
use crate::car_status::CarStatusData;
use crate::car_telemetry::CarTelemetryData;
use crate::cursor::ByteCursor;
use crate::error::DecodeResult;
use crate::header::{PacketHeader, PacketKind};
use crate::lap_data::LapData;
use crate::participants::ParticipantsData;
use crate::session::SessionData;

/// Decoded packet body, one variant per supported packet kind.
///
/// Per-car vectors are indexed by car slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PacketPayload {
    Session(SessionData),
    Participants(ParticipantsData),
    LapData(Vec<LapData>),
    CarTelemetry(Vec<CarTelemetryData>),
    CarStatus(Vec<CarStatusData>),
    CarDamage(Vec<CarDamageData>),
    /// Packet kind without a decoder; the body is left unread.
    Unknown,
}

/// A header paired with its decoded body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedPacket {
    pub header: PacketHeader,
    pub payload: PacketPayload,
}

impl DecodedPacket {
    /// Decodes one raw datagram.
    ///
    /// Unrecognized packet ids are not an error: they produce
    /// [`PacketPayload::Unknown`] so newer protocol additions pass through.
    pub fn decode(raw: &[u8]) -> DecodeResult<Self> {
        let mut r = ByteCursor::new(raw);
        let header = PacketHeader::read(&mut r)?;
        let payload = match header.kind() {
            PacketKind::Session => PacketPayload::Session(SessionData::read(&mut r)?),
            PacketKind::Participants => {
                PacketPayload::Participants(ParticipantsData::read(&mut r)?)
            }
            PacketKind::LapData => PacketPayload::LapData(LapData::read_all(&mut r)?),
            PacketKind::CarTelemetry => {
                PacketPayload::CarTelemetry(CarTelemetryData::read_all(&mut r)?)
            }
            PacketKind::CarStatus => PacketPayload::CarStatus(CarStatusData::read_all(&mut r)?),
            PacketKind::CarDamage => PacketPayload::CarDamage(CarDamageData::read_all(&mut r)?),
            PacketKind::Unknown(id) => {
                trace!(packet_id = id, len = raw.len(), "no decoder for packet id");
                PacketPayload::Unknown
            }
        };
        Ok(Self { header, payload })
    }

    pub fn kind(&self) -> PacketKind {
        self.header.kind()
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self.payload, PacketPayload::Unknown)
    }

    pub fn session(&self) -> Option<&SessionData> {
        match &self.payload {
            PacketPayload::Session(s) => Some(s),
            _ => None,
        }
    }

    pub fn participants(&self) -> Option<&ParticipantsData> {
        match &self.payload {
            PacketPayload::Participants(p) => Some(p),
            _ => None,
        }
    }

    pub fn lap_data(&self) -> Option<&[LapData]> {
        match &self.payload {
            PacketPayload::LapData(laps) => Some(laps),
            _ => None,
        }
    }

    pub fn car_telemetry(&self) -> Option<&[CarTelemetryData]> {
        match &self.payload {
            PacketPayload::CarTelemetry(cars) => Some(cars),
            _ => None,
        }
    }

    pub fn car_status(&self) -> Option<&[CarStatusData]> {
        match &self.payload {
            PacketPayload::CarStatus(cars) => Some(cars),
            _ => None,
        }
    }

    pub fn car_damage(&self) -> Option<&[CarDamageData]> {
        match &self.payload {
            PacketPayload::CarDamage(cars) => Some(cars),
            _ => None,
        }
    }
}

/// Decodes one raw datagram. Shorthand for [`DecodedPacket::decode`].
pub fn decode_packet(raw: &[u8]) -> DecodeResult<DecodedPacket> {
    DecodedPacket::decode(raw)
}
