//! Participants packet (ID 4).

use serde::Serialize;

use crate::NUM_CARS;
use crate::cursor::ByteCursor;
use crate::error::DecodeResult;

/// Size of one ParticipantData entry.
pub const PARTICIPANT_ENTRY_SIZE: usize = 57;
/// Width of the zero-terminated driver name field.
pub const PARTICIPANT_NAME_SIZE: usize = 48;

/// One car's participant entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ParticipantData {
    /// Display name, without trailing NUL padding.
    pub name: String,
}

impl ParticipantData {
    /// Reads one entry, consuming exactly [`PARTICIPANT_ENTRY_SIZE`] bytes.
    pub fn read(r: &mut ByteCursor<'_>) -> DecodeResult<Self> {
        r.record("ParticipantData", PARTICIPANT_ENTRY_SIZE, |r| {
            r.skip(1)?; // aiControlled
            r.skip(1)?; // driverId
            r.skip(1)?; // networkId
            r.skip(1)?; // teamId
            r.skip(1)?; // myTeam
            r.skip(1)?; // raceNumber
            r.skip(1)?; // nationality
            let name = r.fixed_str(PARTICIPANT_NAME_SIZE)?;
            r.skip(1)?; // yourTelemetry
            r.skip(1)?; // showOnlineNames
            Ok(Self { name })
        })
    }
}

/// Decoded Participants body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ParticipantsData {
    /// Cars the game reports as active; entries beyond this are still decoded.
    pub num_active_cars: u8,
    /// Entries in slot order. Shorter than 22 only when the datagram was.
    pub participants: Vec<ParticipantData>,
}

impl ParticipantsData {
    /// Reads the active-car count followed by up to 22 entries.
    ///
    /// Stops early, without error, once less than one full entry remains.
    pub fn read(r: &mut ByteCursor<'_>) -> DecodeResult<Self> {
        let num_active_cars = r.u8()?;
        let mut participants = Vec::with_capacity(NUM_CARS);
        for _ in 0..NUM_CARS {
            if r.remaining() < PARTICIPANT_ENTRY_SIZE {
                break;
            }
            participants.push(ParticipantData::read(r)?);
        }
        Ok(Self {
            num_active_cars,
            participants,
        })
    }

    /// Driver name for `slot`, if the entry was present.
    pub fn name(&self, slot: usize) -> Option<&str> {
        self.participants.get(slot).map(|p| p.name.as_str())
    }
}
