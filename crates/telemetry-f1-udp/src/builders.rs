//! Wire encoders for building synthetic packets.
//!
//! These write the exact packet format 2024 layouts the decoders read, with
//! every field the decoders skip left zeroed. They exist for tests and for
//! replay fixtures; nothing in the decode path depends on them.

use crate::car_damage::{CAR_DAMAGE_ENTRY_SIZE, CarDamageData};
use crate::car_status::{CAR_STATUS_ENTRY_SIZE, CarStatusData};
use crate::car_telemetry::{CAR_TELEMETRY_ENTRY_SIZE, CAR_TELEMETRY_TRAILER_SIZE, CarTelemetryData};
use crate::header::{HEADER_SIZE, PacketKind};
use crate::lap_data::{LAP_DATA_ENTRY_SIZE, LAP_DATA_TRAILER_SIZE, LapData};
use crate::participants::{PARTICIPANT_ENTRY_SIZE, PARTICIPANT_NAME_SIZE};
use crate::session::{SESSION_PACKET_SIZE, SESSION_SKIPPED_BLOCK_SIZE, SessionData};
use crate::{NUM_CARS, PACKET_FORMAT_2024};

/// Session UID stamped into every built header.
pub const TEST_SESSION_UID: u64 = 0x00C0_FFEE_F124_0001;

fn put(buf: &mut [u8], offset: usize, bytes: &[u8]) {
    if let Some(dst) = buf.get_mut(offset..offset + bytes.len()) {
        dst.copy_from_slice(bytes);
    }
}

/// Build a 29-byte header for `kind` at the given session time and frame.
pub fn build_header_bytes(kind: PacketKind, session_time: f32, frame_id: u32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_SIZE);
    buf.extend_from_slice(&PACKET_FORMAT_2024.to_le_bytes()); // 0-1
    buf.push(24); // gameYear (2)
    buf.push(1); // gameMajorVersion (3)
    buf.push(0); // gameMinorVersion (4)
    buf.push(1); // packetVersion (5)
    buf.push(kind.id()); // 6
    buf.extend_from_slice(&TEST_SESSION_UID.to_le_bytes()); // sessionUID (7-14)
    buf.extend_from_slice(&session_time.to_le_bytes()); // sessionTime (15-18)
    buf.extend_from_slice(&frame_id.to_le_bytes()); // frameIdentifier (19-22)
    buf.extend_from_slice(&frame_id.to_le_bytes()); // overallFrameIdentifier (23-26)
    buf.push(0); // playerCarIndex (27)
    buf.push(255); // secondaryPlayerCarIndex (28)
    buf
}

/// Build a full 753-byte Session packet.
pub fn build_session_packet(session_time: f32, frame_id: u32, session: &SessionData) -> Vec<u8> {
    let mut buf = build_header_bytes(PacketKind::Session, session_time, frame_id);
    buf.push(session.weather);
    buf.extend_from_slice(&session.track_temperature.to_le_bytes());
    buf.extend_from_slice(&session.air_temperature.to_le_bytes());
    buf.push(session.total_laps);
    buf.extend_from_slice(&session.track_length.to_le_bytes());
    buf.push(session.session_type);
    buf.extend_from_slice(&session.track_id.to_le_bytes());
    buf.extend(std::iter::repeat_n(0u8, SESSION_SKIPPED_BLOCK_SIZE));
    buf.extend_from_slice(&session.sector2_lap_distance_start.to_le_bytes());
    buf.extend_from_slice(&session.sector3_lap_distance_start.to_le_bytes());
    debug_assert_eq!(buf.len(), SESSION_PACKET_SIZE);
    buf
}

/// Encode one 57-byte ParticipantData entry.
///
/// Names longer than the field are cut at [`PARTICIPANT_NAME_SIZE`] bytes.
pub fn encode_participant(name: &str) -> Vec<u8> {
    let mut buf = vec![0u8; PARTICIPANT_ENTRY_SIZE];
    let bytes = name.as_bytes();
    let len = bytes.len().min(PARTICIPANT_NAME_SIZE);
    put(&mut buf, 7, bytes.get(..len).unwrap_or_default());
    buf
}

/// Build a Participants packet naming slots `0..names.len()`.
///
/// The active-car count is `names.len()`; the remaining slots carry empty
/// names, as the game sends them.
pub fn build_participants_packet(session_time: f32, frame_id: u32, names: &[&str]) -> Vec<u8> {
    let mut buf = build_header_bytes(PacketKind::Participants, session_time, frame_id);
    buf.push(u8::try_from(names.len()).unwrap_or(u8::MAX));
    for slot in 0..NUM_CARS {
        buf.extend(encode_participant(names.get(slot).copied().unwrap_or("")));
    }
    buf
}

/// Encode one 57-byte LapData entry, splitting sector times into
/// minutes and millisecond remainder.
pub fn encode_lap_data(lap: &LapData) -> Vec<u8> {
    let split = |ms: u32| {
        let minutes = u8::try_from(ms / 60_000).unwrap_or(u8::MAX);
        let remainder = u16::try_from(ms % 60_000).unwrap_or(0);
        (minutes, remainder)
    };
    let (s1_min, s1_ms) = split(lap.sector1_time_ms);
    let (s2_min, s2_ms) = split(lap.sector2_time_ms);

    let mut buf = vec![0u8; LAP_DATA_ENTRY_SIZE];
    put(&mut buf, 0, &lap.last_lap_time_ms.to_le_bytes());
    put(&mut buf, 4, &lap.current_lap_time_ms.to_le_bytes());
    put(&mut buf, 8, &s1_ms.to_le_bytes());
    put(&mut buf, 10, &[s1_min]);
    put(&mut buf, 11, &s2_ms.to_le_bytes());
    put(&mut buf, 13, &[s2_min]);
    // deltaToCarInFront (14-16), deltaToRaceLeader (17-19)
    put(&mut buf, 20, &lap.lap_distance.to_le_bytes());
    // totalDistance (24-27), safetyCarDelta (28-31)
    put(&mut buf, 32, &[lap.car_position]);
    put(&mut buf, 33, &[lap.current_lap_num]);
    put(&mut buf, 34, &[lap.pit_status]);
    // numPitStops .. numUnservedStopGoPens (35-42)
    put(&mut buf, 43, &[lap.grid_position]);
    put(&mut buf, 44, &[lap.driver_status]);
    // resultStatus .. speedTrapFastestLap (45-56)
    buf
}

/// Encode one 60-byte CarTelemetryData entry.
pub fn encode_car_telemetry(car: &CarTelemetryData) -> Vec<u8> {
    let mut buf = vec![0u8; CAR_TELEMETRY_ENTRY_SIZE];
    put(&mut buf, 0, &car.speed_kmh.to_le_bytes());
    put(&mut buf, 2, &car.throttle.to_le_bytes());
    put(&mut buf, 6, &car.steer.to_le_bytes());
    put(&mut buf, 10, &car.brake.to_le_bytes());
    // clutch (14)
    put(&mut buf, 15, &car.gear.to_le_bytes());
    put(&mut buf, 16, &car.engine_rpm.to_le_bytes());
    buf
}

/// Encode one 55-byte CarStatusData entry.
pub fn encode_car_status(status: &CarStatusData) -> Vec<u8> {
    let mut buf = vec![0u8; CAR_STATUS_ENTRY_SIZE];
    put(&mut buf, 5, &status.fuel_in_tank.to_le_bytes());
    // fuelCapacity (9-12)
    put(&mut buf, 13, &status.fuel_remaining_laps.to_le_bytes());
    put(&mut buf, 25, &[status.actual_tyre_compound]);
    put(&mut buf, 27, &[status.tyres_age_laps]);
    buf
}

/// Encode one 42-byte CarDamageData entry (wear in RL, RR, FL, FR order).
pub fn encode_car_damage(damage: &CarDamageData) -> Vec<u8> {
    let mut buf = vec![0u8; CAR_DAMAGE_ENTRY_SIZE];
    put(&mut buf, 0, &damage.tyres_wear_rl.to_le_bytes());
    put(&mut buf, 4, &damage.tyres_wear_rr.to_le_bytes());
    put(&mut buf, 8, &damage.tyres_wear_fl.to_le_bytes());
    put(&mut buf, 12, &damage.tyres_wear_fr.to_le_bytes());
    buf
}

/// Build a 22-car packet. Slots not listed in `cars` get `T::default()`.
fn build_car_packet<T: Default>(
    kind: PacketKind,
    session_time: f32,
    frame_id: u32,
    cars: &[(usize, T)],
    encode: fn(&T) -> Vec<u8>,
    trailer: usize,
) -> Vec<u8> {
    let mut buf = build_header_bytes(kind, session_time, frame_id);
    let fallback = T::default();
    for slot in 0..NUM_CARS {
        let car = cars
            .iter()
            .rev()
            .find(|(s, _)| *s == slot)
            .map_or(&fallback, |(_, car)| car);
        buf.extend(encode(car));
    }
    buf.extend(std::iter::repeat_n(0u8, trailer));
    buf
}

/// Build a Lap Data packet with the given `(slot, lap)` entries.
pub fn build_lap_data_packet(session_time: f32, frame_id: u32, cars: &[(usize, LapData)]) -> Vec<u8> {
    build_car_packet(
        PacketKind::LapData,
        session_time,
        frame_id,
        cars,
        encode_lap_data,
        LAP_DATA_TRAILER_SIZE,
    )
}

/// Build a Car Telemetry packet with the given `(slot, telemetry)` entries.
pub fn build_car_telemetry_packet(
    session_time: f32,
    frame_id: u32,
    cars: &[(usize, CarTelemetryData)],
) -> Vec<u8> {
    build_car_packet(
        PacketKind::CarTelemetry,
        session_time,
        frame_id,
        cars,
        encode_car_telemetry,
        CAR_TELEMETRY_TRAILER_SIZE,
    )
}

/// Build a Car Status packet with the given `(slot, status)` entries.
pub fn build_car_status_packet(
    session_time: f32,
    frame_id: u32,
    cars: &[(usize, CarStatusData)],
) -> Vec<u8> {
    build_car_packet(
        PacketKind::CarStatus,
        session_time,
        frame_id,
        cars,
        encode_car_status,
        0,
    )
}

/// Build a Car Damage packet with the given `(slot, damage)` entries.
pub fn build_car_damage_packet(
    session_time: f32,
    frame_id: u32,
    cars: &[(usize, CarDamageData)],
) -> Vec<u8> {
    build_car_packet(
        PacketKind::CarDamage,
        session_time,
        frame_id,
        cars,
        encode_car_damage,
        0,
    )
}
