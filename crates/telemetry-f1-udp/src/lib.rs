//! EA F1 24 UDP telemetry decoder.
//!
//! Byte-exact, I/O-free decoding of the Codemasters/EA binary UDP protocol
//! (packet format `2024`). Every datagram starts with a 29-byte
//! [`PacketHeader`]; the header's packet id selects the body layout.
//!
//! ## Supported packet types
//!
//! | Packet ID | Name          | Entry stride | Fields kept                                   |
//! |-----------|---------------|--------------|-----------------------------------------------|
//! | 1         | Session       | (single)     | weather, temperatures, laps, track, sectors   |
//! | 2         | Lap Data      | 57 bytes     | lap/sector times, distance, positions, status |
//! | 4         | Participants  | 57 bytes     | driver name                                   |
//! | 6         | Car Telemetry | 60 bytes     | speed, throttle, steer, brake, gear, RPM      |
//! | 7         | Car Status    | 55 bytes     | fuel, tyre compound, tyre age                 |
//! | 10        | Car Damage    | 42 bytes     | tyre wear                                     |
//!
//! Any other packet id decodes to [`PacketPayload::Unknown`] rather than an
//! error.
//!
//! ## Stride rule
//!
//! Per-car decoders walk every field of an entry in wire order and then pad
//! to the declared entry size, so each entry consumes exactly its stride no
//! matter how many fields are kept. Per-car arrays always hold 22 entries.
//!
//! # Example
//!
//! ```
//! use racing_telemetry_f1_udp::{PacketKind, builders, decode_packet};
//!
//! let raw = builders::build_car_telemetry_packet(12.0, 42, &[]);
//! let packet = decode_packet(&raw)?;
//! assert_eq!(packet.kind(), PacketKind::CarTelemetry);
//! assert_eq!(packet.car_telemetry().map(<[_]>::len), Some(22));
//! # Ok::<(), racing_telemetry_f1_udp::DecodeError>(())
//! ```

#![deny(static_mut_refs)]

pub mod builders;
pub mod car_damage;
pub mod car_status;
pub mod car_telemetry;
pub mod cursor;
pub mod error;
pub mod header;
pub mod lap_data;
pub mod lookup;
pub mod packet;
pub mod participants;
pub mod session;

/// Cars carried in every per-car array.
pub const NUM_CARS: usize = 22;

/// Packet format discriminator for F1 24.
pub const PACKET_FORMAT_2024: u16 = 2024;

pub use car_damage::{CAR_DAMAGE_ENTRY_SIZE, CarDamageData};
pub use car_status::{CAR_STATUS_ENTRY_SIZE, CarStatusData};
pub use car_telemetry::{CAR_TELEMETRY_ENTRY_SIZE, CarTelemetryData};
pub use cursor::ByteCursor;
pub use error::{DecodeError, DecodeResult};
pub use header::{HEADER_SIZE, PacketHeader, PacketKind, parse_header};
pub use lap_data::{LAP_DATA_ENTRY_SIZE, LapData, sector_time_ms};
pub use lookup::{track_name, tyre_compound_name};
pub use packet::{DecodedPacket, PacketPayload, decode_packet};
pub use participants::{PARTICIPANT_ENTRY_SIZE, ParticipantData, ParticipantsData};
pub use session::SessionData;
