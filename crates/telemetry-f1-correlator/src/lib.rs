//! Frame correlation for F1 UDP telemetry.
//!
//! The game emits lap data, car status, car damage and car telemetry as
//! independent packet streams at unequal rates. [`FrameCorrelator`] buffers
//! each stream by `(car slot, frame id)` and, whenever a car telemetry packet
//! arrives, joins it with the lap sample from the same frame into a
//! [`CorrelatedRow`]. Status and damage are attached when present and
//! zero-filled otherwise; a missing lap sample drops that car for that frame.
//!
//! Session conditions come from the latest Session packet at or before the
//! telemetry packet's session time, and driver names from the most recent
//! Participants packet.
//!
//! ```
//! use racing_telemetry_f1_correlator::{CorrelatorConfig, FrameCorrelator};
//! use racing_telemetry_f1_udp::builders;
//! use racing_telemetry_f1_udp::{CarTelemetryData, LapData, SessionData};
//!
//! let mut correlator = FrameCorrelator::new(CorrelatorConfig::default());
//! let race = SessionData { session_type: 15, track_length: 1000, ..SessionData::default() };
//! let car = CarTelemetryData { speed_kmh: 250, ..CarTelemetryData::default() };
//!
//! correlator.ingest_datagram(&builders::build_session_packet(0.0, 0, &race), 0)?;
//! correlator.ingest_datagram(&builders::build_participants_packet(0.0, 0, &["LECLERC"]), 0)?;
//! correlator.ingest_datagram(&builders::build_lap_data_packet(1.0, 42, &[(0, LapData::default())]), 0)?;
//! let rows = correlator.ingest_datagram(&builders::build_car_telemetry_packet(1.0, 42, &[(0, car)]), 0)?;
//!
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].driver, "LECLERC");
//! # Ok::<(), racing_telemetry_f1_udp::DecodeError>(())
//! ```

#![deny(static_mut_refs)]

pub mod buffer;
pub mod config;
pub mod correlator;
pub mod roster;
pub mod row;
pub mod timeline;

pub use buffer::FrameBuffer;
pub use config::{CorrelatorConfig, DEFAULT_RETAINED_FRAMES, RACE_SESSION_TYPE};
pub use correlator::{CorrelatorStats, Datagram, FrameCorrelator};
pub use roster::DriverRoster;
pub use row::{CorrelatedRow, current_sector, sector3_time_ms};
pub use timeline::{SessionTime, SessionTimeline};
