//! Stream correlation: buffer every packet kind by (slot, frame) and emit a
//! joined row for each qualifying car whenever car telemetry arrives.

use racing_telemetry_f1_udp::{
    CarDamageData, CarStatusData, CarTelemetryData, DecodeError, DecodedPacket, LapData,
    PacketHeader, PacketPayload, SessionData, decode_packet, track_name,
};
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::buffer::FrameBuffer;
use crate::config::{CorrelatorConfig, DriverAllowList};
use crate::roster::DriverRoster;
use crate::row::{CorrelatedRow, current_sector, sector3_time_ms};
use crate::timeline::SessionTimeline;

/// One raw datagram with the wall-clock time it was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Datagram<'a> {
    pub bytes: &'a [u8],
    /// Unix milliseconds; 0 when unknown.
    pub timestamp_ms: u64,
}

impl<'a> Datagram<'a> {
    pub fn new(bytes: &'a [u8], timestamp_ms: u64) -> Self {
        Self {
            bytes,
            timestamp_ms,
        }
    }
}

/// Counters accumulated since the correlator was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CorrelatorStats {
    /// Packets ingested after a successful decode.
    pub datagrams: u64,
    pub decode_failures: u64,
    pub unknown_packets: u64,
    pub rows_emitted: u64,
    /// Telemetry entries dropped for lack of a lap sample at the same frame.
    pub join_misses: u64,
    pub evicted_frames: u64,
}

/// Single-writer correlation state.
#[derive(Debug, Clone)]
pub struct FrameCorrelator {
    config: CorrelatorConfig,
    allow_list: DriverAllowList,
    laps: FrameBuffer<LapData>,
    statuses: FrameBuffer<CarStatusData>,
    damage: FrameBuffer<CarDamageData>,
    sessions: SessionTimeline,
    roster: DriverRoster,
    stats: CorrelatorStats,
}

impl Default for FrameCorrelator {
    fn default() -> Self {
        Self::new(CorrelatorConfig::default())
    }
}

impl FrameCorrelator {
    pub fn new(config: CorrelatorConfig) -> Self {
        let cap = config.effective_retained_frames();
        Self {
            allow_list: config.allow_list(),
            laps: FrameBuffer::new(cap),
            statuses: FrameBuffer::new(cap),
            damage: FrameBuffer::new(cap),
            sessions: SessionTimeline::new(),
            roster: DriverRoster::default(),
            stats: CorrelatorStats::default(),
            config,
        }
    }

    pub fn config(&self) -> &CorrelatorConfig {
        &self.config
    }

    pub fn stats(&self) -> CorrelatorStats {
        self.stats
    }

    /// Latest session snapshot at or before `session_time`.
    pub fn session_at(&self, session_time: f32) -> Option<&SessionData> {
        self.sessions.at(session_time)
    }

    pub fn driver_name(&self, slot: usize) -> Option<&str> {
        self.roster.name(slot)
    }

    pub fn lap_buffer(&self) -> &FrameBuffer<LapData> {
        &self.laps
    }

    pub fn status_buffer(&self) -> &FrameBuffer<CarStatusData> {
        &self.statuses
    }

    pub fn damage_buffer(&self) -> &FrameBuffer<CarDamageData> {
        &self.damage
    }

    pub fn timeline(&self) -> &SessionTimeline {
        &self.sessions
    }

    /// Apply one decoded packet. Only car telemetry produces rows.
    pub fn ingest(&mut self, packet: &DecodedPacket, timestamp_ms: u64) -> Vec<CorrelatedRow> {
        self.stats.datagrams += 1;
        let header = &packet.header;
        let frame = header.frame_identifier;

        match &packet.payload {
            PacketPayload::Session(session) => {
                debug!(
                    session_time = header.session_time,
                    session_type = session.session_type,
                    track_id = session.track_id,
                    "session snapshot"
                );
                self.sessions.upsert(header.session_time, *session);
            }
            PacketPayload::Participants(participants) => {
                self.roster.replace(participants);
                debug!(
                    active = participants.num_active_cars,
                    named = self.roster.named_slots(),
                    "driver roster replaced"
                );
            }
            PacketPayload::LapData(laps) => {
                self.stats.evicted_frames += upsert_all(&mut self.laps, frame, laps);
            }
            PacketPayload::CarStatus(statuses) => {
                self.stats.evicted_frames += upsert_all(&mut self.statuses, frame, statuses);
            }
            PacketPayload::CarDamage(damage) => {
                self.stats.evicted_frames += upsert_all(&mut self.damage, frame, damage);
            }
            PacketPayload::CarTelemetry(cars) => {
                let rows = self.join(header, cars, timestamp_ms);
                self.stats.rows_emitted += rows.len() as u64;
                return rows;
            }
            PacketPayload::Unknown => {
                self.stats.unknown_packets += 1;
                debug!(packet_id = header.packet_id, "ignoring unhandled packet");
            }
        }
        Vec::new()
    }

    /// Decode and ingest one datagram.
    pub fn ingest_datagram(
        &mut self,
        raw: &[u8],
        timestamp_ms: u64,
    ) -> Result<Vec<CorrelatedRow>, DecodeError> {
        match decode_packet(raw) {
            Ok(packet) => Ok(self.ingest(&packet, timestamp_ms)),
            Err(e) => {
                self.stats.decode_failures += 1;
                Err(e)
            }
        }
    }

    /// Scan a datagram stream in order, skipping any that fail to decode.
    pub fn correlate<'a, I>(&mut self, datagrams: I) -> Vec<CorrelatedRow>
    where
        I: IntoIterator<Item = Datagram<'a>>,
    {
        let mut rows = Vec::new();
        for datagram in datagrams {
            match self.ingest_datagram(datagram.bytes, datagram.timestamp_ms) {
                Ok(mut emitted) => rows.append(&mut emitted),
                Err(e) => warn!(error = %e, len = datagram.bytes.len(), "skipping datagram"),
            }
        }
        rows
    }

    fn join(
        &mut self,
        header: &PacketHeader,
        cars: &[CarTelemetryData],
        timestamp_ms: u64,
    ) -> Vec<CorrelatedRow> {
        let frame = header.frame_identifier;
        let session = self
            .sessions
            .at(header.session_time)
            .copied()
            .unwrap_or_default();
        if session.session_type != self.config.target_session_type {
            return Vec::new();
        }
        let track = track_name(session.track_id);

        let mut rows = Vec::new();
        for (slot, telemetry) in cars.iter().enumerate() {
            let Some(driver) = self.roster.name(slot) else {
                continue;
            };
            if !self.allow_list.admits(driver) || telemetry.speed_kmh == 0 {
                continue;
            }
            let Some(lap) = self.laps.get(slot, frame) else {
                self.stats.join_misses += 1;
                trace!(slot, frame, driver, "no lap sample for telemetry frame");
                continue;
            };
            let Ok(car_index) = u8::try_from(slot) else {
                continue;
            };
            rows.push(CorrelatedRow {
                timestamp_ms,
                session_uid: header.session_uid,
                session_time: header.session_time,
                frame_identifier: frame,
                car_index,
                driver: driver.trim().to_string(),
                track_name: track,
                session,
                lap: *lap,
                sector3_time_ms: sector3_time_ms(lap),
                current_sector: current_sector(lap, &session),
                telemetry: *telemetry,
                status: self.statuses.get(slot, frame).copied().unwrap_or_default(),
                damage: self.damage.get(slot, frame).copied().unwrap_or_default(),
            });
        }
        rows
    }
}

fn upsert_all<T: Copy>(buffer: &mut FrameBuffer<T>, frame: u32, samples: &[T]) -> u64 {
    let evicted: usize = samples
        .iter()
        .enumerate()
        .map(|(slot, sample)| buffer.upsert(slot, frame, *sample))
        .sum();
    evicted as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use racing_telemetry_f1_udp::builders::{
        build_car_status_packet, build_car_telemetry_packet, build_header_bytes,
        build_lap_data_packet, build_participants_packet, build_session_packet,
    };
    use racing_telemetry_f1_udp::PacketKind;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn race() -> SessionData {
        SessionData {
            session_type: 15,
            track_length: 1000,
            ..SessionData::default()
        }
    }

    fn moving(speed_kmh: u16) -> CarTelemetryData {
        CarTelemetryData {
            speed_kmh,
            ..CarTelemetryData::default()
        }
    }

    fn primed(config: CorrelatorConfig, names: &[&str]) -> Result<FrameCorrelator, DecodeError> {
        let mut c = FrameCorrelator::new(config);
        c.ingest_datagram(&build_session_packet(0.0, 0, &race()), 0)?;
        c.ingest_datagram(&build_participants_packet(0.0, 0, names), 0)?;
        Ok(c)
    }

    #[test]
    fn unknown_packets_are_counted_and_ignored() -> TestResult {
        let mut c = FrameCorrelator::default();
        let rows = c.ingest_datagram(&build_header_bytes(PacketKind::Unknown(3), 1.0, 1), 0)?;
        assert!(rows.is_empty());
        assert_eq!(c.stats().unknown_packets, 1);
        assert_eq!(c.stats().datagrams, 1);
        Ok(())
    }

    #[test]
    fn decode_failure_is_counted() {
        let mut c = FrameCorrelator::default();
        assert!(c.ingest_datagram(&[1, 2, 3], 0).is_err());
        assert_eq!(c.stats().decode_failures, 1);
        assert_eq!(c.stats().datagrams, 0);
    }

    #[test]
    fn stationary_cars_are_skipped() -> TestResult {
        let mut c = primed(CorrelatorConfig::default(), &["LECLERC"])?;
        c.ingest_datagram(&build_lap_data_packet(1.0, 5, &[(0, LapData::default())]), 0)?;
        let rows = c.ingest_datagram(&build_car_telemetry_packet(1.0, 5, &[(0, moving(0))]), 0)?;
        assert!(rows.is_empty());
        assert_eq!(c.stats().join_misses, 0);
        Ok(())
    }

    #[test]
    fn drivers_outside_allow_list_are_skipped() -> TestResult {
        let config = CorrelatorConfig::default().with_drivers(["sainz"]);
        let mut c = primed(config, &["LECLERC", "SAINZ"])?;
        let laps = [(0, LapData::default()), (1, LapData::default())];
        c.ingest_datagram(&build_lap_data_packet(1.0, 5, &laps), 0)?;
        let cars = [(0, moving(200)), (1, moving(210))];
        let rows = c.ingest_datagram(&build_car_telemetry_packet(1.0, 5, &cars), 0)?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.first().map(|r| r.driver.as_str()), Some("SAINZ"));
        assert_eq!(rows.first().map(|r| r.car_index), Some(1));
        Ok(())
    }

    #[test]
    fn non_race_session_emits_nothing() -> TestResult {
        let mut c = FrameCorrelator::default();
        let qualifying = SessionData {
            session_type: 8,
            ..race()
        };
        c.ingest_datagram(&build_session_packet(0.0, 0, &qualifying), 0)?;
        c.ingest_datagram(&build_participants_packet(0.0, 0, &["LECLERC"]), 0)?;
        c.ingest_datagram(&build_lap_data_packet(1.0, 5, &[(0, LapData::default())]), 0)?;
        let rows = c.ingest_datagram(&build_car_telemetry_packet(1.0, 5, &[(0, moving(100))]), 0)?;
        assert!(rows.is_empty());
        Ok(())
    }

    #[test]
    fn no_session_yet_means_no_rows_for_race_target() -> TestResult {
        let mut c = FrameCorrelator::default();
        c.ingest_datagram(&build_participants_packet(0.0, 0, &["LECLERC"]), 0)?;
        c.ingest_datagram(&build_lap_data_packet(1.0, 5, &[(0, LapData::default())]), 0)?;
        let rows = c.ingest_datagram(&build_car_telemetry_packet(1.0, 5, &[(0, moving(100))]), 0)?;
        assert!(rows.is_empty());
        Ok(())
    }

    #[test]
    fn status_joins_at_the_same_frame_only() -> TestResult {
        let mut c = primed(CorrelatorConfig::default(), &["LECLERC"])?;
        let status = CarStatusData {
            fuel_in_tank: 42.5,
            actual_tyre_compound: 16,
            ..CarStatusData::default()
        };
        c.ingest_datagram(&build_car_status_packet(1.0, 4, &[(0, status)]), 0)?;
        c.ingest_datagram(&build_lap_data_packet(1.0, 5, &[(0, LapData::default())]), 0)?;
        let rows = c.ingest_datagram(&build_car_telemetry_packet(1.0, 5, &[(0, moving(100))]), 0)?;
        let row = rows.first().ok_or("expected a row")?;
        assert_eq!(row.status, CarStatusData::default());
        assert_eq!(row.damage, CarDamageData::default());

        c.ingest_datagram(&build_car_status_packet(1.0, 6, &[(0, status)]), 0)?;
        c.ingest_datagram(&build_lap_data_packet(1.0, 6, &[(0, LapData::default())]), 0)?;
        let rows = c.ingest_datagram(&build_car_telemetry_packet(1.0, 6, &[(0, moving(100))]), 0)?;
        let row = rows.first().ok_or("expected a row")?;
        assert_eq!(row.status, status);
        assert_eq!(row.tyre_compound_name(), "C5");
        Ok(())
    }

    #[test]
    fn correlate_skips_bad_datagrams_and_keeps_going() -> TestResult {
        let mut c = primed(CorrelatorConfig::default(), &["LECLERC"])?;
        let lap = build_lap_data_packet(1.0, 9, &[(0, LapData::default())]);
        let telem = build_car_telemetry_packet(1.0, 9, &[(0, moving(180))]);
        let garbage = [0u8; 7];
        let rows = c.correlate([
            Datagram::new(&lap, 1),
            Datagram::new(&garbage, 2),
            Datagram::new(&telem, 3),
        ]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.first().map(|r| r.timestamp_ms), Some(3));
        assert_eq!(c.stats().decode_failures, 1);
        assert_eq!(c.stats().rows_emitted, 1);
        Ok(())
    }
}
