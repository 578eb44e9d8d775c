//! The joined per-car, per-frame output record.

use racing_telemetry_f1_udp::{
    CarDamageData, CarStatusData, CarTelemetryData, LapData, SessionData,
};
use serde::Serialize;

/// One car at one simulation tick, with its session context attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelatedRow {
    /// Caller-supplied wall clock, Unix milliseconds.
    pub timestamp_ms: u64,
    pub session_uid: u64,
    pub session_time: f32,
    pub frame_identifier: u32,
    pub car_index: u8,
    pub driver: String,
    pub track_name: &'static str,
    pub session: SessionData,
    pub lap: LapData,
    /// May be negative when the game reports inconsistent sector times.
    pub sector3_time_ms: i64,
    /// 0-based sector the car is currently in.
    pub current_sector: u8,
    pub telemetry: CarTelemetryData,
    pub status: CarStatusData,
    pub damage: CarDamageData,
}

impl CorrelatedRow {
    pub fn sector3_is_valid(&self) -> bool {
        self.sector3_time_ms >= 0
    }

    pub fn tyre_compound_name(&self) -> &'static str {
        racing_telemetry_f1_udp::tyre_compound_name(self.status.actual_tyre_compound)
    }
}

/// Last lap minus sectors 1 and 2, or 0 before a lap has been completed.
pub fn sector3_time_ms(lap: &LapData) -> i64 {
    if lap.last_lap_time_ms == 0 {
        return 0;
    }
    i64::from(lap.last_lap_time_ms)
        - i64::from(lap.sector1_time_ms)
        - i64::from(lap.sector2_time_ms)
}

/// Sector index from lap distance and the session's sector start fractions.
pub fn current_sector(lap: &LapData, session: &SessionData) -> u8 {
    if session.track_length == 0 {
        return 0;
    }
    let length = f64::from(session.track_length);
    let distance = f64::from(lap.lap_distance);
    if distance >= f64::from(session.sector3_lap_distance_start) * length {
        2
    } else if distance >= f64::from(session.sector2_lap_distance_start) * length {
        1
    } else {
        0
    }
}
