//! Snapshot of a fully populated correlated row.
//!
//! Every float in the fixture is exactly representable so the decoded values
//! print identically on every platform.

use racing_telemetry_f1_correlator::{CorrelatorConfig, FrameCorrelator};
use racing_telemetry_f1_udp::builders::{
    build_car_damage_packet, build_car_status_packet, build_car_telemetry_packet,
    build_lap_data_packet, build_participants_packet, build_session_packet,
};
use racing_telemetry_f1_udp::{
    CarDamageData, CarStatusData, CarTelemetryData, LapData, SessionData,
};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn snapshot_correlated_race_row() -> TestResult {
    let session = SessionData {
        weather: 0,
        track_temperature: 30,
        air_temperature: 22,
        total_laps: 44,
        track_length: 1000,
        session_type: 15,
        track_id: 10,
        sector2_lap_distance_start: 0.25,
        sector3_lap_distance_start: 0.75,
    };
    let lap = LapData {
        last_lap_time_ms: 80_000,
        current_lap_time_ms: 12_500,
        sector1_time_ms: 25_000,
        sector2_time_ms: 30_000,
        lap_distance: 500.0,
        car_position: 1,
        current_lap_num: 3,
        pit_status: 0,
        grid_position: 2,
        driver_status: 4,
    };
    let telemetry = CarTelemetryData {
        speed_kmh: 250,
        throttle: 1.0,
        steer: -0.5,
        brake: 0.0,
        gear: 7,
        engine_rpm: 11_500,
    };
    let status = CarStatusData {
        fuel_in_tank: 40.5,
        fuel_remaining_laps: 12.25,
        actual_tyre_compound: 16,
        tyres_age_laps: 4,
    };
    let damage = CarDamageData {
        tyres_wear_fl: 1.5,
        tyres_wear_fr: 2.5,
        tyres_wear_rl: 3.0,
        tyres_wear_rr: 4.0,
    };

    let mut c = FrameCorrelator::new(CorrelatorConfig::default().with_drivers(["leclerc"]));
    c.ingest_datagram(&build_session_packet(1.0, 40, &session), 1_700_000_000_000)?;
    c.ingest_datagram(
        &build_participants_packet(1.0, 40, &["LECLERC", "SAINZ"]),
        1_700_000_000_001,
    )?;
    c.ingest_datagram(&build_lap_data_packet(2.0, 42, &[(0, lap)]), 1_700_000_000_002)?;
    c.ingest_datagram(&build_car_status_packet(2.0, 42, &[(0, status)]), 1_700_000_000_002)?;
    c.ingest_datagram(&build_car_damage_packet(2.0, 42, &[(0, damage)]), 1_700_000_000_002)?;
    let rows = c.ingest_datagram(
        &build_car_telemetry_packet(2.0, 42, &[(0, telemetry), (1, telemetry)]),
        1_700_000_000_003,
    )?;

    assert_eq!(rows.len(), 1);
    let row = rows.first().ok_or("expected one row")?;
    insta::assert_debug_snapshot!("correlated_race_row", row);
    Ok(())
}
