//! Property-based fuzz tests for F1 UDP packet decoding.
//!
//! Ensures the decoder never panics on arbitrary input and that every
//! per-car entry consumes exactly its declared stride whatever it contains.

use proptest::prelude::*;
use racing_telemetry_f1_udp::builders::build_header_bytes;
use racing_telemetry_f1_udp::{
    ByteCursor, CAR_DAMAGE_ENTRY_SIZE, CAR_STATUS_ENTRY_SIZE, CAR_TELEMETRY_ENTRY_SIZE,
    CarDamageData, CarStatusData, CarTelemetryData, HEADER_SIZE, LAP_DATA_ENTRY_SIZE, LapData,
    PARTICIPANT_ENTRY_SIZE, PacketKind, ParticipantData, decode_packet, sector_time_ms,
};

const F1_PACKET_MAX: usize = 2048;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Arbitrary random bytes of any length must never cause a panic.
    #[test]
    fn prop_random_bytes_no_panic(
        data in proptest::collection::vec(any::<u8>(), 0..F1_PACKET_MAX)
    ) {
        let _ = decode_packet(&data);
    }

    /// A valid header for every known kind followed by random body bytes
    /// must either decode or fail cleanly.
    #[test]
    fn prop_known_kind_random_body_no_panic(
        id in prop::sample::select(vec![1u8, 2, 4, 6, 7, 10]),
        body in proptest::collection::vec(any::<u8>(), 0..F1_PACKET_MAX)
    ) {
        let mut raw = build_header_bytes(PacketKind::from(id), 0.0, 0);
        raw.extend_from_slice(&body);
        if let Ok(packet) = decode_packet(&raw) {
            prop_assert_eq!(packet.kind().id(), id);
        }
    }

    #[test]
    fn prop_header_never_reads_past_29_bytes(
        data in proptest::collection::vec(any::<u8>(), HEADER_SIZE..HEADER_SIZE + 64)
    ) {
        let mut c = ByteCursor::new(&data);
        prop_assert!(racing_telemetry_f1_udp::PacketHeader::read(&mut c).is_ok());
        prop_assert_eq!(c.offset(), HEADER_SIZE);
    }

    #[test]
    fn prop_entry_stride_invariant(
        data in proptest::collection::vec(any::<u8>(), 64..=64)
    ) {
        let mut c = ByteCursor::new(&data);
        prop_assert!(LapData::read(&mut c).is_ok());
        prop_assert_eq!(c.offset(), LAP_DATA_ENTRY_SIZE);

        let mut c = ByteCursor::new(&data);
        prop_assert!(CarTelemetryData::read(&mut c).is_ok());
        prop_assert_eq!(c.offset(), CAR_TELEMETRY_ENTRY_SIZE);

        let mut c = ByteCursor::new(&data);
        prop_assert!(CarStatusData::read(&mut c).is_ok());
        prop_assert_eq!(c.offset(), CAR_STATUS_ENTRY_SIZE);

        let mut c = ByteCursor::new(&data);
        prop_assert!(CarDamageData::read(&mut c).is_ok());
        prop_assert_eq!(c.offset(), CAR_DAMAGE_ENTRY_SIZE);

        let mut c = ByteCursor::new(&data);
        prop_assert!(ParticipantData::read(&mut c).is_ok());
        prop_assert_eq!(c.offset(), PARTICIPANT_ENTRY_SIZE);
    }

    #[test]
    fn prop_sector_time_is_exact(minutes in any::<u8>(), ms in any::<u16>()) {
        prop_assert_eq!(
            sector_time_ms(minutes, ms),
            u32::from(minutes) * 60_000 + u32::from(ms)
        );
    }
}
