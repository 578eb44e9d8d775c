//! Property tests for buffer retention and stream robustness.

use proptest::prelude::*;
use racing_telemetry_f1_correlator::{Datagram, FrameBuffer, FrameCorrelator};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Whatever order frames arrive in, a slot keeps the `cap` largest ids.
    #[test]
    fn prop_buffer_keeps_largest_frames(
        cap in 1usize..16,
        frames in proptest::collection::vec(any::<u32>(), 0..64)
    ) {
        let mut buf = FrameBuffer::new(cap);
        for frame in &frames {
            buf.upsert(0, *frame, ());
        }
        let mut expected: Vec<u32> = frames.clone();
        expected.sort_unstable();
        expected.dedup();
        let keep_from = expected.len().saturating_sub(cap);
        let expected: Vec<u32> = expected.into_iter().skip(keep_from).collect();
        prop_assert_eq!(buf.frames(0), expected);
        prop_assert!(buf.slot_len(0) <= cap);
    }

    /// Random datagrams never panic and each one is counted exactly once.
    #[test]
    fn prop_random_stream_is_harmless(
        stream in proptest::collection::vec(
            proptest::collection::vec(any::<u8>(), 0..1500),
            0..16
        )
    ) {
        let mut c = FrameCorrelator::default();
        let rows = c.correlate(stream.iter().map(|bytes| Datagram::new(bytes, 0)));
        let stats = c.stats();
        prop_assert_eq!(stats.datagrams + stats.decode_failures, stream.len() as u64);
        prop_assert_eq!(stats.rows_emitted, rows.len() as u64);
    }
}
