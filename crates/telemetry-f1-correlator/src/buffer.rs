//! Per-slot, frame-keyed sample buffers with bounded retention.

use std::collections::BTreeMap;

use racing_telemetry_f1_udp::NUM_CARS;
use tracing::trace;

/// Samples of one kind, keyed by (car slot, frame id).
///
/// Each slot keeps at most `cap` frames. When an insert pushes a slot past
/// the cap, the entry with the smallest frame id is dropped, regardless of
/// insertion order.
#[derive(Debug, Clone)]
pub struct FrameBuffer<T> {
    slots: Vec<BTreeMap<u32, T>>,
    cap: usize,
}

impl<T> FrameBuffer<T> {
    /// `cap` below 1 is treated as 1.
    pub fn new(cap: usize) -> Self {
        Self {
            slots: (0..NUM_CARS).map(|_| BTreeMap::new()).collect(),
            cap: cap.max(1),
        }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Insert or replace the sample at `(slot, frame)`.
    ///
    /// Returns the number of entries evicted (0 or 1). Out-of-range slots are
    /// ignored.
    pub fn upsert(&mut self, slot: usize, frame: u32, sample: T) -> usize {
        let Some(frames) = self.slots.get_mut(slot) else {
            return 0;
        };
        frames.insert(frame, sample);
        let mut evicted = 0;
        while frames.len() > self.cap {
            if let Some((oldest, _)) = frames.pop_first() {
                trace!(slot, frame = oldest, "evicted buffered frame");
                evicted += 1;
            }
        }
        evicted
    }

    pub fn get(&self, slot: usize, frame: u32) -> Option<&T> {
        self.slots.get(slot)?.get(&frame)
    }

    /// Frame ids held for `slot`, ascending.
    pub fn frames(&self, slot: usize) -> Vec<u32> {
        self.slots
            .get(slot)
            .map(|frames| frames.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn slot_len(&self, slot: usize) -> usize {
        self.slots.get(slot).map_or(0, BTreeMap::len)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(BTreeMap::is_empty)
    }
}
