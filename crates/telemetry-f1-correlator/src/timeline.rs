//! Session snapshots ordered by session time.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use racing_telemetry_f1_udp::SessionData;

/// Session time in seconds, totally ordered so it can key a map.
#[derive(Debug, Clone, Copy)]
pub struct SessionTime(pub f32);

impl PartialEq for SessionTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SessionTime {}

impl PartialOrd for SessionTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SessionTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Accumulated session snapshots; never pruned.
#[derive(Debug, Clone, Default)]
pub struct SessionTimeline {
    snapshots: BTreeMap<SessionTime, SessionData>,
}

impl SessionTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the snapshot recorded at `session_time`.
    pub fn upsert(&mut self, session_time: f32, snapshot: SessionData) {
        self.snapshots.insert(SessionTime(session_time), snapshot);
    }

    /// Latest snapshot at or before `session_time`.
    pub fn at(&self, session_time: f32) -> Option<&SessionData> {
        self.snapshots
            .range(..=SessionTime(session_time))
            .next_back()
            .map(|(_, snapshot)| snapshot)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
