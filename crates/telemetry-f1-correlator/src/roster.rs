//! Current driver names by car slot.

use racing_telemetry_f1_udp::ParticipantsData;

/// Names from the most recent Participants packet.
#[derive(Debug, Clone, Default)]
pub struct DriverRoster {
    names: Vec<String>,
}

impl DriverRoster {
    /// Discard the previous roster and adopt `participants` by position.
    pub fn replace(&mut self, participants: &ParticipantsData) {
        self.names = participants
            .participants
            .iter()
            .map(|p| p.name.clone())
            .collect();
    }

    pub fn name(&self, slot: usize) -> Option<&str> {
        self.names.get(slot).map(String::as_str)
    }

    /// Slots that carry a non-empty name.
    pub fn named_slots(&self) -> usize {
        self.names.iter().filter(|n| !n.trim().is_empty()).count()
    }
}
