//! Correlator configuration.
//!
//! Loaded from YAML (JSON parses too), with environment overrides applied on
//! top. Missing keys take their defaults.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Per-slot retained-frame cap used when none is configured.
pub const DEFAULT_RETAINED_FRAMES: usize = 1500;
/// Session type code for a race.
pub const RACE_SESSION_TYPE: u8 = 15;

pub const ENV_RETAINED_FRAMES: &str = "F1_CORRELATOR_RETAINED_FRAMES";
pub const ENV_SESSION_TYPE: &str = "F1_CORRELATOR_SESSION_TYPE";

/// Tunables for [`crate::FrameCorrelator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelatorConfig {
    /// Frames kept per car slot in each sample buffer.
    pub retained_frames: usize,
    /// Rows are only emitted while the resolved session has this type.
    pub target_session_type: u8,
    /// Driver names to emit rows for, matched case-insensitively.
    /// Empty admits every named driver.
    pub drivers: Vec<String>,
}

impl Default for CorrelatorConfig {
    fn default() -> Self {
        Self {
            retained_frames: DEFAULT_RETAINED_FRAMES,
            target_session_type: RACE_SESSION_TYPE,
            drivers: Vec::new(),
        }
    }
}

impl CorrelatorConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("invalid correlator config")
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read correlator config {}", path.display()))?;
        Self::from_yaml_str(&text)
            .with_context(|| format!("failed to parse correlator config {}", path.display()))
    }

    /// Builder-style allow-list setter.
    pub fn with_drivers<I, S>(mut self, drivers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.drivers = drivers.into_iter().map(Into::into).collect();
        self
    }

    /// Apply `F1_CORRELATOR_*` environment overrides.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable source.
    ///
    /// Unparseable or zero values leave the current setting in place.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(frames) = parse_nonzero::<usize>(lookup(ENV_RETAINED_FRAMES)) {
            self.retained_frames = frames;
        }
        if let Some(session_type) = parse_nonzero::<u8>(lookup(ENV_SESSION_TYPE)) {
            self.target_session_type = session_type;
        }
        self
    }

    /// The cap actually enforced; a configured 0 retains one frame.
    pub fn effective_retained_frames(&self) -> usize {
        self.retained_frames.max(1)
    }

    pub(crate) fn allow_list(&self) -> DriverAllowList {
        DriverAllowList::new(&self.drivers)
    }
}

fn parse_nonzero<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr + Default + PartialEq,
{
    value
        .and_then(|v| v.trim().parse::<T>().ok())
        .filter(|v| *v != T::default())
}

/// Case-insensitive driver-name filter.
#[derive(Debug, Clone, Default)]
pub(crate) struct DriverAllowList {
    names: HashSet<String>,
}

impl DriverAllowList {
    fn new(drivers: &[String]) -> Self {
        Self {
            names: drivers
                .iter()
                .map(|d| d.trim().to_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }

    /// Unnamed slots never qualify.
    pub(crate) fn admits(&self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.names.is_empty() || self.names.contains(&name.to_lowercase())
    }
}
