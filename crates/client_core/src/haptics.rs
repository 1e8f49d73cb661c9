//! Best-effort haptic feedback requests emitted to the host.

use std::{
    sync::{Mutex, PoisonError},
    time::Duration,
};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticPulse {
    Vote,
    NavigationTap,
}

impl HapticPulse {
    pub fn duration(self) -> Duration {
        match self {
            Self::Vote => Duration::from_millis(50),
            Self::NavigationTap => Duration::from_millis(10),
        }
    }
}

/// Fire-and-forget vibration sink. Hosts without a vibration motor ignore the call.
pub trait HapticFeedback: Send + Sync {
    fn vibrate(&self, duration: Duration);

    fn pulse(&self, pulse: HapticPulse) {
        self.vibrate(pulse.duration());
    }
}

pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn vibrate(&self, _duration: Duration) {}
}

pub struct TracingHaptics;

impl HapticFeedback for TracingHaptics {
    fn vibrate(&self, duration: Duration) {
        debug!(duration_ms = duration.as_millis() as u64, "haptic pulse requested");
    }
}

#[derive(Debug, Default)]
pub struct RecordingHaptics {
    pulses: Mutex<Vec<Duration>>,
}

impl RecordingHaptics {
    pub fn pulses(&self) -> Vec<Duration> {
        self.pulses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl HapticFeedback for RecordingHaptics {
    fn vibrate(&self, duration: Duration) {
        self.pulses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(duration);
    }
}
