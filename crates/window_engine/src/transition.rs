//! Geometry transition gating.
//!
//! The first state application after mount is rendered without animation. Each later one opens
//! a transition and asks the host to clear it shortly after the nominal duration; clears that
//! arrive after a newer transition started are ignored.

use crate::model::TransitionMarker;

pub const TRANSITION_DURATION_MS: u32 = 500;
/// Delay past the nominal duration before a transition is cleared.
pub const TRANSITION_CLEAR_TICK_MS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionSchedule {
    pub generation: u64,
    pub after_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransitionGate {
    applications: u64,
    generation: u64,
}

impl TransitionGate {
    /// Records one state application and updates `marker` accordingly.
    pub fn apply(&mut self, marker: &mut TransitionMarker) -> Option<TransitionSchedule> {
        self.applications = self.applications.saturating_add(1);
        if self.applications == 1 {
            *marker = TransitionMarker::default();
            return None;
        }

        self.generation = self.generation.wrapping_add(1);
        *marker = TransitionMarker {
            active: true,
            duration_ms: TRANSITION_DURATION_MS,
        };
        Some(TransitionSchedule {
            generation: self.generation,
            after_ms: TRANSITION_DURATION_MS + TRANSITION_CLEAR_TICK_MS,
        })
    }

    /// Clears `marker` if `generation` is the latest scheduled transition.
    pub fn clear(&self, marker: &mut TransitionMarker, generation: u64) -> bool {
        if generation != self.generation || !marker.active {
            return false;
        }
        *marker = TransitionMarker::default();
        true
    }

    pub fn applications(&self) -> u64 {
        self.applications
    }
}
