//! Minimized-window anchoring and anti-collision.
//!
//! A minimized window is anchored to the bottom-right corner of its container. If the centre of
//! the candidate rectangle lands on another window's container or title bar, the candidate is
//! lifted above that occupant so freshly minimized windows stack upward. The probe looks through
//! the placing window, whose pre-minimize rectangle may still cover the anchor.

use serde::{Deserialize, Serialize};

use crate::{
    model::{ContainerBounds, EffectiveSize, Position, Rect, WindowId, MINIMIZED_MARGIN},
    registry::SiblingRegistry,
};

const DEFAULT_MAX_PROBES: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PlacementStrategy {
    /// Probe the anchor once; a third minimized window may still overlap the second.
    #[default]
    SinglePass,
    /// Keep probing upward while an occupant is found.
    Iterative { max_probes: u32 },
}

impl PlacementStrategy {
    pub fn iterative() -> Self {
        Self::Iterative {
            max_probes: DEFAULT_MAX_PROBES,
        }
    }

    fn max_probes(self) -> u32 {
        match self {
            Self::SinglePass => 1,
            Self::Iterative { max_probes } => max_probes.max(1),
        }
    }
}

/// Bottom-right anchor for a minimized footprint, before collision checks.
pub fn minimized_anchor(container: ContainerBounds, size: EffectiveSize) -> Position {
    Position {
        top: container.height - size.height - MINIMIZED_MARGIN,
        left: container.width - size.width - MINIMIZED_MARGIN,
    }
}

/// Final top-left corner for a window of `size` entering the minimized state.
///
/// The placing window is excluded from hit tests. A lift that would cross the container top is
/// clamped to `0` and ends the search.
pub fn place_minimized(
    registry: &dyn SiblingRegistry,
    own_id: &WindowId,
    container: ContainerBounds,
    size: EffectiveSize,
    strategy: PlacementStrategy,
) -> Position {
    let mut candidate = minimized_anchor(container, size);

    for _ in 0..strategy.max_probes() {
        let (x, y) = Rect::new(candidate, size).center();
        let Some(hit) = registry.hit_test(x, y, Some(own_id)) else {
            break;
        };
        if !hit.role.occupies() {
            break;
        }
        let lifted = candidate
            .top
            .saturating_sub(hit.rendered_height.saturating_add(MINIMIZED_MARGIN));
        if lifted < 0 {
            candidate.top = 0;
            break;
        }
        candidate.top = lifted;
    }

    candidate
}
