//! Logical vs. rendered geometry primitives.
//!
//! These helpers are deliberately permissive: negative or out-of-container values are stored
//! as-is and clamping, if any, is left to callers.

use crate::model::{
    ContainerBounds, EffectiveSize, Geometry, GeometryPatch, LifecycleState, WindowInstance,
    MINIMIZED_HEIGHT,
};

/// Applies every `Some` field of `patch` to the logical geometry.
pub fn set_geometry(window: &mut WindowInstance, patch: GeometryPatch) {
    let geometry = &mut window.geometry;
    if let Some(top) = patch.top {
        geometry.top = top;
    }
    if let Some(left) = patch.left {
        geometry.left = left;
    }
    if let Some(width) = patch.width {
        geometry.width = width;
    }
    if let Some(height) = patch.height {
        geometry.height = height;
    }
}

/// Updates only the rendered footprint, leaving logical geometry untouched.
pub fn apply_effective(window: &mut WindowInstance, height: i32, width: i32) {
    window.effective = EffectiveSize { height, width };
}

/// Rendered footprint for `lifecycle`.
pub fn derive_effective(
    lifecycle: LifecycleState,
    logical: Geometry,
    container: ContainerBounds,
    minimized_width: i32,
) -> EffectiveSize {
    match lifecycle {
        LifecycleState::Normal => logical.size(),
        LifecycleState::Minimized => EffectiveSize {
            height: MINIMIZED_HEIGHT,
            width: minimized_width,
        },
        LifecycleState::Maximized => container.client_size(),
    }
}

/// Re-derives and applies the rendered footprint from the window's current lifecycle state.
pub fn refresh_effective(window: &mut WindowInstance, container: ContainerBounds) {
    let size = derive_effective(
        window.lifecycle,
        window.geometry,
        container,
        window.minimized_width,
    );
    apply_effective(window, size.height, size.width);
}
