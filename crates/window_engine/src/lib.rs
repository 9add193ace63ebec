//! State and interaction engine for floating desktop windows.
//!
//! The crate is host-independent: geometry, stacking, drag, and the minimize/maximize state
//! machine are expressed over the [`SiblingRegistry`] and [`MinimizeControl`] contracts, so the
//! same logic backs the Leptos widget and native tests. [`WindowController::dispatch`] is the
//! single entry point for state transitions.

#![warn(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod controller;
pub mod drag;
pub mod geometry;
pub mod model;
pub mod placement;
pub mod registry;
pub mod time;
pub mod transition;
pub mod z_order;

pub use config::{
    generate_window_id, ConfigError, TitleBarButtons, TitleBarConfig, WindowConfig,
    WindowConfigPatch, DEFAULT_WINDOW_TITLE,
};
pub use controller::{WindowAction, WindowController, WindowEffect};
pub use drag::{DragController, DragOffset, DragState};
pub use model::*;
pub use placement::{minimized_anchor, place_minimized, PlacementStrategy};
pub use registry::{
    resolve_container, HitRole, HitTarget, LocalMinimizeFlag, MemorySiblingRegistry,
    MinimizeControl, SiblingRegistry, SiblingWindow,
};
pub use transition::{TransitionGate, TRANSITION_DURATION_MS};
pub use z_order::next_stack_index;
