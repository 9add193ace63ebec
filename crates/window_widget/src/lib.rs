//! Leptos surface for the floating window engine.
//!
//! The crate renders [`FloatingWindow`] frames, publishes the `data-window-id` and
//! `data-stack-index` DOM contract sibling windows read back, and wires pointer input into
//! [`window_engine::WindowController`].

#![warn(rustdoc::broken_intra_doc_links)]

mod dom_registry;
mod window;

pub use dom_registry::{
    parse_stack_index, window_dom_id, DomSiblingRegistry, STACK_INDEX_ATTR,
    WINDOW_CONTAINER_CLASS, WINDOW_ID_ATTR, WINDOW_TITLE_BAR_CLASS,
};
pub use window::{normalize_props, CallbackMinimizeControl, FloatingWindow};
