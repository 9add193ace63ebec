//! Collaborator contracts consumed by the engine plus in-memory implementations.
//!
//! The presentation layer supplies a [`SiblingRegistry`] describing the windows mounted in the
//! same container, and the caller supplies a [`MinimizeControl`] owning the minimize flag.
//! [`MemorySiblingRegistry`] and [`LocalMinimizeFlag`] back native hosts and tests.

use std::{cell::Cell, rc::Rc};

use leptos::logging;

use crate::model::{ContainerBounds, Rect, WindowId, WindowInstance, MINIMIZED_HEIGHT};

/// Height of the title bar band used by [`MemorySiblingRegistry`] hit tests.
pub const TITLE_BAR_HEIGHT: i32 = MINIMIZED_HEIGHT;

/// Viewport used when neither a container nor a real viewport can be measured.
pub const FALLBACK_VIEWPORT: ContainerBounds = ContainerBounds {
    height: 768,
    width: 1024,
    offset_top: 0,
    offset_left: 0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRole {
    /// The window container element itself (visible when content is hidden).
    WindowContainer,
    TitleBar,
    /// Anything else: window content, container background, unrelated elements.
    Other,
}

impl HitRole {
    /// Whether a hit with this role means a window already occupies the probed point.
    pub fn occupies(self) -> bool {
        matches!(self, Self::WindowContainer | Self::TitleBar)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitTarget {
    pub window_id: Option<WindowId>,
    pub role: HitRole,
    /// Rendered height of the window owning the hit element.
    pub rendered_height: i32,
}

/// Read-only view of the windows sharing a container.
pub trait SiblingRegistry {
    /// Current stack index of every mounted window, including the caller's own.
    fn stack_indices(&self) -> Vec<u32>;

    /// Topmost element at container coordinates `(x, y)`, looking through the window `exclude`
    /// when one is given.
    fn hit_test(&self, x: i32, y: i32, exclude: Option<&WindowId>) -> Option<HitTarget>;

    /// Bounds of the hosting container, when one can be found.
    fn container_bounds(&self) -> Option<ContainerBounds>;

    /// Viewport bounds used when no container is found.
    fn viewport_bounds(&self) -> ContainerBounds {
        FALLBACK_VIEWPORT
    }
}

/// Container bounds, falling back to the viewport.
pub fn resolve_container(registry: &dyn SiblingRegistry) -> ContainerBounds {
    registry.container_bounds().unwrap_or_else(|| {
        logging::debug_warn!("window container not found; using viewport bounds");
        registry.viewport_bounds()
    })
}

/// Caller-owned minimize flag injected into a window at construction.
pub trait MinimizeControl {
    fn is_minimized(&self) -> bool;

    /// Requests a flag change. Implementations may apply it later; the window reacts when it
    /// next observes the flag.
    fn set_minimized(&self, minimized: bool);
}

/// Shared in-process minimize flag that applies writes immediately.
#[derive(Debug, Clone, Default)]
pub struct LocalMinimizeFlag(Rc<Cell<bool>>);

impl LocalMinimizeFlag {
    pub fn new(minimized: bool) -> Self {
        Self(Rc::new(Cell::new(minimized)))
    }
}

impl MinimizeControl for LocalMinimizeFlag {
    fn is_minimized(&self) -> bool {
        self.0.get()
    }

    fn set_minimized(&self, minimized: bool) {
        self.0.set(minimized);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiblingWindow {
    pub id: WindowId,
    pub stack_index: u32,
    pub rect: Rect,
    pub content_visible: bool,
}

impl SiblingWindow {
    pub fn from_instance(window: &WindowInstance) -> Self {
        Self {
            id: window.id.clone(),
            stack_index: window.stack_index,
            rect: window.render_rect(),
            content_visible: window.content_visible,
        }
    }

    fn role_at(&self, y: i32) -> HitRole {
        if !self.content_visible {
            HitRole::WindowContainer
        } else if y < self.rect.top + TITLE_BAR_HEIGHT {
            HitRole::TitleBar
        } else {
            HitRole::Other
        }
    }
}

/// In-memory registry for hosts without a DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySiblingRegistry {
    container: Option<ContainerBounds>,
    viewport: ContainerBounds,
    windows: Vec<SiblingWindow>,
}

impl Default for MemorySiblingRegistry {
    fn default() -> Self {
        Self {
            container: None,
            viewport: FALLBACK_VIEWPORT,
            windows: Vec::new(),
        }
    }
}

impl MemorySiblingRegistry {
    pub fn with_container(container: ContainerBounds) -> Self {
        Self {
            container: Some(container),
            ..Self::default()
        }
    }

    pub fn set_viewport(&mut self, viewport: ContainerBounds) {
        self.viewport = viewport;
    }

    pub fn windows(&self) -> &[SiblingWindow] {
        &self.windows
    }

    /// Inserts or replaces the entry for `window`.
    pub fn upsert(&mut self, window: &WindowInstance) {
        let entry = SiblingWindow::from_instance(window);
        match self.windows.iter_mut().find(|w| w.id == entry.id) {
            Some(existing) => *existing = entry,
            None => self.windows.push(entry),
        }
    }

    /// Returns `true` when an entry was removed.
    pub fn remove(&mut self, window_id: &WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| &w.id != window_id);
        self.windows.len() != before
    }
}

impl SiblingRegistry for MemorySiblingRegistry {
    fn stack_indices(&self) -> Vec<u32> {
        self.windows.iter().map(|w| w.stack_index).collect()
    }

    fn hit_test(&self, x: i32, y: i32, exclude: Option<&WindowId>) -> Option<HitTarget> {
        self.windows
            .iter()
            .filter(|w| Some(&w.id) != exclude)
            .filter(|w| w.rect.contains(x, y))
            .max_by_key(|w| w.stack_index)
            .map(|w| HitTarget {
                window_id: Some(w.id.clone()),
                role: w.role_at(y),
                rendered_height: w.rect.height,
            })
    }

    fn container_bounds(&self) -> Option<ContainerBounds> {
        self.container
    }

    fn viewport_bounds(&self) -> ContainerBounds {
        self.viewport
    }
}
