//! Title bar drag gesture handling.
//!
//! The controller keeps the pointer-to-corner offset captured at gesture start so the window
//! follows the pointer without jumping its top-left corner onto it. Bringing the window to the
//! front on gesture start is done by [`crate::controller::WindowController`], which owns the
//! registry access.

use serde::{Deserialize, Serialize};

use crate::model::{PointerSample, Position, WindowInstance, DRAG_VISIBILITY, FULL_VISIBILITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DragOffset {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        offset: DragOffset,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn offset(&self) -> Option<DragOffset> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { offset } => Some(offset),
        }
    }

    /// `Idle -> Dragging`. Starting again while already dragging recaptures the offset.
    pub fn begin(&mut self, window: &mut WindowInstance, pointer: PointerSample) {
        let offset = DragOffset {
            x: pointer.x.saturating_sub(window.geometry.left),
            y: pointer.y.saturating_sub(window.geometry.top),
        };
        self.state = DragState::Dragging { offset };
        window.visibility = DRAG_VISIBILITY;
    }

    /// Moves the window for one pointer sample. Returns `false` when no drag is active.
    pub fn update(&self, window: &mut WindowInstance, pointer: PointerSample) -> bool {
        let DragState::Dragging { offset } = self.state else {
            return false;
        };
        let next = follow_pointer(window.geometry.position(), offset, pointer);
        window.geometry = window.geometry.with_position(next);
        true
    }

    /// `Dragging -> Idle`, applying the end sample as a final move.
    pub fn end(&mut self, window: &mut WindowInstance, pointer: PointerSample) -> bool {
        if !self.update(window, pointer) {
            return false;
        }
        self.state = DragState::Idle;
        window.visibility = FULL_VISIBILITY;
        true
    }
}

/// Position for `pointer` given the captured offset.
///
/// An axis whose screen coordinate is exactly `0` is treated as unknown: the previous position
/// plus the offset stands in for the pointer on that axis.
pub fn follow_pointer(previous: Position, offset: DragOffset, pointer: PointerSample) -> Position {
    let pointer_x = if pointer.screen_x == 0 {
        previous.left.saturating_add(offset.x)
    } else {
        pointer.x
    };
    let pointer_y = if pointer.screen_y == 0 {
        previous.top.saturating_add(offset.y)
    } else {
        pointer.y
    };

    Position {
        top: pointer_y.saturating_sub(offset.y),
        left: pointer_x.saturating_sub(offset.x),
    }
}
