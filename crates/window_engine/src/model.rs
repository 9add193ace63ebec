use serde::{Deserialize, Serialize};

pub const MINIMIZED_HEIGHT: i32 = 32;
pub const DEFAULT_MINIMIZED_WIDTH: i32 = 280;
/// Gap kept between a minimized window and the container edge or another minimized window.
pub const MINIMIZED_MARGIN: i32 = 4;
pub const DRAG_VISIBILITY: f64 = 0.5;
pub const FULL_VISIBILITY: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WindowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Logical, user-intended window geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub top: i32,
    pub left: i32,
    pub width: i32,
    pub height: i32,
}

impl Geometry {
    pub fn position(self) -> Position {
        Position {
            top: self.top,
            left: self.left,
        }
    }

    pub fn size(self) -> EffectiveSize {
        EffectiveSize {
            height: self.height,
            width: self.width,
        }
    }

    pub fn with_position(self, position: Position) -> Self {
        Self {
            top: position.top,
            left: position.left,
            ..self
        }
    }
}

/// Partial update for [`Geometry`]; `None` fields are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeometryPatch {
    pub top: Option<i32>,
    pub left: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl GeometryPatch {
    pub fn position(position: Position) -> Self {
        Self {
            top: Some(position.top),
            left: Some(position.left),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub top: i32,
    pub left: i32,
}

/// Rendered footprint of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EffectiveSize {
    pub height: i32,
    pub width: i32,
}

/// Axis-aligned rectangle in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: i32,
    pub left: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(position: Position, size: EffectiveSize) -> Self {
        Self {
            top: position.top,
            left: position.left,
            width: size.width,
            height: size.height,
        }
    }

    pub fn center(self) -> (i32, i32) {
        (self.left + self.width / 2, self.top + self.height / 2)
    }

    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.left + self.width && y >= self.top && y < self.top + self.height
    }

    pub fn overlaps(self, other: Rect) -> bool {
        self.left < other.left + other.width
            && other.left < self.left + self.width
            && self.top < other.top + other.height
            && other.top < self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContainerBounds {
    pub height: i32,
    pub width: i32,
    pub offset_top: i32,
    pub offset_left: i32,
}

impl ContainerBounds {
    pub fn offset(self) -> Position {
        Position {
            top: self.offset_top,
            left: self.offset_left,
        }
    }

    pub fn client_size(self) -> EffectiveSize {
        EffectiveSize {
            height: self.height,
            width: self.width,
        }
    }
}

/// One pointer sample delivered by the presentation surface.
///
/// `x`/`y` are container-space coordinates used for positioning. The screen coordinates are
/// only consulted to detect malformed samples, which report exactly `0` on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerSample {
    pub x: i32,
    pub y: i32,
    pub screen_x: i32,
    pub screen_y: i32,
}

impl PointerSample {
    /// Sample whose screen coordinates equal its container coordinates.
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            screen_x: x,
            screen_y: y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LifecycleState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconGlyph {
    Minimize,
    Maximize,
    Restore,
}

impl IconGlyph {
    /// Stable token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
            Self::Restore => "restore",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransitionMarker {
    pub active: bool,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowInstance {
    pub id: WindowId,
    pub geometry: Geometry,
    /// Caller-configured position that un-minimizing returns to.
    pub home: Position,
    pub effective: EffectiveSize,
    pub stack_index: u32,
    pub lifecycle: LifecycleState,
    pub visibility: f64,
    pub content_visible: bool,
    pub transition: TransitionMarker,
    pub resizable: bool,
    pub minimized_width: i32,
}

impl WindowInstance {
    pub fn new(id: WindowId, geometry: Geometry, minimized_width: i32, resizable: bool) -> Self {
        Self {
            id,
            geometry,
            home: geometry.position(),
            effective: geometry.size(),
            stack_index: 1,
            lifecycle: LifecycleState::Normal,
            visibility: FULL_VISIBILITY,
            content_visible: true,
            transition: TransitionMarker::default(),
            resizable,
            minimized_width,
        }
    }

    pub fn is_minimized(&self) -> bool {
        self.lifecycle == LifecycleState::Minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.lifecycle == LifecycleState::Maximized
    }

    pub fn minimize_glyph(&self) -> IconGlyph {
        if self.is_minimized() {
            IconGlyph::Restore
        } else {
            IconGlyph::Minimize
        }
    }

    pub fn maximize_glyph(&self) -> IconGlyph {
        if self.is_maximized() {
            IconGlyph::Restore
        } else {
            IconGlyph::Maximize
        }
    }

    pub fn resize_affordance(&self) -> bool {
        self.resizable && self.lifecycle == LifecycleState::Normal
    }

    /// Rectangle currently painted by the presentation surface.
    pub fn render_rect(&self) -> Rect {
        Rect::new(self.geometry.position(), self.effective)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn glyphs_follow_lifecycle() {
        let mut window = WindowInstance::new(WindowId::from("w"), Geometry::default(), 280, true);
        assert_eq!(window.minimize_glyph(), IconGlyph::Minimize);
        assert_eq!(window.maximize_glyph(), IconGlyph::Maximize);
        assert!(window.resize_affordance());

        window.lifecycle = LifecycleState::Minimized;
        assert_eq!(window.minimize_glyph(), IconGlyph::Restore);
        assert_eq!(window.maximize_glyph(), IconGlyph::Maximize);
        assert!(!window.resize_affordance());

        window.lifecycle = LifecycleState::Maximized;
        assert_eq!(window.minimize_glyph(), IconGlyph::Minimize);
        assert_eq!(window.maximize_glyph(), IconGlyph::Restore);
    }

    #[test]
    fn rect_overlap_excludes_touching_edges() {
        let a = Rect {
            top: 0,
            left: 0,
            width: 10,
            height: 10,
        };
        let b = Rect { top: 10, ..a };
        let c = Rect { top: 5, left: 5, ..a };

        assert!(!a.overlaps(b));
        assert!(a.overlaps(c));
        assert_eq!(a.center(), (5, 5));
    }
}
