//! Construction-time window configuration and the props normalizer.
//!
//! Callers either build a [`WindowConfig`] directly or hand over a JSON props object that is
//! merged over the defaults with [`WindowConfig::from_json`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{
    model::{Geometry, WindowId, DEFAULT_MINIMIZED_WIDTH},
    placement::PlacementStrategy,
    time::next_unique_timestamp_ms,
};

pub const DEFAULT_WINDOW_TITLE: &str = "Untitled window";

/// Errors raised while decoding caller-supplied window props.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The props payload was not a JSON object.
    #[error("window props must be a JSON object, found {found}")]
    NotAnObject {
        /// JSON type name of the rejected payload.
        found: &'static str,
    },
    /// A known field carried a value of the wrong type.
    #[error("invalid window props: {0}")]
    InvalidField(#[from] serde_json::Error),
}

/// Returns a fresh timestamp-derived window identity.
pub fn generate_window_id() -> WindowId {
    WindowId(format!("window-{}", next_unique_timestamp_ms()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleBarButtons {
    pub minimize: bool,
    pub maximize: bool,
    /// Enabled only when the host supplies a close callback.
    pub close: bool,
}

impl Default for TitleBarButtons {
    fn default() -> Self {
        Self {
            minimize: true,
            maximize: true,
            close: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleBarConfig {
    pub icon: Option<String>,
    pub title: String,
    pub buttons: TitleBarButtons,
}

impl Default for TitleBarConfig {
    fn default() -> Self {
        Self {
            icon: None,
            title: DEFAULT_WINDOW_TITLE.to_string(),
            buttons: TitleBarButtons::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub id: WindowId,
    pub height: i32,
    pub width: i32,
    pub top: i32,
    pub left: i32,
    /// Toggles the resize affordance only.
    pub resizable: bool,
    pub minimized_width: i32,
    pub title_bar: TitleBarConfig,
    /// Inline style passed through to the window element untouched.
    pub style: Option<String>,
    pub placement: PlacementStrategy,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            id: generate_window_id(),
            height: 0,
            width: 0,
            top: 0,
            left: 0,
            resizable: false,
            minimized_width: DEFAULT_MINIMIZED_WIDTH,
            title_bar: TitleBarConfig::default(),
            style: None,
            placement: PlacementStrategy::default(),
        }
    }
}

impl WindowConfig {
    /// Defaults with the given logical geometry.
    pub fn with_geometry(geometry: Geometry) -> Self {
        Self {
            height: geometry.height,
            width: geometry.width,
            top: geometry.top,
            left: geometry.left,
            ..Self::default()
        }
    }

    pub fn geometry(&self) -> Geometry {
        Geometry {
            top: self.top,
            left: self.left,
            width: self.width,
            height: self.height,
        }
    }

    /// Decodes a JSON props object and merges it over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotAnObject`] for non-object payloads and
    /// [`ConfigError::InvalidField`] when a known field has the wrong type.
    pub fn from_json(props: Value) -> Result<Self, ConfigError> {
        if !props.is_object() {
            return Err(ConfigError::NotAnObject {
                found: json_type_name(&props),
            });
        }
        let patch: WindowConfigPatch = serde_json::from_value(props)?;
        Ok(Self::default().merge(patch))
    }

    /// Applies every field present in `patch`.
    pub fn merge(mut self, patch: WindowConfigPatch) -> Self {
        if let Some(id) = patch.id.filter(|id| !id.trim().is_empty()) {
            self.id = WindowId(id);
        }
        self.height = patch.height.unwrap_or(self.height);
        self.width = patch.width.unwrap_or(self.width);
        self.top = patch.top.unwrap_or(self.top);
        self.left = patch.left.unwrap_or(self.left);
        self.resizable = patch.resizable.unwrap_or(self.resizable);
        self.minimized_width = patch.minimized_width.unwrap_or(self.minimized_width);
        if let Some(style) = patch.style {
            self.style = Some(style);
        }
        self.placement = patch.placement.unwrap_or(self.placement);

        if let Some(title_bar) = patch.title_bar {
            if let Some(icon) = title_bar.icon {
                self.title_bar.icon = Some(icon);
            }
            if let Some(title) = title_bar.title {
                self.title_bar.title = title;
            }
            if let Some(buttons) = title_bar.buttons {
                let current = &mut self.title_bar.buttons;
                current.minimize = buttons.minimize.unwrap_or(current.minimize);
                current.maximize = buttons.maximize.unwrap_or(current.maximize);
                current.close = buttons.close.unwrap_or(current.close);
            }
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct WindowConfigPatch {
    pub id: Option<String>,
    pub height: Option<i32>,
    pub width: Option<i32>,
    pub top: Option<i32>,
    pub left: Option<i32>,
    pub resizable: Option<bool>,
    #[serde(alias = "minimizedWidth")]
    pub minimized_width: Option<i32>,
    #[serde(alias = "titleBar")]
    pub title_bar: Option<TitleBarPatch>,
    pub style: Option<String>,
    pub placement: Option<PlacementStrategy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct TitleBarPatch {
    pub icon: Option<String>,
    pub title: Option<String>,
    pub buttons: Option<TitleBarButtonsPatch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct TitleBarButtonsPatch {
    pub minimize: Option<bool>,
    pub maximize: Option<bool>,
    pub close: Option<bool>,
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_props_yield_defaults() {
        let config = WindowConfig::from_json(json!({})).expect("defaults");

        assert!(config.id.as_str().starts_with("window-"));
        assert_eq!(config.geometry(), Geometry::default());
        assert!(!config.resizable);
        assert_eq!(config.minimized_width, 280);
        assert_eq!(config.title_bar.title, "Untitled window");
        assert_eq!(config.title_bar.buttons, TitleBarButtons::default());
        assert_eq!(config.placement, PlacementStrategy::SinglePass);
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(WindowConfig::default().id, WindowConfig::default().id);
    }

    #[test]
    fn camel_case_props_merge_over_defaults() {
        let config = WindowConfig::from_json(json!({
            "id": "notes",
            "height": 300,
            "width": 400,
            "top": 50,
            "left": 60,
            "minimizedWidth": 200,
            "titleBar": {
                "title": "Notes",
                "buttons": { "maximize": false }
            },
            "style": "background: white",
            "placement": { "kind": "iterative", "max_probes": 4 },
            "unknownPassthrough": true
        }))
        .expect("valid props");

        assert_eq!(config.id, WindowId::from("notes"));
        assert_eq!(
            config.geometry(),
            Geometry {
                top: 50,
                left: 60,
                width: 400,
                height: 300,
            }
        );
        assert_eq!(config.minimized_width, 200);
        assert_eq!(config.title_bar.title, "Notes");
        assert!(config.title_bar.buttons.minimize);
        assert!(!config.title_bar.buttons.maximize);
        assert_eq!(config.style.as_deref(), Some("background: white"));
        assert_eq!(config.placement, PlacementStrategy::Iterative { max_probes: 4 });
    }

    #[test]
    fn blank_id_is_replaced_with_generated_one() {
        let config = WindowConfig::from_json(json!({ "id": "  " })).unwrap();
        assert!(config.id.as_str().starts_with("window-"));
    }

    #[test]
    fn non_object_props_are_rejected() {
        let err = WindowConfig::from_json(json!([1, 2])).unwrap_err();
        assert!(matches!(err, ConfigError::NotAnObject { found: "array" }));
        assert_eq!(
            err.to_string(),
            "window props must be a JSON object, found array"
        );
    }

    #[test]
    fn mistyped_field_is_rejected() {
        let err = WindowConfig::from_json(json!({ "width": "wide" })).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField(_)));
    }
}
