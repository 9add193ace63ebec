//! DOM-backed sibling registry for windows mounted in the same container element.
//!
//! Windows publish their stack index and identity as data attributes; the registry reads them
//! back from the container, hit-tests through `document.elementsFromPoint` (skipping the placing
//! window's own elements), and measures the
//! container from the window element's parent.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use window_engine::HitRole;
use window_engine::{ContainerBounds, HitTarget, SiblingRegistry, WindowId};

pub const WINDOW_CONTAINER_CLASS: &str = "window-container";
pub const WINDOW_TITLE_BAR_CLASS: &str = "window-title-bar";
pub const WINDOW_ID_ATTR: &str = "data-window-id";
pub const STACK_INDEX_ATTR: &str = "data-stack-index";

/// DOM id of the element rendering window `window_id`.
pub fn window_dom_id(window_id: &str) -> String {
    format!("floating-window-{window_id}")
}

/// Parses a published stack index attribute.
pub fn parse_stack_index(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomSiblingRegistry {
    element_id: String,
}

impl DomSiblingRegistry {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    #[cfg(target_arch = "wasm32")]
    fn own_element(&self) -> Option<web_sys::Element> {
        web_sys::window()?
            .document()?
            .get_element_by_id(&self.element_id)
    }

    #[cfg(target_arch = "wasm32")]
    fn container_element(&self) -> Option<web_sys::HtmlElement> {
        self.own_element()?
            .parent_element()?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()
    }
}

impl SiblingRegistry for DomSiblingRegistry {
    fn stack_indices(&self) -> Vec<u32> {
        #[cfg(target_arch = "wasm32")]
        {
            let selector = format!(".{WINDOW_CONTAINER_CLASS}");
            let nodes = match self.container_element() {
                Some(container) => container.query_selector_all(&selector),
                None => match web_sys::window().and_then(|w| w.document()) {
                    Some(document) => document.query_selector_all(&selector),
                    None => return Vec::new(),
                },
            };
            let Ok(nodes) = nodes else {
                return Vec::new();
            };
            (0..nodes.length())
                .filter_map(|i| nodes.item(i))
                .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
                .filter_map(|element| element.get_attribute(STACK_INDEX_ATTR))
                .filter_map(|raw| parse_stack_index(&raw))
                .collect()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Vec::new()
        }
    }

    fn hit_test(&self, x: i32, y: i32, exclude: Option<&WindowId>) -> Option<HitTarget> {
        #[cfg(target_arch = "wasm32")]
        {
            let document = web_sys::window()?.document()?;
            let origin = self.container_element()?.get_bounding_client_rect();
            let client_x = origin.left() as f32 + x as f32;
            let client_y = origin.top() as f32 + y as f32;
            let container_selector = format!(".{WINDOW_CONTAINER_CLASS}");
            let owner_id = |element: &web_sys::Element| {
                element
                    .closest(&container_selector)
                    .ok()
                    .flatten()
                    .and_then(|owner| owner.get_attribute(WINDOW_ID_ATTR))
            };
            let hit = document
                .elements_from_point(client_x, client_y)
                .iter()
                .filter_map(|value| value.dyn_into::<web_sys::Element>().ok())
                .find(|element| match exclude {
                    Some(excluded) => owner_id(element).as_deref() != Some(excluded.as_str()),
                    None => true,
                })?;

            let role = if hit.class_list().contains(WINDOW_CONTAINER_CLASS) {
                HitRole::WindowContainer
            } else if hit
                .closest(&format!(".{WINDOW_TITLE_BAR_CLASS}"))
                .ok()
                .flatten()
                .is_some()
            {
                HitRole::TitleBar
            } else {
                HitRole::Other
            };
            let owner = hit.closest(&container_selector).ok().flatten();
            let rendered_height = owner
                .as_ref()
                .and_then(|element| element.dyn_ref::<web_sys::HtmlElement>())
                .map(|element| element.offset_height())
                .unwrap_or(0);
            let window_id = owner
                .and_then(|element| element.get_attribute(WINDOW_ID_ATTR))
                .map(WindowId);

            Some(HitTarget {
                window_id,
                role,
                rendered_height,
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (x, y, exclude);
            None
        }
    }

    fn container_bounds(&self) -> Option<ContainerBounds> {
        #[cfg(target_arch = "wasm32")]
        {
            let container = self.container_element()?;
            Some(ContainerBounds {
                height: container.client_height(),
                width: container.client_width(),
                offset_top: container.offset_top(),
                offset_left: container.offset_left(),
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn viewport_bounds(&self) -> ContainerBounds {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(window_engine::registry::FALLBACK_VIEWPORT.width);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(window_engine::registry::FALLBACK_VIEWPORT.height);

                return ContainerBounds {
                    height,
                    width,
                    offset_top: 0,
                    offset_left: 0,
                };
            }
        }

        window_engine::registry::FALLBACK_VIEWPORT
    }
}
