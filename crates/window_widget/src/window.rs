//! Leptos presentation surface for a single floating window.

use std::{rc::Rc, time::Duration};

use leptos::*;
use serde_json::Value;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
use window_engine::{
    IconGlyph, MinimizeControl, PointerSample, WindowAction, WindowConfig, WindowController,
    WindowEffect, WindowInstance,
};

use crate::dom_registry::{
    window_dom_id, DomSiblingRegistry, WINDOW_CONTAINER_CLASS, WINDOW_TITLE_BAR_CLASS,
};

/// Normalizes JSON props, logging and falling back to defaults when they cannot be decoded.
pub fn normalize_props(props: Value) -> WindowConfig {
    WindowConfig::from_json(props).unwrap_or_else(|err| {
        logging::warn!("window props rejected: {err}");
        WindowConfig::default()
    })
}

/// [`MinimizeControl`] over a caller-owned signal and setter.
///
/// Writes are deferred to a zero-delay timeout so the caller's reaction never re-enters the
/// handler that requested the change.
#[derive(Clone, Copy)]
pub struct CallbackMinimizeControl {
    value: MaybeSignal<bool>,
    setter: Callback<bool>,
}

impl CallbackMinimizeControl {
    pub fn new(value: MaybeSignal<bool>, setter: Callback<bool>) -> Self {
        Self { value, setter }
    }
}

impl MinimizeControl for CallbackMinimizeControl {
    fn is_minimized(&self) -> bool {
        self.value.get_untracked()
    }

    fn set_minimized(&self, minimized: bool) {
        let setter = self.setter;
        set_timeout(move || setter.call(minimized), Duration::ZERO);
    }
}

#[derive(Clone, Copy)]
struct WindowRuntime {
    controller: RwSignal<WindowController>,
    registry: StoredValue<DomSiblingRegistry>,
    on_close: Option<Callback<()>>,
}

impl WindowRuntime {
    fn dispatch(self, action: WindowAction) {
        let Some(mut controller) = self.controller.try_get_untracked() else {
            return;
        };
        let Some(effects) = self
            .registry
            .try_with_value(|registry| controller.dispatch(registry, action))
        else {
            return;
        };
        self.controller.set(controller);

        for effect in effects {
            match effect {
                WindowEffect::ScheduleTransitionClear {
                    generation,
                    after_ms,
                } => set_timeout(
                    move || self.dispatch(WindowAction::ClearTransition { generation }),
                    Duration::from_millis(u64::from(after_ms)),
                ),
                WindowEffect::InvokeClose => {
                    if let Some(on_close) = self.on_close {
                        on_close.call(());
                    }
                }
            }
        }
    }

    fn is_dragging(self) -> bool {
        self.controller
            .try_with_untracked(|controller| controller.is_dragging())
            .unwrap_or(false)
    }
}

fn pointer_sample(ev: &web_sys::PointerEvent, origin: (i32, i32)) -> PointerSample {
    PointerSample {
        x: ev.client_x() - origin.0,
        y: ev.client_y() - origin.1,
        screen_x: ev.screen_x(),
        screen_y: ev.screen_y(),
    }
}

/// Client-space origin of the element's parent, used to convert pointer samples into container
/// coordinates.
#[cfg(target_arch = "wasm32")]
fn container_origin(ev: &web_sys::PointerEvent) -> (i32, i32) {
    ev.current_target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(&format!(".{WINDOW_CONTAINER_CLASS}")).ok().flatten())
        .and_then(|window| window.parent_element())
        .map(|container| {
            let rect = container.get_bounding_client_rect();
            (rect.left() as i32, rect.top() as i32)
        })
        .unwrap_or((0, 0))
}

#[cfg(not(target_arch = "wasm32"))]
fn container_origin(_: &web_sys::PointerEvent) -> (i32, i32) {
    (0, 0)
}

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn glyph_text(glyph: IconGlyph) -> &'static str {
    match glyph {
        IconGlyph::Minimize => "\u{2581}",
        IconGlyph::Maximize => "\u{25A1}",
        IconGlyph::Restore => "\u{2750}",
    }
}

/// Inline style for the window frame.
fn frame_style(window: &WindowInstance, passthrough: Option<&str>) -> String {
    let mut style = format!(
        "position:absolute;top:{}px;left:{}px;width:{}px;height:{}px;z-index:{};opacity:{};",
        window.geometry.top,
        window.geometry.left,
        window.effective.width,
        window.effective.height,
        window.stack_index,
        window.visibility,
    );
    if window.transition.active {
        style.push_str(&format!(
            "transition:all {}ms ease;",
            window.transition.duration_ms
        ));
    }
    if window.resize_affordance() {
        style.push_str("resize:both;overflow:auto;");
    }
    if let Some(extra) = passthrough {
        style.push_str(extra);
    }
    style
}

/// Movable, minimizable, maximizable window hosted in a shared container.
#[component]
pub fn FloatingWindow(
    /// Normalized configuration; see [`normalize_props`] for JSON props.
    config: WindowConfig,
    /// Caller-owned minimize flag.
    #[prop(into)]
    minimized: MaybeSignal<bool>,
    /// Setter for the caller-owned minimize flag.
    #[prop(into)]
    set_minimized: Callback<bool>,
    /// Close callback; the close button is disabled without one.
    #[prop(optional)]
    on_close: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let mut config = config;
    config.title_bar.buttons.close = on_close.is_some();

    let dom_id = window_dom_id(config.id.as_str());
    let control = CallbackMinimizeControl::new(minimized, set_minimized);
    let runtime = WindowRuntime {
        controller: create_rw_signal(WindowController::new(&config, Rc::new(control))),
        registry: store_value(DomSiblingRegistry::new(dom_id.clone())),
        on_close,
    };
    let window = Signal::derive(move || runtime.controller.with(|c| c.window().clone()));
    let buttons = config.title_bar.buttons;
    let passthrough_style = config.style.clone();

    create_effect(move |previous: Option<()>| {
        let _ = minimized.get();
        runtime.dispatch(if previous.is_none() {
            WindowAction::Mount
        } else {
            WindowAction::SyncMinimized
        });
    });

    let focus = move |_: web_sys::PointerEvent| runtime.dispatch(WindowAction::Focus);
    let begin_drag = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 || !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch(WindowAction::BeginDrag {
            pointer: pointer_sample(&ev, container_origin(&ev)),
        });
    };
    let drag_move = move |ev: web_sys::PointerEvent| {
        if runtime.is_dragging() {
            runtime.dispatch(WindowAction::DragMove {
                pointer: pointer_sample(&ev, container_origin(&ev)),
            });
        }
    };
    let end_drag = move |ev: web_sys::PointerEvent| {
        if runtime.is_dragging() {
            runtime.dispatch(WindowAction::EndDrag {
                pointer: pointer_sample(&ev, container_origin(&ev)),
            });
        }
    };

    let window_id = config.id.as_str().to_string();
    let icon = config.title_bar.icon.clone();
    let title = config.title_bar.title.clone();

    view! {
        <section
            id=dom_id
            class=WINDOW_CONTAINER_CLASS
            data-window-id=window_id
            data-stack-index=move || window.get().stack_index.to_string()
            data-lifecycle=move || format!("{:?}", window.get().lifecycle).to_lowercase()
            style=move || frame_style(&window.get(), passthrough_style.as_deref())
            on:pointerdown=focus
        >
            <header
                class=WINDOW_TITLE_BAR_CLASS
                on:pointerdown=begin_drag
                on:pointermove=drag_move
                on:pointerup=end_drag
                on:pointercancel=end_drag
            >
                {icon.map(|icon| view! { <img class="window-title-icon" src=icon alt="" /> })}
                <span class="window-title">{title}</span>
                <div class="window-title-controls">
                    <button
                        disabled=!buttons.minimize
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch(WindowAction::ToggleMinimize);
                        }
                    >
                        {move || glyph_text(window.get().minimize_glyph())}
                    </button>
                    <button
                        disabled=!buttons.maximize
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch(WindowAction::ToggleMaximize);
                        }
                    >
                        {move || glyph_text(window.get().maximize_glyph())}
                    </button>
                    <button
                        disabled=!buttons.close
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch(WindowAction::Close);
                        }
                    >
                        "\u{2715}"
                    </button>
                </div>
            </header>
            <div
                class="window-content"
                style:display=move || if window.get().content_visible { "block" } else { "none" }
            >
                {children()}
            </div>
        </section>
    }
}
