use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use serde_json::{json, Value};
use window_engine::{Geometry, PlacementStrategy, WindowConfig, WindowId};
use window_widget::{normalize_props, FloatingWindow};

const DESK_STYLE: &str = "position:relative;width:100%;height:100vh;overflow:hidden;";

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Floating windows" />
        <Meta name="description" content="Draggable, minimizable, maximizable windows in a shared desk." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DemoDesk />
                    <Route path="/props" view=PropsDesk />
                </Routes>
            </main>
        </Router>
    }
}

fn demo_config(id: &str, title: &str, geometry: Geometry) -> WindowConfig {
    let mut config = WindowConfig::with_geometry(geometry);
    config.id = WindowId::from(id);
    config.title_bar.title = title.to_string();
    config.resizable = true;
    config
}

/// Three windows sharing one desk, each owning its minimize flag.
#[component]
pub fn DemoDesk() -> impl IntoView {
    let (notes_minimized, set_notes_minimized) = create_signal(false);
    let (log_minimized, set_log_minimized) = create_signal(false);
    let (scratch_minimized, set_scratch_minimized) = create_signal(true);
    let scratch_open = create_rw_signal(true);

    let mut scratch = demo_config(
        "scratch",
        "Scratch",
        Geometry {
            top: 220,
            left: 420,
            width: 320,
            height: 200,
        },
    );
    scratch.placement = PlacementStrategy::iterative();

    view! {
        <div class="desk" style=DESK_STYLE>
            <FloatingWindow
                config=demo_config(
                    "notes",
                    "Notes",
                    Geometry { top: 40, left: 40, width: 420, height: 300 },
                )
                minimized=notes_minimized
                set_minimized=move |value: bool| set_notes_minimized.set(value)
            >
                <p>"Drag the title bar to move this window."</p>
            </FloatingWindow>
            <FloatingWindow
                config=demo_config(
                    "log",
                    "Activity",
                    Geometry { top: 120, left: 260, width: 360, height: 240 },
                )
                minimized=log_minimized
                set_minimized=move |value: bool| set_log_minimized.set(value)
            >
                <p>{move || format!("Notes minimized: {}", notes_minimized.get())}</p>
                <p>{move || format!("Scratch minimized: {}", scratch_minimized.get())}</p>
            </FloatingWindow>
            <Show when=move || scratch_open.get()>
                <FloatingWindow
                    config=scratch.clone()
                    minimized=scratch_minimized
                    set_minimized=move |value: bool| set_scratch_minimized.set(value)
                    on_close=Callback::new(move |_: ()| scratch_open.set(false))
                >
                    <p>"Starts minimized and can be closed."</p>
                </FloatingWindow>
            </Show>
        </div>
    }
}

fn props_catalog() -> Vec<Value> {
    vec![
        json!({
            "id": "props-a",
            "top": 60,
            "left": 60,
            "width": 360,
            "height": 220,
            "titleBar": { "title": "From JSON" },
        }),
        json!({
            "id": "props-b",
            "top": 140,
            "left": 300,
            "width": 300,
            "height": 200,
            "minimizedWidth": 220,
            "titleBar": { "title": "No maximize", "buttons": { "maximize": false } },
        }),
        json!("rejected props render with defaults"),
    ]
}

/// Windows built from JSON props through [`normalize_props`].
#[component]
pub fn PropsDesk() -> impl IntoView {
    let windows = props_catalog()
        .into_iter()
        .map(|props| {
            let config = normalize_props(props);
            let (minimized, set_minimized) = create_signal(false);
            let title = config.title_bar.title.clone();
            view! {
                <FloatingWindow
                    config=config
                    minimized=minimized
                    set_minimized=move |value: bool| set_minimized.set(value)
                >
                    <p>{title}</p>
                </FloatingWindow>
            }
        })
        .collect_view();

    view! {
        <div class="desk" style=DESK_STYLE>
            {windows}
        </div>
    }
}
