use std::rc::Rc;

use pretty_assertions::assert_eq;
use window_engine::{
    ContainerBounds, EffectiveSize, Geometry, LifecycleState, LocalMinimizeFlag,
    MemorySiblingRegistry, MinimizeControl, PlacementStrategy, PointerSample, Position,
    WindowAction, WindowConfig, WindowController, WindowId,
};

const CONTAINER: ContainerBounds = ContainerBounds {
    height: 700,
    width: 1000,
    offset_top: 0,
    offset_left: 0,
};

struct Desk {
    registry: MemorySiblingRegistry,
}

impl Desk {
    fn new(container: ContainerBounds) -> Self {
        Self {
            registry: MemorySiblingRegistry::with_container(container),
        }
    }

    fn mount(&mut self, config: WindowConfig) -> (WindowController, LocalMinimizeFlag) {
        let flag = LocalMinimizeFlag::new(false);
        let mut controller = WindowController::new(&config, Rc::new(flag.clone()));
        controller.dispatch(&self.registry, WindowAction::Mount);
        self.registry.upsert(controller.window());
        (controller, flag)
    }

    fn run(&mut self, controller: &mut WindowController, action: WindowAction) {
        controller.dispatch(&self.registry, action);
        self.registry.upsert(controller.window());
    }
}

fn window_config(id: &str, geometry: Geometry) -> WindowConfig {
    let mut config = WindowConfig::with_geometry(geometry);
    config.id = WindowId::from(id);
    config
}

fn home_geometry() -> Geometry {
    Geometry {
        top: 50,
        left: 50,
        width: 400,
        height: 300,
    }
}

#[test]
fn minimize_and_restore_round_trip_in_container() {
    let mut desk = Desk::new(CONTAINER);
    let (mut win, _) = desk.mount(window_config("notes", home_geometry()));

    desk.run(&mut win, WindowAction::ToggleMinimize);
    assert_eq!(win.window().effective, EffectiveSize { height: 32, width: 280 });
    assert_eq!(
        win.window().geometry.position(),
        Position {
            top: 700 - 32 - 4,
            left: 1000 - 280 - 4,
        }
    );
    assert!(!win.window().content_visible);

    desk.run(&mut win, WindowAction::ToggleMinimize);
    assert_eq!(win.window().geometry, home_geometry());
    assert_eq!(win.window().effective, EffectiveSize { height: 300, width: 400 });
    assert!(win.window().content_visible);
    assert_eq!(win.window().lifecycle, LifecycleState::Normal);
}

#[test]
fn repeated_minimize_lands_on_the_same_anchor() {
    let mut desk = Desk::new(CONTAINER);
    let (mut win, flag) = desk.mount(window_config("notes", home_geometry()));

    desk.run(&mut win, WindowAction::ToggleMinimize);
    let first = win.window().clone();
    desk.run(&mut win, WindowAction::ToggleMinimize);
    desk.run(&mut win, WindowAction::ToggleMinimize);

    assert!(flag.is_minimized());
    assert_eq!(win.window().geometry, first.geometry);
    assert_eq!(win.window().effective, first.effective);
}

#[test]
fn minimized_footprint_ignores_logical_size() {
    let mut desk = Desk::new(CONTAINER);
    let mut config = window_config(
        "wide",
        Geometry {
            top: 0,
            left: 0,
            width: 900,
            height: 650,
        },
    );
    config.minimized_width = 200;
    let (mut win, _) = desk.mount(config);

    desk.run(&mut win, WindowAction::ToggleMinimize);

    assert_eq!(win.window().effective, EffectiveSize { height: 32, width: 200 });
    assert_eq!(win.window().geometry.width, 900);
    assert_eq!(win.window().geometry.height, 650);
}

#[test]
fn maximize_fills_container() {
    let container = ContainerBounds {
        height: 800,
        width: 1200,
        offset_top: 0,
        offset_left: 0,
    };
    let mut desk = Desk::new(container);
    let (mut win, flag) = desk.mount(window_config("big", home_geometry()));

    desk.run(&mut win, WindowAction::ToggleMaximize);

    assert_eq!(win.window().effective, EffectiveSize { height: 800, width: 1200 });
    assert_eq!(win.window().geometry.position(), Position { top: 0, left: 0 });
    assert_ne!(win.window().lifecycle, LifecycleState::Minimized);
    assert!(!flag.is_minimized());

    desk.run(&mut win, WindowAction::ToggleMinimize);
    assert_ne!(win.window().lifecycle, LifecycleState::Maximized);
    assert!(win.window().is_minimized());
}

#[test]
fn second_minimized_window_stacks_above_the_first() {
    let mut desk = Desk::new(CONTAINER);
    let (mut first, _) = desk.mount(window_config("first", home_geometry()));
    let (mut second, _) = desk.mount(window_config(
        "second",
        Geometry {
            top: 120,
            left: 200,
            width: 300,
            height: 200,
        },
    ));

    desk.run(&mut first, WindowAction::ToggleMinimize);
    desk.run(&mut second, WindowAction::ToggleMinimize);

    let a = first.window().render_rect();
    let b = second.window().render_rect();
    assert!(a.top - b.top >= a.height + 4);
    assert!(!a.overlaps(b));
    assert!(second.window().stack_index > first.window().stack_index);
}

#[test]
fn maximized_window_minimizes_above_a_parked_sibling() {
    let mut desk = Desk::new(CONTAINER);
    let (mut parked, _) = desk.mount(window_config("parked", home_geometry()));
    desk.run(&mut parked, WindowAction::ToggleMinimize);
    let (mut big, _) = desk.mount(window_config("big", home_geometry()));

    desk.run(&mut big, WindowAction::ToggleMaximize);
    desk.run(&mut big, WindowAction::ToggleMinimize);

    let a = parked.window().render_rect();
    let b = big.window().render_rect();
    assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
    assert_eq!(b.top, 664 - 36);
    assert_eq!(b.left, 716);
}

#[test]
fn window_focused_over_the_corner_minimizes_above_a_parked_sibling() {
    let mut desk = Desk::new(CONTAINER);
    let (mut parked, _) = desk.mount(window_config("parked", home_geometry()));
    desk.run(&mut parked, WindowAction::ToggleMinimize);
    let (mut corner, _) = desk.mount(window_config(
        "corner",
        Geometry {
            top: 400,
            left: 600,
            width: 400,
            height: 300,
        },
    ));

    desk.run(&mut corner, WindowAction::Focus);
    assert!(corner.window().stack_index > parked.window().stack_index);
    desk.run(&mut corner, WindowAction::ToggleMinimize);

    let a = parked.window().render_rect();
    let b = corner.window().render_rect();
    assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
    assert_eq!(b.top, 664 - 36);
}

#[test]
fn iterative_placement_handles_a_column_of_minimized_windows() {
    let mut desk = Desk::new(CONTAINER);
    let mut controllers = Vec::new();
    for id in ["a", "b", "c", "d"] {
        let mut config = window_config(id, home_geometry());
        config.placement = PlacementStrategy::iterative();
        let (mut win, _) = desk.mount(config);
        desk.run(&mut win, WindowAction::ToggleMinimize);
        controllers.push(win);
    }

    let rects: Vec<_> = controllers.iter().map(|c| c.window().render_rect()).collect();
    for (i, a) in rects.iter().enumerate() {
        for b in rects.iter().skip(i + 1) {
            assert!(!a.overlaps(*b), "{a:?} overlaps {b:?}");
        }
    }
    assert_eq!(rects[3].top, 664 - 3 * 36);
}

#[test]
fn drag_translates_window_and_restores_opacity() {
    let mut desk = Desk::new(CONTAINER);
    let (mut win, _) = desk.mount(window_config("drag", home_geometry()));

    desk.run(
        &mut win,
        WindowAction::BeginDrag {
            pointer: PointerSample::at(70, 60),
        },
    );
    assert_eq!(win.window().visibility, 0.5);

    desk.run(
        &mut win,
        WindowAction::DragMove {
            pointer: PointerSample::at(95, 100),
        },
    );
    assert_eq!(win.window().geometry.position(), Position { top: 90, left: 75 });

    desk.run(
        &mut win,
        WindowAction::EndDrag {
            pointer: PointerSample::at(95, 100),
        },
    );
    assert_eq!(win.window().visibility, 1.0);
    assert!(!win.is_dragging());
    assert_eq!(win.window().geometry.position(), Position { top: 90, left: 75 });
}

#[test]
fn unminimize_returns_home_not_to_dragged_position() {
    let mut desk = Desk::new(CONTAINER);
    let (mut win, _) = desk.mount(window_config("home", home_geometry()));

    desk.run(
        &mut win,
        WindowAction::BeginDrag {
            pointer: PointerSample::at(60, 60),
        },
    );
    desk.run(
        &mut win,
        WindowAction::EndDrag {
            pointer: PointerSample::at(260, 160),
        },
    );
    desk.run(&mut win, WindowAction::ToggleMinimize);
    desk.run(&mut win, WindowAction::ToggleMinimize);

    assert_eq!(win.window().geometry, home_geometry());
}

#[test]
fn missing_container_falls_back_to_viewport() {
    let mut registry = MemorySiblingRegistry::default();
    registry.set_viewport(ContainerBounds {
        height: 600,
        width: 800,
        offset_top: 0,
        offset_left: 0,
    });
    let flag = LocalMinimizeFlag::new(false);
    let mut win = WindowController::new(
        &window_config("orphan", home_geometry()),
        Rc::new(flag.clone()),
    );
    win.dispatch(&registry, WindowAction::Mount);

    win.dispatch(&registry, WindowAction::ToggleMinimize);

    assert_eq!(
        win.window().geometry.position(),
        Position {
            top: 600 - 32 - 4,
            left: 800 - 280 - 4,
        }
    );
}
