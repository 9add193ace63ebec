//! Window actions, host effects, and the transition logic tying the engine parts together.

use std::rc::Rc;

use crate::{
    config::{TitleBarButtons, WindowConfig},
    drag::DragController,
    geometry::{refresh_effective, set_geometry},
    model::{GeometryPatch, LifecycleState, PointerSample, WindowInstance},
    placement::{place_minimized, PlacementStrategy},
    registry::{resolve_container, MinimizeControl, SiblingRegistry},
    transition::TransitionGate,
    z_order::next_stack_index,
};

/// Actions accepted by [`WindowController::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum WindowAction {
    /// First state application after the widget mounts.
    Mount,
    /// Raise the window above its siblings.
    Focus,
    /// Pointer pressed on the title bar.
    BeginDrag {
        /// Pointer sample at gesture start.
        pointer: PointerSample,
    },
    /// Pointer moved during a drag.
    DragMove {
        /// Current pointer sample.
        pointer: PointerSample,
    },
    /// Pointer released, ending the drag.
    EndDrag {
        /// Pointer sample at gesture end.
        pointer: PointerSample,
    },
    /// Minimize button clicked; flips the caller-owned flag.
    ToggleMinimize,
    /// The caller-owned minimize flag may have changed.
    SyncMinimized,
    /// Maximize button clicked.
    ToggleMaximize,
    /// Close button clicked.
    Close,
    /// Caller updated logical geometry.
    SetGeometry(GeometryPatch),
    /// A scheduled transition clear fired.
    ClearTransition {
        /// Generation returned with the schedule.
        generation: u64,
    },
}

/// Side-effect intents the presentation host executes after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEffect {
    /// Dispatch [`WindowAction::ClearTransition`] after `after_ms`.
    ScheduleTransitionClear {
        /// Transition generation to clear.
        generation: u64,
        /// Delay in milliseconds.
        after_ms: u32,
    },
    /// Invoke the caller-supplied close callback.
    InvokeClose,
}

#[derive(Clone)]
pub struct WindowController {
    window: WindowInstance,
    drag: DragController,
    gate: TransitionGate,
    minimize: Rc<dyn MinimizeControl>,
    observed_minimized: Option<bool>,
    buttons: TitleBarButtons,
    placement: PlacementStrategy,
}

impl WindowController {
    pub fn new(config: &WindowConfig, minimize: Rc<dyn MinimizeControl>) -> Self {
        Self {
            window: WindowInstance::new(
                config.id.clone(),
                config.geometry(),
                config.minimized_width,
                config.resizable,
            ),
            drag: DragController::default(),
            gate: TransitionGate::default(),
            minimize,
            observed_minimized: None,
            buttons: config.title_bar.buttons,
            placement: config.placement,
        }
    }

    pub fn window(&self) -> &WindowInstance {
        &self.window
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn buttons(&self) -> TitleBarButtons {
        self.buttons
    }

    /// Applies `action` and returns the effects the host must run.
    pub fn dispatch(
        &mut self,
        registry: &dyn SiblingRegistry,
        action: WindowAction,
    ) -> Vec<WindowEffect> {
        let mut effects = Vec::new();
        match action {
            WindowAction::Mount | WindowAction::SyncMinimized => {
                self.sync_minimized(registry, &mut effects);
            }
            WindowAction::Focus => self.bring_to_front(registry),
            WindowAction::BeginDrag { pointer } => {
                self.drag.begin(&mut self.window, pointer);
                self.bring_to_front(registry);
            }
            WindowAction::DragMove { pointer } => {
                self.drag.update(&mut self.window, pointer);
            }
            WindowAction::EndDrag { pointer } => {
                self.drag.end(&mut self.window, pointer);
            }
            WindowAction::ToggleMinimize => {
                if self.buttons.minimize {
                    self.minimize.set_minimized(!self.minimize.is_minimized());
                    self.sync_minimized(registry, &mut effects);
                }
            }
            WindowAction::ToggleMaximize => {
                if self.buttons.maximize {
                    if self.window.is_maximized() {
                        self.exit_maximized(registry, &mut effects);
                    } else {
                        self.enter_maximized(registry, &mut effects);
                    }
                }
            }
            WindowAction::Close => {
                if self.buttons.close {
                    effects.push(WindowEffect::InvokeClose);
                }
            }
            WindowAction::SetGeometry(patch) => {
                // Outside Normal the rendered position belongs to the lifecycle state; only the
                // logical size and home move.
                let applied = if self.window.lifecycle == LifecycleState::Normal {
                    patch
                } else {
                    GeometryPatch {
                        top: None,
                        left: None,
                        ..patch
                    }
                };
                set_geometry(&mut self.window, applied);
                if let Some(top) = patch.top {
                    self.window.home.top = top;
                }
                if let Some(left) = patch.left {
                    self.window.home.left = left;
                }
                if self.window.lifecycle == LifecycleState::Normal {
                    refresh_effective(&mut self.window, resolve_container(registry));
                }
            }
            WindowAction::ClearTransition { generation } => {
                self.gate.clear(&mut self.window.transition, generation);
            }
        }
        effects
    }

    fn sync_minimized(&mut self, registry: &dyn SiblingRegistry, effects: &mut Vec<WindowEffect>) {
        let flag = self.minimize.is_minimized();
        let first_application = self.observed_minimized.is_none();
        if self.observed_minimized == Some(flag) {
            return;
        }
        self.observed_minimized = Some(flag);

        match (flag, self.window.lifecycle) {
            (true, LifecycleState::Minimized) => {}
            (true, _) => self.enter_minimized(registry, effects),
            (false, LifecycleState::Minimized) => self.exit_minimized(registry, effects),
            // Mount applies the configured home state even though nothing was minimized.
            (false, _) if first_application => self.exit_minimized(registry, effects),
            // Maximize already took over from the minimized state.
            (false, _) => {}
        }
    }

    fn enter_minimized(&mut self, registry: &dyn SiblingRegistry, effects: &mut Vec<WindowEffect>) {
        let container = resolve_container(registry);
        let window = &mut self.window;
        window.lifecycle = LifecycleState::Minimized;
        window.content_visible = false;
        refresh_effective(window, container);
        let anchor = place_minimized(
            registry,
            &window.id,
            container,
            window.effective,
            self.placement,
        );
        window.geometry = window.geometry.with_position(anchor);
        self.finish_transition(registry, effects);
    }

    fn exit_minimized(&mut self, registry: &dyn SiblingRegistry, effects: &mut Vec<WindowEffect>) {
        let container = resolve_container(registry);
        let window = &mut self.window;
        window.lifecycle = LifecycleState::Normal;
        window.content_visible = true;
        window.geometry = window.geometry.with_position(window.home);
        refresh_effective(window, container);
        self.finish_transition(registry, effects);
    }

    fn enter_maximized(&mut self, registry: &dyn SiblingRegistry, effects: &mut Vec<WindowEffect>) {
        if self.minimize.is_minimized() {
            self.minimize.set_minimized(false);
        }
        let container = resolve_container(registry);
        let window = &mut self.window;
        window.lifecycle = LifecycleState::Maximized;
        window.content_visible = true;
        window.geometry = window.geometry.with_position(container.offset());
        refresh_effective(window, container);
        self.finish_transition(registry, effects);
    }

    fn exit_maximized(&mut self, registry: &dyn SiblingRegistry, effects: &mut Vec<WindowEffect>) {
        let container = resolve_container(registry);
        let window = &mut self.window;
        window.lifecycle = LifecycleState::Normal;
        window.geometry = window.geometry.with_position(container.offset());
        refresh_effective(window, container);
        self.finish_transition(registry, effects);
    }

    fn finish_transition(&mut self, registry: &dyn SiblingRegistry, effects: &mut Vec<WindowEffect>) {
        if let Some(schedule) = self.gate.apply(&mut self.window.transition) {
            effects.push(WindowEffect::ScheduleTransitionClear {
                generation: schedule.generation,
                after_ms: schedule.after_ms,
            });
        }
        self.bring_to_front(registry);
    }

    fn bring_to_front(&mut self, registry: &dyn SiblingRegistry) {
        self.window.stack_index = next_stack_index(registry.stack_indices());
    }
}
