//! Cursor follower: three nested layers chasing the pointer.
//!
//! The core dot springs toward the pointer, the glow halo springs toward the
//! core dot, and the trail halo eases toward the glow halo. Outer layers are
//! rendered slightly behind the direction of motion.

use crate::appearance::{layer_appearance, Layer};
use crate::config::{AnimatorConfig, ConfigError};
use crate::constants::{FRAME_DT, MAX_CATCHUP_FRAMES};
use crate::interaction::{InteractionMachine, InteractionState, PointerEvent};
use crate::physics::{lerp_step, motion_direction, spring_step, substeps, LayerState};
use glam::Vec2;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Input capability of the host, decided once when the animator is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputCapability {
    #[default]
    Pointer,
    TouchOnly,
}

/// Positional state of all layers. Advanced by [`advance`] / [`step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorState {
    pub core: LayerState,
    pub glow: LayerState,
    pub trail: LayerState,
    /// Raw target seen on the previous frame.
    pub last_target: Option<Vec2>,
    /// Unit motion direction, retained while the target is still.
    pub direction: Vec2,
}

impl AnimatorState {
    pub fn new(start: Vec2) -> Self {
        Self {
            core: LayerState::at(start),
            glow: LayerState::at(start),
            trail: LayerState::at(start),
            last_target: None,
            direction: Vec2::ZERO,
        }
    }

    pub fn layer(&self, layer: Layer) -> &LayerState {
        match layer {
            Layer::Core => &self.core,
            Layer::Glow => &self.glow,
            Layer::Trail => &self.trail,
        }
    }

    /// Position with the motion-direction bias applied (outer layers only).
    pub fn rendered_position(&self, layer: Layer, cfg: &AnimatorConfig) -> Vec2 {
        let bias = -self.direction * cfg.lead_offset;
        match layer {
            Layer::Core => self.core.position,
            Layer::Glow => self.glow.position + bias * cfg.glow_offset_scale,
            Layer::Trail => self.trail.position + bias * cfg.trail_offset_scale,
        }
    }
}

fn track_direction(state: &mut AnimatorState, target: Option<Vec2>) {
    if let Some(t) = target {
        if let Some(prev) = state.last_target {
            state.direction = motion_direction(prev, t, state.direction);
        }
        state.last_target = Some(t);
    }
}

fn integrate(state: &mut AnimatorState, target: Vec2, cfg: &AnimatorConfig, k: f32) {
    state.core = spring_step(state.core, target, cfg.core, k);
    state.glow = spring_step(state.glow, state.core.position, cfg.glow, k);
    state.trail.position = lerp_step(
        state.trail.position,
        state.glow.position,
        cfg.trail_factor,
        k,
    );
}

/// Advance by exactly one nominal frame.
///
/// With no target yet the layers hold their position.
pub fn step(state: &AnimatorState, target: Option<Vec2>, cfg: &AnimatorConfig) -> AnimatorState {
    let mut next = *state;
    track_direction(&mut next, target);
    if let Some(t) = target {
        integrate(&mut next, t, cfg, 1.0);
    }
    next
}

/// Advance by `dt` seconds, sub-stepping so no step exceeds one frame.
///
/// Long gaps are capped at [`MAX_CATCHUP_FRAMES`]; non-positive or
/// non-finite `dt` leaves positions untouched.
pub fn advance(
    state: &AnimatorState,
    target: Option<Vec2>,
    dt: f32,
    cfg: &AnimatorConfig,
) -> AnimatorState {
    let mut next = *state;
    track_direction(&mut next, target);
    let Some(t) = target else {
        return next;
    };
    let (count, k) = substeps(dt / FRAME_DT, MAX_CATCHUP_FRAMES);
    for _ in 0..count {
        integrate(&mut next, t, cfg, k);
    }
    next
}

/// Render-ready parameters for one layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerFrame {
    pub layer: Layer,
    /// Physical (unbiased) position.
    pub position: Vec2,
    /// Position to draw at, including the motion bias.
    pub rendered: Vec2,
    pub diameter: f32,
    pub scale: f32,
    pub opacity: f32,
    pub glow: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub layers: SmallVec<[LayerFrame; 3]>,
    pub interaction: InteractionState,
    pub visible: bool,
}

/// Anything that can hand pending pointer events to the animator.
pub trait PointerSource {
    fn next_event(&mut self) -> Option<PointerEvent>;
}

impl PointerSource for VecDeque<PointerEvent> {
    fn next_event(&mut self) -> Option<PointerEvent> {
        self.pop_front()
    }
}

/// Shared queue: event listeners push, the frame loop drains.
#[derive(Clone, Debug, Default)]
pub struct EventQueue(Rc<RefCell<VecDeque<PointerEvent>>>);

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: PointerEvent) {
        self.0.borrow_mut().push_back(event);
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl PointerSource for EventQueue {
    fn next_event(&mut self) -> Option<PointerEvent> {
        self.0.borrow_mut().pop_front()
    }
}

/// Stateful wrapper owning config, pointer target and interaction state.
#[derive(Clone, Debug)]
pub struct Animator {
    config: AnimatorConfig,
    capability: InputCapability,
    state: AnimatorState,
    target: Option<Vec2>,
    interaction: InteractionMachine,
    visible: bool,
}

impl Animator {
    pub fn new(config: AnimatorConfig, capability: InputCapability) -> Result<Self, ConfigError> {
        config.validate()?;
        if capability == InputCapability::TouchOnly {
            log::info!("[cursor] touch-only input, follower disabled");
        }
        Ok(Self {
            state: AnimatorState::new(config.start_position),
            config,
            capability,
            target: None,
            interaction: InteractionMachine::default(),
            visible: false,
        })
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    pub fn capability(&self) -> InputCapability {
        self.capability
    }

    pub fn is_enabled(&self) -> bool {
        self.capability == InputCapability::Pointer
    }

    pub fn state(&self) -> &AnimatorState {
        &self.state
    }

    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    pub fn interaction(&self) -> InteractionState {
        self.interaction.state()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Move { x, y } => {
                let p = Vec2::new(x, y);
                if !p.is_finite() {
                    return;
                }
                self.target = Some(p);
                self.visible = true;
            }
            other => {
                let before = self.interaction.state();
                let after = self.interaction.apply(other);
                if before != after {
                    log::debug!("[cursor] {:?} -> {:?}", before, after);
                }
            }
        }
    }

    /// Drain every pending event from `source`; returns how many were handled.
    pub fn pump<S: PointerSource + ?Sized>(&mut self, source: &mut S) -> usize {
        let mut n = 0;
        while let Some(ev) = source.next_event() {
            self.handle(ev);
            n += 1;
        }
        n
    }

    /// Advance by `dt` seconds and return the frame to render.
    pub fn tick(&mut self, dt: f32) -> Frame {
        if self.is_enabled() {
            self.state = advance(&self.state, self.target, dt, &self.config);
        }
        self.frame()
    }

    pub fn frame(&self) -> Frame {
        let interaction = self.interaction.state();
        let mut layers = SmallVec::new();
        if self.is_enabled() {
            for layer in Layer::ALL.into_iter().take(self.config.layer_count) {
                let look =
                    layer_appearance(layer, interaction, self.visible, &self.config.appearance);
                layers.push(LayerFrame {
                    layer,
                    position: self.state.layer(layer).position,
                    rendered: self.state.rendered_position(layer, &self.config),
                    diameter: look.diameter,
                    scale: look.scale,
                    opacity: look.opacity,
                    glow: look.glow,
                });
            }
        }
        Frame {
            layers,
            interaction,
            visible: self.visible,
        }
    }
}
