//! Per-layer integration helpers.
//!
//! All steps take a frame fraction `k` in `(0, 1]`; `k = 1` is one nominal
//! display frame and reproduces the classic per-frame formulas exactly.

use crate::config::SpringParams;
use glam::Vec2;

/// Position and velocity of one follower layer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayerState {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl LayerState {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }
}

/// Damped spring toward `target`:
/// `v += (target - p) * strength; v *= damping; p += v`.
#[inline]
pub fn spring_step(layer: LayerState, target: Vec2, params: SpringParams, k: f32) -> LayerState {
    let mut velocity = layer.velocity + (target - layer.position) * (params.strength * k);
    velocity *= if k == 1.0 {
        params.damping
    } else {
        params.damping.powf(k)
    };
    LayerState {
        position: layer.position + velocity * k,
        velocity,
    }
}

/// Exponential smoothing toward `target`: `p += (target - p) * factor`.
#[inline]
pub fn lerp_step(position: Vec2, target: Vec2, factor: f32, k: f32) -> Vec2 {
    let alpha = if k == 1.0 {
        factor
    } else {
        1.0 - (1.0 - factor).powf(k)
    };
    position + (target - position) * alpha
}

/// Unit vector from `previous` to `current`, or `last` when the two samples
/// coincide (or the difference is not finite).
#[inline]
pub fn motion_direction(previous: Vec2, current: Vec2, last: Vec2) -> Vec2 {
    (current - previous).try_normalize().unwrap_or(last)
}

/// Split `frames` into sub-step fractions of at most one frame each.
///
/// Returns `(count, fraction)`; `count` is zero for non-positive or
/// non-finite input.
#[inline]
pub fn substeps(frames: f32, max_frames: f32) -> (u32, f32) {
    if !frames.is_finite() || frames <= 0.0 {
        return (0, 0.0);
    }
    let frames = frames.min(max_frames);
    // tolerate rounding so that dt == FRAME_DT is a single full step
    let count = (frames - 1e-3).ceil().max(1.0);
    (count as u32, frames / count)
}
