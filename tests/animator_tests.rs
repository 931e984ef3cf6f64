// Host-side tests for the cursor follower physics and frame output.

use cursor_core::*;
use glam::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

const TARGET: Vec2 = Vec2::new(100.0, 50.0);

fn config_at_origin() -> AnimatorConfig {
    AnimatorConfig {
        start_position: Vec2::ZERO,
        ..AnimatorConfig::default()
    }
}

fn run_steps(cfg: &AnimatorConfig, target: Vec2, n: usize) -> Vec<AnimatorState> {
    let mut s = AnimatorState::new(cfg.start_position);
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        s = step(&s, Some(target), cfg);
        out.push(s);
    }
    out
}

fn window_max(values: &[f32], window: usize) -> Vec<f32> {
    values
        .chunks(window)
        .map(|c| c.iter().cloned().fold(0.0, f32::max))
        .collect()
}

#[test]
fn all_layers_converge_to_fixed_target() {
    let cfg = config_at_origin();
    let states = run_steps(&cfg, TARGET, 400);
    let last = states.last().unwrap();
    assert!(last.core.position.distance(TARGET) < 1e-2);
    assert!(last.glow.position.distance(TARGET) < 1e-2);
    assert!(last.trail.position.distance(TARGET) < 1e-2);
}

#[test]
fn core_error_envelope_shrinks_toward_fixed_target() {
    let cfg = config_at_origin();
    let errors: Vec<f32> = run_steps(&cfg, TARGET, 300)
        .iter()
        .map(|s| s.core.position.distance(TARGET))
        .collect();
    let env = window_max(&errors, 20);
    for pair in env.windows(2) {
        assert!(
            pair[1] <= pair[0] + 1e-4,
            "error envelope grew: {:?}",
            pair
        );
    }
}

#[test]
fn velocity_decays_once_target_is_still() {
    let cfg = config_at_origin();
    let speeds: Vec<f32> = run_steps(&cfg, TARGET, 300)
        .iter()
        .map(|s| s.core.velocity.length())
        .collect();
    let env = window_max(&speeds, 20);
    for pair in env.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-5, "velocity envelope grew: {:?}", pair);
    }
    assert!(*speeds.last().unwrap() < 1e-3);
}

#[test]
fn converges_for_sampled_constants_in_tuning_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let cfg = AnimatorConfig {
            core: SpringParams::new(rng.gen_range(0.08..=0.3), rng.gen_range(0.65..=0.8)),
            glow: SpringParams::new(rng.gen_range(0.1..=0.12), rng.gen_range(0.75..=0.78)),
            trail_factor: rng.gen_range(0.05..=0.08),
            ..config_at_origin()
        };
        cfg.validate().unwrap();
        let last = *run_steps(&cfg, TARGET, 600).last().unwrap();
        assert!(
            last.trail.position.distance(TARGET) < 5e-2,
            "no convergence for {:?}",
            cfg
        );
        assert!(last.core.velocity.length() < 1e-3);
    }
}

#[test]
fn trail_lags_glow_lags_core_after_step_change() {
    let cfg = config_at_origin();
    let states = run_steps(&cfg, TARGET, 300);

    // trail is never ahead of either inner layer
    for (i, s) in states.iter().enumerate() {
        let dc = s.core.position.distance(TARGET);
        let dg = s.glow.position.distance(TARGET);
        let dt = s.trail.position.distance(TARGET);
        assert!(dt + 1e-3 >= dc, "tick {i}: trail {dt} ahead of core {dc}");
        assert!(dt + 1e-3 >= dg, "tick {i}: trail {dt} ahead of glow {dg}");
    }

    // first tick: strict ordering
    let first = states[0];
    assert!(first.core.position.distance(TARGET) < first.glow.position.distance(TARGET));
    assert!(first.glow.position.distance(TARGET) < first.trail.position.distance(TARGET));

    // arrival order within 5px
    let arrival = |f: &dyn Fn(&AnimatorState) -> Vec2| {
        states
            .iter()
            .position(|s| f(s).distance(TARGET) < 5.0)
            .unwrap()
    };
    let core_at = arrival(&|s| s.core.position);
    let glow_at = arrival(&|s| s.glow.position);
    let trail_at = arrival(&|s| s.trail.position);
    assert!(core_at < glow_at && glow_at < trail_at);

    // accumulated lag
    let total = |f: &dyn Fn(&AnimatorState) -> Vec2| -> f32 {
        states.iter().map(|s| f(s).distance(TARGET)).sum()
    };
    assert!(total(&|s| s.core.position) < total(&|s| s.glow.position));
    assert!(total(&|s| s.glow.position) < total(&|s| s.trail.position));
}

#[test]
fn layers_stay_put_at_rest() {
    let cfg = config_at_origin();
    let mut s = *run_steps(&cfg, TARGET, 400).last().unwrap();
    for _ in 0..100 {
        s = step(&s, Some(TARGET), &cfg);
        assert!(s.core.position.distance(TARGET) < 1e-2);
        assert!(s.glow.position.distance(TARGET) < 1e-2);
        assert!(s.trail.position.distance(TARGET) < 1e-2);
    }
}

#[test]
fn repeated_sample_keeps_previous_direction() {
    let cfg = config_at_origin();
    let s0 = AnimatorState::new(Vec2::ZERO);
    let s1 = step(&s0, Some(Vec2::new(10.0, 0.0)), &cfg);
    assert_eq!(s1.direction, Vec2::ZERO); // no previous sample yet
    let s2 = step(&s1, Some(Vec2::new(20.0, 0.0)), &cfg);
    assert!((s2.direction - Vec2::X).length() < 1e-6);
    let s3 = step(&s2, Some(Vec2::new(20.0, 0.0)), &cfg);
    assert_eq!(s3.direction, s2.direction);
    assert!(s3.direction.is_finite());

    // outer layers are drawn behind the motion, core is not biased
    let glow = s3.rendered_position(Layer::Glow, &cfg);
    let trail = s3.rendered_position(Layer::Trail, &cfg);
    assert_eq!(s3.rendered_position(Layer::Core, &cfg), s3.core.position);
    assert!((glow - (s3.glow.position - Vec2::X * cfg.lead_offset)).length() < 1e-4);
    assert!(
        (trail - (s3.trail.position - Vec2::X * cfg.lead_offset * cfg.trail_offset_scale))
            .length()
            < 1e-4
    );
}

#[test]
fn direction_follows_diagonal_motion() {
    let cfg = config_at_origin();
    let s = step(&AnimatorState::new(Vec2::ZERO), Some(Vec2::ZERO), &cfg);
    let s = step(&s, Some(Vec2::new(3.0, 4.0)), &cfg);
    assert!((s.direction - Vec2::new(0.6, 0.8)).length() < 1e-6);
}

#[test]
fn advance_one_frame_matches_step() {
    let cfg = config_at_origin();
    let s0 = AnimatorState::new(Vec2::ZERO);
    let a = advance(&s0, Some(TARGET), FRAME_DT, &cfg);
    let b = step(&s0, Some(TARGET), &cfg);
    assert!((a.core.position - b.core.position).length() < 1e-5);
    assert!((a.glow.position - b.glow.position).length() < 1e-5);
    assert!((a.trail.position - b.trail.position).length() < 1e-5);
}

#[test]
fn advance_two_frames_matches_two_steps() {
    let cfg = config_at_origin();
    let s0 = AnimatorState::new(Vec2::ZERO);
    let a = advance(&s0, Some(TARGET), 2.0 * FRAME_DT, &cfg);
    let b = step(&step(&s0, Some(TARGET), &cfg), Some(TARGET), &cfg);
    assert!((a.core.position - b.core.position).length() < 1e-4);
    assert!((a.trail.position - b.trail.position).length() < 1e-4);
}

#[test]
fn long_gap_is_capped() {
    let cfg = config_at_origin();
    let s0 = AnimatorState::new(Vec2::ZERO);
    let capped = advance(&s0, Some(TARGET), 1.0, &cfg);
    let four = advance(&s0, Some(TARGET), MAX_CATCHUP_FRAMES * FRAME_DT, &cfg);
    assert!((capped.core.position - four.core.position).length() < 1e-4);
}

#[test]
fn zero_or_invalid_dt_does_not_move_layers() {
    let cfg = config_at_origin();
    let s0 = AnimatorState::new(Vec2::ZERO);
    for dt in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let s = advance(&s0, Some(TARGET), dt, &cfg);
        assert_eq!(s.core, s0.core);
        assert_eq!(s.glow, s0.glow);
        assert_eq!(s.trail, s0.trail);
    }
}

#[test]
fn high_refresh_rate_still_converges() {
    let cfg = config_at_origin();
    let mut s = AnimatorState::new(Vec2::ZERO);
    for _ in 0..800 {
        s = advance(&s, Some(TARGET), FRAME_DT * 0.5, &cfg);
    }
    assert!(s.core.position.distance(TARGET) < 1e-2);
    assert!(s.trail.position.distance(TARGET) < 5e-2);
}

#[test]
fn no_target_holds_start_position() {
    let mut a = Animator::new(AnimatorConfig::default(), InputCapability::Pointer).unwrap();
    for _ in 0..10 {
        a.tick(FRAME_DT);
    }
    assert_eq!(a.state().core.position, OFFSCREEN_START);
    assert_eq!(a.state().trail.position, OFFSCREEN_START);
    assert!(!a.is_visible());
}

#[test]
fn becomes_visible_on_first_move_and_stays_visible() {
    let mut a = Animator::new(config_at_origin(), InputCapability::Pointer).unwrap();
    let f = a.frame();
    assert!(!f.visible);
    assert!(f.layers.iter().all(|l| l.opacity == 0.0));

    a.handle(PointerEvent::Move { x: 5.0, y: 5.0 });
    a.handle(PointerEvent::Leave);
    a.handle(PointerEvent::Down);
    a.handle(PointerEvent::Up);
    let f = a.tick(FRAME_DT);
    assert!(f.visible);
    assert!(f.layers.iter().all(|l| l.opacity == 1.0));
}

#[test]
fn malformed_move_is_ignored() {
    let mut a = Animator::new(config_at_origin(), InputCapability::Pointer).unwrap();
    a.handle(PointerEvent::Move { x: f32::NAN, y: 1.0 });
    assert_eq!(a.target(), None);
    assert!(!a.is_visible());

    a.handle(PointerEvent::Move { x: 1.0, y: 2.0 });
    a.handle(PointerEvent::Move {
        x: f32::INFINITY,
        y: 2.0,
    });
    assert_eq!(a.target(), Some(Vec2::new(1.0, 2.0)));
}

#[test]
fn touch_only_renders_nothing() {
    let mut a = Animator::new(config_at_origin(), InputCapability::TouchOnly).unwrap();
    a.handle(PointerEvent::Move { x: 50.0, y: 50.0 });
    a.handle(PointerEvent::Enter { interactive: true });
    for _ in 0..30 {
        let f = a.tick(FRAME_DT);
        assert!(f.layers.is_empty());
    }
    assert_eq!(a.state().core.position, Vec2::ZERO);
    assert!(!a.is_enabled());
}

#[test]
fn layer_count_limits_frame_output() {
    let cfg = AnimatorConfig {
        layer_count: 1,
        ..config_at_origin()
    };
    let a = Animator::new(cfg, InputCapability::Pointer).unwrap();
    let f = a.frame();
    assert_eq!(f.layers.len(), 1);
    assert_eq!(f.layers[0].layer, Layer::Core);

    let a = Animator::new(config_at_origin(), InputCapability::Pointer).unwrap();
    let layers: Vec<Layer> = a.frame().layers.iter().map(|l| l.layer).collect();
    assert_eq!(layers, vec![Layer::Core, Layer::Glow, Layer::Trail]);
}

#[test]
fn frame_sizes_follow_interaction_state() {
    let mut a = Animator::new(config_at_origin(), InputCapability::Pointer).unwrap();
    let idle = a.frame();
    a.handle(PointerEvent::Enter { interactive: true });
    let hover = a.frame();
    a.handle(PointerEvent::Down);
    let press = a.frame();

    assert_eq!(idle.interaction, InteractionState::Idle);
    assert_eq!(hover.interaction, InteractionState::Hovering);
    assert_eq!(press.interaction, InteractionState::Pressing);

    let glow = |f: &Frame| f.layers[1];
    assert!(glow(&hover).scale > glow(&idle).scale);
    assert!(glow(&press).scale < glow(&idle).scale);
    assert!(glow(&hover).glow > glow(&idle).glow);
    assert!(press.layers[0].scale < idle.layers[0].scale);
    assert_eq!(idle.layers[0].glow, 0.0);
}

#[test]
fn pump_drains_event_queue() {
    let mut a = Animator::new(config_at_origin(), InputCapability::Pointer).unwrap();
    let mut queue = EventQueue::new();
    let producer = queue.clone();
    producer.push(PointerEvent::Move { x: 10.0, y: 20.0 });
    producer.push(PointerEvent::Enter { interactive: true });
    producer.push(PointerEvent::Move { x: 30.0, y: 40.0 });
    assert_eq!(queue.len(), 3);

    assert_eq!(a.pump(&mut queue), 3);
    assert!(producer.is_empty());
    assert_eq!(a.target(), Some(Vec2::new(30.0, 40.0)));
    assert_eq!(a.interaction(), InteractionState::Hovering);
}

#[test]
fn core_tracks_pointer_through_animator() {
    let mut a = Animator::new(config_at_origin(), InputCapability::Pointer).unwrap();
    a.handle(PointerEvent::Move { x: 200.0, y: 120.0 });
    let mut frame = a.tick(FRAME_DT);
    for _ in 0..400 {
        frame = a.tick(FRAME_DT);
    }
    let core = frame.layers[0];
    assert_eq!(core.rendered, core.position);
    assert!(core.position.distance(Vec2::new(200.0, 120.0)) < 1e-2);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = AnimatorConfig {
        core: SpringParams::new(0.2, 1.0),
        ..AnimatorConfig::default()
    };
    let err = Animator::new(cfg, InputCapability::Pointer).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::DampingOutOfRange { layer: "core", .. }
    ));
}
