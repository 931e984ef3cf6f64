use std::collections::VecDeque;
use std::io::{self, BufWriter, Write};

use cursor_core::{
    Animator, AnimatorConfig, InputCapability, InteractionState, LayerFrame, PointerEvent,
    FRAME_DT,
};
use glam::Vec2;

const DEFAULT_FRAMES: usize = 240;
const CENTER: Vec2 = Vec2::new(400.0, 300.0);
const RADIUS: f32 = 200.0;
const CSV_HEADER: &str = "frame,state,layer,x,y";

struct Args {
    frames: usize,
    overrides: Vec<(String, String)>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut frames = DEFAULT_FRAMES;
    let mut overrides = Vec::new();
    for arg in std::env::args().skip(1) {
        if let Some((k, v)) = arg.split_once('=') {
            overrides.push((k.to_string(), v.to_string()));
        } else {
            frames = arg
                .parse()
                .map_err(|_| anyhow::anyhow!("expected frame count or key=value, got `{arg}`"))?;
        }
    }
    Ok(Args { frames, overrides })
}

/// Pointer input for frame `i`: half a circle sweep, then rest at the end point.
/// Hover and press happen during the sweep.
fn scripted_events(i: usize, frames: usize) -> Vec<PointerEvent> {
    let sweep = frames / 2;
    let mut out = Vec::new();
    if i <= sweep {
        let t = i as f32 / sweep.max(1) as f32 * std::f32::consts::PI;
        let p = CENTER + Vec2::new(t.cos(), t.sin()) * RADIUS;
        out.push(PointerEvent::Move { x: p.x, y: p.y });
    }
    let quarter = frames / 4;
    if i == quarter {
        out.push(PointerEvent::Enter { interactive: true });
    } else if i == quarter + 10 {
        out.push(PointerEvent::Down);
    } else if i == quarter + 20 {
        out.push(PointerEvent::Up);
    } else if i == sweep {
        out.push(PointerEvent::Leave);
    }
    out
}

fn csv_row(i: usize, state: InteractionState, lf: &LayerFrame) -> String {
    format!(
        "{},{:?},{},{:.3},{:.3}",
        i,
        state,
        lf.layer.name(),
        lf.rendered.x,
        lf.rendered.y
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = parse_args()?;
    let config = AnimatorConfig::default().with_overrides(
        args.overrides
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str())),
    )?;
    log::info!(
        "[sim] frames={} core={:?} glow={:?} trail={}",
        args.frames,
        config.core,
        config.glow,
        config.trail_factor
    );

    let mut animator = Animator::new(config, InputCapability::Pointer)?;
    let mut queue = VecDeque::new();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out, "{}", CSV_HEADER)?;

    for i in 0..args.frames {
        queue.extend(scripted_events(i, args.frames));
        animator.pump(&mut queue);
        let frame = animator.tick(FRAME_DT);
        for lf in &frame.layers {
            writeln!(out, "{}", csv_row(i, frame.interaction, lf))?;
        }
    }
    out.flush()?;

    if let Some(target) = animator.target() {
        let state = animator.state();
        log::info!(
            "[sim] final gap core={:.4} glow={:.4} trail={:.4}",
            state.core.position.distance(target),
            state.glow.position.distance(target),
            state.trail.position.distance(target)
        );
    }
    Ok(())
}
