// Inline style strings for the follower layers and magnetic elements.
// Kept free of web-sys so host tests can include it directly.

use cursor_core::{Layer, LayerFrame};
use glam::Vec2;

#[inline]
fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        rgb[0],
        rgb[1],
        rgb[2],
        alpha.clamp(0.0, 1.0)
    )
}

/// `transform` value centring the element on `pos`.
#[inline]
pub fn centered_translate(pos: Vec2) -> String {
    format!(
        "translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%)",
        pos.x, pos.y
    )
}

#[inline]
pub fn translate(offset: Vec2) -> String {
    format!("translate({:.2}px, {:.2}px)", offset.x, offset.y)
}

/// Complete inline style for one follower layer.
pub fn layer_style(
    frame: &LayerFrame,
    core_rgb: [u8; 3],
    glow_rgb: [u8; 3],
    z_index: u32,
    transition: &str,
) -> String {
    let size = frame.diameter * frame.scale;
    let body = match frame.layer {
        Layer::Core => format!("background: {};", rgba(core_rgb, 1.0)),
        Layer::Glow => format!(
            "border: 1px solid {}; box-shadow: 0 0 {:.1}px {};",
            rgba(glow_rgb, 0.6),
            size * frame.glow,
            rgba(glow_rgb, frame.glow)
        ),
        Layer::Trail => format!(
            "background: radial-gradient(circle, {} 0%, {} 70%);",
            rgba(glow_rgb, frame.glow * 0.5),
            rgba(glow_rgb, 0.0)
        ),
    };
    format!(
        "position: fixed; top: 0; left: 0; pointer-events: none; border-radius: 50%; \
         z-index: {}; width: {:.2}px; height: {:.2}px; opacity: {:.3}; transform: {}; \
         transition: {}; {}",
        z_index,
        size,
        size,
        frame.opacity,
        centered_translate(frame.rendered),
        transition,
        body
    )
}
