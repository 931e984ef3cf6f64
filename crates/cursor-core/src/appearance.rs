use crate::config::AppearanceConfig;
use crate::interaction::InteractionState;

/// The nested follower shapes, innermost first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Core,
    Glow,
    Trail,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Core, Layer::Glow, Layer::Trail];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Layer::Core => 0,
            Layer::Glow => 1,
            Layer::Trail => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Layer::Core => "core",
            Layer::Glow => "glow",
            Layer::Trail => "trail",
        }
    }
}

/// Visual parameters of one layer for a given interaction state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerAppearance {
    pub diameter: f32,
    pub scale: f32,
    pub opacity: f32,
    pub glow: f32,
}

/// Pure mapping from state to visuals; transitions are left to the renderer.
pub fn layer_appearance(
    layer: Layer,
    state: InteractionState,
    visible: bool,
    cfg: &AppearanceConfig,
) -> LayerAppearance {
    let li = layer.index();
    let si = state.index();
    LayerAppearance {
        diameter: cfg.base_diameters[li],
        scale: cfg.state_scales[li][si],
        opacity: if visible { 1.0 } else { 0.0 },
        glow: match layer {
            Layer::Core => 0.0,
            Layer::Glow | Layer::Trail => cfg.glow_intensity[si],
        },
    }
}
