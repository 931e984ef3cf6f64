//! Tunable parameters for the cursor follower.
//!
//! Defaults come from [`crate::constants`]; hosts may override individual
//! values with `key=value` pairs (data attributes in the browser, command
//! line arguments in the replay tool).

use crate::constants::*;
use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{layer} damping must be inside (0, 1), got {value}")]
    DampingOutOfRange { layer: &'static str, value: f32 },
    #[error("{layer} spring strength must be inside (0, 1], got {value}")]
    StrengthOutOfRange { layer: &'static str, value: f32 },
    #[error("trail factor must be inside (0, 1], got {0}")]
    TrailFactorOutOfRange(f32),
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
    #[error("layer count must be between 1 and 3, got {0}")]
    LayerCount(usize),
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}

/// Spring coefficients for one layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub strength: f32,
    pub damping: f32,
}

impl SpringParams {
    pub const fn new(strength: f32, damping: f32) -> Self {
        Self { strength, damping }
    }

    fn validate(&self, layer: &'static str) -> Result<(), ConfigError> {
        if !(self.strength > 0.0 && self.strength <= 1.0) {
            return Err(ConfigError::StrengthOutOfRange {
                layer,
                value: self.strength,
            });
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(ConfigError::DampingOutOfRange {
                layer,
                value: self.damping,
            });
        }
        Ok(())
    }
}

/// Sizes and intensities the renderer maps interaction states to.
#[derive(Clone, Debug, PartialEq)]
pub struct AppearanceConfig {
    /// Base diameter per layer, `[core, glow, trail]`.
    pub base_diameters: [f32; 3],
    /// Scale per layer and state, `[layer][idle, hovering, pressing]`.
    pub state_scales: [[f32; 3]; 3],
    /// Glow intensity per state, `[idle, hovering, pressing]`.
    pub glow_intensity: [f32; 3],
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            base_diameters: BASE_DIAMETERS,
            state_scales: STATE_SCALES,
            glow_intensity: GLOW_INTENSITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimatorConfig {
    pub core: SpringParams,
    pub glow: SpringParams,
    pub trail_factor: f32,
    /// Length of the motion-direction bias applied to the outer layers.
    pub lead_offset: f32,
    pub glow_offset_scale: f32,
    pub trail_offset_scale: f32,
    /// Number of layers reported per frame, core first.
    pub layer_count: usize,
    pub start_position: Vec2,
    pub appearance: AppearanceConfig,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            core: SpringParams::new(CORE_SPRING_STRENGTH, CORE_DAMPING),
            glow: SpringParams::new(GLOW_SPRING_STRENGTH, GLOW_DAMPING),
            trail_factor: TRAIL_FACTOR,
            lead_offset: LEAD_OFFSET,
            glow_offset_scale: GLOW_OFFSET_SCALE,
            trail_offset_scale: TRAIL_OFFSET_SCALE,
            layer_count: 3,
            start_position: OFFSCREEN_START,
            appearance: AppearanceConfig::default(),
        }
    }
}

impl AnimatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.core.validate("core")?;
        self.glow.validate("glow")?;
        if !(self.trail_factor > 0.0 && self.trail_factor <= 1.0) {
            return Err(ConfigError::TrailFactorOutOfRange(self.trail_factor));
        }
        if !self.lead_offset.is_finite() {
            return Err(ConfigError::NonFinite("lead offset"));
        }
        if !self.glow_offset_scale.is_finite() || !self.trail_offset_scale.is_finite() {
            return Err(ConfigError::NonFinite("offset scale"));
        }
        if !self.start_position.is_finite() {
            return Err(ConfigError::NonFinite("start position"));
        }
        if !(1..=3).contains(&self.layer_count) {
            return Err(ConfigError::LayerCount(self.layer_count));
        }
        Ok(())
    }

    /// Apply `key=value` overrides on top of `self` and validate the result.
    ///
    /// Recognised keys: `core-strength`, `core-damping`, `glow-strength`,
    /// `glow-damping`, `trail-factor`, `lead-offset`, `layers`.
    pub fn with_overrides<'a, I>(mut self, pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in pairs {
            let key = key.trim();
            let value = value.trim();
            if key == "layers" {
                self.layer_count = value.parse().map_err(|_| invalid(key, value))?;
                continue;
            }
            let slot = match key {
                "core-strength" => &mut self.core.strength,
                "core-damping" => &mut self.core.damping,
                "glow-strength" => &mut self.glow.strength,
                "glow-damping" => &mut self.glow.damping,
                "trail-factor" => &mut self.trail_factor,
                "lead-offset" => &mut self.lead_offset,
                _ => return Err(ConfigError::UnknownKey(key.to_string())),
            };
            *slot = value.parse::<f32>().map_err(|_| invalid(key, value))?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Defaults plus the overrides among `pairs` whose key starts with
    /// `prefix`; other keys belong to someone else and are skipped.
    ///
    /// A rejected override set falls back to the defaults with a warning.
    pub fn from_prefixed_overrides<'a, I>(prefix: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let ours: Vec<(&str, &str)> = pairs
            .into_iter()
            .filter_map(|(k, v)| k.trim().strip_prefix(prefix).map(|k| (k, v)))
            .collect();
        if ours.is_empty() {
            return Self::default();
        }
        match Self::default().with_overrides(ours.iter().copied()) {
            Ok(cfg) => {
                log::info!("[cursor] applied {} config overrides", ours.len());
                cfg
            }
            Err(e) => {
                log::warn!("[cursor] ignoring config overrides: {}", e);
                Self::default()
            }
        }
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
