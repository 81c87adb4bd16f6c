use crate::constants::*;
use crate::error::ConfigError;
use crate::palette::parse_hex_color;
use crate::shapes::ShapeKind;
use glam::Vec3;

/// Hardware tier; decides how many particles the scene can afford.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceClass {
    pub fn particle_count(self) -> usize {
        match self {
            DeviceClass::Desktop => PARTICLE_COUNT_DESKTOP,
            DeviceClass::Mobile => PARTICLE_COUNT_MOBILE,
        }
    }
}

/// Startup settings for a scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub device_class: DeviceClass,
    pub shape: ShapeKind,
    pub color: Vec3,
    /// Start with gesture tracking on.
    pub tracking: bool,
    pub smoothing_alpha: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            device_class: DeviceClass::Desktop,
            shape: ShapeKind::Heart,
            color: parse_hex_color(DEFAULT_COLOR_HEX).unwrap_or(Vec3::ONE),
            tracking: true,
            smoothing_alpha: SIGNAL_SMOOTHING_ALPHA,
        }
    }
}

impl SceneConfig {
    /// Build from command-line style arguments (program name excluded).
    ///
    /// Recognized: `--low-power`, `--no-tracking`, `--shape=<name>`,
    /// `--color=<#rrggbb>`.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cfg = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--low-power" => cfg.device_class = DeviceClass::Mobile,
                "--no-tracking" => cfg.tracking = false,
                _ => {
                    if let Some(name) = arg.strip_prefix("--shape=") {
                        cfg.shape = name.parse()?;
                    } else if let Some(hex) = arg.strip_prefix("--color=") {
                        cfg.color = parse_hex_color(hex)?;
                    } else {
                        return Err(ConfigError::UnknownArgument(arg.to_string()));
                    }
                }
            }
        }
        Ok(cfg)
    }

    pub fn particle_count(&self) -> usize {
        self.device_class.particle_count()
    }
}
