use crate::constants::PALETTE;
use crate::error::ConfigError;
use glam::Vec3;

/// Parse `#rrggbb` (leading `#` optional) into RGB floats in [0, 1].
pub fn parse_hex_color(hex: &str) -> Result<Vec3, ConfigError> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(ConfigError::InvalidColor(hex.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map(|v| v as f32 / 255.0)
            .map_err(|_| ConfigError::InvalidColor(hex.to_string()))
    };
    Ok(Vec3::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Palette entry `index` as RGB; `None` past the end of the palette.
pub fn palette_color(index: usize) -> Option<Vec3> {
    PALETTE.get(index).and_then(|hex| parse_hex_color(hex).ok())
}
