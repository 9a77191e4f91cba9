use bevy::prelude::*;

/// The page palette. Dark slate surfaces under a teal accent, with the
/// background shared between the UI, the clear colour and the scene fog.
pub const BACKGROUND: Color = Color::Srgba(Srgba::new(0.008, 0.024, 0.090, 1.0));
pub const SURFACE: Color = Color::Srgba(Srgba::new(0.059, 0.090, 0.165, 1.0));
pub const BORDER: Color = Color::Srgba(Srgba::new(0.118, 0.161, 0.231, 1.0));

pub const TEXT_PRIMARY: Color = Color::Srgba(Srgba::new(0.945, 0.961, 0.976, 1.0));
pub const TEXT_MUTED: Color = Color::Srgba(Srgba::new(0.580, 0.639, 0.722, 1.0));
pub const TEXT_FAINT: Color = Color::Srgba(Srgba::new(0.392, 0.455, 0.545, 1.0));

pub const ACCENT: Color = Color::Srgba(Srgba::new(0.078, 0.722, 0.651, 1.0));
pub const SUCCESS: Color = Color::Srgba(Srgba::new(0.063, 0.725, 0.506, 1.0));
pub const ERROR: Color = Color::Srgba(Srgba::new(0.973, 0.443, 0.443, 1.0));

/// Scrim behind open modals.
pub const OVERLAY: Color = Color::Srgba(Srgba::new(0.008, 0.024, 0.090, 0.85));

/// Parses a six-digit hex colour as carried by the content record.
/// Malformed input falls back to the accent colour.
pub fn parse_hex(hex: &str) -> Color {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) if hex.len() == 6 => Color::srgb_u8(r, g, b),
        _ => ACCENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pillar_hex_colors_parse() {
        let teal = parse_hex("14b8a6").to_srgba();
        assert!((teal.red - 0.078).abs() < 0.01);
        assert!((teal.green - 0.722).abs() < 0.01);
        assert!((teal.blue - 0.651).abs() < 0.01);
    }

    #[test]
    fn malformed_hex_falls_back_to_accent() {
        assert_eq!(parse_hex("nope"), ACCENT);
        assert_eq!(parse_hex("14b8a"), ACCENT);
        assert_eq!(parse_hex(""), ACCENT);
    }
}
