//! Colour names accepted by the renderer

use crate::error::{Error, Result};
use image::Rgb;

const NAMED: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("navy", [0, 0, 128]),
    ("yellow", [255, 255, 0]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("magenta", [255, 0, 255]),
    ("cyan", [0, 255, 255]),
    ("teal", [0, 128, 128]),
    ("pink", [255, 192, 203]),
    ("brown", [165, 42, 42]),
    ("grey", [128, 128, 128]),
    ("gray", [128, 128, 128]),
    ("lightgrey", [211, 211, 211]),
    ("lightgray", [211, 211, 211]),
    ("darkgrey", [169, 169, 169]),
    ("darkgray", [169, 169, 169]),
];

/// Parse a CSS colour name, `#rrggbb` or `#rgb`
pub fn parse_color(value: &str) -> Result<Rgb<u8>> {
    let value = value.trim().to_ascii_lowercase();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| unsupported(&value));
    }

    NAMED
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, rgb)| Rgb(*rgb))
        .ok_or_else(|| unsupported(&value))
}

fn parse_hex(hex: &str) -> Option<Rgb<u8>> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Rgb([channel(0)?, channel(2)?, channel(4)?]))
        }
        3 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some(Rgb([channel(0)?, channel(1)?, channel(2)?]))
        }
        _ => None,
    }
}

fn unsupported(value: &str) -> Error {
    Error::Render(format!("unsupported color: {}", value))
}
