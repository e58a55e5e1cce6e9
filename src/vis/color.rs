//! Series color resolution

use std::collections::HashMap;

use lazy_static::lazy_static;
use plotters::style::RGBColor;

use crate::error::{Error, Result};

lazy_static! {
    // CSS-style color names accepted in "color" fields
    static ref NAMED_COLORS: HashMap<&'static str, (u8, u8, u8)> = {
        let mut m = HashMap::new();
        m.insert("aqua", (0, 255, 255));
        m.insert("black", (0, 0, 0));
        m.insert("blue", (0, 0, 255));
        m.insert("brown", (165, 42, 42));
        m.insert("cyan", (0, 255, 255));
        m.insert("darkgray", (169, 169, 169));
        m.insert("darkgrey", (169, 169, 169));
        m.insert("fuchsia", (255, 0, 255));
        m.insert("gray", (128, 128, 128));
        m.insert("green", (0, 128, 0));
        m.insert("grey", (128, 128, 128));
        m.insert("lightgray", (211, 211, 211));
        m.insert("lightgrey", (211, 211, 211));
        m.insert("lime", (0, 255, 0));
        m.insert("magenta", (255, 0, 255));
        m.insert("maroon", (128, 0, 0));
        m.insert("navy", (0, 0, 128));
        m.insert("olive", (128, 128, 0));
        m.insert("orange", (255, 165, 0));
        m.insert("pink", (255, 192, 203));
        m.insert("purple", (128, 0, 128));
        m.insert("red", (255, 0, 0));
        m.insert("silver", (192, 192, 192));
        m.insert("teal", (0, 128, 128));
        m.insert("white", (255, 255, 255));
        m.insert("yellow", (255, 255, 0));
        m.insert("yellowgreen", (154, 205, 50));
        m
    };
}

/// Resolve a color string to an RGB color.
///
/// Accepts CSS-style names (`"blue"`, `"yellowGreen"`, case-insensitive) and
/// `#rgb` / `#rrggbb` hex forms. Anything else is [`Error::InvalidColor`].
pub fn resolve_color(spec: &str) -> Result<RGBColor> {
    let trimmed = spec.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| Error::InvalidColor(spec.to_string()));
    }
    let key = trimmed.to_lowercase();
    NAMED_COLORS
        .get(key.as_str())
        .map(|&(r, g, b)| RGBColor(r, g, b))
        .ok_or_else(|| Error::InvalidColor(spec.to_string()))
}

fn parse_hex(hex: &str) -> Option<RGBColor> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let digits: Vec<u8> = hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| d as u8))
                .collect::<Option<Vec<_>>>()?;
            Some(RGBColor(
                digits[0] * 17,
                digits[1] * 17,
                digits[2] * 17,
            ))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(RGBColor(r, g, b))
        }
        _ => None,
    }
}
