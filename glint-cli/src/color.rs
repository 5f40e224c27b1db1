//! Color strings typed by the user or found in the config file

use anyhow::{bail, Result};

use glint_core::Color;

const NAMED: &[(&str, u32)] = &[
    ("black", 0xFF000000),
    ("darkgray", 0xFF444444),
    ("darkgrey", 0xFF444444),
    ("gray", 0xFF888888),
    ("grey", 0xFF888888),
    ("lightgray", 0xFFCCCCCC),
    ("lightgrey", 0xFFCCCCCC),
    ("white", 0xFFFFFFFF),
    ("red", 0xFFFF0000),
    ("green", 0xFF00FF00),
    ("blue", 0xFF0000FF),
    ("yellow", 0xFFFFFF00),
    ("cyan", 0xFF00FFFF),
    ("magenta", 0xFFFF00FF),
    ("aqua", 0xFF00FFFF),
    ("fuchsia", 0xFFFF00FF),
    ("lime", 0xFF00FF00),
    ("maroon", 0xFF800000),
    ("navy", 0xFF000080),
    ("olive", 0xFF808000),
    ("purple", 0xFF800080),
    ("silver", 0xFFC0C0C0),
    ("teal", 0xFF008080),
];

/// Parse `RRGGBB`, `AARRGGBB` (either with an optional leading `#`) or a
/// color name.
pub fn parse_color(input: &str) -> Result<Color> {
    let input = input.trim();
    let hex = input.strip_prefix('#').unwrap_or(input);

    if (hex.len() == 6 || hex.len() == 8) && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        let value = u32::from_str_radix(hex, 16)?;
        return Ok(if hex.len() == 6 {
            Color::from_argb(0xFF00_0000 | value)
        } else {
            Color::from_argb(value)
        });
    }

    let name = input.to_ascii_lowercase();
    match NAMED.iter().find(|(n, _)| *n == name) {
        Some((_, argb)) => Ok(Color::from_argb(*argb)),
        None => bail!("Unknown color: {}", input),
    }
}
