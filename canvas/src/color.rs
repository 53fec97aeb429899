//! Hex color parsing and normalization for shape fills.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
#[must_use]
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?.as_bytes();
    let digits = hex.iter().map(|b| nibble(*b)).collect::<Option<Vec<u8>>>()?;
    match digits.as_slice() {
        [r, g, b] => Some((r * 17, g * 17, b * 17)),
        [r1, r0, g1, g0, b1, b0] => Some((r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0)),
        _ => None,
    }
}

/// Normalize a color to canonical lowercase `#rrggbb`, or `None` if it is not a hex color.
#[must_use]
pub fn normalize_hex_color(value: &str) -> Option<String> {
    let (r, g, b) = parse_hex_rgb(value)?;
    Some(format!("#{r:02x}{g:02x}{b:02x}"))
}

fn nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
