use csscolorparser::Color;

/// Parse any CSS color value to RGB channels (0-255).
/// Handles: hex (3/4/6/8 digit), rgb, hsl, oklch, named colors.
/// Returns None for: transparent, inherit, currentColor, unrecognized —
/// callers treat that as "contrast rule does not apply".
pub fn parse_color(value: &str) -> Option<(u8, u8, u8)> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Non-colors that platforms sometimes emit verbatim
    match trimmed.to_lowercase().as_str() {
        "transparent" | "inherit" | "currentcolor" | "initial" | "unset" => return None,
        _ => {}
    }

    // Hex fast path (alpha digits, if present, are ignored)
    if let Some(raw) = trimmed.strip_prefix('#') {
        return parse_hex_rgb(raw);
    }

    // csscolorparser for everything else (rgb, hsl, oklch, named, ...)
    let color = trimmed.parse::<Color>().ok()?;
    let [r, g, b, _a] = color.to_rgba8();
    Some((r, g, b))
}

/// Parse the digits of a hex color (no leading '#') to RGB channels.
/// 3- and 4-digit forms expand each digit; 8-digit alpha is dropped.
fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    if !raw.is_ascii() {
        return None;
    }
    let expand = |c: char| -> Option<u8> {
        let v = c.to_digit(16)? as u8;
        Some(v * 16 + v)
    };
    match raw.len() {
        3 | 4 => {
            let mut chars = raw.chars();
            let r = expand(chars.next()?)?;
            let g = expand(chars.next()?)?;
            let b = expand(chars.next()?)?;
            Some((r, g, b))
        }
        6 | 8 => {
            let r = u8::from_str_radix(&raw[0..2], 16).ok()?;
            let g = u8::from_str_radix(&raw[2..4], 16).ok()?;
            let b = u8::from_str_radix(&raw[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}
