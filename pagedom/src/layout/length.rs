/// Pixels per `em`/`rem` unit.
pub const FONT_SIZE: f64 = 16.0;

/// Resolve an inline CSS length to pixels.
///
/// Supports unitless numbers, `px`, `em` and `rem`. Anything else
/// (percentages, `auto`, garbage) resolves to `None` and leaves the box at
/// its natural size.
pub fn parse_length(value: &str) -> Option<u32> {
    let value = value.trim();
    let (number, scale) = if let Some(n) = value.strip_suffix("px") {
        (n, 1.0)
    } else if let Some(n) = value.strip_suffix("rem") {
        (n, FONT_SIZE)
    } else if let Some(n) = value.strip_suffix("em") {
        (n, FONT_SIZE)
    } else {
        (value, 1.0)
    };

    let number: f64 = number.trim().parse().ok()?;
    if !number.is_finite() {
        return None;
    }
    Some((number * scale).round().max(0.0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length_units() {
        assert_eq!(parse_length("130px"), Some(130));
        assert_eq!(parse_length("0px"), Some(0));
        assert_eq!(parse_length("0"), Some(0));
        assert_eq!(parse_length("2em"), Some(32));
        assert_eq!(parse_length("1.5rem"), Some(24));
        assert_eq!(parse_length(" 12.4px "), Some(12));
    }

    #[test]
    fn test_parse_length_rejects_unsupported() {
        assert_eq!(parse_length("auto"), None);
        assert_eq!(parse_length("50%"), None);
        assert_eq!(parse_length(""), None);
        assert_eq!(parse_length("px"), None);
    }

    #[test]
    fn test_parse_length_clamps_negative() {
        assert_eq!(parse_length("-10px"), Some(0));
    }
}
