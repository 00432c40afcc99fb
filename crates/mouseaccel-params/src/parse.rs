//! String-to-float conversion for surface values.

/// Converts a raw surface string into a float.
///
/// Returning `None` leaves the corresponding live value unchanged. The
/// parser runs inside the engine's guarded numeric region, so
/// implementations must not allocate.
pub trait FloatParser {
    /// Parse `raw`, or `None` if it is not a number.
    fn parse(&self, raw: &str) -> Option<f32>;
}

/// Default parser built on [`str::parse`].
///
/// Surrounding whitespace (including the trailing newline left by
/// `echo value > file`) is ignored, and a single trailing `f`/`F` is
/// accepted so C-style float literals such as `3.0f` parse.
///
/// # Example
///
/// ```
/// use mouseaccel_params::{FloatParser, StdFloatParser};
///
/// assert_eq!(StdFloatParser.parse(" 0.04f\n"), Some(0.04));
/// assert_eq!(StdFloatParser.parse("fast"), None);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFloatParser;

impl FloatParser for StdFloatParser {
    fn parse(&self, raw: &str) -> Option<f32> {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_suffix('f')
            .or_else(|| trimmed.strip_suffix('F'))
            .unwrap_or(trimmed);
        // "inf" ends in an f too
        if digits.is_empty() || digits.ends_with(['n', 'N', 'i', 'I']) {
            return trimmed.parse().ok();
        }
        digits.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Option<f32> {
        StdFloatParser.parse(raw)
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse("1"), Some(1.0));
        assert_eq!(parse("-2.5"), Some(-2.5));
        assert_eq!(parse("1e3"), Some(1000.0));
    }

    #[test]
    fn test_c_literal_suffix() {
        assert_eq!(parse("3.0f"), Some(3.0));
        assert_eq!(parse("0.5F"), Some(0.5));
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(parse("  2.2\n"), Some(2.2));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("f"), None);
        assert_eq!(parse("1.0ff"), None);
        assert_eq!(parse("abc"), None);
    }

    #[test]
    fn test_infinity_keeps_its_f() {
        assert_eq!(parse("inf"), Some(f32::INFINITY));
        assert_eq!(parse("-inf"), Some(f32::NEG_INFINITY));
    }
}
