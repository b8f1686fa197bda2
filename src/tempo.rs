//! Tempo values in beats per minute.
//!
//! Accepted forms: `"120"`, `" 120 "`, `"+120"`, `"-60"`, `"120.6"` (fraction
//! truncated toward zero), `"128 BPM"`. Anything that is not an integer after
//! that does not parse. Zero and negative values are kept as given; the
//! classifier decides what they mean.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tempo(i64);

impl Tempo {
    pub fn new(bpm: i64) -> Self {
        Self(bpm)
    }

    /// Parse a tempo string.
    ///
    /// ```
    /// use keymix::Tempo;
    ///
    /// assert_eq!(Tempo::parse("128").map(|t| t.bpm()), Some(128));
    /// assert_eq!(Tempo::parse("127.9 bpm").map(|t| t.bpm()), Some(127));
    /// assert_eq!(Tempo::parse("0").map(|t| t.bpm()), Some(0));
    /// assert!(Tempo::parse("fast").is_none());
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let mut trimmed = input.trim();
        if let Some(split) = trimmed.len().checked_sub(3) {
            if trimmed
                .get(split..)
                .is_some_and(|suffix| suffix.eq_ignore_ascii_case("bpm"))
            {
                trimmed = trimmed[..split].trim_end();
            }
        }

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (trimmed, ""),
        };
        let digits = whole.strip_prefix(['+', '-']).unwrap_or(whole);
        if digits.is_empty()
            || !digits.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        whole.parse::<i64>().ok().map(Self)
    }

    pub fn bpm(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} BPM", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bpm(s: &str) -> Option<i64> {
        Tempo::parse(s).map(|t| t.bpm())
    }

    #[test]
    fn test_parse_plain_integers() {
        assert_eq!(bpm("120"), Some(120));
        assert_eq!(bpm("  95\n"), Some(95));
        assert_eq!(bpm("007"), Some(7));
    }

    #[test]
    fn test_parse_signed_and_zero() {
        assert_eq!(bpm("0"), Some(0));
        assert_eq!(bpm("+120"), Some(120));
        assert_eq!(bpm("-120"), Some(-120));
        assert_eq!(bpm("-0"), Some(0));
        assert_eq!(Tempo::parse("-5 BPM"), Some(Tempo::new(-5)));
    }

    #[test]
    fn test_parse_decimal_truncates() {
        assert_eq!(bpm("120.5"), Some(120));
        assert_eq!(bpm("99.99"), Some(99));
        assert_eq!(bpm("140."), Some(140));
        assert_eq!(bpm("-60.7"), Some(-60));
        assert_eq!(bpm("0.9"), Some(0));
    }

    #[test]
    fn test_parse_bpm_suffix() {
        assert_eq!(bpm("128 BPM"), Some(128));
        assert_eq!(bpm("128bpm"), Some(128));
        assert_eq!(bpm("128 Bpm"), Some(128));
    }

    #[test]
    fn test_parse_rejects_invalid() {
        for input in ["", "bpm", "fast", "-", "+", "--1", "+-1", "12a", ".5", "1.2.3", "Unknown"] {
            assert_eq!(bpm(input), None, "{:?} should not parse", input);
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert_eq!(bpm("99999999999999999999999"), None);
    }
}
