//! Integer parsing for typed input.
//!
//! `str::parse::<i64>` calls an over-long number "not a number". The game
//! treats it as an integer that is simply too big, so it can be routed to the
//! out-of-range path instead of the not-an-integer one.

use std::num::IntErrorKind;

/// One line of input read as an integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParsedInt {
    /// Fits in an `i64`.
    Fits(i64),
    /// A well-formed integer beyond `i64`, clamped to `i64::MAX`/`i64::MIN`.
    Overflow { saturated: i64 },
    NotInteger,
}

impl ParsedInt {
    /// The value, clamped when it overflowed.
    #[must_use]
    pub fn saturated(self) -> Option<i64> {
        match self {
            ParsedInt::Fits(n) | ParsedInt::Overflow { saturated: n } => Some(n),
            ParsedInt::NotInteger => None,
        }
    }
}

/// Parse `raw` as a signed decimal integer, ignoring surrounding whitespace.
pub fn parse_int(raw: &str) -> ParsedInt {
    match raw.trim().parse::<i64>() {
        Ok(n) => ParsedInt::Fits(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => ParsedInt::Overflow {
                saturated: i64::MAX,
            },
            IntErrorKind::NegOverflow => ParsedInt::Overflow {
                saturated: i64::MIN,
            },
            _ => ParsedInt::NotInteger,
        },
    }
}
