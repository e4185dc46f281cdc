//! Range selection: ask for bounds, fall back to the default pair on bad input.

use log::debug;

use crate::console::Console;
use crate::core::{parse_int, GameDefaults};
use crate::error::Result;
use crate::messages;

/// One bound as typed by the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundInput {
    /// Nothing typed; use the default for this bound.
    Empty,
    Value(i64),
    /// Not an integer.
    Invalid,
}

/// Parse one bound field.
///
/// Only a completely empty line counts as `Empty`. Whitespace around a number
/// is fine, but a line of only whitespace is `Invalid`. Integers beyond `i64`
/// are clamped, so they still take part in the ordering check.
pub fn parse_bound(raw: &str) -> BoundInput {
    if raw.is_empty() {
        return BoundInput::Empty;
    }
    match parse_int(raw).saturated() {
        Some(n) => BoundInput::Value(n),
        None => BoundInput::Invalid,
    }
}

/// Why the typed range was replaced by the defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeNotice {
    /// A bound was not an integer.
    InvalidInput,
    /// Minimum was not below maximum.
    NotAscending,
}

/// Outcome of range selection. `minimum < maximum` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeSelection {
    pub minimum: i64,
    pub maximum: i64,
    pub notice: Option<RangeNotice>,
}

impl RangeSelection {
    fn fallback(defaults: &GameDefaults, notice: RangeNotice) -> Self {
        Self {
            minimum: defaults.minimum,
            maximum: defaults.maximum,
            notice: Some(notice),
        }
    }

    /// The line to show the player, if anything was substituted.
    #[must_use]
    pub fn notice_message(&self) -> Option<String> {
        self.notice.map(|notice| match notice {
            RangeNotice::InvalidInput => messages::range_invalid_notice(self.minimum, self.maximum),
            RangeNotice::NotAscending => messages::range_order_notice(self.minimum, self.maximum),
        })
    }
}

/// Combine two parsed bounds into a valid range.
///
/// Either bound invalid, or the bounds not ascending, discards both and
/// yields the default pair.
pub fn resolve_range(
    minimum: BoundInput,
    maximum: BoundInput,
    defaults: &GameDefaults,
) -> RangeSelection {
    let value = |input: BoundInput, default: i64| match input {
        BoundInput::Empty => Some(default),
        BoundInput::Value(n) => Some(n),
        BoundInput::Invalid => None,
    };

    match (
        value(minimum, defaults.minimum),
        value(maximum, defaults.maximum),
    ) {
        (Some(minimum), Some(maximum)) if minimum < maximum => RangeSelection {
            minimum,
            maximum,
            notice: None,
        },
        (Some(_), Some(_)) => RangeSelection::fallback(defaults, RangeNotice::NotAscending),
        _ => RangeSelection::fallback(defaults, RangeNotice::InvalidInput),
    }
}

/// Ask for the range bounds and return a valid `(minimum, maximum)` pair.
///
/// Never re-prompts. An invalid minimum skips the maximum prompt entirely.
pub fn select_range(console: &mut impl Console, defaults: &GameDefaults) -> Result<(i64, i64)> {
    let minimum = parse_bound(&console.ask(&messages::minimum_prompt(defaults.minimum))?);
    let maximum = match minimum {
        BoundInput::Invalid => BoundInput::Invalid,
        _ => parse_bound(&console.ask(&messages::maximum_prompt(defaults.maximum))?),
    };

    let selection = resolve_range(minimum, maximum, defaults);
    if let Some(notice) = selection.notice_message() {
        debug!("range input {minimum:?}..{maximum:?} replaced by defaults");
        console.say(&notice)?;
    }
    Ok((selection.minimum, selection.maximum))
}
