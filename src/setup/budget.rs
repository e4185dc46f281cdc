//! Attempt budget selection.

use log::debug;

use crate::console::Console;
use crate::core::parse_int;
use crate::error::Result;
use crate::messages;

/// Why the typed budget was replaced by the default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BudgetNotice {
    InvalidInput,
    NotPositive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BudgetSelection {
    pub max_guesses: u32,
    pub notice: Option<BudgetNotice>,
}

/// Turn the typed budget into a positive attempt count.
///
/// Blank input takes the default silently; anything non-numeric or not
/// positive takes the default with a notice. Budgets beyond `u32::MAX`
/// saturate.
pub fn resolve_budget(raw: &str, default: u32) -> BudgetSelection {
    let raw = raw.trim();
    if raw.is_empty() {
        return BudgetSelection {
            max_guesses: default,
            notice: None,
        };
    }

    match parse_int(raw).saturated() {
        Some(n) if n > 0 => BudgetSelection {
            max_guesses: u32::try_from(n).unwrap_or(u32::MAX),
            notice: None,
        },
        Some(_) => BudgetSelection {
            max_guesses: default,
            notice: Some(BudgetNotice::NotPositive),
        },
        None => BudgetSelection {
            max_guesses: default,
            notice: Some(BudgetNotice::InvalidInput),
        },
    }
}

/// Ask for the attempt budget. Never re-prompts.
pub fn select_budget(console: &mut impl Console, default: u32) -> Result<u32> {
    let raw = console.ask(&messages::budget_prompt(default))?;
    let selection = resolve_budget(&raw, default);

    if let Some(notice) = selection.notice {
        debug!("budget input {raw:?} replaced by default ({notice:?})");
        let line = match notice {
            BudgetNotice::InvalidInput => messages::budget_invalid_notice(default),
            BudgetNotice::NotPositive => messages::budget_not_positive_notice(default),
        };
        console.say(&line)?;
    }
    Ok(selection.max_guesses)
}
