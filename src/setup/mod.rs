//! Round setup: range and attempt budget.
//!
//! Both selectors substitute defaults for bad input instead of re-prompting.

pub mod budget;
pub mod range;

pub use budget::{resolve_budget, select_budget, BudgetNotice, BudgetSelection};
pub use range::{parse_bound, resolve_range, select_range, BoundInput, RangeNotice, RangeSelection};
