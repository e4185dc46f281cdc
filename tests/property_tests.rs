//! Property tests for the selectors, the guess reader and the evaluator.

use std::io::Cursor;

use guessing_game::play::{parse_guess, read_guess, GuessInput, Verdict};
use guessing_game::setup::{parse_bound, resolve_budget, resolve_range, BoundInput};
use guessing_game::{GameConfig, GameDefaults, Terminal};
use proptest::prelude::*;

fn defaults() -> GameDefaults {
    GameDefaults::default()
}

proptest! {
    #[test]
    fn valid_range_is_kept(min in -1_000_000i64..1_000_000, span in 1i64..1_000_000) {
        let max = min + span;
        let selection = resolve_range(
            parse_bound(&min.to_string()),
            parse_bound(&max.to_string()),
            &defaults(),
        );
        prop_assert_eq!((selection.minimum, selection.maximum), (min, max));
        prop_assert!(selection.notice.is_none());
    }

    #[test]
    fn non_ascending_range_falls_back(max in -1_000_000i64..1_000_000, gap in 0i64..1_000) {
        let min = max + gap;
        let selection = resolve_range(BoundInput::Value(min), BoundInput::Value(max), &defaults());
        prop_assert_eq!((selection.minimum, selection.maximum), (1, 100));
    }

    #[test]
    fn non_numeric_bound_falls_back(junk in "[a-zA-Z .]{1,8}", n in any::<i64>()) {
        let bad = parse_bound(&junk);
        prop_assert_eq!(bad, BoundInput::Invalid);

        let left = resolve_range(bad, BoundInput::Value(n), &defaults());
        let right = resolve_range(BoundInput::Value(n), bad, &defaults());
        prop_assert_eq!((left.minimum, left.maximum), (1, 100));
        prop_assert_eq!((right.minimum, right.maximum), (1, 100));
    }

    #[test]
    fn positive_budget_is_kept(n in 1u32..=u32::MAX) {
        prop_assert_eq!(resolve_budget(&n.to_string(), 3).max_guesses, n);
    }

    #[test]
    fn non_positive_budget_falls_back(n in i64::MIN..=0) {
        prop_assert_eq!(resolve_budget(&n.to_string(), 3).max_guesses, 3);
    }

    #[test]
    fn non_numeric_budget_falls_back(junk in "[a-zA-Z.]{1,8}") {
        prop_assert_eq!(resolve_budget(&junk, 3).max_guesses, 3);
    }

    #[test]
    fn reader_only_returns_in_range(
        entries in prop::collection::vec(prop_oneof![
            (-50i64..150).prop_map(|n| n.to_string()),
            "[a-z]{0,4}",
        ], 0..20),
        last in 1i64..=100,
    ) {
        let config = GameConfig::new(1, 100, 3);
        let mut input = entries.join("\n");
        input.push('\n');
        input.push_str(&last.to_string());
        input.push('\n');

        let mut term = Terminal::new(Cursor::new(input), Vec::new());
        let guess = read_guess(&mut term, &config, None).unwrap();
        prop_assert!(config.contains(guess));

        let first_valid = entries
            .iter()
            .filter_map(|e| e.trim().parse::<i64>().ok())
            .find(|n| config.contains(*n))
            .unwrap_or(last);
        prop_assert_eq!(guess, first_valid);
    }

    #[test]
    fn oversized_integer_is_out_of_range(
        sign in prop_oneof![Just(""), Just("-"), Just("+")],
        digits in "[1-9][0-9]{19,30}",
    ) {
        let config = GameConfig::new(1, 100, 3);
        let raw = format!("{sign}{digits}");
        prop_assert!(matches!(parse_guess(&raw, &config), GuessInput::OutOfRange(_)));
        prop_assert!(matches!(parse_bound(&raw), BoundInput::Value(_)));
    }

    #[test]
    fn verdict_matches_comparison(guess in -1_000i64..1_000, winning in -1_000i64..1_000) {
        let verdict = Verdict::judge(guess, winning, 5);
        prop_assert_eq!(verdict.is_correct(), guess == winning);

        let feedback = verdict.feedback();
        if guess > winning {
            prop_assert_eq!(feedback[0], "Too high!");
        } else if guess < winning {
            prop_assert_eq!(feedback[0], "Too low!");
        } else {
            prop_assert!(feedback.is_empty());
        }

        let hinted = feedback.contains(&"You're very close!");
        prop_assert_eq!(hinted, guess != winning && (guess - winning).abs() <= 5);
    }
}
