//! Everything the game prints, as plain strings.

/// Prompt for the lower bound.
pub fn minimum_prompt(default: i64) -> String {
    format!("Enter the minimum number (default is {default}): ")
}

/// Prompt for the upper bound.
pub fn maximum_prompt(default: i64) -> String {
    format!("Enter the maximum number (default is {default}): ")
}

/// Prompt for the attempt budget.
pub fn budget_prompt(default: u32) -> String {
    format!("Enter the number of guesses you want (default is {default}): ")
}

/// Prompt for a guess, showing the inclusive range.
pub fn guess_prompt(minimum: i64, maximum: i64) -> String {
    format!("Choose a number ({minimum}-{maximum}): ")
}

/// Asked after every round.
pub const PLAY_AGAIN_PROMPT: &str = "Do you want to play again? (y/n): ";

/// Printed once when the session ends.
pub const FAREWELL: &str = "Thank you for playing!";

/// Directional feedback for a miss.
pub const TOO_HIGH: &str = "Too high!";
pub const TOO_LOW: &str = "Too low!";
/// Extra hint for a near miss.
pub const VERY_CLOSE: &str = "You're very close!";

/// Shown instead of a count when no attempts remain.
pub const LAST_ATTEMPT: &str = "This was your last attempt.";

/// Notice for a non-integer bound, naming the fallback pair.
pub fn range_invalid_notice(minimum: i64, maximum: i64) -> String {
    format!("Invalid input. Using default numbers {minimum} and {maximum}.")
}

/// Notice for a minimum not below the maximum.
pub fn range_order_notice(minimum: i64, maximum: i64) -> String {
    format!(
        "Minimum number should be less than the maximum. Using defaults {minimum} and {maximum}."
    )
}

/// Notice for a non-integer attempt budget.
pub fn budget_invalid_notice(default: u32) -> String {
    format!("Invalid input. Using default number of attempts ({default}).")
}

/// Notice for a zero or negative attempt budget.
pub fn budget_not_positive_notice(default: u32) -> String {
    format!("Please enter a positive integer. Using default number of attempts ({default}).")
}

/// Complaint for a guess that is not an integer.
pub fn guess_not_integer(minimum: i64, maximum: i64) -> String {
    format!("Invalid input. Please enter an integer between {minimum} and {maximum}.")
}

/// Complaint for an integer guess outside the range.
pub fn guess_out_of_range(minimum: i64, maximum: i64) -> String {
    format!("Please enter a number between {minimum} and {maximum}.")
}

/// The two introduction lines printed at the start of a round.
pub fn introduction(minimum: i64, maximum: i64, max_guesses: u32) -> [String; 2] {
    [
        format!(
            "Welcome to the guessing game! I'm thinking of a number between {minimum} and {maximum}."
        ),
        format!("You have {max_guesses} attempts to choose the correct number."),
    ]
}

/// "You have guessed N time(s)." with the noun agreeing with N.
pub fn guesses_so_far(guess_count: u32) -> String {
    let noun = if guess_count == 1 { "time" } else { "times" };
    format!("You have guessed {guess_count} {noun}.")
}

/// Attempts left after `guess_count` misses, or the last-attempt line.
pub fn remaining_attempts(guess_count: u32, max_guesses: u32) -> String {
    match max_guesses.saturating_sub(guess_count) {
        0 => LAST_ATTEMPT.to_string(),
        left => format!("You have {left} attempt(s) left."),
    }
}

/// Win message; "try" for one guess, "tries" otherwise.
pub fn winning(guess_count: u32, winning_number: i64) -> String {
    let noun = if guess_count == 1 { "try" } else { "tries" };
    format!(
        "Congratulations! You guessed the winning number: {winning_number} in {guess_count} {noun}!"
    )
}

/// Reveal of the winning number after a lost round.
pub fn reveal(winning_number: i64) -> String {
    format!("The winning number was: {winning_number}")
}
