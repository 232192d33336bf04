//! User-facing status messages.
//!
//! Pure functions of the session state; the presentation layer renders them
//! verbatim in lock banners and cycle counters.

use super::state::SessionState;

/// Why defocus is (or is not) available right now.
///
/// Branches on the running session first: an active focus session is the
/// more specific condition than an outstanding defocus use.
pub fn defocus_lock_message(state: &SessionState) -> &'static str {
    if state.is_focus_active {
        return "Focus session in progress. Defocus unlocks when you complete your session.";
    }
    if state.is_defocus_used {
        return "You're ready to focus. Defocus unlocks after your next session.";
    }
    "Defocus is available."
}

/// Tiered encouragement keyed on today's completed cycle count.
pub fn cycle_completion_message(cycles: u32) -> String {
    match cycles {
        0 => "Complete your first focus cycle today to get started.".to_string(),
        1 => "Nice work completing your first focus cycle today!".to_string(),
        2 => format!("Well done! You've completed {cycles} focus cycles today."),
        _ => format!("You've completed {cycles} focus cycles today. You're on a roll!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_active_wins_over_defocus_used() {
        let state = SessionState {
            is_focus_active: true,
            is_defocus_used: true,
            ..SessionState::default()
        };
        assert!(defocus_lock_message(&state).starts_with("Focus session in progress"));
    }

    #[test]
    fn defocus_used_message() {
        let state = SessionState {
            is_defocus_used: true,
            ..SessionState::default()
        };
        assert!(defocus_lock_message(&state).starts_with("You're ready to focus"));
    }

    #[test]
    fn unlocked_message() {
        let state = SessionState::default();
        assert_eq!(defocus_lock_message(&state), "Defocus is available.");
    }

    #[test]
    fn cycle_message_tiers() {
        assert!(cycle_completion_message(0).contains("first focus cycle today to get started"));
        assert!(cycle_completion_message(1).contains("first focus cycle today!"));
        assert!(cycle_completion_message(2).contains("2 focus cycles"));
        assert!(cycle_completion_message(3).contains("on a roll"));
        assert!(cycle_completion_message(7).contains("7 focus cycles"));
    }
}
