use crate::models::motivation::MotivationRequest;

/// Build the coaching prompt for a set of focus statistics.
///
/// Pure string formatting: the same input always yields byte-identical
/// prompt text. The instructions ask the model for a short, emoji-bearing
/// message (max two sentences) grounded in the user's actual numbers.
pub fn build_prompt(stats: &MotivationRequest) -> String {
    let today = if stats.today_completed {
        "Completed"
    } else {
        "Not completed yet"
    };

    format!(
        "You are an encouraging and motivational AI focus coach.\n\
         Based on the user's focus statistics, provide a short, personalized message (max 2 sentences)\n\
         that acknowledges their progress and encourages them to keep going.\n\
         \n\
         User's current stats:\n\
         Current streak: {current} days\n\
         Highest streak: {highest} days\n\
         Total focus time: {minutes} minutes\n\
         Today's session: {today}\n\
         \n\
         Generate an encouraging message that:\n\
         1. Is specific to their current progress\n\
         2. Mentions their streak or focus time achievements\n\
         3. Has a positive, uplifting tone\n\
         4. Includes relevant emoji\n\
         5. Is concise (max 2 sentences)\n\
         \n\
         Message:",
        current = stats.current_streak,
        highest = stats.highest_streak,
        minutes = stats.total_focus_minutes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(today_completed: bool) -> MotivationRequest {
        MotivationRequest {
            current_streak: 7,
            highest_streak: 10,
            total_focus_minutes: 340,
            today_completed,
        }
    }

    #[test]
    fn embeds_all_four_fields() {
        let prompt = build_prompt(&stats(true));

        assert!(prompt.contains("Current streak: 7 days"));
        assert!(prompt.contains("Highest streak: 10 days"));
        assert!(prompt.contains("Total focus time: 340 minutes"));
        assert!(prompt.contains("Today's session: Completed"));
    }

    #[test]
    fn marks_an_incomplete_day() {
        let prompt = build_prompt(&stats(false));

        assert!(prompt.contains("Today's session: Not completed yet"));
        assert!(!prompt.contains("Today's session: Completed"));
    }

    #[test]
    fn identical_input_yields_identical_text() {
        assert_eq!(build_prompt(&stats(true)), build_prompt(&stats(true)));
    }

    #[test]
    fn zero_values_are_embedded_literally() {
        let prompt = build_prompt(&MotivationRequest {
            current_streak: 0,
            highest_streak: 0,
            total_focus_minutes: 0,
            today_completed: false,
        });

        assert!(prompt.contains("Current streak: 0 days"));
        assert!(prompt.contains("Total focus time: 0 minutes"));
    }
}
