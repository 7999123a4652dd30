// Shared prompt fragments and prompt-building utilities.
// Each service that needs completion calls defines its own prompts.rs alongside it.

use serde_json::Value;

/// Frames a day's answers as the user turn of a completion request.
pub fn daily_log_user_message(answers: &Value) -> String {
    let rendered = serde_json::to_string_pretty(answers).unwrap_or_else(|_| answers.to_string());
    format!("Here is the user's daily log in JSON:\n{rendered}")
}
