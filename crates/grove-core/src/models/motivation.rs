use serde::{Deserialize, Serialize};

/// Focus-session statistics reported by the client for a single user.
///
/// Unsigned fields make negative day/minute counts unrepresentable, so a
/// negative value in the request body fails deserialization at the HTTP
/// boundary. `highest_streak` is not required to exceed `current_streak`:
/// clients with out-of-sync local state may report either ordering, and
/// the coach tolerates it rather than rejecting the request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MotivationRequest {
    /// Consecutive days with a completed focus session.
    pub current_streak: u32,
    /// The user's best streak to date, in days.
    pub highest_streak: u32,
    /// Lifetime focused minutes across all sessions.
    pub total_focus_minutes: u32,
    /// Whether today's focus session has been completed.
    pub today_completed: bool,
}

/// The generated coaching message returned to the client.
///
/// Created per request and discarded after the response is sent. The
/// message is always non-empty with no surrounding whitespace; the
/// provider client enforces that before this struct is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotivationResponse {
    pub message: String,
}
