use axum::extract::State;
use axum::Json;

use grove_core::models::motivation::{MotivationRequest, MotivationResponse};
use grove_core::prompt::build_prompt;
use grove_openai::ChatRequest;

use crate::error::ApiError;
use crate::state::AppState;

const MODEL: &str = "gpt-4o-mini";
const SYSTEM_PROMPT: &str =
    "You are a motivational focus coach that provides encouraging messages.";
const MAX_TOKENS: u32 = 100;
const TEMPERATURE: f32 = 0.7;

/// Generate a short motivational message from the user's focus stats.
///
/// One outbound model call per request, no retries and no caching —
/// repeated calls with identical stats may return different text because
/// generation samples at a non-zero temperature.
pub async fn get_motivation(
    State(state): State<AppState>,
    Json(req): Json<MotivationRequest>,
) -> Result<Json<MotivationResponse>, ApiError> {
    let chat = ChatRequest {
        model: MODEL.to_string(),
        system: SYSTEM_PROMPT.to_string(),
        user: build_prompt(&req),
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    };

    let message = state.openai.complete(&chat).await?;

    Ok(Json(MotivationResponse { message }))
}
