use grove_openai::OpenAiClient;

/// Shared application state, injected into route handlers via Axum state.
///
/// The OpenAI client is built once at startup; clones share the same
/// underlying connection pool.
#[derive(Clone)]
pub struct AppState {
    pub openai: OpenAiClient,
}
