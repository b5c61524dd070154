use crate::error::OpenAiError;
use crate::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// One chat-completion call: system instruction, user prompt, and
/// sampling parameters.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Long-lived OpenAI API client.
///
/// Constructed once at startup and shared across requests;
/// `reqwest::Client` pools connections internally, so clones are cheap
/// and the client is safe to use from concurrent handlers.
#[derive(Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
}

impl OpenAiClient {
    /// Create a client from an API key.
    ///
    /// An empty or blank key fails here, so a misconfigured deployment
    /// dies at startup instead of on the first request.
    pub fn new(api_key: impl Into<String>) -> Result<Self, OpenAiError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(OpenAiError::MissingApiKey);
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
        })
    }

    /// Send one chat completion and return the first choice's text,
    /// trimmed. No retries: an upstream failure propagates to the caller
    /// as-is.
    pub async fn complete(&self, req: &ChatRequest) -> Result<String, OpenAiError> {
        let request = ChatCompletionRequest {
            model: req.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: req.system.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: req.user.clone(),
                },
            ],
            max_tokens: req.max_tokens,
            temperature: req.temperature,
        };

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        // Check status before parsing
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "OpenAI API error");
            return Err(OpenAiError::Api(format!("{status}: {body}")));
        }

        let response = response.json::<ChatCompletionResponse>().await?;

        extract_message(response)
    }
}

/// Pull the generated text out of a completion response.
///
/// Trims surrounding whitespace; a missing choice or blank text is an
/// error rather than an empty message.
fn extract_message(response: ChatCompletionResponse) -> Result<String, OpenAiError> {
    let text = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        return Err(OpenAiError::EmptyResponse);
    }

    Ok(text.to_string())
}
