use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenAiError {
    /// The API key was absent or blank at client construction.
    #[error("missing or empty OpenAI API key")]
    MissingApiKey,

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    /// The provider answered but the first choice carried no usable text.
    #[error("model returned no usable text")]
    EmptyResponse,
}
