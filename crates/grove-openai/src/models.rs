//! Wire types for the `/v1/chat/completions` endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

/// `content` is null when the model answers with something other than
/// text (tool calls), so it deserializes as an option.
#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_provider_shape() {
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: "You are a coach.".to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: "Say something nice.".to_string(),
                },
            ],
            max_tokens: 100,
            temperature: 0.7,
        };

        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["max_tokens"], 100);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "Say something nice.");
    }

    #[test]
    fn response_deserializes_from_provider_payload() {
        let payload = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": "Nice streak! 🔥" },
                    "finish_reason": "stop"
                }
            ],
            "usage": { "prompt_tokens": 50, "completion_tokens": 12, "total_tokens": 62 }
        }"#;

        let response: ChatCompletionResponse = serde_json::from_str(payload).unwrap();

        assert_eq!(response.choices.len(), 1);
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("Nice streak! 🔥")
        );
    }

    #[test]
    fn null_content_deserializes_as_none() {
        let payload = r#"{ "choices": [ { "message": { "role": "assistant", "content": null } } ] }"#;

        let response: ChatCompletionResponse = serde_json::from_str(payload).unwrap();

        assert!(response.choices[0].message.content.is_none());
    }
}
