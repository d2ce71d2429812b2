use crate::domain::model::{CompletionRequest, CompletionResponse};
use crate::domain::ports::{ClientSettings, CompletionBackend};
use crate::utils::error::{MedicodeError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Calls an OpenAI-compatible `/chat/completions` endpoint (Groq by default).
pub struct ChatCompletionsBackend<C: ClientSettings> {
    settings: C,
    client: Client,
}

impl<C: ClientSettings> ChatCompletionsBackend<C> {
    pub fn new(settings: C) -> Self {
        Self {
            settings,
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url().trim_end_matches('/')
        )
    }
}

#[async_trait]
impl<C: ClientSettings> CompletionBackend for ChatCompletionsBackend<C> {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        // A missing key is only reported once a call is attempted.
        let api_key = self
            .settings
            .api_key()
            .ok_or(MedicodeError::MissingCredentialError)?;

        let endpoint = self.endpoint();
        tracing::debug!("Making API request to: {}", endpoint);
        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        let body = response.text().await?;

        if !status.is_success() {
            return Err(MedicodeError::ApiStatusError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse = serde_json::from_str(&body)?;
        parsed
            .first_content()
            .map(str::to_string)
            .ok_or_else(|| MedicodeError::MalformedResponseError {
                message: "response has no completion content".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::core::composer::PromptComposer;
    use crate::domain::model::CodeType;
    use httpmock::prelude::*;

    fn config(base_url: String, api_key: Option<&str>) -> ClientConfig {
        ClientConfig {
            base_url,
            api_key: api_key.map(str::to_string),
            ..ClientConfig::default()
        }
    }

    #[tokio::test]
    async fn test_complete_posts_chat_request() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/openai/v1/chat/completions")
                    .header("authorization", "Bearer test-key")
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({
                        "model": "llama-3.1-8b-instant",
                        "messages": [
                            {"role": "system", "content": crate::core::prompts::CPT_INSTRUCTION},
                            {"role": "user", "content": "Patient underwent chest X-ray."}
                        ],
                        "max_tokens": 1000
                    }));
                then.status(200).json_body(serde_json::json!({
                    "id": "chatcmpl-1",
                    "object": "chat.completion",
                    "choices": [{
                        "index": 0,
                        "message": {"role": "assistant", "content": "- Code: 71046\n- Description: X-ray, chest"},
                        "finish_reason": "stop"
                    }]
                }));
            })
            .await;

        let backend =
            ChatCompletionsBackend::new(config(server.url("/openai/v1/"), Some("test-key")));
        let request =
            PromptComposer::default().compose(CodeType::Cpt, "Patient underwent chest X-ray.");

        let text = backend.complete(&request).await.unwrap();

        api_mock.assert_async().await;
        assert_eq!(text, "- Code: 71046\n- Description: X-ray, chest");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(401)
                    .body(r#"{"error":{"message":"Invalid API Key"}}"#);
            })
            .await;

        let backend = ChatCompletionsBackend::new(config(server.base_url(), Some("bad-key")));
        let request = PromptComposer::default().compose_general("Cough.");

        let err = backend.complete(&request).await.unwrap_err();

        api_mock.assert_async().await;
        match err {
            MedicodeError::ApiStatusError { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("Invalid API Key"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).body("<html>gateway</html>");
            })
            .await;

        let backend = ChatCompletionsBackend::new(config(server.base_url(), Some("k")));
        let request = PromptComposer::default().compose_general("Cough.");

        let err = backend.complete(&request).await.unwrap_err();
        assert!(matches!(err, MedicodeError::SerializationError(_)));
    }

    #[tokio::test]
    async fn test_empty_choices_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).json_body(serde_json::json!({"choices": []}));
            })
            .await;

        let backend = ChatCompletionsBackend::new(config(server.base_url(), Some("k")));
        let request = PromptComposer::default().compose_general("Cough.");

        let err = backend.complete(&request).await.unwrap_err();
        assert!(matches!(err, MedicodeError::MalformedResponseError { .. }));
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_calling_out() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200);
            })
            .await;

        let backend = ChatCompletionsBackend::new(config(server.base_url(), None));
        let request = PromptComposer::default().compose_general("Cough.");

        let err = backend.complete(&request).await.unwrap_err();

        assert!(matches!(err, MedicodeError::MissingCredentialError));
        api_mock.assert_hits_async(0).await;
    }
}
