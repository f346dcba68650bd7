use std::sync::LazyLock;

use base64::{Engine as _, engine::general_purpose};
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    meal_plan::ports::LLMClient,
};

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*```[A-Za-z]*\s*\n?(.*?)\s*```\s*$").expect("valid code fence pattern")
});

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

impl GeminiResponse {
    /// Concatenated text of the first candidate. Blocked or empty answers
    /// yield an empty string.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// Unwraps a markdown code fence some models put around JSON output.
fn strip_code_fence(text: &str) -> &str {
    CODE_FENCE
        .captures(text)
        .and_then(|c| c.get(1))
        .map_or(text.trim(), |m| m.as_str())
}

impl GeminiLLMClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CoreError::InvalidConfig(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key: config.gemini_api_key.clone(),
            model_name: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model_name)
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::RequestFailure(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::RequestFailure(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::RequestFailure(format!("Failed to parse LLM response: {}", e))
        })?;

        let text = gemini_response.text();
        if text.is_empty() {
            tracing::warn!("Gemini returned no candidate text");
        }
        Ok(text)
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
    ) -> Result<String, CoreError> {
        let base64_image = general_purpose::STANDARD.encode(&image_data);

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/jpeg".to_string(),
                            data: base64_image,
                        },
                    },
                    Part::Text { text: prompt },
                ],
            }],
            generation_config: None,
        };

        self.call_gemini_api(request).await
    }

    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        };

        let text = self.call_gemini_api(request).await?;
        Ok(strip_code_fence(&text).to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;

    fn config() -> LLMConfig {
        LLMConfig {
            gemini_api_key: "key".to_string(),
            gemini_model: "gemini-3-flash-preview".to_string(),
            gemini_base_url: "https://example.test/v1beta/".to_string(),
            request_timeout: Duration::from_secs(1),
        }
    }

    #[test]
    fn test_endpoint() {
        let client = GeminiLLMClient::new(&config()).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_image_request_wire_format() {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/jpeg".to_string(),
                            data: "AAA=".to_string(),
                        },
                    },
                    Part::Text {
                        text: "list".to_string(),
                    },
                ],
            }],
            generation_config: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{
                    "parts": [
                        {"inlineData": {"mimeType": "image/jpeg", "data": "AAA="}},
                        {"text": "list"}
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_text_request_carries_schema() {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text {
                    text: "plan".to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: json!({"type": "array"}),
            }),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "array");
    }

    #[test]
    fn test_response_text() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "Milk, "}, {"text": "Eggs"}]}}]
        }))
        .unwrap();
        assert_eq!(response.text(), "Milk, Eggs");
    }

    #[test]
    fn test_blocked_or_missing_candidates_give_empty_text() {
        let blocked: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }))
        .unwrap();
        assert_eq!(blocked.text(), "");

        let empty: GeminiResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.text(), "");

        let no_parts: GeminiResponse =
            serde_json::from_value(json!({"candidates": [{"content": {}}]})).unwrap();
        assert_eq!(no_parts.text(), "");
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n[1, 2]\n```"), "[1, 2]");
        assert_eq!(strip_code_fence("```\n[]\n```\n"), "[]");
        assert_eq!(strip_code_fence("  [3]  "), "[3]");
    }
}
