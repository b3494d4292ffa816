//! DeepSeek chat-completion client used to answer free-form Vastu questions.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Model requested from the completion endpoint.
pub const COMPLETION_MODEL: &str = "deepseek-chat";

/// Hard cap on the outbound request, matching the product's answer-length
/// expectations (2-4 paragraphs).
const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed system instruction sent with every question.
pub const SYSTEM_PROMPT: &str = "Ты — профессиональный консультант по Васту (древней индийской науке гармонии пространства).

ВАЖНЫЕ ПРАВИЛА:
1. Отвечай тёплым, дружелюбным, но деловым тоном
2. Не будь колдуньей или мистиком — будь профессионалом
3. Давай конкретные, практические советы
4. Упоминай принципы Васту, но объясняй их доступно
5. Длина ответа: 2-4 абзаца (не более 500 символов)
6. В конце предлагай консультацию, если нужна помощь

Примеры хорошего ответа:
- \"По принципам Васту спальня должна быть на юго-западе дома. Кровать располагай головой на юг или запад. Это создаёт спокойствие и хороший сон. Если комната расположена иначе, используй цветовые коррекции...\"
- \"Рабочее место нужно размещать на северо-востоке или северо-западе. Стол рекомендуется повернуть так, чтобы ты смотрел на север или восток. Это привлечёт деньги и вдохновение...\"

Избегай:
- ❌ Магии и суеверий
- ❌ Длинных теоретических объяснений
- ❌ Спама о предсказаниях судьбы
";

/// Failure modes of a completion call. Callers must handle each case; none
/// of them is allowed to escalate into a crash.
#[derive(Debug, Clone)]
pub enum CompletionError {
    /// The 30-second request deadline elapsed.
    Timeout(String),
    /// Connection-level failure before a status line was received.
    Transport(String),
    /// The service answered with a non-200 status.
    Status(u16),
    /// The body was not the expected JSON shape.
    Decode(String),
}

impl std::fmt::Display for CompletionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletionError::Timeout(msg) => write!(f, "Timeout error: {msg}"),
            CompletionError::Transport(msg) => write!(f, "Transport error: {msg}"),
            CompletionError::Status(code) => write!(f, "Completion service returned status {code}"),
            CompletionError::Decode(msg) => write!(f, "Decode error: {msg}"),
        }
    }
}

impl std::error::Error for CompletionError {}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client for the chat-completion endpoint. Cheap to clone behind an `Arc`;
/// the inner reqwest client pools connections.
pub struct CompletionClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl CompletionClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_url: api_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Send one question and return the first answer text.
    ///
    /// No retry is attempted on failure; the caller renders the error and
    /// lets the user re-ask.
    pub async fn ask(&self, question: &str) -> Result<String, CompletionError> {
        let request = ChatCompletionRequest {
            model: COMPLETION_MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: question,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        debug!(question_chars = question.len(), "Sending completion request");

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout(e.to_string())
                } else {
                    CompletionError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompletionError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        extract_answer(&body)
    }
}

/// Pull `choices[0].message.content` out of a raw response body.
pub fn extract_answer(body: &str) -> Result<String, CompletionError> {
    let parsed: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|e| CompletionError::Decode(e.to_string()))?;

    parsed
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or_else(|| CompletionError::Decode("response contained no choices".to_string()))
}

/// Cap an error description at `max_chars` characters for user display.
/// Operates on characters, not bytes, so multi-byte text stays intact.
pub fn truncate_error(message: &str, max_chars: usize) -> String {
    if message.chars().count() <= max_chars {
        message.to_string()
    } else {
        message.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_answer_valid_body() {
        let body = r#"{"choices":[{"message":{"content":"Answer X"}}]}"#;
        assert_eq!(extract_answer(body).unwrap(), "Answer X");
    }

    #[test]
    fn test_extract_answer_empty_choices() {
        let result = extract_answer(r#"{"choices":[]}"#);
        assert!(matches!(result, Err(CompletionError::Decode(_))));
    }

    #[test]
    fn test_extract_answer_malformed_json() {
        let result = extract_answer("not json at all");
        assert!(matches!(result, Err(CompletionError::Decode(_))));
    }

    #[test]
    fn test_truncate_error_short_message() {
        assert_eq!(truncate_error("boom", 100), "boom");
    }

    #[test]
    fn test_truncate_error_long_message() {
        let long = "x".repeat(250);
        let truncated = truncate_error(&long, 100);
        assert_eq!(truncated.chars().count(), 100);
    }

    #[test]
    fn test_truncate_error_multibyte() {
        // Cyrillic is two bytes per char; truncation must not split one.
        let long = "ошибка сети ".repeat(20);
        let truncated = truncate_error(&long, 100);
        assert_eq!(truncated.chars().count(), 100);
    }
}
