//! OpenAI-compatible chat completions backend (Ollama, LMStudio, vLLM, OpenAI, …).

use std::time::Duration;

use async_trait::async_trait;
use tracing::instrument;

use crate::backend::{AnswerBackend, AnswerError, AnswerRequest};

const SYSTEM_PROMPT: &str = "You are a philosophy tutor. Answer the question using the \
    provided context. Reason step by step but reply in at most three sentences.";

pub struct HttpAnswerBackend {
    pub base_url: String,
    pub model: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl HttpAnswerBackend {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self, AnswerError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.filter(|k| !k.is_empty()),
            client,
        })
    }

    fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(k) => req.bearer_auth(k),
            None    => req,
        }
    }
}

async fn check_response_status(resp: reqwest::Response) -> Result<serde_json::Value, AnswerError> {
    let status = resp.status().as_u16();
    let text = resp.text().await?;
    let parsed = serde_json::from_str::<serde_json::Value>(&text);
    if status >= 400 {
        let body = parsed.unwrap_or(serde_json::Value::Null);
        let msg = body["error"]["message"]
            .as_str()
            .or_else(|| body["error"].as_str())
            .or_else(|| body["message"].as_str())
            .unwrap_or("unknown API error")
            .to_string();
        return Err(AnswerError::ApiError { status, message: msg });
    }
    Ok(parsed?)
}

#[async_trait]
impl AnswerBackend for HttpAnswerBackend {
    #[instrument(skip(self, req), fields(model = %self.model))]
    async fn answer(&self, req: AnswerRequest) -> Result<String, AnswerError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = serde_json::json!({
            "model": &self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": format!("Context:\n{}\n\nQuestion: {}", req.context, req.question) },
            ],
            "max_tokens": 512,
            "temperature": 0.3,
        });
        let resp = self
            .auth(self.client.post(&url))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    AnswerError::Unavailable(format!("cannot reach {}", self.base_url))
                } else {
                    AnswerError::Http(e)
                }
            })?;
        let json = check_response_status(resp).await?;

        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("")
            .trim()
            .to_string();
        if content.is_empty() {
            return Err(AnswerError::EmptyAnswer);
        }
        Ok(content)
    }

    fn name(&self) -> &str { &self.model }
}
