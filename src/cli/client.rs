use std::time::Duration;

use anyhow::{anyhow, Context};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;

/// Thin JSON client over the HTTP API
pub struct ApiClient {
    base_url: url::Url,
    token: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> anyhow::Result<Self> {
        let base_url = url::Url::parse(base_url).with_context(|| format!("invalid API URL: {}", base_url))?;
        let http = reqwest::Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self { base_url, token, http })
    }

    fn request(&self, method: Method, path: &str) -> anyhow::Result<RequestBuilder> {
        let url = self.base_url.join(path)?;
        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    /// Fails with a message when no token was supplied
    pub fn require_token(&self) -> anyhow::Result<()> {
        match self.token {
            Some(_) => Ok(()),
            None => Err(anyhow!("this command needs a token (use --token or SEHD_TOKEN)")),
        }
    }

    pub async fn get(&self, path: &str) -> anyhow::Result<Value> {
        let response = self.request(Method::GET, path)?.send().await?;
        read_json(response).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> anyhow::Result<Value> {
        let response = self.request(Method::POST, path)?.json(body).send().await?;
        read_json(response).await
    }
}

/// Turns API error bodies (`{error, message, code}`) into `anyhow` errors
async fn read_json(response: Response) -> anyhow::Result<Value> {
    let status = response.status();
    let body: Value = response.json().await.unwrap_or(Value::Null);

    if status.is_success() {
        return Ok(body);
    }

    let message = body.get("message").and_then(Value::as_str).unwrap_or("request failed");
    Err(anyhow!("{} ({})", message, status))
}
