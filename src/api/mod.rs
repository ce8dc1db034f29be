//! Remote Store Client
//!
//! Generic HTTP transport plus the ingredient endpoints built on top of it.

mod ingredients;

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::RequestError;

pub use ingredients::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        })
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Verb/url/body in, JSON body out. Any failure is a `RequestError`.
#[async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, method: HttpMethod, url: &str, body: Option<&Value>) -> Result<Value, RequestError>;
}

/// `reqwest` transport; uses the browser's fetch on wasm32
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl HttpClient for ReqwestClient {
    async fn send(&self, method: HttpMethod, url: &str, body: Option<&Value>) -> Result<Value, RequestError> {
        let mut request = self.inner.request(method.into(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(RequestError::Status { status: status.as_u16(), body: text });
        }
        decode_body(&text)
    }
}

/// Empty bodies count as JSON `null` (some proxies drop the body of a DELETE)
fn decode_body(text: &str) -> Result<Value, RequestError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_body_is_null() {
        assert_eq!(decode_body("").unwrap(), Value::Null);
        assert_eq!(decode_body("null").unwrap(), Value::Null);
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let err = decode_body("<html>").unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));
    }

    #[test]
    fn test_method_labels() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(reqwest::Method::from(HttpMethod::Post), reqwest::Method::POST);
    }
}
