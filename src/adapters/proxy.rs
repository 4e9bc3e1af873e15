//! API Gateway and Lambda function URL proxy integration payloads.
//!
//! Only the fields the handler needs are modelled. REST APIs (payload 1.0)
//! put the method in `httpMethod`; HTTP APIs (payload 2.0) and function URLs
//! put it in `requestContext.http.method`.

use crate::core::http::{HttpRequest, HttpResponse};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyEvent {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub http: Option<HttpContext>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpContext {
    #[serde(default)]
    pub method: Option<String>,
}

impl ProxyEvent {
    pub fn method(&self) -> Option<&str> {
        self.http_method
            .as_deref()
            .or_else(|| {
                let ctx = self.request_context.as_ref()?;
                ctx.http
                    .as_ref()
                    .and_then(|http| http.method.as_deref())
                    .or(ctx.http_method.as_deref())
            })
    }

    pub fn into_request(self) -> HttpRequest {
        let method = self.method().unwrap_or_default().to_string();

        let body = match self.body {
            None => Vec::new(),
            Some(body) if self.is_base64_encoded => match STANDARD.decode(body.as_bytes()) {
                Ok(decoded) => decoded,
                Err(e) => {
                    tracing::warn!("Discarding undecodable base64 body: {}", e);
                    Vec::new()
                }
            },
            Some(body) => body.into_bytes(),
        };

        HttpRequest { method, body }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl From<HttpResponse> for ProxyResponse {
    fn from(response: HttpResponse) -> Self {
        Self {
            status_code: response.status,
            headers: response.headers,
            body: response.body,
            is_base64_encoded: false,
        }
    }
}
