// Copyright (C) 2026 VAS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ClientError;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use vas_api::ParamSet;

/// Default request deadline, in seconds.
///
/// Bulk PDF generation over hundreds of records can legitimately run for
/// minutes, so the deadline is ten minutes rather than a typical API
/// timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10 * 60;

/// A binary response body with the headers needed to name and type it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryResponse {
    /// The raw body bytes.
    pub bytes: Vec<u8>,
    /// The `Content-Disposition` header, when the backend sent one.
    pub content_disposition: Option<String>,
    /// The `Content-Type` header, when the backend sent one.
    pub content_type: Option<String>,
}

/// HTTP operations the executor needs, allowing test fakes.
pub trait Transport: Send + Sync {
    /// Issues a GET and decodes the JSON body.
    fn get_json<'a>(
        &'a self,
        path: &'a str,
        params: &'a ParamSet,
    ) -> Pin<Box<dyn Future<Output = Result<serde_json::Value, ClientError>> + Send + 'a>>;

    /// Issues a POST with a JSON body and decodes the JSON response.
    fn post_json<'a>(
        &'a self,
        path: &'a str,
        body: serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = Result<serde_json::Value, ClientError>> + Send + 'a>>;

    /// Issues a POST with a JSON body and returns the raw binary response.
    fn post_binary<'a>(
        &'a self,
        path: &'a str,
        body: serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = Result<BinaryResponse, ClientError>> + Send + 'a>>;
}

/// The production [`Transport`], backed by a pooled [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl HttpTransport {
    /// Builds a transport against the given base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The backend root, without a trailing slash
    /// * `timeout_secs` - Per-request deadline in seconds
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] when the underlying client cannot be
    /// constructed.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        let client: reqwest::Client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|err| ClientError::Network(err.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeout_secs,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn translate(&self, err: &reqwest::Error) -> ClientError {
        if err.is_timeout() {
            return ClientError::Timeout {
                seconds: self.timeout_secs,
            };
        }
        ClientError::Network(err.to_string())
    }

    /// Turns a non-success response into the error the operator should see.
    ///
    /// Backend validation failures arrive as JSON bodies with a `detail` or
    /// `message` field. That text is surfaced verbatim. Anything else falls
    /// back to the status code and raw body.
    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status: reqwest::StatusCode = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body: String = response
            .text()
            .await
            .map_err(|err| self.translate(&err))?;
        Err(validation_error(status, &body))
    }

    async fn send_json(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<serde_json::Value, ClientError> {
        let response: reqwest::Response = request
            .send()
            .await
            .map_err(|err| self.translate(&err))?;
        let response: reqwest::Response = self.check(response).await?;
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|err| ClientError::Decode(err.to_string()))
    }
}

fn validation_error(status: reqwest::StatusCode, body: &str) -> ClientError {
    let message: String = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .or_else(|| value.get("message"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| format!("request failed with status {status}: {body}"));
    ClientError::ServerValidation { message }
}

impl Transport for HttpTransport {
    fn get_json<'a>(
        &'a self,
        path: &'a str,
        params: &'a ParamSet,
    ) -> Pin<Box<dyn Future<Output = Result<serde_json::Value, ClientError>> + Send + 'a>> {
        Box::pin(async move {
            let request: reqwest::RequestBuilder =
                self.client.get(self.url(path)).query(params);
            self.send_json(request).await
        })
    }

    fn post_json<'a>(
        &'a self,
        path: &'a str,
        body: serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = Result<serde_json::Value, ClientError>> + Send + 'a>> {
        Box::pin(async move {
            let request: reqwest::RequestBuilder =
                self.client.post(self.url(path)).json(&body);
            self.send_json(request).await
        })
    }

    fn post_binary<'a>(
        &'a self,
        path: &'a str,
        body: serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = Result<BinaryResponse, ClientError>> + Send + 'a>> {
        Box::pin(async move {
            let response: reqwest::Response = self
                .client
                .post(self.url(path))
                .json(&body)
                .send()
                .await
                .map_err(|err| self.translate(&err))?;
            let response: reqwest::Response = self.check(response).await?;

            let header = |name: &str| -> Option<String> {
                response
                    .headers()
                    .get(name)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_owned)
            };
            let content_disposition: Option<String> = header("content-disposition");
            let content_type: Option<String> = header("content-type");

            let bytes: Vec<u8> = response
                .bytes()
                .await
                .map_err(|err| self.translate(&err))?
                .to_vec();
            Ok(BinaryResponse {
                bytes,
                content_disposition,
                content_type,
            })
        })
    }
}
