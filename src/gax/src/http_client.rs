// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The HTTP transport shared by the generated clients.
//!
//! [ReqwestClient] sends JSON requests, decodes JSON responses, converts
//! errors into [Error], and runs the retry loop.

use crate::Result;
use crate::backoff_policy::BackoffPolicy;
use crate::client_builder::Error as BuilderError;
use crate::client_builder::internal::ClientConfig;
use crate::credentials::Credentials;
use crate::error::Error;
use crate::error::rpc::Status;
use crate::exponential_backoff::ExponentialBackoff;
use crate::options::RequestOptions;
use crate::polling_backoff_policy::PollingBackoffPolicy;
use crate::retry_policy::RetryPolicy;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
}

impl ReqwestClient {
    pub async fn new(
        config: ClientConfig,
        default_endpoint: &str,
    ) -> crate::client_builder::Result<Self> {
        let inner = match config.http_client {
            Some(c) => c,
            None => reqwest::Client::builder()
                .build()
                .map_err(BuilderError::transport)?,
        };
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        Ok(Self {
            inner,
            cred: config.cred.unwrap_or_default(),
            endpoint,
            retry_policy: config.retry_policy,
            backoff_policy: config.backoff_policy,
            polling_backoff_policy: config.polling_backoff_policy,
        })
    }

    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<O> {
        if let Some(user_agent) = options.user_agent() {
            builder = builder.header(
                reqwest::header::USER_AGENT,
                reqwest::header::HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        match self.get_retry_policy(&options) {
            None => self.request_attempt::<O>(builder, &options, None).await,
            Some(policy) => self.retry_loop::<O>(builder, options, policy).await,
        }
    }

    async fn retry_loop<O: serde::de::DeserializeOwned + Default>(
        &self,
        builder: reqwest::RequestBuilder,
        options: RequestOptions,
        retry_policy: Arc<dyn RetryPolicy>,
    ) -> Result<O> {
        let idempotent = options.idempotent().unwrap_or(false);
        let backoff = self.get_backoff_policy(&options);
        let this = self.clone();
        let inner = async move |remaining_time| {
            let builder = builder
                .try_clone()
                .ok_or_else(|| Error::invalid_usage("streaming request bodies cannot be retried"))?;
            this.request_attempt(builder, &options, remaining_time)
                .await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        crate::retry_loop_internal::retry_loop(inner, sleep, idempotent, retry_policy, backoff)
            .await
    }

    async fn request_attempt<O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        options: &RequestOptions,
        remaining_time: Option<Duration>,
    ) -> Result<O> {
        if let Some(timeout) =
            crate::retry_loop_internal::effective_timeout(options, remaining_time)
        {
            builder = builder.timeout(timeout);
        }
        let auth_headers = self
            .cred
            .headers()
            .await
            .map_err(Error::authentication)?;
        builder = auth_headers
            .iter()
            .fold(builder, |b, (k, v)| b.header(k, v));
        let response = builder.send().await.map_err(Self::map_send_error)?;
        tracing::debug!(
            "response status={} url={}",
            response.status(),
            response.url()
        );
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }
        self::to_http_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }

    fn get_retry_policy(&self, options: &RequestOptions) -> Option<Arc<dyn RetryPolicy>> {
        options
            .retry_policy()
            .clone()
            .or_else(|| self.retry_policy.clone())
    }

    fn get_backoff_policy(&self, options: &RequestOptions) -> Arc<dyn BackoffPolicy> {
        options
            .backoff_policy()
            .clone()
            .or_else(|| self.backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }

    /// The polling backoff policy for a long-running operation.
    ///
    /// The request options take precedence over the client configuration.
    /// The default is an exponential backoff from 1 second to 60 seconds,
    /// doubling after each poll.
    pub fn get_polling_backoff_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn PollingBackoffPolicy> {
        options
            .polling_backoff_policy()
            .clone()
            .or_else(|| self.polling_backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }
}

/// The body for requests without one, e.g. `GET` and `DELETE`.
#[derive(serde::Serialize)]
pub struct NoBody;

/// Converts an unsuccessful HTTP response into an [Error].
///
/// Responses carrying a `google.rpc.Status` payload become service errors,
/// anything else is reported as a transport error with the raw payload.
pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;
    let error = match Status::try_from(&body) {
        Ok(status) => Error::service_with_http_metadata(status, Some(status_code), Some(headers)),
        Err(_) => Error::http(status_code, headers, body),
    };
    tracing::warn!("request failed: {error}");
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<O> {
    let headers = response.headers().clone();
    // Empty bodies, notably `204 No Content`, are not valid JSON.
    let body = response
        .bytes()
        .await
        .map_err(|e| Error::transport(headers, e))?;
    if body.is_empty() {
        return Ok(O::default());
    }
    serde_json::from_slice::<O>(&body).map_err(Error::deser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::access_token;
    use crate::error::rpc::Code;
    use crate::options::RequestOptionsBuilder;
    use crate::options::internal::RequestBuilder;
    use crate::retry_policy::{Aip194Strict, RetryPolicyExt};
    use axum::http::{HeaderMap, StatusCode};
    use axum::{Json, Router, routing::get};
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::task::JoinHandle;

    #[derive(Debug, Default, serde::Deserialize)]
    struct Echo {
        #[serde(default)]
        name: String,
        #[serde(default)]
        authorization: String,
        #[serde(default, rename = "userAgent")]
        user_agent: String,
    }

    fn header(headers: &HeaderMap, name: &str) -> String {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    async fn start() -> anyhow::Result<(String, JoinHandle<()>)> {
        let flaky = Arc::new(AtomicU32::new(0));
        let app = Router::new()
            .route("/v1/ok", get(|| async { Json(json!({"name": "abc"})) }))
            .route("/v1/empty", get(|| async { StatusCode::NO_CONTENT }))
            .route(
                "/v1/headers",
                get(|headers: HeaderMap| async move {
                    Json(json!({
                        "authorization": header(&headers, "authorization"),
                        "userAgent": header(&headers, "user-agent"),
                    }))
                }),
            )
            .route(
                "/v1/not-found",
                get(|| async {
                    let body = json!({"error": {
                        "code": 404,
                        "message": "instance not found",
                        "status": "NOT_FOUND",
                    }});
                    (StatusCode::NOT_FOUND, Json(body))
                }),
            )
            .route(
                "/v1/bad-gateway",
                get(|| async { (StatusCode::BAD_GATEWAY, "upstream unavailable") }),
            )
            .route(
                "/v1/garbage",
                get(|| async { (StatusCode::OK, "not json") }),
            )
            .route(
                "/v1/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    Json(json!({"name": "too late"}))
                }),
            )
            .route(
                "/v1/flaky",
                get(move || {
                    let count = flaky.fetch_add(1, Ordering::SeqCst);
                    async move {
                        if count < 2 {
                            let body = json!({"error": {
                                "code": 503,
                                "message": "try again",
                                "status": "UNAVAILABLE",
                            }});
                            return (StatusCode::SERVICE_UNAVAILABLE, Json(body));
                        }
                        (StatusCode::OK, Json(json!({"name": format!("attempt-{count}")})))
                    }
                }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Ok((format!("http://{addr}"), server))
    }

    async fn client(endpoint: &str) -> anyhow::Result<ReqwestClient> {
        let config = ClientConfig {
            endpoint: Some(endpoint.to_string()),
            ..Default::default()
        };
        Ok(ReqwestClient::new(config, "https://unused.googleapis.com").await?)
    }

    async fn get_echo(client: &ReqwestClient, path: &str, options: RequestOptions) -> Result<Echo> {
        let builder = client.builder(reqwest::Method::GET, path.to_string());
        client.execute(builder, None::<NoBody>, options).await
    }

    #[derive(Default)]
    struct Options(RequestOptions);
    impl RequestBuilder for Options {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0
        }
    }

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let (endpoint, _server) = start().await?;
        let client = client(&endpoint).await?;
        let echo = get_echo(&client, "/v1/ok", RequestOptions::default()).await?;
        assert_eq!(echo.name, "abc");
        Ok(())
    }

    #[tokio::test]
    async fn empty_response() -> anyhow::Result<()> {
        let (endpoint, _server) = start().await?;
        let client = client(&endpoint).await?;
        let echo = get_echo(&client, "/v1/empty", RequestOptions::default()).await?;
        assert!(echo.name.is_empty(), "{echo:?}");
        Ok(())
    }

    #[tokio::test]
    async fn headers() -> anyhow::Result<()> {
        let (endpoint, _server) = start().await?;
        let config = ClientConfig {
            endpoint: Some(endpoint),
            cred: Some(access_token::Builder::new("test-token").build()),
            http_client: Some(reqwest::Client::new()),
            ..Default::default()
        };
        let client = ReqwestClient::new(config, "https://unused.googleapis.com").await?;
        let options = Options::default().with_user_agent("memcache-test/1.0").0;
        let echo = get_echo(&client, "/v1/headers", options).await?;
        assert_eq!(echo.authorization, "Bearer test-token");
        assert_eq!(echo.user_agent, "memcache-test/1.0");
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> anyhow::Result<()> {
        let (endpoint, _server) = start().await?;
        let client = client(&endpoint).await?;
        let err = get_echo(&client, "/v1/not-found", RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_service(), "{err:?}");
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound));
        assert_eq!(
            err.status().map(|s| s.message.as_str()),
            Some("instance not found")
        );
        assert_eq!(err.http_status_code(), Some(404));
        assert!(err.http_headers().is_some(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn http_error() -> anyhow::Result<()> {
        let (endpoint, _server) = start().await?;
        let client = client(&endpoint).await?;
        let err = get_echo(&client, "/v1/bad-gateway", RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        assert!(err.status().is_none(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(502));
        assert_eq!(
            err.http_payload(),
            Some(&bytes::Bytes::from_static(b"upstream unavailable"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn deserialization_error() -> anyhow::Result<()> {
        let (endpoint, _server) = start().await?;
        let client = client(&endpoint).await?;
        let err = get_echo(&client, "/v1/garbage", RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn attempt_timeout() -> anyhow::Result<()> {
        let (endpoint, _server) = start().await?;
        let client = client(&endpoint).await?;
        let options = Options::default()
            .with_attempt_timeout(Duration::from_millis(50))
            .0;
        let err = get_echo(&client, "/v1/slow", options).await.unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn io_error() -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let endpoint = format!("http://{}", listener.local_addr()?);
        drop(listener);
        let client = client(&endpoint).await?;
        let err = get_echo(&client, "/v1/ok", RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn no_retry_by_default() -> anyhow::Result<()> {
        let (endpoint, _server) = start().await?;
        let client = client(&endpoint).await?;
        let options = Options::default().with_idempotency(true).0;
        let err = get_echo(&client, "/v1/flaky", options).await.unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::Unavailable));
        Ok(())
    }

    #[tokio::test]
    async fn retry_transient_errors() -> anyhow::Result<()> {
        let (endpoint, _server) = start().await?;
        let client = client(&endpoint).await?;
        let options = Options::default()
            .with_idempotency(true)
            .with_retry_policy(Aip194Strict.with_attempt_limit(5))
            .with_backoff_policy(
                crate::exponential_backoff::ExponentialBackoffBuilder::new()
                    .with_initial_delay(Duration::from_millis(1))
                    .with_maximum_delay(Duration::from_millis(5))
                    .build()?,
            )
            .0;
        let echo = get_echo(&client, "/v1/flaky", options).await?;
        assert_eq!(echo.name, "attempt-2");
        Ok(())
    }

    #[tokio::test]
    async fn polling_backoff_policy() -> anyhow::Result<()> {
        let client = client("http://127.0.0.1:1").await?;
        let now = std::time::Instant::now();
        let policy = client.get_polling_backoff_policy(&RequestOptions::default());
        assert_eq!(policy.wait_period(now, 1), Duration::from_secs(1));

        let mut options = RequestOptions::default();
        options.set_polling_backoff_policy(
            crate::exponential_backoff::ExponentialBackoffBuilder::new()
                .with_initial_delay(Duration::from_secs(3))
                .clamp(),
        );
        let policy = client.get_polling_backoff_policy(&options);
        assert_eq!(policy.wait_period(now, 1), Duration::from_secs(3));
        Ok(())
    }
}
