//! The seam between [`crate::Client`] and the network

use std::{fmt::Debug, time::Duration};

use anyhow::{bail, Context as _};
use beerscanner_shared::token::AuthToken;
use futures::{future::BoxFuture, FutureExt as _};
use reqwest::{Method, StatusCode};
use secrecy::ExposeSecret as _;
use serde_json::Value;

/// Everything needed to make one call, independent of the HTTP library
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub bearer: Option<AuthToken>,
}

/// The status and raw body of a completed call. Any status, including errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn new<S: Into<String>>(status: StatusCode, body: S) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Executes requests. An `Err` means no response was received at all
pub trait Transport: Debug + Send + Sync + 'static {
    fn execute(&self, request: ApiRequest) -> BoxFuture<'static, anyhow::Result<ApiResponse>>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    api_client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Without a `timeout` the defaults of [`reqwest`] apply
    #[tracing::instrument(name = "NEW REQWEST TRANSPORT")]
    pub fn new(base_url: String, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let api_client = builder.build().context("unable to create reqwest client")?;
        Ok(Self {
            api_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn path_to_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: ApiRequest) -> BoxFuture<'static, anyhow::Result<ApiResponse>> {
        let mut builder = self
            .api_client
            .request(request.method, self.path_to_url(&request.path));
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token.expose_secret());
        }
        async move {
            let response = builder.send().await.context("failed to send request")?;
            let status = response.status();
            let body = response
                .text()
                .await
                .context("failed to get response body")?;
            Ok(ApiResponse { status, body })
        }
        .boxed()
    }
}

/// Flattens request arguments into query parameters.
///
/// The arguments must serialize to an object (or to nothing). `null` fields are
/// left out and sequences are joined with commas under a single key, which is
/// what the server expects for `sort` (`sort=name,asc`).
pub(crate) fn query_pairs<T: serde::Serialize + ?Sized>(
    args: &T,
) -> anyhow::Result<Vec<(String, String)>> {
    let map = match serde_json::to_value(args).context("failed to serialize query arguments")? {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map,
        other => bail!("query arguments must be an object but got: {other}"),
    };
    let mut result = Vec::with_capacity(map.len());
    for (key, value) in map {
        let value = match value {
            Value::Null => continue,
            Value::Array(values) => values
                .iter()
                .map(scalar_to_string)
                .collect::<Vec<_>>()
                .join(","),
            other => scalar_to_string(&other),
        };
        result.push((key, value));
    }
    Ok(result)
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
