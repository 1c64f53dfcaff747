// Sigfox API HTTP client
//
// Wraps `reqwest::Client` with base-URL joining, HTTP Basic auth, status
// classification, and the offset-based page follower. Resource façades
// (devices, groups, etc.) live in `crate::resources` and borrow this client;
// none of them own a connection of their own.

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::Paging;
use crate::query::QueryParams;
use crate::transport::TransportConfig;

/// Page size used by the page follower when the caller sets none.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Upper bound on requests issued by one `get_paginated` call.
pub const MAX_PAGES: usize = 1000;

// ── Credential ───────────────────────────────────────────────────────

/// API login and secret, sent as HTTP Basic auth on every request.
#[derive(Debug, Clone)]
pub struct Credential {
    login: String,
    secret: SecretString,
}

impl Credential {
    pub fn new(login: impl Into<String>, secret: SecretString) -> Self {
        Self {
            login: login.into(),
            secret,
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }
}

// ── Client ───────────────────────────────────────────────────────────

/// Low-level request layer for the Sigfox v2 API.
///
/// Every verb returns the decoded JSON body. Non-success statuses are
/// mapped to [`Error`] once, here; callers never see a raw status code.
/// Dropping the client closes its connection pool.
#[derive(Debug)]
pub struct SigfoxClient {
    http: reqwest::Client,
    base_url: String,
    credential: Credential,
}

impl SigfoxClient {
    /// Build a client for `base_url` (e.g. `https://api.sigfox.com/v2`).
    ///
    /// A trailing `/` on the base URL is dropped so that resource paths,
    /// which always start with `/`, join cleanly.
    pub fn new(
        credential: Credential,
        base_url: &str,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        Url::parse(&base_url)?;
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            credential,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn login(&self) -> &str {
        self.credential.login()
    }

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(Url::parse(&format!("{}{path}", self.base_url))?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub async fn get(&self, path: &str, params: &QueryParams) -> Result<Value, Error> {
        self.send::<Value>(Method::GET, path, None, params).await
    }

    pub async fn post<B: Serialize + ?Sized + Sync>(
        &self,
        path: &str,
        body: Option<&B>,
        params: &QueryParams,
    ) -> Result<Value, Error> {
        self.send(Method::POST, path, body, params).await
    }

    pub async fn put<B: Serialize + ?Sized + Sync>(
        &self,
        path: &str,
        body: Option<&B>,
        params: &QueryParams,
    ) -> Result<Value, Error> {
        self.send(Method::PUT, path, body, params).await
    }

    pub async fn delete(&self, path: &str, params: &QueryParams) -> Result<Value, Error> {
        self.send::<Value>(Method::DELETE, path, None, params).await
    }

    async fn send<B: Serialize + ?Sized + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        params: &QueryParams,
    ) -> Result<Value, Error> {
        let url = self.url(path)?;
        if params.is_empty() {
            debug!("{method} {url}");
        } else {
            debug!("{method} {url} params={:?}", params.as_pairs());
        }

        let mut req = self
            .http
            .request(method, url)
            .basic_auth(&self.credential.login, Some(self.credential.secret.expose_secret()));
        if !params.is_empty() {
            req = req.query(params.as_pairs());
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        handle_response(resp).await
    }

    // ── Pagination ───────────────────────────────────────────────────

    /// GET a list endpoint once and return its `data` array.
    ///
    /// A response without `data` yields an empty list.
    pub async fn get_list(&self, path: &str, params: &QueryParams) -> Result<Vec<Value>, Error> {
        let resp = self.get(path, params).await?;
        Ok(take_data(resp))
    }

    /// Follow offset-based pages, accumulating every page's `data` items.
    ///
    /// Page size comes from the `limit` param (default 100) and the start
    /// offset from `offset` (default 0); both are rewritten on every request.
    /// Stops on an empty page, a page without `paging.next`, or once `max`
    /// items are collected (the result is truncated to exactly `max`).
    /// Gives up with [`Error::PaginationLimit`] after [`MAX_PAGES`] requests.
    pub async fn get_paginated(
        &self,
        path: &str,
        params: &QueryParams,
        max: Option<usize>,
    ) -> Result<Vec<Value>, Error> {
        let page_size = parse_param(params, "limit").unwrap_or(DEFAULT_PAGE_SIZE);
        let mut offset = parse_param(params, "offset").unwrap_or(0);
        let mut items = Vec::new();
        let mut query = params.clone();

        for page in 0..MAX_PAGES {
            query.set("offset", offset);
            query.set("limit", page_size);

            let resp = self.get(path, &query).await?;
            let more = has_next_page(&resp);
            let data = take_data(resp);
            let received = data.len();
            trace!(page, offset, received, more, "fetched page");

            if received == 0 {
                return Ok(items);
            }
            items.extend(data);

            if let Some(max) = max {
                if items.len() >= max {
                    items.truncate(max);
                    return Ok(items);
                }
            }
            if !more {
                return Ok(items);
            }
            offset += received;
        }

        Err(Error::PaginationLimit { pages: MAX_PAGES })
    }
}

// ── Response handling ────────────────────────────────────────────────

#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<Value>,
}

async fn handle_response(resp: reqwest::Response) -> Result<Value, Error> {
    let status = resp.status();
    let body = resp.text().await?;

    if status.as_u16() < 400 {
        if body.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        return serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        });
    }

    let err = classify_status(status.as_u16(), body);
    debug!(status = status.as_u16(), "request failed: {err}");
    Err(err)
}

/// Map a failed HTTP status and its body onto the error taxonomy.
pub(crate) fn classify_status(status: u16, body: String) -> Error {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .ok()
        .and_then(|e| e.message)
        .map_or_else(
            || body.clone(),
            |m| match m {
                Value::String(s) => s,
                other => other.to_string(),
            },
        );

    match status {
        401 => Error::Authentication { message },
        403 => Error::Authorization { message },
        404 => Error::NotFound { message },
        _ => Error::Api {
            status,
            message,
            body,
        },
    }
}

fn parse_param(params: &QueryParams, name: &str) -> Option<usize> {
    params.get(name).and_then(|v| v.parse().ok())
}

fn take_data(resp: Value) -> Vec<Value> {
    match resp {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Only the presence of `paging.next` matters, never its content.
fn has_next_page(resp: &Value) -> bool {
    resp.get("paging")
        .and_then(|p| Paging::deserialize(p).ok())
        .is_some_and(|p| p.next.is_some())
}

// ── Record decoding ──────────────────────────────────────────────────

/// Decode one JSON value into a typed record.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_json::from_value(value.clone()).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body: value.to_string(),
    })
}

/// Decode every item of a `data` array.
pub(crate) fn decode_all<T: DeserializeOwned>(items: Vec<Value>) -> Result<Vec<T>, Error> {
    items.into_iter().map(decode).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn classify_uses_json_message_when_present() {
        let err = classify_status(404, r#"{"message":"device 1A not found"}"#.into());
        assert!(matches!(err, Error::NotFound { ref message } if message == "device 1A not found"));
    }

    #[test]
    fn classify_falls_back_to_raw_text() {
        let err = classify_status(502, "Bad Gateway".into());
        match err {
            Error::Api {
                status,
                message,
                body,
            } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
                assert_eq!(body, "Bad Gateway");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn classify_auth_statuses() {
        assert!(matches!(
            classify_status(401, String::new()),
            Error::Authentication { .. }
        ));
        assert!(matches!(
            classify_status(403, "{}".into()),
            Error::Authorization { ref message } if message == "{}"
        ));
    }

    #[test]
    fn next_page_presence() {
        assert!(has_next_page(&json!({"paging": {"next": "x"}})));
        assert!(!has_next_page(&json!({"paging": {"prev": "x"}})));
        assert!(!has_next_page(&json!({"paging": {"next": null}})));
        assert!(!has_next_page(&json!({"data": []})));
        assert!(has_next_page(
            &json!({"paging": {"next": "/devices/?offset=2", "prev": "/devices/?offset=0"}})
        ));
        assert!(!has_next_page(&json!({"paging": "none"})));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = SigfoxClient::new(
            Credential::new("login", SecretString::from("secret")),
            "https://api.sigfox.com/v2/",
            &TransportConfig::default(),
        )
        .unwrap();
        assert_eq!(client.base_url(), "https://api.sigfox.com/v2");
        assert_eq!(
            client.url("/devices/").unwrap().as_str(),
            "https://api.sigfox.com/v2/devices/"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = SigfoxClient::new(
            Credential::new("login", SecretString::from("secret")),
            "not a url",
            &TransportConfig::default(),
        );
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }
}
