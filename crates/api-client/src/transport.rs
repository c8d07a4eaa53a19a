//! Shared HTTP dispatch.
//!
//! Every resource client funnels through [`Transport`]: one configured
//! `reqwest::Client` carrying the base URL, the default `Content-Type:
//! application/json` header and the request timeout, plus the session hooks —
//! bearer-token injection on the way out and 401 interception on the way
//! back. A 401 purges the stored token and requests navigation to `/login`,
//! then still propagates [`Fault::Unauthorized`] to the originating caller
//! (fire-and-continue, never swallowed).

use crate::error::{ClientResult, Fault};
use hms_core::{ClientConfig, Session};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

pub struct Transport {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl Transport {
    /// Build a transport from startup configuration and an injected session.
    pub fn new(cfg: &ClientConfig, session: Arc<Session>) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(cfg.timeout())
            .build()
            .map_err(Fault::Network)?;

        Ok(Self {
            http,
            base_url: cfg.base_url().to_owned(),
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// GET `path` and decode the JSON response body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.dispatch(Method::GET, path, None::<&()>).await?;
        Self::decode(response).await
    }

    /// POST a JSON body to `path`, ignoring the response body.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<()> {
        self.dispatch(Method::POST, path, Some(body)).await?;
        Ok(())
    }

    /// PUT a JSON body to `path`, ignoring the response body.
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<()> {
        self.dispatch(Method::PUT, path, Some(body)).await?;
        Ok(())
    }

    /// DELETE `path`, ignoring the response body.
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        self.dispatch(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    async fn dispatch<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<Response> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "dispatching request");

        let mut request = self.http.request(method, &url);
        if let Some(token) = self.session.bearer() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(Fault::from_reqwest)?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.session.expire();
            return Err(Fault::Unauthorized);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %url, "request failed");
            return Err(Fault::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let bytes = response.bytes().await.map_err(Fault::from_reqwest)?;
        serde_json::from_slice(&bytes).map_err(Fault::Decode)
    }
}
