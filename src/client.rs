//! HTTP client for the Datatops records API
//!
//! One client talks to one project bucket on one server. Every call to
//! [`Client::store`] issues a single POST with the record as its JSON
//! body; there is no queueing or retry layer in between, and the raw
//! response comes back to the caller unparsed.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Response;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// HTTP client for storing records on a Datatops server.
///
/// Cloning is cheap; clones share the underlying connection pool. All
/// methods take `&self`, so one client can serve any number of concurrent
/// [`store`](Client::store) calls without coordination.
#[derive(Clone)]
pub struct Client {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new client from configuration.
    ///
    /// The configuration is stored as-is: empty strings and malformed
    /// URLs are accepted here and only fail once a request is attempted.
    /// Construction errors are limited to a `user_key` that cannot be
    /// carried in an HTTP header and a transport builder failure.
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Both headers are fixed for the lifetime of the client
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "X-User-Key",
            HeaderValue::from_str(&config.user_key)
                .map_err(|e| Error::Config(format!("invalid user key: {}", e)))?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Store one record in the configured project.
    ///
    /// The record is serialized before anything touches the network, so a
    /// failing [`Serialize`] impl yields [`Error::Json`] without issuing
    /// a request. The response is returned whatever its HTTP status; 4xx
    /// and 5xx are not errors here, inspect [`Response::status`] to tell
    /// them apart. Only network-level failures reject the call, as
    /// [`Error::Transport`].
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # #[tokio::main]
    /// # async fn main() -> datatops::Result<()> {
    /// # let client = datatops::Client::new(datatops::ClientConfig {
    /// #     server: "http://my-datatops-example.com".to_string(),
    /// #     project: "my-project".to_string(),
    /// #     user_key: "s9bhn4kd".to_string(),
    /// # })?;
    /// let response = client
    ///     .store(&serde_json::json!({ "name": "Jordan", "color": "blue" }))
    ///     .await?;
    /// println!("{}", response.status());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn store<T>(&self, record: &T) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(record)?;
        let url = self.project_url();

        tracing::debug!(url = %url, bytes = body.len(), "Storing record");

        let response = self.http_client.post(&url).body(body).send().await?;

        tracing::debug!(status = %response.status(), "Record request completed");

        Ok(response)
    }

    /// Store one record and hand the response to a completion handler.
    ///
    /// Adapter over [`store`](Client::store) for callers who prefer
    /// callback-style delivery: the handler runs exactly once with the
    /// raw response (HTTP error statuses included) and the returned
    /// future resolves to the handler's return value. When serialization
    /// or the transport fails the handler never runs and the error
    /// propagates unchanged.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # #[tokio::main]
    /// # async fn main() -> datatops::Result<()> {
    /// # let client = datatops::Client::new(datatops::ClientConfig {
    /// #     server: "http://my-datatops-example.com".to_string(),
    /// #     project: "my-project".to_string(),
    /// #     user_key: "s9bhn4kd".to_string(),
    /// # })?;
    /// let status = client
    ///     .store_with(&serde_json::json!({ "name": "Jordan" }), |response| {
    ///         response.status()
    ///     })
    ///     .await?;
    /// println!("{}", status);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn store_with<T, F, R>(&self, record: &T, on_response: F) -> Result<R>
    where
        T: Serialize + ?Sized,
        F: FnOnce(Response) -> R,
    {
        let response = self.store(record).await?;
        Ok(on_response(response))
    }

    /// The configuration this client was constructed with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Target URL for the configured project:
    /// `{server}/api/v1/projects/{project}`.
    ///
    /// Plain concatenation: no trailing-slash cleanup on `server`, no
    /// escaping of `project`.
    fn project_url(&self) -> String {
        format!(
            "{}/api/v1/projects/{}",
            self.config.server, self.config.project
        )
    }
}
