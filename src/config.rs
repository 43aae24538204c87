//! Client configuration
//!
//! [`ClientConfig`] is a plain data struct: build it in code, or embed it
//! in an application's own configuration file and deserialize it with
//! serde:
//!
//! ```toml
//! [datatops]
//! server = "http://my-datatops-example.com"
//! project = "my-project"
//! user_key = "s9bhn4kd"
//! ```

use serde::Deserialize;

/// Connection settings for one Datatops project.
///
/// Every field is forwarded verbatim: `server` and `project` are
/// concatenated into the request URL without escaping or trimming, and
/// `user_key` becomes the `X-User-Key` header value. Nothing is validated
/// here; an empty or malformed `server` is accepted and surfaces later as
/// a transport error on the first [`store`](crate::Client::store) call.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the Datatops server, without a trailing path
    /// (e.g. `http://my-datatops-example.com`)
    pub server: String,

    /// Name of the project bucket records are stored into
    pub project: String,

    /// Opaque per-user credential, sent as the `X-User-Key` header
    pub user_key: String,
}
