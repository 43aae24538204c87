//! # datatops
//!
//! Rust client for Datatops record-collection servers.
//!
//! A Datatops server stores arbitrary JSON records in named project
//! buckets. The whole wire protocol is one request:
//!
//! ```text
//! POST {server}/api/v1/projects/{project}
//! Content-Type: application/json
//! X-User-Key: {user_key}
//!
//! {record as JSON}
//! ```
//!
//! This crate issues exactly that request, once per call. There is no
//! retry or batching layer, and the response is not parsed: the raw
//! [`Response`] comes back to the caller, HTTP error statuses included.
//! Callers who prefer callback-style delivery over awaiting the response
//! can use [`Client::store_with`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use datatops::{Client, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> datatops::Result<()> {
//!     let client = Client::new(ClientConfig {
//!         server: "http://my-datatops-example.com".to_string(),
//!         project: "my-project".to_string(),
//!         user_key: "s9bhn4kd".to_string(),
//!     })?;
//!
//!     let response = client
//!         .store(&serde_json::json!({ "name": "Jordan", "color": "blue" }))
//!         .await?;
//!     println!("server said {}", response.status());
//!
//!     Ok(())
//! }
//! ```

// Re-export commonly used items at the crate root
pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use reqwest::Response;

// Public modules
pub mod client;
pub mod config;
pub mod error;
