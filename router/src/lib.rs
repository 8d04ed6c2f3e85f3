//! # Router
//!
//! Builds fully qualified URLs for server resources.
//!
//! ## Philosophy
//!
//! - **Pure string building**: Generating a URL never touches the network
//! - **Validated once**: The base URL is checked when the generator is built,
//!   not on every call
//!
//! Remote resources live below `<base>/remote.php/<service>`, where `<base>`
//! is the server origin plus any web root the instance is installed under.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use url::Url;

/// Path segment under which remote services are exposed
pub const REMOTE_ENTRY_POINT: &str = "remote.php";

/// Turns a server-relative service path into a fully qualified URL
pub trait RemoteUrlGenerator: Send + Sync {
    /// Returns the URL for `service`, e.g. `dav/files/alice/a.txt`
    fn generate_remote_url(&self, service: &str) -> String;
}

impl<T: RemoteUrlGenerator + ?Sized> RemoteUrlGenerator for Arc<T> {
    fn generate_remote_url(&self, service: &str) -> String {
        (**self).generate_remote_url(service)
    }
}

impl<T: RemoteUrlGenerator + ?Sized> RemoteUrlGenerator for &T {
    fn generate_remote_url(&self, service: &str) -> String {
        (**self).generate_remote_url(service)
    }
}

/// Errors raised while configuring a URL generator
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Unsupported scheme {0:?}: expected http or https")]
    UnsupportedScheme(String),

    #[error("Base URL must not carry a query or fragment: {0}")]
    UnexpectedQuery(String),
}

/// URL generator for a concrete server instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServerRemoteUrl {
    /// Origin plus web root, without trailing slash
    base: String,
}

impl ServerRemoteUrl {
    /// Creates a generator for the server reachable at `base_url`
    ///
    /// `base_url` is the origin plus optional web root, for example
    /// `https://cloud.example.com` or `https://example.com/nextcloud`.
    pub fn new(base_url: &str) -> Result<Self, RouterError> {
        let url = Url::parse(base_url).map_err(|e| RouterError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(RouterError::UnsupportedScheme(other.to_string())),
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(RouterError::UnexpectedQuery(base_url.to_string()));
        }

        Ok(Self {
            base: url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the normalized base URL
    pub fn base_url(&self) -> &str {
        &self.base
    }
}

impl RemoteUrlGenerator for ServerRemoteUrl {
    fn generate_remote_url(&self, service: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base,
            REMOTE_ENTRY_POINT,
            service.trim_start_matches('/')
        )
    }
}

impl TryFrom<String> for ServerRemoteUrl {
    type Error = RouterError;

    fn try_from(base_url: String) -> Result<Self, Self::Error> {
        Self::new(&base_url)
    }
}

impl From<ServerRemoteUrl> for String {
    fn from(generator: ServerRemoteUrl) -> Self {
        generator.base
    }
}

impl fmt::Display for ServerRemoteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)
    }
}
