//! # Node Inspector
//!
//! Command-line front end for the node mapper. Reads file-info records as
//! JSON, maps them for a given owner and prints the resulting nodes.
//!
//! Input is either a single record object or an array of records.

use fs_view::Node;
use identity::{CurrentUser, CurrentUserProvider, NoCurrentUser, StaticUserProvider, UserId};
use router::{RouterError, ServerRemoteUrl};
use serde_json::Value;
use services_node_mapper::{FileInfoRecord, MapperConfig, MapperError, NodeMapper};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Environment variable consulted when `--base-url` is not given
pub const BASE_URL_ENV: &str = "NODE_INSPECT_BASE_URL";
/// Environment variable consulted when `--user` is not given
pub const USER_ENV: &str = "NODE_INSPECT_USER";

/// Errors surfaced by the inspector
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid identity: {0}")]
    Identity(#[from] identity::IdentityError),

    #[error("router error: {0}")]
    Router(#[from] RouterError),

    #[error("mapping failed: {0}")]
    Mapper(#[from] MapperError),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Inspector configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectConfig {
    /// Server base URL (origin plus web root)
    pub base_url: Option<String>,
    /// User reported as logged in
    pub user: Option<String>,
    /// Owner passed explicitly to the mapper
    pub owner: Option<String>,
    /// Input file; stdin when absent
    pub input: Option<PathBuf>,
    /// Reject unknown entry types
    pub strict: bool,
    /// Pretty-print the output
    pub pretty: bool,
}

impl InspectConfig {
    /// Fills unset values from the environment
    pub fn with_env_fallbacks(mut self) -> Self {
        if self.base_url.is_none() {
            self.base_url = std::env::var(BASE_URL_ENV).ok();
        }
        if self.user.is_none() {
            self.user = std::env::var(USER_ENV).ok();
        }
        self
    }

    fn mapper_config(&self) -> MapperConfig {
        MapperConfig {
            strict_entry_types: self.strict,
        }
    }
}

/// Parses one record or an array of records
///
/// The shape is decided on the top-level JSON value so that field errors
/// surface with serde's own message.
pub fn parse_records(text: &str) -> Result<Vec<FileInfoRecord>, InspectError> {
    let value: Value = serde_json::from_str(text)?;
    let records = match value {
        Value::Array(_) => serde_json::from_value::<Vec<FileInfoRecord>>(value)?,
        other => vec![serde_json::from_value::<FileInfoRecord>(other)?],
    };
    Ok(records)
}

/// Reads the input text from `path`, or stdin when `None`
pub fn read_input(path: Option<&Path>) -> Result<String, InspectError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Maps every record in `text` according to `config`
pub fn inspect(config: &InspectConfig, text: &str) -> Result<Vec<Node>, InspectError> {
    let base_url = config
        .base_url
        .as_deref()
        .ok_or_else(|| InspectError::Config(format!("missing --base-url or {}", BASE_URL_ENV)))?;
    let urls = ServerRemoteUrl::new(base_url)?;

    let users: Arc<dyn CurrentUserProvider> = match config.user.as_deref() {
        Some(uid) => Arc::new(StaticUserProvider::new(CurrentUser::new(UserId::parse(uid)?))),
        None => Arc::new(NoCurrentUser),
    };

    let records = parse_records(text)?;
    info!(records = records.len(), base_url = %urls, "mapping file info records");

    // Owner goes through the same check as --user; the mapper itself accepts any string.
    let owner = config.owner.as_deref().map(UserId::parse).transpose()?;

    let mapper = NodeMapper::new(users, urls).with_config(config.mapper_config());
    Ok(mapper.map_all(&records, owner.as_ref().map(UserId::as_str))?)
}

/// Renders nodes as JSON
pub fn render(nodes: &[Node], pretty: bool) -> Result<String, InspectError> {
    let text = if pretty {
        serde_json::to_string_pretty(nodes)?
    } else {
        serde_json::to_string(nodes)?
    };
    Ok(text)
}
