//! In-memory model of the HTTP API handed to the generator.
//!
//! The description is produced by an earlier pipeline stage (or loaded from a
//! JSON file by the CLI) and is read-only input here: the generator never
//! mutates it.

use http::Method;
use indexmap::IndexMap;
use serde::Deserialize;

/// Root of an API description: a name plus its definition graph.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiDescription {
  pub name: String,
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub version: Option<String>,
  /// Prefix prepended to every action path in derived links.
  #[serde(default)]
  pub base_path: Option<String>,
  #[serde(default)]
  pub resources: IndexMap<String, Resource>,
  /// Named type definitions, passed through to the schema opaquely.
  #[serde(default)]
  pub types: IndexMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Resource {
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub media_type: Option<String>,
  #[serde(default)]
  pub actions: IndexMap<String, Action>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Action {
  pub method: String,
  pub path: String,
  #[serde(default)]
  pub description: Option<String>,
}

impl Action {
  /// Validates the declared HTTP method, normalized to upper case.
  pub fn http_method(&self) -> anyhow::Result<Method> {
    let upper = self.method.to_ascii_uppercase();
    Method::from_bytes(upper.as_bytes())
      .map_err(|_| anyhow::anyhow!("invalid HTTP method `{}`", self.method))
  }
}
