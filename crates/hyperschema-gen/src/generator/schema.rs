//! Schema builder collaborator: derives the hyper-schema document that the
//! emitter writes to disk.
//!
//! The emitter treats the document as opaque bytes; only the builder knows the
//! mapping rules from the API description to schema constructs.

use serde_json::{Map, Value, json};

use crate::api::ApiDescription;

/// A derived hyper-schema document. Immutable once built; serialized exactly
/// once and written verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument(Value);

impl SchemaDocument {
  pub fn new(value: Value) -> Self {
    Self(value)
  }

  pub fn as_value(&self) -> &Value {
    &self.0
  }

  pub fn to_bytes(&self) -> anyhow::Result<Vec<u8>> {
    Ok(serde_json::to_vec(&self.0)?)
  }
}

/// Derives a [`SchemaDocument`] from an API description.
///
/// Implementations must be pure: same description, same document.
pub trait SchemaBuilder {
  fn build(&self, api: &ApiDescription) -> anyhow::Result<SchemaDocument>;
}

/// Default builder producing a JSON hyper-schema skeleton: API metadata, one
/// `links` entry per resource action, and the named type definitions passed
/// through untouched.
#[derive(Debug, Default)]
pub struct HyperSchemaBuilder;

impl SchemaBuilder for HyperSchemaBuilder {
  fn build(&self, api: &ApiDescription) -> anyhow::Result<SchemaDocument> {
    let base = api.base_path.as_deref().unwrap_or("");
    let mut links = Vec::new();

    for (resource_name, resource) in &api.resources {
      for (action_name, action) in &resource.actions {
        let method = action.http_method()?;
        let mut link = Map::new();
        link.insert("rel".into(), json!(format!("{resource_name}#{action_name}")));
        link.insert("href".into(), json!(format!("{base}{}", action.path)));
        link.insert("method".into(), json!(method.as_str()));
        // Action description wins; the resource's is the fallback title.
        if let Some(title) = action.description.as_deref().or(resource.description.as_deref()) {
          link.insert("title".into(), json!(title));
        }
        if let Some(media_type) = &resource.media_type {
          link.insert("mediaType".into(), json!(media_type));
        }
        links.push(Value::Object(link));
      }
    }

    let mut root = Map::new();
    root.insert(
      "$schema".into(),
      json!("http://json-schema.org/draft-04/hyper-schema"),
    );
    root.insert("title".into(), json!(api.title.as_deref().unwrap_or(api.name.as_str())));
    if let Some(description) = &api.description {
      root.insert("description".into(), json!(description));
    }
    if let Some(version) = &api.version {
      root.insert("version".into(), json!(version));
    }
    root.insert("type".into(), json!("object"));
    if !api.types.is_empty() {
      root.insert(
        "definitions".into(),
        Value::Object(api.types.iter().map(|(k, v)| (k.clone(), v.clone())).collect()),
      );
    }
    root.insert("links".into(), Value::Array(links));

    Ok(SchemaDocument::new(Value::Object(root)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn bottle() -> ApiDescription {
    serde_json::from_str(
      r#"{
        "name": "Bottle",
        "description": "A wine bottle catalog",
        "base_path": "/api",
        "resources": {
          "bottle": {
            "description": "A bottle of wine",
            "media_type": "application/vnd.bottle+json",
            "actions": {
              "show": { "method": "get", "path": "/bottles/:id", "description": "Retrieve one bottle" },
              "list": { "method": "get", "path": "/bottles" }
            }
          }
        },
        "types": {
          "BottlePayload": { "type": "object" }
        }
      }"#,
    )
    .unwrap()
  }

  #[test]
  fn test_builder_emits_links_and_definitions() {
    let document = HyperSchemaBuilder.build(&bottle()).unwrap();
    let value = document.as_value();

    assert_eq!(value["$schema"], "http://json-schema.org/draft-04/hyper-schema");
    assert_eq!(value["title"], "Bottle");
    assert_eq!(value["definitions"]["BottlePayload"]["type"], "object");

    let links = value["links"].as_array().unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0]["rel"], "bottle#show");
    assert_eq!(links[0]["href"], "/api/bottles/:id");
    assert_eq!(links[0]["method"], "GET");
    assert_eq!(links[0]["title"], "Retrieve one bottle");
    assert_eq!(links[0]["mediaType"], "application/vnd.bottle+json");
  }

  #[test]
  fn test_resource_description_is_link_title_fallback() {
    let document = HyperSchemaBuilder.build(&bottle()).unwrap();
    let links = document.as_value()["links"].as_array().unwrap();

    // `list` declares no description of its own.
    assert_eq!(links[1]["rel"], "bottle#list");
    assert_eq!(links[1]["title"], "A bottle of wine");
  }

  #[test]
  fn test_builder_rejects_invalid_method() {
    let mut api = bottle();
    api.resources["bottle"].actions["show"].method = "NOT A METHOD".to_string();

    let err = HyperSchemaBuilder.build(&api).unwrap_err();
    assert!(err.to_string().contains("invalid HTTP method"));
  }

  #[test]
  fn test_serialization_is_stable() {
    let api = bottle();
    let first = HyperSchemaBuilder.build(&api).unwrap().to_bytes().unwrap();
    let second = HyperSchemaBuilder.build(&api).unwrap().to_bytes().unwrap();
    assert_eq!(first, second);
  }
}
