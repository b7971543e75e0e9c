use std::path::Path;

use crate::{
  api::ApiDescription,
  generator::{
    formatter::SourceFormatter,
    schema::{SchemaBuilder, SchemaDocument},
  },
};

pub(super) fn bottle_description() -> ApiDescription {
  serde_json::from_str(include_str!("../../../fixtures/bottle.json")).expect("failed to parse test description")
}

/// Builder returning a canned document regardless of the description.
pub(super) struct FixedSchemaBuilder(pub(super) serde_json::Value);

impl SchemaBuilder for FixedSchemaBuilder {
  fn build(&self, _api: &ApiDescription) -> anyhow::Result<SchemaDocument> {
    Ok(SchemaDocument::new(self.0.clone()))
  }
}

/// Builder rejecting every description, simulating malformed input.
pub(super) struct FailingBuilder;

impl SchemaBuilder for FailingBuilder {
  fn build(&self, _api: &ApiDescription) -> anyhow::Result<SchemaDocument> {
    anyhow::bail!("unsupported type")
  }
}

/// Formatter rejecting every file, simulating a beautifier failure.
pub(super) struct RejectingFormatter;

impl SourceFormatter for RejectingFormatter {
  fn format(&self, path: &Path) -> anyhow::Result<()> {
    anyhow::bail!("refusing to format {}", path.display())
  }
}
