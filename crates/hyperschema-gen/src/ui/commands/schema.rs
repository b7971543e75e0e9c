use std::path::Path;

use crate::{
  generator::schema::{HyperSchemaBuilder, SchemaBuilder},
  utils::description::DescriptionLoader,
};

/// Derives the schema for a description file and prints it to stdout without
/// touching the filesystem. Inspection aid for pipeline debugging.
pub async fn print_schema(input: &Path, pretty: bool) -> anyhow::Result<()> {
  let api = DescriptionLoader::open(input).await?.parse()?;
  let document = HyperSchemaBuilder.build(&api)?;

  let rendered = if pretty {
    serde_json::to_string_pretty(document.as_value())?
  } else {
    serde_json::to_string(document.as_value())?
  };
  println!("{rendered}");
  Ok(())
}
