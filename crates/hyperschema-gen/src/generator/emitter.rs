//! Emits the two artifacts of a run: the schema document and the mount
//! module. Either both end up on disk, formatted, or the caller rolls back
//! every path recorded so far.

use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
  api::ApiDescription,
  generator::{
    formatter::SourceFormatter,
    output::OutputManager,
    schema::SchemaBuilder,
    template::{MountParams, MountTemplate},
  },
};

pub const SCHEMA_FILE_NAME: &str = "schema.json";
pub const MOUNT_FILE_NAME: &str = "schema.rs";

pub(crate) struct Emitter<'a> {
  dir: &'a Path,
  output: &'a mut OutputManager,
  builder: &'a dyn SchemaBuilder,
  formatter: &'a dyn SourceFormatter,
  template: &'a MountTemplate,
}

impl<'a> Emitter<'a> {
  pub(crate) fn new(
    dir: &'a Path,
    output: &'a mut OutputManager,
    builder: &'a dyn SchemaBuilder,
    formatter: &'a dyn SourceFormatter,
    template: &'a MountTemplate,
  ) -> Self {
    Self {
      dir,
      output,
      builder,
      formatter,
      template,
    }
  }

  /// Runs the emission sequence: build schema, write `schema.json`, render
  /// and write `schema.rs`, format it. Each written path is recorded only
  /// after the file exists. On error the caller owns rollback via the
  /// output manager; this method never leaves a recorded path undocumented.
  pub(crate) fn generate(&mut self, api: &ApiDescription) -> anyhow::Result<Vec<PathBuf>> {
    let document = self
      .builder
      .build(api)
      .with_context(|| format!("building schema for API `{}`", api.name))?;
    let bytes = document
      .to_bytes()
      .with_context(|| format!("serializing schema for API `{}`", api.name))?;

    let schema_file = self.dir.join(SCHEMA_FILE_NAME);
    fs::write(&schema_file, &bytes).with_context(|| format!("writing {}", schema_file.display()))?;
    self.output.record(schema_file.clone());

    let body = self.template.render(&MountParams {
      schema_file: &schema_file,
    })?;
    let source = format!(
      "//! {} JSON hyper-schema mount module.\n//!\n//! Generated by hyperschema-gen (template v{}). DO NOT EDIT.\n\n{body}\n",
      api.name,
      self.template.version()
    );

    let mount_file = self.dir.join(MOUNT_FILE_NAME);
    fs::write(&mount_file, source).with_context(|| format!("writing {}", mount_file.display()))?;
    self.output.record(mount_file.clone());

    self
      .formatter
      .format(&mount_file)
      .with_context(|| format!("formatting {}", mount_file.display()))?;

    // Declared output order: source first, then the schema it serves.
    let files = vec![mount_file, schema_file];
    self.output.commit(files.clone());
    Ok(files)
  }
}
