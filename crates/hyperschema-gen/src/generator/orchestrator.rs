//! Entry point wiring the output manager, schema builder, template and
//! formatter into one generation run.
//!
//! A run is strictly sequential and blocking. On any recoverable failure
//! after the directory reset, every file recorded for the run is rolled back
//! before the error is returned, so downstream steps never observe a partial
//! artifact set.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
  api::ApiDescription,
  generator::{
    emitter::Emitter,
    formatter::{PrettyFormatter, SourceFormatter},
    output::{CleanupFailure, OutputManager},
    schema::{HyperSchemaBuilder, SchemaBuilder},
    template::MountTemplate,
  },
};

/// Fixed subpath under the output root that this generator owns.
pub const SCHEMA_DIR_NAME: &str = "schema";

/// One-call pipeline entry: generate schema artifacts for `api` under
/// `<output_root>/schema`, returning the ordered absolute artifact paths.
pub fn generate(api: &ApiDescription, output_root: &Path) -> anyhow::Result<Vec<PathBuf>> {
  Generator::new(output_root).generate(api)
}

pub struct Generator {
  schema_dir: PathBuf,
  output: OutputManager,
  builder: Box<dyn SchemaBuilder>,
  formatter: Box<dyn SourceFormatter>,
  template: MountTemplate,
}

impl Generator {
  pub fn new(output_root: impl AsRef<Path>) -> Self {
    Self::with_collaborators(
      output_root,
      Box::new(HyperSchemaBuilder),
      Box::new(PrettyFormatter),
    )
  }

  /// Construction seam for substituting the external collaborators.
  pub fn with_collaborators(
    output_root: impl AsRef<Path>,
    builder: Box<dyn SchemaBuilder>,
    formatter: Box<dyn SourceFormatter>,
  ) -> Self {
    Self {
      schema_dir: output_root.as_ref().join(SCHEMA_DIR_NAME),
      output: OutputManager::new(),
      builder,
      formatter,
      template: MountTemplate::new(),
    }
  }

  pub fn schema_dir(&self) -> &Path {
    &self.schema_dir
  }

  /// Files of the last successful run, in declared-output order.
  pub fn generated_files(&self) -> &[PathBuf] {
    self.output.files()
  }

  /// Runs one generation: resets the target directory, emits and formats the
  /// artifacts, and returns their absolute paths. On failure after the reset,
  /// rolls back everything this run wrote; the directory itself stays (empty)
  /// and the next attempt resets it again.
  pub fn generate(&mut self, api: &ApiDescription) -> anyhow::Result<Vec<PathBuf>> {
    self.output.prepare(&self.schema_dir)?;
    let dir = std::path::absolute(&self.schema_dir)
      .with_context(|| format!("resolving output directory {}", self.schema_dir.display()))?;

    let mut emitter = Emitter::new(
      &dir,
      &mut self.output,
      self.builder.as_ref(),
      self.formatter.as_ref(),
      &self.template,
    );
    match emitter.generate(api) {
      Ok(files) => Ok(files),
      Err(err) => {
        let failures = self.output.cleanup();
        Err(with_cleanup_context(err, &failures))
      }
    }
  }

  /// Explicitly rolls back the files of the current run.
  pub fn cleanup(&mut self) -> Vec<CleanupFailure> {
    self.output.cleanup()
  }
}

fn with_cleanup_context(err: anyhow::Error, failures: &[CleanupFailure]) -> anyhow::Error {
  if failures.is_empty() {
    return err;
  }
  let detail = failures
    .iter()
    .map(|failure| format!("{}: {}", failure.path.display(), failure.error))
    .collect::<Vec<_>>()
    .join("; ");
  err.context(format!("rollback left files behind ({detail})"))
}
