//! Source formatter collaborator: rewrites a generated file in place to
//! canonical style. Invoked exactly once per successful source write; a
//! formatting failure rolls back the whole run.

use std::{fs, path::Path};

use anyhow::Context;

pub trait SourceFormatter {
  fn format(&self, path: &Path) -> anyhow::Result<()>;
}

/// Default formatter: parse with syn, pretty-print with prettyplease.
/// Rejects files that are not valid Rust, which catches template bugs before
/// the downstream build does.
#[derive(Debug, Default)]
pub struct PrettyFormatter;

impl SourceFormatter for PrettyFormatter {
  fn format(&self, path: &Path) -> anyhow::Result<()> {
    let source =
      fs::read_to_string(path).with_context(|| format!("reading {} for formatting", path.display()))?;
    let ast = syn::parse_file(&source)
      .with_context(|| format!("generated source {} is not valid Rust", path.display()))?;
    fs::write(path, prettyplease::unparse(&ast))
      .with_context(|| format!("writing formatted {}", path.display()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_formats_file_in_place() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("module.rs");
    fs::write(&path, "pub fn answer ( ) -> u32 { 42 }").unwrap();

    PrettyFormatter.format(&path).unwrap();

    let formatted = fs::read_to_string(&path).unwrap();
    assert_eq!(formatted, "pub fn answer() -> u32 {\n    42\n}\n");
  }

  #[test]
  fn test_rejects_invalid_rust() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("broken.rs");
    fs::write(&path, "pub fn {").unwrap();

    let err = PrettyFormatter.format(&path).unwrap_err();
    assert!(err.to_string().contains("not valid Rust"));
    // The file is left untouched, not half-formatted.
    assert_eq!(fs::read_to_string(&path).unwrap(), "pub fn {");
  }
}
