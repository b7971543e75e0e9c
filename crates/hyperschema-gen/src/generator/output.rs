//! Output-directory management and rollback for one generation run.

use std::{
  fs, io,
  path::{Path, PathBuf},
};

use anyhow::Context;

/// A deletion that failed during [`OutputManager::cleanup`].
#[derive(Debug)]
pub struct CleanupFailure {
  pub path: PathBuf,
  pub error: io::Error,
}

/// Tracks every file written during the current run so they can be rolled
/// back as a unit.
///
/// Not synchronized: exactly one run is assumed to be active against a given
/// output path at a time. Concurrent runs targeting the same directory have
/// undefined interleaving.
#[derive(Debug, Default)]
pub struct OutputManager {
  generated: Vec<PathBuf>,
}

impl OutputManager {
  pub fn new() -> Self {
    Self::default()
  }

  /// Resets the target directory: removes it recursively if present and
  /// recreates it with parents. A missing directory is not an error; a
  /// failure to create is fatal to the run.
  pub fn prepare(&self, path: &Path) -> anyhow::Result<()> {
    match fs::remove_dir_all(path) {
      Ok(()) => {}
      Err(err) if err.kind() == io::ErrorKind::NotFound => {}
      Err(err) => {
        return Err(err).with_context(|| format!("resetting output directory {}", path.display()));
      }
    }
    fs::create_dir_all(path).with_context(|| format!("creating output directory {}", path.display()))
  }

  /// Records a written file. Callers must only record a path once the file
  /// actually exists on disk.
  pub fn record(&mut self, path: PathBuf) {
    self.generated.push(path);
  }

  /// Replaces the tracked set wholesale with the run's declared output.
  pub fn commit(&mut self, files: Vec<PathBuf>) {
    self.generated = files;
  }

  /// Paths written during the current run, in write order.
  pub fn files(&self) -> &[PathBuf] {
    &self.generated
  }

  /// Deletes every tracked file, best-effort: a failing deletion does not
  /// short-circuit the remaining paths. Failures are returned per path so the
  /// caller can report them. The tracked set is empty afterwards.
  pub fn cleanup(&mut self) -> Vec<CleanupFailure> {
    let mut failures = Vec::new();
    for path in self.generated.drain(..) {
      match fs::remove_file(&path) {
        Ok(()) => {}
        Err(error) if error.kind() == io::ErrorKind::NotFound => {}
        Err(error) => failures.push(CleanupFailure { path, error }),
      }
    }
    failures
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_prepare_creates_missing_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("out").join("schema");

    let manager = OutputManager::new();
    manager.prepare(&dir).unwrap();

    assert!(dir.is_dir());
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
  }

  #[test]
  fn test_prepare_is_idempotent_and_empties_stale_files() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("schema");

    let manager = OutputManager::new();
    manager.prepare(&dir).unwrap();
    fs::write(dir.join("stale.json"), b"old").unwrap();

    manager.prepare(&dir).unwrap();
    assert!(dir.is_dir());
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);

    // Second reset with nothing to delete succeeds the same way.
    manager.prepare(&dir).unwrap();
    assert!(dir.is_dir());
  }

  #[test]
  fn test_cleanup_removes_all_recorded_files() {
    let tmp = tempfile::tempdir().unwrap();
    let a = tmp.path().join("a.json");
    let b = tmp.path().join("b.rs");
    fs::write(&a, b"{}").unwrap();
    fs::write(&b, b"fn main() {}").unwrap();

    let mut manager = OutputManager::new();
    manager.record(a.clone());
    manager.record(b.clone());

    let failures = manager.cleanup();
    assert!(failures.is_empty());
    assert!(!a.exists());
    assert!(!b.exists());
    assert!(manager.files().is_empty());
  }

  #[test]
  fn test_cleanup_does_not_short_circuit_on_failure() {
    let tmp = tempfile::tempdir().unwrap();
    // A directory recorded as a file makes remove_file fail for that entry.
    let not_a_file = tmp.path().join("subdir");
    fs::create_dir(&not_a_file).unwrap();
    let real = tmp.path().join("real.json");
    fs::write(&real, b"{}").unwrap();

    let mut manager = OutputManager::new();
    manager.record(not_a_file.clone());
    manager.record(real.clone());

    let failures = manager.cleanup();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].path, not_a_file);
    assert!(!real.exists(), "later paths must still be deleted");
    assert!(manager.files().is_empty());
  }

  #[test]
  fn test_cleanup_ignores_already_missing_files() {
    let tmp = tempfile::tempdir().unwrap();
    let gone = tmp.path().join("gone.json");

    let mut manager = OutputManager::new();
    manager.record(gone);

    let failures = manager.cleanup();
    assert!(failures.is_empty());
  }
}
