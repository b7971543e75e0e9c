use std::path::Path;

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::api::ApiDescription;

/// Memory-mapped loader for API description files.
pub struct DescriptionLoader {
  file: AsyncMmapFile,
}

impl DescriptionLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("opening API description {}", path.display()))?;
    Ok(Self { file })
  }

  pub fn parse(&self) -> anyhow::Result<ApiDescription> {
    serde_json::from_slice(self.file.as_slice()).context("parsing API description")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_open_and_parse() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("api.json");
    std::fs::write(&path, r#"{"name": "Bottle"}"#).unwrap();

    let api = DescriptionLoader::open(&path).await.unwrap().parse().unwrap();
    assert_eq!(api.name, "Bottle");
    assert!(api.resources.is_empty());
  }

  #[tokio::test]
  async fn test_missing_file_has_path_context() {
    let err = DescriptionLoader::open(Path::new("/no/such/file.json"))
      .await
      .err()
      .unwrap();
    assert!(format!("{err:#}").contains("/no/such/file.json"));
  }
}
