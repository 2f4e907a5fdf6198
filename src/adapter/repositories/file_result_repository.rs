//! File Result Repository Implementation
//!
//! ResultRepositoryのファイルシステム実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::result_set::ResultSet;
use crate::domain::repositories::result_repository::{
    ResultManifest, ResultRepository, MANIFEST_FILE_NAME,
};

/// ファイルシステムベースの成果物リポジトリ
pub struct FileResultRepository;

impl FileResultRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// 成果物とマニフェストを書き出す（同期処理）
    fn save_sync(dir: &Path, results: &ResultSet, manifest: &ResultManifest) -> Result<PathBuf> {
        let expanded = shellexpand::tilde(&dir.to_string_lossy()).into_owned();
        let dir = PathBuf::from(expanded);

        fs::create_dir_all(&dir).context("Failed to create output directory")?;

        for (name, content) in results.files() {
            let path = dir.join(name);
            fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }

        let manifest_path = dir.join(MANIFEST_FILE_NAME);
        let json =
            serde_json::to_string_pretty(manifest).context("Failed to serialize manifest")?;
        fs::write(&manifest_path, json).context("Failed to write manifest file")?;

        info!(
            "Saved submission {} to {}",
            manifest.submission_id,
            dir.display()
        );

        Ok(manifest_path)
    }
}

#[async_trait]
impl ResultRepository for FileResultRepository {
    async fn save(
        &self,
        dir: &Path,
        results: &ResultSet,
        manifest: &ResultManifest,
    ) -> Result<PathBuf> {
        let dir = dir.to_path_buf();
        let results = results.clone();
        let manifest = manifest.clone();
        tokio::task::spawn_blocking(move || Self::save_sync(&dir, &results, &manifest))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for FileResultRepository {
    fn default() -> Self {
        Self::new()
    }
}
