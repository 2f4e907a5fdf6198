//! # Save Results Use Case
//!
//! 成果物をディレクトリに保存するユースケース

use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::dto::submission::Submission;
use crate::domain::repositories::result_repository::{ResultManifest, ResultRepository};

/// 成果物保存ユースケース
pub struct SaveResultsUseCase<R: ResultRepository> {
    result_repository: Arc<R>,
}

impl<R: ResultRepository> SaveResultsUseCase<R> {
    /// 新しいユースケースを作成
    pub fn new(result_repository: Arc<R>) -> Self {
        Self { result_repository }
    }

    /// 成果物とマニフェストを保存する
    ///
    /// # Arguments
    ///
    /// * `dir` - 保存先ディレクトリ
    /// * `submission` - 成功した送信
    /// * `endpoint` - 送信先URL（マニフェストに記録）
    ///
    /// # Returns
    ///
    /// マニフェストのパス
    pub async fn execute(&self, dir: &Path, submission: &Submission, endpoint: &str) -> Result<PathBuf> {
        let manifest = ResultManifest {
            submission_id: submission.id.clone(),
            submitted_at: submission.submitted_at,
            endpoint: endpoint.to_string(),
            files: submission
                .results
                .files()
                .iter()
                .map(|(name, _)| name.to_string())
                .collect(),
        };

        let path = self
            .result_repository
            .save(dir, &submission.results, &manifest)
            .await?;

        info!("Saved {} result files to {}", manifest.files.len(), dir.display());

        Ok(path)
    }
}
