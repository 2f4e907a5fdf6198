//! # Result Repository Trait
//!
//! 成果物の保存を抽象化

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::entities::result_set::ResultSet;

pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// 保存した成果物の記録
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultManifest {
    /// 送信ID（UUID v4）
    pub submission_id: String,
    pub submitted_at: DateTime<Utc>,
    pub endpoint: String,
    /// 書き出したファイル名
    pub files: Vec<String>,
}

/// 成果物リポジトリ
#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// 成果物とマニフェストをディレクトリに保存する
    ///
    /// # Arguments
    ///
    /// * `dir` - 保存先ディレクトリ（無ければ作成）
    /// * `results` - 保存する成果物
    /// * `manifest` - 同時に書き出すマニフェスト
    ///
    /// # Returns
    ///
    /// 書き出したマニフェストのパス
    ///
    /// # Errors
    ///
    /// ディレクトリ作成または書き込みに失敗した場合にエラーを返す
    async fn save(
        &self,
        dir: &Path,
        results: &ResultSet,
        manifest: &ResultManifest,
    ) -> Result<PathBuf>;
}
