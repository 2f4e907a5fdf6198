//! # Document Repository Trait
//!
//! ドキュメントの読み込みを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

/// ドキュメントリポジトリ
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// ファイルを読み込み、テキストとしてデコードする
    ///
    /// 不正なUTF-8はU+FFFDに置き換える
    ///
    /// # Errors
    ///
    /// ファイルの読み込みに失敗した場合にエラーを返す
    async fn read_text(&self, path: &Path) -> Result<String>;
}
