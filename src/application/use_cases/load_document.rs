//! # Load Document Use Case
//!
//! ファイルからドキュメントを読み込むユースケース

use anyhow::Result;
use log::info;
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::document::Document;
use crate::domain::repositories::document_repository::DocumentRepository;

/// ドキュメント読み込みユースケース
pub struct LoadDocumentUseCase<R: DocumentRepository> {
    document_repository: Arc<R>,
}

impl<R: DocumentRepository> LoadDocumentUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `document_repository` - ドキュメントリポジトリ
    pub fn new(document_repository: Arc<R>) -> Self {
        Self {
            document_repository,
        }
    }

    /// ファイルを読み込んでドキュメントに反映する
    ///
    /// 読み込みに失敗した場合、ドキュメントは変更しない
    ///
    /// # Errors
    ///
    /// ファイルの読み込みに失敗した場合にエラーを返す
    pub async fn execute(&self, path: &Path, document: &mut Document) -> Result<()> {
        let content = self.document_repository.read_text(path).await?;
        info!("Loaded {} bytes from {}", content.len(), path.display());
        document.load_from_file(path.to_path_buf(), content);
        Ok(())
    }
}
