//! File Document Repository Implementation
//!
//! DocumentRepositoryのファイルシステム実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::repositories::document_repository::DocumentRepository;

/// ファイルシステムベースのドキュメントリポジトリ
pub struct FileDocumentRepository;

impl FileDocumentRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// ファイルを読み込んでテキストにデコードする（同期処理）
    fn read_text_sync(path: &Path) -> Result<String> {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let path = PathBuf::from(expanded);

        let bytes =
            fs::read(&path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[async_trait]
impl DocumentRepository for FileDocumentRepository {
    async fn read_text(&self, path: &Path) -> Result<String> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::read_text_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for FileDocumentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_text() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"COPY    START   1000\nFIRST   STL     RETADR\n")
            .unwrap();

        let text = FileDocumentRepository::read_text_sync(file.path()).unwrap();

        assert_eq!(text, "COPY    START   1000\nFIRST   STL     RETADR\n");
    }

    #[test]
    fn test_read_text_replaces_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[b'L', b'D', b'A', b' ', 0xFF, b'0']).unwrap();

        let text = FileDocumentRepository::read_text_sync(file.path()).unwrap();

        assert_eq!(text, "LDA \u{FFFD}0");
    }

    #[test]
    fn test_read_missing_file() {
        let result = FileDocumentRepository::read_text_sync(Path::new("/nonexistent/input.asm"));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_read_text_async() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"ADD 18").unwrap();

        let repo = FileDocumentRepository::new();
        let text = repo.read_text(file.path()).await.unwrap();

        assert_eq!(text, "ADD 18");
    }
}
