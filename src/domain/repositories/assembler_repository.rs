//! # Assembler Repository Trait
//!
//! 外部アセンブラサービスへの送信を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::document::{Document, DocumentSlot};
use crate::domain::entities::result_set::AssemblerOutput;

/// サービスへ送るペイロード
///
/// 送信時点のドキュメント内容のスナップショット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub input: String,
    pub optab: String,
}

impl SubmissionPayload {
    /// ドキュメントからペイロードを作成
    pub fn from_documents(input: &Document, optab: &Document) -> Self {
        Self {
            input: input.content().to_string(),
            optab: optab.content().to_string(),
        }
    }

    /// multipartの各パート（スロット, 本文）を送信順に返す
    pub fn parts(&self) -> [(DocumentSlot, &str); 2] {
        [
            (DocumentSlot::Input, self.input.as_str()),
            (DocumentSlot::Optab, self.optab.as_str()),
        ]
    }
}

/// アセンブラリポジトリ
///
/// 2つのドキュメントを送信し、4つの成果物を受け取る
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AssemblerRepository: Send + Sync {
    /// ドキュメントを送信して成果物を受け取る
    ///
    /// # Errors
    ///
    /// 通信エラー、2xx以外の応答、デコードできない応答でエラーを返す
    async fn process_files(&self, payload: &SubmissionPayload) -> Result<AssemblerOutput>;
}
