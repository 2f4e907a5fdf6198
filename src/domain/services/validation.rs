//! # Submission Validation Service
//!
//! 送信前バリデーションとフォームのエラー分類

use thiserror::Error;

use crate::domain::entities::document::Document;

pub const MISSING_DOCUMENTS_WARNING: &str =
    "Both input.txt and optab.txt contents are required before submission.";
pub const FETCH_ERROR_MESSAGE: &str = "Error Occurred During Fetch";

/// フォームのエラー
///
/// 2段階の分類のみを持つ。詳細な原因はログにのみ出す
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// 必須ドキュメントが空（リクエストは送らない）
    #[error("{}", MISSING_DOCUMENTS_WARNING)]
    Validation,
    /// 通信エラーまたはサービスのエラー応答
    #[error("{}", FETCH_ERROR_MESSAGE)]
    Request,
}

/// 送信前バリデーションサービス
pub struct SubmissionValidator;

impl SubmissionValidator {
    /// 両方のドキュメントが空でないことを確認
    ///
    /// # 例
    ///
    /// ```
    /// use asmsubmit::domain::entities::document::Document;
    /// use asmsubmit::domain::services::validation::{FormError, SubmissionValidator};
    ///
    /// let mut input = Document::new();
    /// let optab = Document::new();
    /// assert_eq!(SubmissionValidator::validate(&input, &optab), Err(FormError::Validation));
    ///
    /// input.set_text("LOOP LDA ALPHA");
    /// assert!(SubmissionValidator::validate(&input, &optab).is_err());
    /// ```
    pub fn validate(input: &Document, optab: &Document) -> Result<(), FormError> {
        if input.is_empty() || optab.is_empty() {
            return Err(FormError::Validation);
        }
        Ok(())
    }
}
