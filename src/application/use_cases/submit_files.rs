//! # Submit Files Use Case
//!
//! バリデーションとアセンブラサービスへの送信

use chrono::Utc;
use log::{error, info};
use std::sync::Arc;

use crate::application::dto::submission::Submission;
use crate::domain::entities::document::Document;
use crate::domain::entities::result_set::ResultSet;
use crate::domain::repositories::assembler_repository::{AssemblerRepository, SubmissionPayload};
use crate::domain::services::validation::{FormError, SubmissionValidator};

/// 送信ユースケース
///
/// 両方のドキュメントが揃っている場合のみサービスへ送信する
pub struct SubmitFilesUseCase<A: AssemblerRepository> {
    assembler_repository: Arc<A>,
}

impl<A: AssemblerRepository> SubmitFilesUseCase<A> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `assembler_repository` - アセンブラリポジトリ
    pub fn new(assembler_repository: Arc<A>) -> Self {
        Self {
            assembler_repository,
        }
    }

    /// 送信前バリデーションを行い、ペイロードを組み立てる
    ///
    /// # Errors
    ///
    /// どちらかのドキュメントが空の場合に `FormError::Validation` を返す
    pub fn prepare(&self, input: &Document, optab: &Document) -> Result<SubmissionPayload, FormError> {
        SubmissionValidator::validate(input, optab)?;
        Ok(SubmissionPayload::from_documents(input, optab))
    }

    /// 組み立て済みのペイロードを送信する
    ///
    /// # Errors
    ///
    /// 送信に失敗した場合に `FormError::Request` を返す（原因はログに出す）
    pub async fn send(&self, payload: &SubmissionPayload) -> Result<Submission, FormError> {
        let id = uuid::Uuid::new_v4().to_string();
        let submitted_at = Utc::now();

        info!(
            "Submitting {} ({} bytes input, {} bytes optab)",
            id,
            payload.input.len(),
            payload.optab.len()
        );

        match self.assembler_repository.process_files(payload).await {
            Ok(output) => {
                info!("Submission {} succeeded", id);
                Ok(Submission {
                    id,
                    submitted_at,
                    results: ResultSet::from_output(output),
                })
            }
            Err(e) => {
                error!("Submission {} failed: {:#}", id, e);
                Err(FormError::Request)
            }
        }
    }

    /// ドキュメントを送信して成果物を受け取る
    ///
    /// # Errors
    ///
    /// - `FormError::Validation`: どちらかのドキュメントが空（送信しない）
    /// - `FormError::Request`: 送信に失敗
    pub async fn execute(&self, input: &Document, optab: &Document) -> Result<Submission, FormError> {
        let payload = self.prepare(input, optab)?;
        self.send(&payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::optab::PRESET_OPTAB;
    use crate::domain::entities::result_set::{AssemblerOutput, NO_INTERMEDIATE};
    use crate::domain::repositories::assembler_repository::MockAssemblerRepository;

    fn doc(text: &str) -> Document {
        let mut d = Document::new();
        d.set_text(text);
        d
    }

    #[tokio::test]
    async fn test_submit_success() {
        let mut mock = MockAssemblerRepository::new();
        mock.expect_process_files()
            .withf(|payload| payload.input == "LOOP LDA ALPHA" && payload.optab == PRESET_OPTAB)
            .times(1)
            .returning(|_| {
                Ok(AssemblerOutput {
                    output_file: Some("...".to_string()),
                    record_file: Some("...".to_string()),
                    intermediate_file: Some(String::new()),
                    symtab_file: Some("SYM".to_string()),
                })
            });

        let use_case = SubmitFilesUseCase::new(Arc::new(mock));
        let submission = use_case
            .execute(&doc("LOOP LDA ALPHA"), &doc(PRESET_OPTAB))
            .await
            .unwrap();

        assert_eq!(submission.results.final_output, "...");
        assert_eq!(submission.results.record_file, "...");
        assert_eq!(submission.results.intermediate_file, NO_INTERMEDIATE);
        assert_eq!(submission.results.symbol_table, "SYM");
        assert_eq!(submission.id.len(), 36);
    }

    #[tokio::test]
    async fn test_submit_empty_document_skips_request() {
        let mut mock = MockAssemblerRepository::new();
        mock.expect_process_files().never();

        let use_case = SubmitFilesUseCase::new(Arc::new(mock));

        let result = use_case.execute(&doc(""), &doc(PRESET_OPTAB)).await;
        assert_eq!(result, Err(FormError::Validation));

        let result = use_case.execute(&doc("LOOP LDA ALPHA"), &doc("")).await;
        assert_eq!(result, Err(FormError::Validation));
    }

    #[tokio::test]
    async fn test_submit_request_failure() {
        let mut mock = MockAssemblerRepository::new();
        mock.expect_process_files()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("500 Internal Server Error")));

        let use_case = SubmitFilesUseCase::new(Arc::new(mock));
        let result = use_case.execute(&doc("LOOP LDA ALPHA"), &doc("LDA 00")).await;

        assert_eq!(result, Err(FormError::Request));
    }

    #[test]
    fn test_prepare_builds_payload() {
        let use_case = SubmitFilesUseCase::new(Arc::new(MockAssemblerRepository::new()));

        let payload = use_case.prepare(&doc("LOOP LDA ALPHA"), &doc("LDA 00")).unwrap();
        assert_eq!(payload.input, "LOOP LDA ALPHA");
        assert_eq!(payload.optab, "LDA 00");

        assert_eq!(
            use_case.prepare(&doc("   "), &doc("")),
            Err(FormError::Validation)
        );
    }
}
