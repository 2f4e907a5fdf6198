//! # Upload Form View-Model
//!
//! アップロードフォームの状態と操作
//!
//! 2つのドキュメント、成果物、警告/エラーメッセージ、表示モードを保持し、
//! すべての変更は明示的なメソッド経由で行う。
//!
//! `submit` は `&mut self` を取るため、送信中に別の送信を始めることはできない。

use anyhow::Result;
use log::{debug, warn};
use std::path::Path;
use std::sync::Arc;

use crate::application::dto::submission::Submission;
use crate::application::use_cases::load_document::LoadDocumentUseCase;
use crate::application::use_cases::submit_files::SubmitFilesUseCase;
use crate::domain::entities::document::{Document, DocumentSlot};
use crate::domain::entities::optab::PRESET_OPTAB;
use crate::domain::entities::result_set::{ResultSet, ResultView};
use crate::domain::repositories::assembler_repository::{AssemblerRepository, SubmissionPayload};
use crate::domain::repositories::document_repository::DocumentRepository;
use crate::domain::services::validation::FormError;

/// フォームの状態遷移
///
/// `Idle → Validating → Submitting → Succeeded | Failed`、`clear` で `Idle` に戻る
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// アップロードフォーム
pub struct UploadForm<D: DocumentRepository, A: AssemblerRepository> {
    load_use_case: LoadDocumentUseCase<D>,
    submit_use_case: SubmitFilesUseCase<A>,
    input: Document,
    optab: Document,
    submission: Option<Submission>,
    error: Option<String>,
    warning: Option<String>,
    view: ResultView,
    phase: FormPhase,
}

impl<D: DocumentRepository, A: AssemblerRepository> UploadForm<D, A> {
    /// 新しいフォームを作成
    ///
    /// # Arguments
    ///
    /// * `document_repository` - ファイル読み込みに使うリポジトリ
    /// * `assembler_repository` - 送信に使うリポジトリ
    /// * `view` - 初期表示モード
    pub fn new(document_repository: Arc<D>, assembler_repository: Arc<A>, view: ResultView) -> Self {
        Self {
            load_use_case: LoadDocumentUseCase::new(document_repository),
            submit_use_case: SubmitFilesUseCase::new(assembler_repository),
            input: Document::new(),
            optab: Document::new(),
            submission: None,
            error: None,
            warning: None,
            view,
            phase: FormPhase::Idle,
        }
    }

    pub fn input(&self) -> &Document {
        &self.input
    }

    pub fn optab(&self) -> &Document {
        &self.optab
    }

    pub fn document(&self, slot: DocumentSlot) -> &Document {
        match slot {
            DocumentSlot::Input => &self.input,
            DocumentSlot::Optab => &self.optab,
        }
    }

    fn document_mut(&mut self, slot: DocumentSlot) -> &mut Document {
        match slot {
            DocumentSlot::Input => &mut self.input,
            DocumentSlot::Optab => &mut self.optab,
        }
    }

    /// 最後に成功した送信
    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    pub fn results(&self) -> Option<&ResultSet> {
        self.submission.as_ref().map(|s| &s.results)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn view(&self) -> ResultView {
        self.view
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// ファイルを読み込んでスロットの内容を置き換える
    ///
    /// # Errors
    ///
    /// 読み込みに失敗した場合にエラーを返す（スロットは変更しない）
    pub async fn load_file(&mut self, slot: DocumentSlot, path: &Path) -> Result<()> {
        // use case と document の借用を分けるため一時的に取り出す
        let mut document = std::mem::take(self.document_mut(slot));
        let result = self.load_use_case.execute(path, &mut document).await;
        *self.document_mut(slot) = document;
        result
    }

    /// スロットの内容を直接書き換える
    pub fn edit_text(&mut self, slot: DocumentSlot, text: impl Into<String>) {
        self.document_mut(slot).set_text(text);
    }

    /// プリセットoptabを読み込み、optabのファイル参照を外す
    pub fn load_preset_optab(&mut self) {
        self.optab.set_text(PRESET_OPTAB);
        self.optab.forget_source();
    }

    /// 送信前バリデーションを行い、送信するペイロードを返す
    ///
    /// 失敗した場合は警告を出す（成果物とエラーはそのまま）
    pub fn validate(&mut self) -> Result<SubmissionPayload, FormError> {
        self.phase = FormPhase::Validating;
        debug!("Form phase: {:?}", self.phase);

        match self.submit_use_case.prepare(&self.input, &self.optab) {
            Ok(payload) => Ok(payload),
            Err(e) => {
                warn!("Submission rejected: missing document content");
                self.warning = Some(e.to_string());
                self.phase = FormPhase::Idle;
                Err(e)
            }
        }
    }

    /// ドキュメントを送信する
    ///
    /// - 成功: 成果物を置き換え、エラーと警告を消す
    /// - バリデーション失敗: 警告を出し、成果物はそのまま
    /// - 送信失敗: 成果物を消し、汎用エラーを出す
    pub async fn submit(&mut self) -> Result<(), FormError> {
        let payload = self.validate()?;

        self.phase = FormPhase::Submitting;
        debug!("Form phase: {:?}", self.phase);

        match self.submit_use_case.send(&payload).await {
            Ok(submission) => {
                self.submission = Some(submission);
                self.error = None;
                self.warning = None;
                self.phase = FormPhase::Succeeded;
                Ok(())
            }
            Err(e) => {
                self.submission = None;
                self.error = Some(e.to_string());
                self.phase = FormPhase::Failed;
                Err(e)
            }
        }
    }

    /// ドキュメント、ファイル参照、成果物、メッセージをすべて空にする
    pub fn clear(&mut self) {
        self.input.clear();
        self.optab.clear();
        self.submission = None;
        self.error = None;
        self.warning = None;
        self.phase = FormPhase::Idle;
    }

    pub fn show_pass1(&mut self) {
        self.view = ResultView::Pass1;
    }

    pub fn show_pass2(&mut self) {
        self.view = ResultView::Pass2;
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
    }

    /// 現在のビューで表示するパネル（見出し, 本文）
    ///
    /// 成果物が無い場合は空
    pub fn visible_panels(&self) -> Vec<(&'static str, &str)> {
        self.results()
            .map(|r| r.panels(self.view))
            .unwrap_or_default()
    }
}
