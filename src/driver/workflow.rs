//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{Context, Result};
use log::{info, warn};
use std::io::{self, Write};
use std::sync::Arc;

use crate::adapter::http::client::HttpAssemblerRepository;
use crate::adapter::repositories::file_document_repository::FileDocumentRepository;
use crate::adapter::repositories::file_result_repository::FileResultRepository;
use crate::application::dto::client_config::ClientConfig;
use crate::application::form::UploadForm;
use crate::application::use_cases::save_results::SaveResultsUseCase;
use crate::domain::entities::document::DocumentSlot;
use crate::domain::entities::optab::parse_optab;

use super::cli::Args;
use super::render::render;

/// 1回のフォームセッション（読み込み → 送信 → 表示）
pub struct AssembleWorkflow {
    config: ClientConfig,
    document_repository: Arc<FileDocumentRepository>,
    assembler_repository: Arc<HttpAssemblerRepository>,
    save_use_case: SaveResultsUseCase<FileResultRepository>,
}

impl AssembleWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: ClientConfig) -> Self {
        let document_repository = Arc::new(FileDocumentRepository::new());
        let assembler_repository = Arc::new(HttpAssemblerRepository::new(config.endpoint.clone()));
        let save_use_case = SaveResultsUseCase::new(Arc::new(FileResultRepository::new()));

        Self {
            config,
            document_repository,
            assembler_repository,
            save_use_case,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute the submit workflow
    pub async fn execute(&self, args: Args) -> Result<()> {
        info!("Starting asmsubmit...");
        info!("Dry run: {}", args.dry_run);

        println!("✓ Using endpoint: {}", self.config.endpoint);

        let mut form = UploadForm::new(
            self.document_repository.clone(),
            self.assembler_repository.clone(),
            self.config.default_view,
        );

        // ファイル → テキスト → プリセットの順に適用
        if let Some(path) = &args.input {
            form.load_file(DocumentSlot::Input, path)
                .await
                .with_context(|| format!("Failed to load input file {}", path.display()))?;
            println!("✓ Loaded input from {}", path.display());
        }
        if let Some(text) = &args.input_text {
            form.edit_text(DocumentSlot::Input, text.clone());
        }
        if let Some(path) = &args.optab {
            form.load_file(DocumentSlot::Optab, path)
                .await
                .with_context(|| format!("Failed to load optab file {}", path.display()))?;
            println!("✓ Loaded optab from {}", path.display());
        }
        if let Some(text) = &args.optab_text {
            form.edit_text(DocumentSlot::Optab, text.clone());
        }
        if args.preset_optab {
            form.load_preset_optab();
            println!("✓ Loaded preset optab");
        }

        lint_optab(form.optab().content());

        let mut stdout = io::stdout();

        if args.dry_run {
            let payload = match form.validate() {
                Ok(payload) => payload,
                Err(e) => {
                    render(&mut stdout, &form)?;
                    return Err(e.into());
                }
            };

            writeln!(stdout, "✓ Dry-run mode (not actually submitting)")?;
            writeln!(stdout, "  Would POST to {}:", self.config.endpoint)?;
            for (slot, text) in payload.parts() {
                writeln!(
                    stdout,
                    "    - {} ({}): {} lines, {} bytes",
                    slot.part_name(),
                    slot.file_name(),
                    text.lines().count(),
                    text.len()
                )?;
            }
            return Ok(());
        }

        let outcome = form.submit().await;
        render(&mut stdout, &form)?;
        outcome?;

        if let (Some(dir), Some(submission)) = (&args.output_dir, form.submission()) {
            let manifest = self
                .save_use_case
                .execute(dir, submission, &self.config.endpoint)
                .await?;
            writeln!(stdout, "✓ Saved results to {}", dir.display())?;
            writeln!(stdout, "  Manifest: {}", manifest.display())?;
        }

        Ok(())
    }
}

/// optabの不正な行を警告する（送信は止めない）
///
/// 不正な行の数を返す
fn lint_optab(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    let parsed = parse_optab(text);
    for (line, issue) in &parsed.issues {
        warn!("optab line {}: {}", line, issue);
    }
    info!(
        "optab: {} entries, {} malformed lines",
        parsed.entries.len(),
        parsed.issues.len()
    );
    parsed.issues.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::optab::PRESET_OPTAB;
    use crate::domain::entities::result_set::ResultView;

    #[test]
    fn test_new_uses_config() {
        let config = ClientConfig::new(
            "http://127.0.0.1:18000/process-files/".to_string(),
            ResultView::Pass1,
        );
        let workflow = AssembleWorkflow::new(config.clone());

        assert_eq!(workflow.config(), &config);
        assert_eq!(
            workflow.assembler_repository.endpoint(),
            "http://127.0.0.1:18000/process-files/"
        );
    }

    #[test]
    fn test_lint_optab_counts_malformed_lines() {
        assert_eq!(lint_optab(""), 0);
        assert_eq!(lint_optab(PRESET_OPTAB), 0);
        assert_eq!(lint_optab("ADD 18\nbroken line here\nLDA"), 2);
    }
}
