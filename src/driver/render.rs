//! Form Rendering
//!
//! フォームの状態をテキストで表示

use std::io::{self, Write};

use crate::application::form::UploadForm;
use crate::domain::repositories::assembler_repository::AssemblerRepository;
use crate::domain::repositories::document_repository::DocumentRepository;

pub const EMPTY_RESULTS_HINT: &str = "Upload files and submit the form to see the results here.";

/// 警告、エラー、現在のビューのパネルを書き出す
///
/// 成果物が無い場合はヒントを表示する
pub fn render<W, D, A>(out: &mut W, form: &UploadForm<D, A>) -> io::Result<()>
where
    W: Write,
    D: DocumentRepository,
    A: AssemblerRepository,
{
    if let Some(warning) = form.warning() {
        writeln!(out, "Warning: {}", warning)?;
    }
    if let Some(error) = form.error() {
        writeln!(out, "Error: {}", error)?;
    }

    let panels = form.visible_panels();
    if panels.is_empty() {
        writeln!(out, "{}", EMPTY_RESULTS_HINT)?;
        return Ok(());
    }

    for (heading, text) in panels {
        writeln!(out, "== {} ==", heading)?;
        writeln!(out, "{}", text.trim_end_matches('\n'))?;
    }

    Ok(())
}
