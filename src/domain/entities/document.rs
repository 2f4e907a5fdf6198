//! # Document Entity
//!
//! フォームに入力されるテキストドキュメント

use std::fmt;
use std::path::{Path, PathBuf};

/// ドキュメントの種類
///
/// フォームには入力ファイルとoptabファイルの2枠がある
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentSlot {
    /// アセンブリソース
    Input,
    /// オペコードテーブル
    Optab,
}

impl DocumentSlot {
    /// multipartのパート名
    pub fn part_name(self) -> &'static str {
        match self {
            DocumentSlot::Input => "input_file",
            DocumentSlot::Optab => "optab_file",
        }
    }

    /// サービスへ送るファイル名
    ///
    /// 元のファイル名に関係なく固定
    pub fn file_name(self) -> &'static str {
        match self {
            DocumentSlot::Input => "input.txt",
            DocumentSlot::Optab => "optab.txt",
        }
    }
}

impl fmt::Display for DocumentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// テキストドキュメント
///
/// 内容と、読み込み元ファイルへの参照（ブラウザのファイル入力欄に相当）を持つ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    content: String,
    source: Option<PathBuf>,
}

impl Document {
    /// 空のドキュメントを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 内容を返す
    pub fn content(&self) -> &str {
        &self.content
    }

    /// 読み込み元ファイルを返す
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// ファイルから読み込んだ内容で置き換える
    ///
    /// 手入力された内容は上書きされる
    pub fn load_from_file(&mut self, path: PathBuf, content: String) {
        self.content = content;
        self.source = Some(path);
    }

    /// 内容を直接書き換える（ファイル参照は維持）
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = text.into();
    }

    /// ファイル参照を外す
    pub fn forget_source(&mut self) {
        self.source = None;
    }

    /// 内容とファイル参照を空にする
    pub fn clear(&mut self) {
        self.content.clear();
        self.source = None;
    }
}
