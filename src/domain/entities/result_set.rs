//! # ResultSet Value Object
//!
//! アセンブラサービスが返す4つの成果物

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const NO_OUTPUT: &str = "No output received.";
pub const NO_RECORD: &str = "No record received.";
pub const NO_INTERMEDIATE: &str = "No intermediate file received.";
pub const NO_SYMTAB: &str = "No symtab file received.";

/// サービスのレスポンスから取り出した生の成果物
///
/// 各フィールドは欠けていてもよい
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblerOutput {
    pub output_file: Option<String>,
    pub record_file: Option<String>,
    pub intermediate_file: Option<String>,
    pub symtab_file: Option<String>,
}

/// 成果物のセット
///
/// 1回の成功レスポンスからまとめて作られ、まとめて消される
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    pub final_output: String,
    pub record_file: String,
    pub intermediate_file: String,
    pub symbol_table: String,
}

/// 空文字列も欠落扱い
fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => placeholder.to_string(),
    }
}

impl ResultSet {
    /// レスポンスから作成し、欠けたフィールドをプレースホルダで埋める
    ///
    /// # 例
    ///
    /// ```
    /// use asmsubmit::domain::entities::result_set::{AssemblerOutput, ResultSet, NO_INTERMEDIATE};
    ///
    /// let output = AssemblerOutput {
    ///     output_file: Some("H^COPY".to_string()),
    ///     record_file: Some("T^001000".to_string()),
    ///     intermediate_file: Some(String::new()),
    ///     symtab_file: Some("SYM".to_string()),
    /// };
    ///
    /// let results = ResultSet::from_output(output);
    /// assert_eq!(results.intermediate_file, NO_INTERMEDIATE);
    /// assert_eq!(results.symbol_table, "SYM");
    /// ```
    pub fn from_output(output: AssemblerOutput) -> Self {
        Self {
            final_output: or_placeholder(output.output_file, NO_OUTPUT),
            record_file: or_placeholder(output.record_file, NO_RECORD),
            intermediate_file: or_placeholder(output.intermediate_file, NO_INTERMEDIATE),
            symbol_table: or_placeholder(output.symtab_file, NO_SYMTAB),
        }
    }

    /// 保存時のファイル名と本文
    pub fn files(&self) -> [(&'static str, &str); 4] {
        [
            ("intermediate.txt", self.intermediate_file.as_str()),
            ("symtab.txt", self.symbol_table.as_str()),
            ("output.txt", self.final_output.as_str()),
            ("record.txt", self.record_file.as_str()),
        ]
    }

    /// 指定ビューで表示するパネル（見出し, 本文）
    pub fn panels(&self, view: ResultView) -> Vec<(&'static str, &str)> {
        let pass1 = [
            ("Intermediate File", self.intermediate_file.as_str()),
            ("Symtab File", self.symbol_table.as_str()),
        ];
        let pass2 = [
            ("Final Output", self.final_output.as_str()),
            ("Record File", self.record_file.as_str()),
        ];

        match view {
            ResultView::Pass1 => pass1.to_vec(),
            ResultView::Pass2 => pass2.to_vec(),
            ResultView::Both => pass1.into_iter().chain(pass2).collect(),
        }
    }
}

/// 結果の表示モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultView {
    /// 中間ファイルとシンボルテーブル
    Pass1,
    /// 最終出力とレコードファイル
    #[default]
    Pass2,
    /// 両方（CLI出力用）
    Both,
}

impl ResultView {
    /// Pass 1 / Pass 2 を切り替える
    pub fn toggled(self) -> Self {
        match self {
            ResultView::Pass1 => ResultView::Pass2,
            ResultView::Pass2 | ResultView::Both => ResultView::Pass1,
        }
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResultView::Pass1 => "pass1",
            ResultView::Pass2 => "pass2",
            ResultView::Both => "both",
        };
        f.write_str(name)
    }
}

impl FromStr for ResultView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pass1" | "1" => Ok(ResultView::Pass1),
            "pass2" | "2" => Ok(ResultView::Pass2),
            "both" | "all" => Ok(ResultView::Both),
            other => Err(format!("unknown result view: {}", other)),
        }
    }
}
