//! # Optab
//!
//! オペコードテーブル（ニーモニック → 16進オペコード）

use thiserror::Error;

/// プリセットoptab（SIC標準命令26個）
pub const PRESET_OPTAB: &str = "ADD 18\nAND 40\nCOMP 28\nDIV 24\nJ 3C\nJEQ 30\nJGT 34\nJLT 38\nJSUB 48\nLDA 00\nLDCH 50\nLDL 08\nLDX 04\nMUL 20\nOR 44\nRD D8\nRSUB 4C\nSTA 0C\nSTCH 54\nSTL 14\nSTSW E8\nSTX 10\nSUB 1C\nTD E0\nTIX 2C\nWD DC";

/// optabの1エントリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptabEntry {
    pub mnemonic: String,
    pub opcode: u8,
}

/// optab行の形式エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptabLineError {
    #[error("missing opcode after mnemonic `{0}`")]
    MissingOpcode(String),
    #[error("opcode `{0}` is not a one-byte hex value")]
    InvalidOpcode(String),
    #[error("unexpected trailing text `{0}`")]
    TrailingText(String),
}

/// パース結果
///
/// 正しい行のエントリと、問題のある行（1始まりの行番号）の両方を持つ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOptab {
    pub entries: Vec<OptabEntry>,
    pub issues: Vec<(usize, OptabLineError)>,
}

impl ParsedOptab {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// ニーモニックからオペコードを引く
    pub fn opcode(&self, mnemonic: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|e| e.mnemonic.eq_ignore_ascii_case(mnemonic))
            .map(|e| e.opcode)
    }
}

fn parse_line(line: &str) -> Result<OptabEntry, OptabLineError> {
    let mut tokens = line.split_whitespace();
    // 空行は呼び出し側で除外済み
    let mnemonic = tokens.next().unwrap_or_default();
    let code = tokens
        .next()
        .ok_or_else(|| OptabLineError::MissingOpcode(mnemonic.to_string()))?;

    if let Some(extra) = tokens.next() {
        return Err(OptabLineError::TrailingText(extra.to_string()));
    }

    if code.len() > 2 {
        return Err(OptabLineError::InvalidOpcode(code.to_string()));
    }
    let opcode =
        u8::from_str_radix(code, 16).map_err(|_| OptabLineError::InvalidOpcode(code.to_string()))?;

    Ok(OptabEntry {
        mnemonic: mnemonic.to_string(),
        opcode,
    })
}

/// optabテキストをパースする
///
/// 空行は無視する。不正な行はエラーにせず `issues` に積む
/// （optabの意味づけはサービス側の責務のため、クライアントは警告するだけ）
pub fn parse_optab(text: &str) -> ParsedOptab {
    let mut parsed = ParsedOptab::default();

    for (line_num, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(entry) => parsed.entries.push(entry),
            Err(e) => parsed.issues.push((line_num + 1, e)),
        }
    }

    parsed
}
