//! # Domain Entities
//!
//! フォームが保持するエンティティとバリューオブジェクト
//!
//! ## エンティティ
//!
//! - **Document**: 入力ファイル / optab のテキストとファイル参照
//! - **ResultSet**: アセンブラサービスが返す4つの成果物
//! - **Optab**: プリセットoptabと行パーサ

pub mod document;
pub mod optab;
pub mod result_set;
