//! # Domain Layer
//!
//! このモジュールはフォームの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - HTTPやファイルシステムについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: エンティティ（Document, ResultSet, Optabなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（送信前バリデーション）

pub mod entities;
pub mod repositories;
pub mod services;
