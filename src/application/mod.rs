//! # Application Layer
//!
//! アプリケーション固有のフロー（ユースケースとフォームのビューモデル）
//!
//! ## 特徴
//!
//! - Domain層のエンティティとサービスを組み合わせてフローを実現
//! - Repository traitに依存（実装には依存しない）
//! - HTTPやファイルシステムの詳細は知らない
//!
//! ## 構成要素
//!
//! - **dto**: Data Transfer Object
//! - **use_cases**: ユースケース
//! - **form**: アップロードフォームのビューモデル

pub mod dto;
pub mod form;
pub mod use_cases;
