//! # Driver Layer (Presentation)
//!
//! CLIとターミナル出力を提供
//!
//! ## 特徴
//!
//! - フォームのビューモデルを操作して送信フローを起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - ユーザーとのインターフェース
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **render**: フォーム状態のテキスト表示
//! - **workflow**: ワークフロー全体のオーケストレーション

pub mod cli;
pub mod render;
pub mod workflow;

pub use cli::Args;
pub use workflow::AssembleWorkflow;
