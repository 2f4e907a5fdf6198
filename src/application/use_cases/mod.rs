//! # Use Cases
//!
//! アプリケーションのフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **LoadDocumentUseCase**: ファイルからのドキュメント読み込み
//! - **SubmitFilesUseCase**: バリデーションとサービスへの送信
//! - **SaveResultsUseCase**: 成果物の保存

pub mod load_document;
pub mod save_results;
pub mod submit_files;
