//! Adapter Layer
//!
//! 外部システム（アセンブラサービス, ファイルシステム）との統合

pub mod config;
pub mod http;
pub mod repositories;
