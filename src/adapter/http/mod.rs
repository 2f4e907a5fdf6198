//! HTTP Adapter Modules
//!
//! アセンブラサービスとのHTTP統合

pub mod client;
pub mod models;
