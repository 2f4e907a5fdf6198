//! # Submission DTO
//!
//! 成功した送信の記録

use chrono::{DateTime, Utc};

use crate::domain::entities::result_set::ResultSet;

/// 成功した1回の送信
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// 送信ID（UUID v4）
    pub id: String,
    pub submitted_at: DateTime<Utc>,
    pub results: ResultSet,
}
