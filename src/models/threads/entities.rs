use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 未署名评论的作者名
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "thread.ts")]
pub struct Thread {
    pub id: i64,
    pub homework_id: i64,
    // 作者（自由文本，不关联用户）
    pub author: String,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
