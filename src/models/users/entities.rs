use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "user.ts")]
pub struct User {
    pub id: i64,
    // 姓名（唯一）
    pub name: String,
    pub is_teacher: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
