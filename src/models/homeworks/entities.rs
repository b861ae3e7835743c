use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 未指定颜色时的日历展示色
pub const DEFAULT_HOMEWORK_COLOR: &str = "#2d9cdb";

/// 首页展示的即将到期作业数量
pub const UPCOMING_HOMEWORK_LIMIT: u64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "homework.ts")]
pub struct Homework {
    // 唯一 ID
    pub id: i64,
    // 作业标题
    pub title: String,
    // 科目
    pub subject: String,
    // 作业描述
    pub description: Option<String>,
    // 截止时间
    pub due_date: chrono::DateTime<chrono::Utc>,
    // 日历展示色
    pub color: String,
    // 作业创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Homework {
    /// 详情页路径
    pub fn detail_path(&self) -> String {
        format!("/homework/{}", self.id)
    }
}
