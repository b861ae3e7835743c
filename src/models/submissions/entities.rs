use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 未填写姓名时的学生名
pub const DEFAULT_STUDENT_NAME: &str = "Student";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct Submission {
    pub id: i64,
    pub homework_id: i64,
    pub student_id: i64,
    pub content: String,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    // None 表示尚未评分
    pub grade: Option<f64>,
    pub feedback: Option<String>,
}

impl Submission {
    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }
}
