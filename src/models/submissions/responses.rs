use serde::Serialize;
use ts_rs::TS;

use super::entities::Submission;

/// 详情页中的提交（附带学生姓名）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "submission.ts")]
pub struct SubmissionListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub submission: Submission,
    pub student_name: String,
}
