//! 看板统计的输入快照
//!
//! 存储层只读取统计所需的列，聚合在服务层一次遍历完成。

use chrono::{DateTime, Utc};

/// 作业摘要（id、科目、截止时间）
#[derive(Debug, Clone, PartialEq)]
pub struct HomeworkDigest {
    pub id: i64,
    pub subject: String,
    pub due_date: DateTime<Utc>,
}

/// 提交摘要（所属作业、评分）
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionDigest {
    pub homework_id: i64,
    pub grade: Option<f64>,
}

/// 某一时刻的看板数据快照
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub homeworks: Vec<HomeworkDigest>,
    pub submissions: Vec<SubmissionDigest>,
}
