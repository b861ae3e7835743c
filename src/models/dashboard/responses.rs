use serde::Serialize;
use std::collections::BTreeMap;
use ts_rs::TS;

/// 单个科目的进度
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "dashboard.ts")]
pub struct SubjectProgress {
    // 该科目的作业数
    pub total: u64,
    // 该科目作业收到的提交数（按提交计，可能大于 total）
    pub submitted: u64,
}

/// 看板统计
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "dashboard.ts")]
pub struct DashboardStats {
    pub total: u64,
    pub pending: u64,
    // 至少有一份提交的作业数（与是否评分无关）
    pub completed: u64,
    pub avg_grade: Option<f64>,
    pub subject_breakdown: BTreeMap<String, SubjectProgress>,
}
