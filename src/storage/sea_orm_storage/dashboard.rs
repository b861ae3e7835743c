//! 看板快照读取

use chrono::{DateTime, Utc};
use sea_orm::{EntityTrait, QuerySelect, TransactionTrait};
use tracing::debug;

use super::SeaOrmStorage;
use crate::entity::homeworks::Column as HomeworkColumn;
use crate::entity::prelude::{Homeworks, Submissions};
use crate::entity::submissions::Column as SubmissionColumn;
use crate::errors::{Result, TrackerError};
use crate::models::dashboard::entities::{DashboardSnapshot, HomeworkDigest, SubmissionDigest};

impl SeaOrmStorage {
    /// 在同一事务中读取作业与提交的统计列
    pub async fn load_dashboard_snapshot_impl(&self) -> Result<DashboardSnapshot> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TrackerError::database_operation(format!("开启事务失败: {e}")))?;

        let homeworks = Homeworks::find()
            .select_only()
            .column(HomeworkColumn::Id)
            .column(HomeworkColumn::Subject)
            .column(HomeworkColumn::DueDate)
            .into_tuple::<(i64, String, i64)>()
            .all(&txn)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询作业统计失败: {e}")))?;

        let submissions = Submissions::find()
            .select_only()
            .column(SubmissionColumn::HomeworkId)
            .column(SubmissionColumn::Grade)
            .into_tuple::<(i64, Option<f64>)>()
            .all(&txn)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询提交统计失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| TrackerError::database_operation(format!("提交事务失败: {e}")))?;

        debug!(
            homeworks = homeworks.len(),
            submissions = submissions.len(),
            "Loaded dashboard snapshot"
        );

        Ok(DashboardSnapshot {
            homeworks: homeworks
                .into_iter()
                .map(|(id, subject, due_date)| HomeworkDigest {
                    id,
                    subject,
                    due_date: DateTime::<Utc>::from_timestamp(due_date, 0).unwrap_or_default(),
                })
                .collect(),
            submissions: submissions
                .into_iter()
                .map(|(homework_id, grade)| SubmissionDigest { homework_id, grade })
                .collect(),
        })
    }
}
