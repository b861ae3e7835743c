//! 作业存储操作

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use tracing::{debug, info, warn};

use super::SeaOrmStorage;
use crate::entity::homeworks::{ActiveModel, Column, Entity as Homeworks};
use crate::entity::resources::{Column as ResourceColumn, Entity as Resources};
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions};
use crate::entity::threads::{Column as ThreadColumn, Entity as Threads};
use crate::errors::{Result, TrackerError};
use crate::models::homeworks::{
    entities::{DEFAULT_HOMEWORK_COLOR, Homework},
    requests::CreateHomeworkRequest,
};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_homework_impl(&self, req: CreateHomeworkRequest) -> Result<Homework> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            subject: Set(req.subject),
            description: Set(req.description),
            due_date: Set(req.due_date.timestamp()),
            color: Set(req
                .color
                .unwrap_or_else(|| DEFAULT_HOMEWORK_COLOR.to_string())),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("创建作业失败: {e}")))?;

        info!(
            homework_id = result.id,
            subject = %result.subject,
            "Homework created"
        );

        Ok(result.into_homework())
    }

    /// 通过 ID 获取作业
    pub async fn get_homework_by_id_impl(&self, id: i64) -> Result<Option<Homework>> {
        let result = Homeworks::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_homework()))
    }

    /// 确认作业存在，否则返回 NotFound
    pub(crate) async fn ensure_homework_exists(&self, id: i64) -> Result<()> {
        let exists = Homeworks::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询作业失败: {e}")))?
            > 0;

        if exists {
            Ok(())
        } else {
            Err(TrackerError::not_found(format!("作业不存在: {id}")))
        }
    }

    /// 列出即将到期的作业
    pub async fn list_upcoming_homeworks_impl(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Homework>> {
        let results = Homeworks::find()
            .filter(Column::DueDate.gte(now.timestamp()))
            .order_by_asc(Column::DueDate)
            .order_by_asc(Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询作业列表失败: {e}")))?;

        debug!("Loaded {} upcoming homework(s)", results.len());

        Ok(results.into_iter().map(|m| m.into_homework()).collect())
    }

    /// 列出全部作业
    pub async fn list_all_homeworks_impl(&self) -> Result<Vec<Homework>> {
        let results = Homeworks::find()
            .order_by_asc(Column::DueDate)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_homework()).collect())
    }

    /// 作业总数
    pub async fn count_homeworks_impl(&self) -> Result<u64> {
        Homeworks::find()
            .count(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询作业总数失败: {e}")))
    }

    /// 删除作业
    ///
    /// 讨论和资料随作业一起删除；只要还有提交引用该作业就拒绝删除，
    /// 保证提交永远指向存在的作业。
    pub async fn delete_homework_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TrackerError::database_operation(format!("开启事务失败: {e}")))?;

        let exists = Homeworks::find_by_id(id)
            .count(&txn)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询作业失败: {e}")))?
            > 0;
        if !exists {
            return Ok(false);
        }

        let submission_count = Submissions::find()
            .filter(SubmissionColumn::HomeworkId.eq(id))
            .count(&txn)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询提交失败: {e}")))?;
        if submission_count > 0 {
            warn!(
                homework_id = id,
                submission_count, "Refusing to delete homework with submissions"
            );
            return Err(TrackerError::conflict(format!(
                "作业 {id} 已有 {submission_count} 份提交，无法删除"
            )));
        }

        let threads = Threads::delete_many()
            .filter(ThreadColumn::HomeworkId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| TrackerError::database_operation(format!("删除讨论失败: {e}")))?;
        let resources = Resources::delete_many()
            .filter(ResourceColumn::HomeworkId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| TrackerError::database_operation(format!("删除资料失败: {e}")))?;
        Homeworks::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| TrackerError::database_operation(format!("删除作业失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| TrackerError::database_operation(format!("提交事务失败: {e}")))?;

        info!(
            homework_id = id,
            threads = threads.rows_affected,
            resources = resources.rows_affected,
            "Homework deleted"
        );

        Ok(true)
    }
}
