//! 讨论存储操作

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::{debug, info};

use super::SeaOrmStorage;
use crate::entity::threads::{ActiveModel, Column, Entity as Threads};
use crate::errors::{Result, TrackerError};
use crate::models::threads::{
    entities::{ANONYMOUS_AUTHOR, Thread},
    requests::CreateThreadForm,
};
use crate::utils::validate::non_blank;

impl SeaOrmStorage {
    /// 发表评论
    ///
    /// 留言为空或只有空白时静默忽略，返回 `None`；作者为空时记为 Anonymous。
    pub async fn add_thread_impl(
        &self,
        homework_id: i64,
        form: CreateThreadForm,
    ) -> Result<Option<Thread>> {
        self.ensure_homework_exists(homework_id).await?;

        let Some(message) = non_blank(form.message) else {
            debug!(homework_id, "Ignoring blank thread message");
            return Ok(None);
        };
        let author = non_blank(form.author).unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());

        let model = ActiveModel {
            homework_id: Set(homework_id),
            author: Set(author),
            message: Set(message),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("发表评论失败: {e}")))?;

        info!(homework_id, thread_id = result.id, "Thread posted");

        Ok(Some(result.into_thread()))
    }

    /// 列出作业下的评论
    pub async fn list_threads_for_homework_impl(&self, homework_id: i64) -> Result<Vec<Thread>> {
        let results = Threads::find()
            .filter(Column::HomeworkId.eq(homework_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询评论失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_thread()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::homeworks::requests::CreateHomeworkRequest;

    async fn storage_with_homework() -> (SeaOrmStorage, i64) {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let hw = storage
            .create_homework_impl(CreateHomeworkRequest {
                title: "Worksheet".into(),
                subject: "Math".into(),
                description: None,
                due_date: chrono::Utc::now(),
                color: None,
            })
            .await
            .unwrap();
        (storage, hw.id)
    }

    #[tokio::test]
    async fn test_blank_message_is_ignored() {
        let (storage, hw_id) = storage_with_homework().await;

        for message in [None, Some(String::new()), Some("   \n\t".to_string())] {
            let result = storage
                .add_thread_impl(
                    hw_id,
                    CreateThreadForm {
                        author: Some("Bob".into()),
                        message,
                    },
                )
                .await
                .unwrap();
            assert!(result.is_none());
        }

        assert!(storage.list_threads_for_homework_impl(hw_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_author_defaults_to_anonymous() {
        let (storage, hw_id) = storage_with_homework().await;

        let thread = storage
            .add_thread_impl(
                hw_id,
                CreateThreadForm {
                    author: Some("  ".into()),
                    message: Some("  Remember to show your steps.  ".into()),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(thread.author, ANONYMOUS_AUTHOR);
        assert_eq!(thread.message, "Remember to show your steps.");

        let named = storage
            .add_thread_impl(
                hw_id,
                CreateThreadForm {
                    author: Some("Teacher A".into()),
                    message: Some("Due Friday".into()),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(named.author, "Teacher A");

        let threads = storage.list_threads_for_homework_impl(hw_id).await.unwrap();
        assert_eq!(threads, vec![thread, named]);
    }

    #[tokio::test]
    async fn test_unknown_homework() {
        let (storage, hw_id) = storage_with_homework().await;
        let err = storage
            .add_thread_impl(hw_id + 1, CreateThreadForm::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TrackerError::NotFound(_)));
    }
}
