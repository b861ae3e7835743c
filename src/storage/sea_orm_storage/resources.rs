//! 学习资料存储操作

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::{debug, info};

use super::SeaOrmStorage;
use crate::entity::resources::{ActiveModel, Column, Entity as Resources};
use crate::errors::{Result, TrackerError};
use crate::models::resources::{entities::Resource, requests::CreateResourceForm};
use crate::utils::validate::non_blank;

impl SeaOrmStorage {
    /// 添加资料，链接为空时静默忽略
    pub async fn add_resource_impl(
        &self,
        homework_id: i64,
        form: CreateResourceForm,
    ) -> Result<Option<Resource>> {
        self.ensure_homework_exists(homework_id).await?;

        let Some(url) = non_blank(form.url) else {
            debug!(homework_id, "Ignoring resource without url");
            return Ok(None);
        };

        let model = ActiveModel {
            homework_id: Set(homework_id),
            title: Set(non_blank(form.title)),
            url: Set(url),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("添加资料失败: {e}")))?;

        info!(homework_id, resource_id = result.id, "Resource added");

        Ok(Some(result.into_resource()))
    }

    /// 列出作业下的资料
    pub async fn list_resources_for_homework_impl(
        &self,
        homework_id: i64,
    ) -> Result<Vec<Resource>> {
        let results = Resources::find()
            .filter(Column::HomeworkId.eq(homework_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询资料失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_resource()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::homeworks::requests::CreateHomeworkRequest;

    #[tokio::test]
    async fn test_add_resource() {
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

        let skipped = storage
            .add_resource_impl(
                hw.id,
                CreateResourceForm {
                    title: Some("No link".into()),
                    url: Some(" ".into()),
                },
            )
            .await
            .unwrap();
        assert!(skipped.is_none());

        let resource = storage
            .add_resource_impl(
                hw.id,
                CreateResourceForm {
                    title: Some("".into()),
                    url: Some("https://example.com/algebra-video".into()),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(resource.title, None);
        assert_eq!(resource.url, "https://example.com/algebra-video");

        let listed = storage.list_resources_for_homework_impl(hw.id).await.unwrap();
        assert_eq!(listed, vec![resource]);

        let err = storage
            .add_resource_impl(hw.id + 1, CreateResourceForm::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TrackerError::NotFound(_)));
    }
}
