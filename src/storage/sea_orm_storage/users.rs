//! 用户存储操作

use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use tracing::debug;

use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Column, Entity as Users, Model};
use crate::errors::{Result, TrackerError};
use crate::models::users::entities::User;

/// 按姓名查找或创建用户
///
/// 依赖 `users.name` 的唯一约束：先 `INSERT ... ON CONFLICT(name) DO NOTHING`，
/// 再按姓名读取。并发的同名请求最终拿到同一行。
/// 姓名在这里统一去除首尾空白。
pub(crate) async fn find_or_create_user_in<C>(conn: &C, name: &str) -> Result<Model>
where
    C: ConnectionTrait,
{
    let name = name.trim();
    let model = ActiveModel {
        name: Set(name.to_string()),
        is_teacher: Set(false),
        created_at: Set(chrono::Utc::now().timestamp()),
        ..Default::default()
    };

    let inserted = Users::insert(model)
        .on_conflict(OnConflict::column(Column::Name).do_nothing().to_owned())
        .exec_without_returning(conn)
        .await
        .map_err(|e| TrackerError::database_operation(format!("创建用户失败: {e}")))?;

    if inserted > 0 {
        debug!(name, "Created student user");
    }

    Users::find()
        .filter(Column::Name.eq(name))
        .one(conn)
        .await
        .map_err(|e| TrackerError::database_operation(format!("查询用户失败: {e}")))?
        .ok_or_else(|| TrackerError::database_operation(format!("用户写入后无法读取: {name}")))
}

impl SeaOrmStorage {
    /// 按姓名查找用户，不存在则创建（默认非教师）
    pub async fn find_or_create_user_impl(&self, name: &str) -> Result<User> {
        let model = find_or_create_user_in(&self.db, name).await?;
        Ok(model.into_user())
    }

    /// 通过姓名获取用户
    pub async fn get_user_by_name_impl(&self, name: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Name.eq(name.trim()))
            .one(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn test_find_or_create_reuses_row() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();

        let first = storage.find_or_create_user_impl("Alice").await.unwrap();
        assert_eq!(first.name, "Alice");
        assert!(!first.is_teacher);

        let second = storage.find_or_create_user_impl("Alice").await.unwrap();
        assert_eq!(first.id, second.id);

        let bob = storage.find_or_create_user_impl("Bob").await.unwrap();
        assert_ne!(bob.id, first.id);

        assert_eq!(Users::find().count(&storage.db).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_same_name_yields_single_user() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();

        let (a, b) = tokio::join!(
            storage.find_or_create_user_impl("Carol"),
            storage.find_or_create_user_impl("Carol")
        );
        assert_eq!(a.unwrap().id, b.unwrap().id);
        assert_eq!(Users::find().count(&storage.db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_name_is_trimmed() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();

        let padded = storage.find_or_create_user_impl(" Alice ").await.unwrap();
        assert_eq!(padded.name, "Alice");

        let plain = storage.find_or_create_user_impl("Alice").await.unwrap();
        assert_eq!(padded.id, plain.id);
        assert_eq!(
            storage.get_user_by_name_impl("Alice ").await.unwrap(),
            Some(plain)
        );
        assert_eq!(Users::find().count(&storage.db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_user_by_name() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        assert!(storage.get_user_by_name_impl("Dave").await.unwrap().is_none());
        let dave = storage.find_or_create_user_impl("Dave").await.unwrap();
        assert_eq!(storage.get_user_by_name_impl("Dave").await.unwrap(), Some(dave));
    }
}
