//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod dashboard;
mod homeworks;
mod resources;
mod submissions;
mod threads;
mod users;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{Result, TrackerError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(&config.database).await
    }

    /// 按数据库配置创建存储实例并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        Self::run_migrations(&db).await?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 内存 SQLite 存储（单连接，测试与演示用）
    pub async fn new_in_memory() -> Result<Self> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Database::connect(opt)
            .await
            .map_err(|e| TrackerError::database_connection(format!("内存数据库连接失败: {e}")))?;

        Self::run_migrations(&db).await?;

        Ok(Self { db })
    }

    async fn run_migrations(db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None)
            .await
            .map_err(|e| TrackerError::database_operation(format!("数据库迁移失败: {e}")))
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| TrackerError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| TrackerError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| TrackerError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(TrackerError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    dashboard::entities::DashboardSnapshot,
    homeworks::{entities::Homework, requests::CreateHomeworkRequest},
    resources::{entities::Resource, requests::CreateResourceForm},
    submissions::{
        entities::Submission,
        requests::{GradeSubmissionRequest, SubmitHomeworkForm},
        responses::SubmissionListItem,
    },
    threads::{entities::Thread, requests::CreateThreadForm},
    users::entities::User,
};
use crate::storage::Storage;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl Storage for SeaOrmStorage {
    // 作业模块
    async fn create_homework(&self, req: CreateHomeworkRequest) -> Result<Homework> {
        self.create_homework_impl(req).await
    }

    async fn get_homework_by_id(&self, id: i64) -> Result<Option<Homework>> {
        self.get_homework_by_id_impl(id).await
    }

    async fn list_upcoming_homeworks(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Homework>> {
        self.list_upcoming_homeworks_impl(now, limit).await
    }

    async fn list_all_homeworks(&self) -> Result<Vec<Homework>> {
        self.list_all_homeworks_impl().await
    }

    async fn count_homeworks(&self) -> Result<u64> {
        self.count_homeworks_impl().await
    }

    async fn delete_homework(&self, id: i64) -> Result<bool> {
        self.delete_homework_impl(id).await
    }

    // 讨论模块
    async fn add_thread(&self, homework_id: i64, form: CreateThreadForm) -> Result<Option<Thread>> {
        self.add_thread_impl(homework_id, form).await
    }

    async fn list_threads_for_homework(&self, homework_id: i64) -> Result<Vec<Thread>> {
        self.list_threads_for_homework_impl(homework_id).await
    }

    // 资料模块
    async fn add_resource(
        &self,
        homework_id: i64,
        form: CreateResourceForm,
    ) -> Result<Option<Resource>> {
        self.add_resource_impl(homework_id, form).await
    }

    async fn list_resources_for_homework(&self, homework_id: i64) -> Result<Vec<Resource>> {
        self.list_resources_for_homework_impl(homework_id).await
    }

    // 用户模块
    async fn find_or_create_user(&self, name: &str) -> Result<User> {
        self.find_or_create_user_impl(name).await
    }

    async fn get_user_by_name(&self, name: &str) -> Result<Option<User>> {
        self.get_user_by_name_impl(name).await
    }

    // 提交模块
    async fn create_submission(
        &self,
        homework_id: i64,
        form: SubmitHomeworkForm,
    ) -> Result<Submission> {
        self.create_submission_impl(homework_id, form).await
    }

    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(id).await
    }

    async fn list_submissions_for_homework(
        &self,
        homework_id: i64,
    ) -> Result<Vec<SubmissionListItem>> {
        self.list_submissions_for_homework_impl(homework_id).await
    }

    async fn grade_submission(
        &self,
        id: i64,
        req: GradeSubmissionRequest,
    ) -> Result<Option<Submission>> {
        self.grade_submission_impl(id, req).await
    }

    // 看板模块
    async fn load_dashboard_snapshot(&self) -> Result<DashboardSnapshot> {
        self.load_dashboard_snapshot_impl().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("app.db").unwrap(),
            "sqlite://app.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite::memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://localhost/hw").unwrap(),
            "postgres://localhost/hw"
        );
        assert!(SeaOrmStorage::build_database_url("ftp://nope").is_err());
    }
}
