use chrono::{DateTime, Utc};
use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 作业管理方法
    // 创建作业（未指定颜色时使用默认色）
    async fn create_homework(&self, req: CreateHomeworkRequest) -> Result<Homework>;
    // 通过ID获取作业
    async fn get_homework_by_id(&self, id: i64) -> Result<Option<Homework>>;
    // 列出截止时间不早于 now 的作业，按截止时间升序，最多 limit 条
    async fn list_upcoming_homeworks(&self, now: DateTime<Utc>, limit: u64)
    -> Result<Vec<Homework>>;
    // 列出全部作业
    async fn list_all_homeworks(&self) -> Result<Vec<Homework>>;
    // 作业总数
    async fn count_homeworks(&self) -> Result<u64>;
    // 删除作业：级联删除讨论和资料，存在提交时拒绝
    async fn delete_homework(&self, id: i64) -> Result<bool>;

    /// 讨论方法
    // 发表评论，留言为空时不做任何事
    async fn add_thread(&self, homework_id: i64, form: CreateThreadForm) -> Result<Option<Thread>>;
    // 列出作业下的评论
    async fn list_threads_for_homework(&self, homework_id: i64) -> Result<Vec<Thread>>;

    /// 资料方法
    // 添加资料，链接为空时不做任何事
    async fn add_resource(
        &self,
        homework_id: i64,
        form: CreateResourceForm,
    ) -> Result<Option<Resource>>;
    // 列出作业下的资料
    async fn list_resources_for_homework(&self, homework_id: i64) -> Result<Vec<Resource>>;

    /// 用户方法
    // 按姓名查找用户，不存在则创建
    async fn find_or_create_user(&self, name: &str) -> Result<User>;
    // 按姓名获取用户
    async fn get_user_by_name(&self, name: &str) -> Result<Option<User>>;

    /// 提交方法
    // 提交作业，内容为空时返回校验错误
    async fn create_submission(
        &self,
        homework_id: i64,
        form: SubmitHomeworkForm,
    ) -> Result<Submission>;
    // 通过ID获取提交
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>>;
    // 列出作业下的提交（附带学生姓名）
    async fn list_submissions_for_homework(
        &self,
        homework_id: i64,
    ) -> Result<Vec<SubmissionListItem>>;
    // 评分
    async fn grade_submission(
        &self,
        id: i64,
        req: GradeSubmissionRequest,
    ) -> Result<Option<Submission>>;

    /// 看板方法
    // 读取看板统计所需的快照
    async fn load_dashboard_snapshot(&self) -> Result<DashboardSnapshot>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
