//! 提交存储操作

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

use super::SeaOrmStorage;
use super::users::find_or_create_user_in;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::entity::users::Entity as Users;
use crate::errors::{Result, TrackerError};
use crate::models::submissions::{
    entities::{DEFAULT_STUDENT_NAME, Submission},
    requests::{GradeSubmissionRequest, SubmitHomeworkForm},
    responses::SubmissionListItem,
};
use crate::utils::validate::{non_blank, not_blank_verbatim};

impl SeaOrmStorage {
    /// 创建提交
    ///
    /// 内容为空时直接返回校验错误，不会创建用户或提交。
    /// 查找/创建学生与写入提交在同一事务内完成。
    pub async fn create_submission_impl(
        &self,
        homework_id: i64,
        form: SubmitHomeworkForm,
    ) -> Result<Submission> {
        self.ensure_homework_exists(homework_id).await?;

        let content = not_blank_verbatim(form.content)
            .ok_or_else(|| TrackerError::validation("empty content"))?;
        let student_name =
            non_blank(form.student_name).unwrap_or_else(|| DEFAULT_STUDENT_NAME.to_string());

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TrackerError::database_operation(format!("开启事务失败: {e}")))?;

        let student = find_or_create_user_in(&txn, &student_name).await?;

        let model = ActiveModel {
            homework_id: Set(homework_id),
            student_id: Set(student.id),
            content: Set(content),
            submitted_at: Set(chrono::Utc::now().timestamp()),
            grade: Set(None),
            feedback: Set(None),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| TrackerError::database_operation(format!("创建提交失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| TrackerError::database_operation(format!("提交事务失败: {e}")))?;

        info!(
            homework_id,
            submission_id = result.id,
            student_id = student.id,
            "Submission created"
        );

        Ok(result.into_submission())
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(&self, id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 列出作业下的提交，附带学生姓名
    pub async fn list_submissions_for_homework_impl(
        &self,
        homework_id: i64,
    ) -> Result<Vec<SubmissionListItem>> {
        let results = Submissions::find()
            .filter(Column::HomeworkId.eq(homework_id))
            .find_also_related(Users)
            .order_by_asc(Column::SubmittedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(results
            .into_iter()
            .map(|(submission, student)| SubmissionListItem {
                submission: submission.into_submission(),
                student_name: student.map(|u| u.name).unwrap_or_default(),
            })
            .collect())
    }

    /// 评分（grade 为 None 时撤销评分）
    pub async fn grade_submission_impl(
        &self,
        id: i64,
        req: GradeSubmissionRequest,
    ) -> Result<Option<Submission>> {
        let Some(existing) = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("查询提交失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        model.grade = Set(req.grade);
        model.feedback = Set(req.feedback);

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| TrackerError::database_operation(format!("评分失败: {e}")))?;

        info!(submission_id = id, grade = ?result.grade, "Submission graded");

        Ok(Some(result.into_submission()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::homeworks::requests::CreateHomeworkRequest;
    use sea_orm::PaginatorTrait;

    async fn storage_with_homework() -> (SeaOrmStorage, i64) {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let hw = storage
            .create_homework_impl(CreateHomeworkRequest {
                title: "Short essay".into(),
                subject: "English".into(),
                description: Some("Topic: Climate".into()),
                due_date: chrono::Utc::now(),
                color: None,
            })
            .await
            .unwrap();
        (storage, hw.id)
    }

    fn submit(name: Option<&str>, content: Option<&str>) -> SubmitHomeworkForm {
        SubmitHomeworkForm {
            student_name: name.map(str::to_string),
            content: content.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_blank_content_has_no_side_effects() {
        let (storage, hw_id) = storage_with_homework().await;

        for content in [None, Some(""), Some("   ")] {
            let err = storage
                .create_submission_impl(hw_id, submit(Some("Eve"), content))
                .await
                .unwrap_err();
            assert!(err.is_user_facing());
        }

        assert_eq!(Submissions::find().count(&storage.db).await.unwrap(), 0);
        assert!(storage.get_user_by_name_impl("Eve").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sequential_submissions_reuse_student() {
        let (storage, hw_id) = storage_with_homework().await;

        let first = storage
            .create_submission_impl(hw_id, submit(Some("Alice"), Some("draft")))
            .await
            .unwrap();
        let second = storage
            .create_submission_impl(hw_id, submit(Some("Alice"), Some("final")))
            .await
            .unwrap();
        assert_eq!(first.student_id, second.student_id);
        assert!(!first.is_graded());

        let anonymous = storage
            .create_submission_impl(hw_id, submit(None, Some("mine")))
            .await
            .unwrap();
        let student = storage
            .get_user_by_name_impl(DEFAULT_STUDENT_NAME)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(anonymous.student_id, student.id);

        let listed = storage.list_submissions_for_homework_impl(hw_id).await.unwrap();
        let names: Vec<_> = listed.iter().map(|s| s.student_name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Alice", DEFAULT_STUDENT_NAME]);
    }

    #[tokio::test]
    async fn test_content_is_stored_verbatim() {
        let (storage, hw_id) = storage_with_homework().await;
        let content = "    fn main() {}\n";

        let created = storage
            .create_submission_impl(hw_id, submit(Some("Alice"), Some(content)))
            .await
            .unwrap();
        assert_eq!(created.content, content);

        let stored = storage
            .get_submission_by_id_impl(created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.content, content);
    }

    #[tokio::test]
    async fn test_padded_student_name_matches_existing_student() {
        let (storage, hw_id) = storage_with_homework().await;

        let plain = storage
            .create_submission_impl(hw_id, submit(Some("Alice"), Some("one")))
            .await
            .unwrap();
        let padded = storage
            .create_submission_impl(hw_id, submit(Some(" Alice "), Some("two")))
            .await
            .unwrap();
        assert_eq!(plain.student_id, padded.student_id);
    }

    #[tokio::test]
    async fn test_submission_to_unknown_homework() {
        let (storage, hw_id) = storage_with_homework().await;
        let err = storage
            .create_submission_impl(hw_id + 1, submit(Some("Alice"), Some("x")))
            .await
            .unwrap_err();
        assert!(matches!(err, TrackerError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_grade_submission() {
        let (storage, hw_id) = storage_with_homework().await;
        let sub = storage
            .create_submission_impl(hw_id, submit(Some("Alice"), Some("essay")))
            .await
            .unwrap();

        let graded = storage
            .grade_submission_impl(
                sub.id,
                GradeSubmissionRequest {
                    grade: Some(90.0),
                    feedback: Some("Well argued".into()),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(graded.grade, Some(90.0));
        assert_eq!(graded.feedback.as_deref(), Some("Well argued"));

        let fetched = storage.get_submission_by_id_impl(sub.id).await.unwrap().unwrap();
        assert_eq!(fetched, graded);

        let cleared = storage
            .grade_submission_impl(
                sub.id,
                GradeSubmissionRequest {
                    grade: None,
                    feedback: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert!(!cleared.is_graded());

        let missing = storage
            .grade_submission_impl(
                sub.id + 1,
                GradeSubmissionRequest {
                    grade: Some(1.0),
                    feedback: None,
                },
            )
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
