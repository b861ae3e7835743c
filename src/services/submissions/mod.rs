pub mod grade;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::{GradeSubmissionForm, SubmitHomeworkForm};
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 提交作业
    pub async fn submit_homework(
        &self,
        request: &HttpRequest,
        homework_id: i64,
        form: SubmitHomeworkForm,
    ) -> ActixResult<HttpResponse> {
        submit::submit_homework(self, request, homework_id, form).await
    }

    /// 评分
    pub async fn grade_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        form: GradeSubmissionForm,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, request, submission_id, form).await
    }
}
