use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::submissions::requests::{GradeSubmissionForm, SubmitHomeworkForm};
use crate::services::SubmissionService;
use crate::utils::SafeIDI64;

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 提交作业
pub async fn submit_homework(
    req: HttpRequest,
    path: SafeIDI64,
    form: web::Form<SubmitHomeworkForm>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .submit_homework(&req, path.0, form.into_inner())
        .await
}

// 评分
pub async fn grade_submission(
    req: HttpRequest,
    path: SafeIDI64,
    form: web::Form<GradeSubmissionForm>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .grade_submission(&req, path.0, form.into_inner())
        .await
}

pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/homework/{id}/submit").route(web::post().to(submit_homework)))
        .service(web::resource("/submission/{id}/grade").route(web::post().to(grade_submission)));
}
