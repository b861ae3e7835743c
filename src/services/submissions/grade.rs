use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::SubmissionService;
use crate::models::submissions::requests::GradeSubmissionForm;
use crate::models::{ApiResponse, ErrorCode, FlashKind};
use crate::services::storage_error_response;
use crate::utils::flash::redirect;

fn submission_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::SubmissionNotFound,
        "提交不存在",
    ))
}

pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    form: GradeSubmissionForm,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 先确认提交存在，评分后需要回到所属作业
    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => return Ok(submission_not_found()),
        Err(e) => return Ok(storage_error_response("查询提交失败", e)),
    };
    let detail_path = format!("/homework/{}", submission.homework_id);

    let req = match form.into_request() {
        Ok(req) => req,
        Err(e) => {
            warn!(submission_id, "评分表单校验失败: {e}");
            return Ok(redirect(detail_path, Some(FlashKind::InvalidGrade)));
        }
    };

    match storage.grade_submission(submission_id, req).await {
        Ok(Some(graded)) => {
            info!(
                submission_id,
                graded = graded.is_graded(),
                "Submission grade updated"
            );
            Ok(redirect(detail_path, Some(FlashKind::GradeSaved)))
        }
        Ok(None) => Ok(submission_not_found()),
        Err(e) => Ok(storage_error_response("保存评分失败", e)),
    }
}
