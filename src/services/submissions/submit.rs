use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use super::SubmissionService;
use crate::errors::TrackerError;
use crate::models::FlashKind;
use crate::models::submissions::requests::SubmitHomeworkForm;
use crate::services::{homework_not_found, storage_error_response};
use crate::utils::flash::redirect;

pub async fn submit_homework(
    service: &SubmissionService,
    request: &HttpRequest,
    homework_id: i64,
    form: SubmitHomeworkForm,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let detail_path = format!("/homework/{homework_id}");

    match storage.create_submission(homework_id, form).await {
        Ok(_) => Ok(redirect(detail_path, Some(FlashKind::Submitted))),
        Err(TrackerError::Validation(msg)) => {
            warn!(homework_id, "提交被拒绝: {msg}");
            Ok(redirect(detail_path, Some(FlashKind::EmptySubmission)))
        }
        Err(TrackerError::NotFound(_)) => Ok(homework_not_found()),
        Err(e) => Ok(storage_error_response("提交作业失败", e)),
    }
}
