pub mod dashboard;
pub mod homeworks;
pub mod submissions;
pub mod system;

pub use dashboard::DashboardService;
pub use homeworks::HomeworkService;
pub use submissions::SubmissionService;
pub use system::SystemService;

use actix_web::HttpResponse;
use tracing::error;

use crate::errors::TrackerError;
use crate::models::{ApiResponse, ErrorCode};

/// 将存储层错误转换为 JSON 失败响应
pub(crate) fn storage_error_response(context: &str, err: TrackerError) -> HttpResponse {
    match err {
        e if e.is_user_facing() => HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            e.message().to_string(),
        )),
        TrackerError::NotFound(msg) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(ErrorCode::NotFound, msg))
        }
        TrackerError::Conflict(msg) => {
            HttpResponse::Conflict().json(ApiResponse::error_empty(ErrorCode::Conflict, msg))
        }
        e => {
            error!("{context}: {e}");
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("{context}: {e}"),
            ))
        }
    }
}

pub(crate) fn homework_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::HomeworkNotFound,
        "作业不存在",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_storage_error_status_mapping() {
        let cases = [
            (TrackerError::validation("empty content"), StatusCode::BAD_REQUEST),
            (TrackerError::date_parse("bad date"), StatusCode::BAD_REQUEST),
            (TrackerError::not_found("homework 9"), StatusCode::NOT_FOUND),
            (TrackerError::conflict("has submissions"), StatusCode::CONFLICT),
            (
                TrackerError::database_operation("disk I/O error"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(storage_error_response("读取看板数据失败", err).status(), status);
        }
    }
}
