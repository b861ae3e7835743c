use actix_web::error::{InternalError, UrlencodedError};
use actix_web::{HttpRequest, HttpResponse};
use tracing::warn;

use crate::models::{ApiResponse, ErrorCode};

/// 表单解析错误处理器
pub fn form_error_handler(err: UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected form payload on {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("表单参数错误: {err}"),
    ));
    InternalError::from_response(err, response).into()
}
