//! 安全路径参数提取器
//!
//! 非法 ID 与不存在的 ID 一样按 404 处理。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse, error::InternalError};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn parse_positive_id(req: &HttpRequest, name: &str) -> Option<i64> {
    req.match_info()
        .get(name)
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|id| *id > 0)
}

fn not_found_error(message: &'static str) -> actix_web::Error {
    InternalError::from_response(
        message,
        HttpResponse::NotFound().json(ApiResponse::error_empty(ErrorCode::NotFound, message)),
    )
    .into()
}

/// 路径中的 `{id}` 参数
#[derive(Debug, Clone, Copy)]
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(match parse_positive_id(req, "id") {
            Some(id) => Ok(SafeIDI64(id)),
            None => Err(not_found_error("资源不存在")),
        })
    }
}
