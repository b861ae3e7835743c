//! flash 提示的 cookie 读写与重定向

use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder};

use crate::models::{FlashKind, Notice};

pub const FLASH_COOKIE: &str = "flash";

/// 创建携带提示码的 cookie
pub fn flash_cookie(kind: FlashKind) -> Cookie<'static> {
    Cookie::build(FLASH_COOKIE, kind.code())
        .path("/")
        .same_site(SameSite::Lax)
        .http_only(true)
        .finish()
}

/// 创建空的 flash cookie（用于清除已展示的提示）
pub fn clear_flash_cookie() -> Cookie<'static> {
    Cookie::build(FLASH_COOKIE, "")
        .path("/")
        .max_age(Duration::seconds(0))
        .same_site(SameSite::Lax)
        .http_only(true)
        .finish()
}

/// 从请求中读取待展示的提示
pub fn read_notice(req: &HttpRequest) -> Option<Notice> {
    req.cookie(FLASH_COOKIE)
        .and_then(|cookie| cookie.value().parse::<FlashKind>().ok())
        .map(FlashKind::into_notice)
}

/// 读取提示并在响应中清除 cookie
pub fn consume_notice(req: &HttpRequest, response: &mut HttpResponseBuilder) -> Option<Notice> {
    let notice = read_notice(req);
    if req.cookie(FLASH_COOKIE).is_some() {
        response.cookie(clear_flash_cookie());
    }
    notice
}

/// 302 重定向，可选附带提示
pub fn redirect(location: impl Into<String>, flash: Option<FlashKind>) -> HttpResponse {
    let mut response = HttpResponse::Found();
    response.insert_header((header::LOCATION, location.into()));
    if let Some(kind) = flash {
        response.cookie(flash_cookie(kind));
    }
    response.finish()
}
