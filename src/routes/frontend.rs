//! 日历页面静态资源
//!
//! 使用 rust-embed 在编译时嵌入 static/ 目录，`/calendar` 返回日历页面，
//! 页面通过 `/api/homeworks` 加载事件。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::path::Path;

#[derive(Embed)]
#[folder = "static/"]
struct StaticAssets;

const CALENDAR_PAGE: &str = "calendar.html";

/// 获取文件的 MIME 类型
fn get_mime_type(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    match ext {
        "html" => "text/html; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

fn serve_embedded(path: &str) -> HttpResponse {
    match StaticAssets::get(path) {
        Some(file) => HttpResponse::Ok()
            .content_type(get_mime_type(path))
            .body(file.data.into_owned()),
        None => HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body("Not Found"),
    }
}

/// 日历页面
pub async fn serve_calendar() -> ActixResult<HttpResponse> {
    Ok(serve_embedded(CALENDAR_PAGE))
}

/// 其余静态文件
pub async fn serve_static(req: HttpRequest) -> ActixResult<HttpResponse> {
    let path = req.match_info().query("tail").trim_start_matches('/');
    Ok(serve_embedded(path))
}

pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/calendar", web::get().to(serve_calendar))
        .route("/static/{tail:.*}", web::get().to(serve_static));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_get_mime_type() {
        assert_eq!(get_mime_type("calendar.html"), "text/html; charset=utf-8");
        assert_eq!(get_mime_type("style.css"), "text/css; charset=utf-8");
        assert_eq!(get_mime_type("unknown.xyz"), "application/octet-stream");
    }

    #[test]
    fn test_calendar_page_is_embedded() {
        let resp = serve_embedded(CALENDAR_PAGE);
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = serve_embedded("missing.html");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
