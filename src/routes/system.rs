use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::SystemService;

// 懒加载的全局 SystemService 实例
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

pub async fn seed(request: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.seed(&request).await
}

// 仅在开发环境注册
pub fn configure_dev_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/_seed", web::get().to(seed));
}
