use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::homeworks::requests::CreateHomeworkForm;
use crate::models::resources::requests::CreateResourceForm;
use crate::models::threads::requests::CreateThreadForm;
use crate::services::HomeworkService;
use crate::utils::SafeIDI64;

// 懒加载的全局 HomeworkService 实例
static HOMEWORK_SERVICE: Lazy<HomeworkService> = Lazy::new(HomeworkService::new_lazy);

// 首页：即将到期的作业
pub async fn index(req: HttpRequest) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.list_upcoming(&req).await
}

// 创建作业页
pub async fn create_homework_form(req: HttpRequest) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.show_create_form(&req).await
}

// 创建作业
pub async fn create_homework(
    req: HttpRequest,
    form: web::Form<CreateHomeworkForm>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .create_homework(&req, form.into_inner())
        .await
}

// 获取作业详情
pub async fn get_homework(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.get_homework(&req, path.0).await
}

// 发表评论
pub async fn post_thread(
    req: HttpRequest,
    path: SafeIDI64,
    form: web::Form<CreateThreadForm>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .post_thread(&req, path.0, form.into_inner())
        .await
}

// 添加资料
pub async fn add_resource(
    req: HttpRequest,
    path: SafeIDI64,
    form: web::Form<CreateResourceForm>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .add_resource(&req, path.0, form.into_inner())
        .await
}

// 日历事件源
pub async fn list_calendar_events(req: HttpRequest) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.list_calendar_events(&req).await
}

// 配置路由
pub fn configure_homeworks_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index)))
        // 需要先于 /homework/{id} 注册
        .service(
            web::resource("/homework/create")
                .route(web::get().to(create_homework_form))
                .route(web::post().to(create_homework)),
        )
        .service(
            web::resource("/homework/{id}")
                .route(web::get().to(get_homework))
                .route(web::post().to(post_thread)),
        )
        .service(web::resource("/homework/{id}/resource/add").route(web::post().to(add_resource)))
        .service(web::resource("/api/homeworks").route(web::get().to(list_calendar_events)));
}
