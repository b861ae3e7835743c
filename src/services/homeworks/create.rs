use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::HomeworkService;
use crate::models::homeworks::entities::DEFAULT_HOMEWORK_COLOR;
use crate::models::homeworks::requests::CreateHomeworkForm;
use crate::models::homeworks::responses::CreateHomeworkFormResponse;
use crate::models::{ApiResponse, FlashKind};
use crate::services::storage_error_response;
use crate::utils::flash::{consume_notice, redirect};

pub async fn show_create_form(request: &HttpRequest) -> ActixResult<HttpResponse> {
    let mut response = HttpResponse::Ok();
    let notice = consume_notice(request, &mut response);
    Ok(response.json(ApiResponse::success(
        CreateHomeworkFormResponse {
            default_color: DEFAULT_HOMEWORK_COLOR.to_string(),
            notice,
        },
        "ok",
    )))
}

pub async fn create_homework(
    service: &HomeworkService,
    request: &HttpRequest,
    form: CreateHomeworkForm,
) -> ActixResult<HttpResponse> {
    let req = match form.into_request() {
        Ok(req) => req,
        Err(e) => {
            warn!("作业表单校验失败: {e}");
            return Ok(redirect("/homework/create", Some(FlashKind::InvalidHomework)));
        }
    };

    let storage = service.get_storage(request);
    match storage.create_homework(req).await {
        Ok(homework) => {
            info!("作业已创建: id={} subject={}", homework.id, homework.subject);
            Ok(redirect("/", Some(FlashKind::HomeworkCreated)))
        }
        Err(e) => Ok(storage_error_response("创建作业失败", e)),
    }
}
