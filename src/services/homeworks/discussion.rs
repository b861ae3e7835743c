use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HomeworkService;
use crate::errors::TrackerError;
use crate::models::FlashKind;
use crate::models::resources::requests::CreateResourceForm;
use crate::models::threads::requests::CreateThreadForm;
use crate::services::{homework_not_found, storage_error_response};
use crate::utils::flash::redirect;

fn detail_path(homework_id: i64) -> String {
    format!("/homework/{homework_id}")
}

pub async fn post_thread(
    service: &HomeworkService,
    request: &HttpRequest,
    homework_id: i64,
    form: CreateThreadForm,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.add_thread(homework_id, form).await {
        Ok(Some(_)) => Ok(redirect(
            detail_path(homework_id),
            Some(FlashKind::CommentPosted),
        )),
        // 空留言直接返回详情页
        Ok(None) => Ok(redirect(detail_path(homework_id), None)),
        Err(TrackerError::NotFound(_)) => Ok(homework_not_found()),
        Err(e) => Ok(storage_error_response("发表评论失败", e)),
    }
}

pub async fn add_resource(
    service: &HomeworkService,
    request: &HttpRequest,
    homework_id: i64,
    form: CreateResourceForm,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.add_resource(homework_id, form).await {
        Ok(Some(_)) => Ok(redirect(
            detail_path(homework_id),
            Some(FlashKind::ResourceAdded),
        )),
        Ok(None) => Ok(redirect(detail_path(homework_id), None)),
        Err(TrackerError::NotFound(_)) => Ok(homework_not_found()),
        Err(e) => Ok(storage_error_response("添加资料失败", e)),
    }
}
