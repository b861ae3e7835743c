use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HomeworkService;
use crate::models::ApiResponse;
use crate::models::homeworks::responses::HomeworkDetail;
use crate::services::{homework_not_found, storage_error_response};
use crate::utils::flash::consume_notice;

pub async fn get_homework(
    service: &HomeworkService,
    request: &HttpRequest,
    homework_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let homework = match storage.get_homework_by_id(homework_id).await {
        Ok(Some(hw)) => hw,
        Ok(None) => return Ok(homework_not_found()),
        Err(e) => return Ok(storage_error_response("查询作业失败", e)),
    };

    let threads = match storage.list_threads_for_homework(homework_id).await {
        Ok(threads) => threads,
        Err(e) => return Ok(storage_error_response("查询评论失败", e)),
    };
    let resources = match storage.list_resources_for_homework(homework_id).await {
        Ok(resources) => resources,
        Err(e) => return Ok(storage_error_response("查询资料失败", e)),
    };
    let submissions = match storage.list_submissions_for_homework(homework_id).await {
        Ok(submissions) => submissions,
        Err(e) => return Ok(storage_error_response("查询提交失败", e)),
    };

    let mut response = HttpResponse::Ok();
    let notice = consume_notice(request, &mut response);
    let detail = HomeworkDetail {
        homework,
        threads,
        resources,
        submissions,
        notice,
    };
    Ok(response.json(ApiResponse::success(detail, "查询成功")))
}
