use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Utc;

use super::HomeworkService;
use crate::models::ApiResponse;
use crate::models::homeworks::entities::UPCOMING_HOMEWORK_LIMIT;
use crate::models::homeworks::responses::UpcomingHomeworkResponse;
use crate::services::storage_error_response;
use crate::utils::flash::consume_notice;

pub async fn list_upcoming(
    service: &HomeworkService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_upcoming_homeworks(Utc::now(), UPCOMING_HOMEWORK_LIMIT)
        .await
    {
        Ok(upcoming) => {
            let mut response = HttpResponse::Ok();
            let notice = consume_notice(request, &mut response);
            Ok(response.json(ApiResponse::success(
                UpcomingHomeworkResponse { upcoming, notice },
                "查询成功",
            )))
        }
        Err(e) => Ok(storage_error_response("查询作业列表失败", e)),
    }
}
