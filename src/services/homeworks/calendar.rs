use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::HomeworkService;
use crate::models::homeworks::responses::CalendarEvent;
use crate::services::storage_error_response;

/// 返回裸数组，日历组件直接作为事件源使用
pub async fn list_calendar_events(
    service: &HomeworkService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_all_homeworks().await {
        Ok(homeworks) => {
            let events: Vec<CalendarEvent> = homeworks.iter().map(CalendarEvent::from).collect();
            Ok(HttpResponse::Ok().json(events))
        }
        Err(e) => Ok(storage_error_response("查询日历事件失败", e)),
    }
}
