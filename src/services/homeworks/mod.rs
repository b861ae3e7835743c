pub mod calendar;
pub mod create;
pub mod detail;
pub mod discussion;
pub mod upcoming;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::homeworks::requests::CreateHomeworkForm;
use crate::models::resources::requests::CreateResourceForm;
use crate::models::threads::requests::CreateThreadForm;
use crate::storage::Storage;

pub struct HomeworkService {
    storage: Option<Arc<dyn Storage>>,
}

impl HomeworkService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 首页：即将到期的作业
    pub async fn list_upcoming(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        upcoming::list_upcoming(self, request).await
    }

    pub async fn show_create_form(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        create::show_create_form(request).await
    }

    pub async fn create_homework(
        &self,
        request: &HttpRequest,
        form: CreateHomeworkForm,
    ) -> ActixResult<HttpResponse> {
        create::create_homework(self, request, form).await
    }

    pub async fn get_homework(
        &self,
        request: &HttpRequest,
        homework_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_homework(self, request, homework_id).await
    }

    /// 发表评论
    pub async fn post_thread(
        &self,
        request: &HttpRequest,
        homework_id: i64,
        form: CreateThreadForm,
    ) -> ActixResult<HttpResponse> {
        discussion::post_thread(self, request, homework_id, form).await
    }

    /// 添加资料
    pub async fn add_resource(
        &self,
        request: &HttpRequest,
        homework_id: i64,
        form: CreateResourceForm,
    ) -> ActixResult<HttpResponse> {
        discussion::add_resource(self, request, homework_id, form).await
    }

    /// 日历事件源
    pub async fn list_calendar_events(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        calendar::list_calendar_events(self, request).await
    }
}
