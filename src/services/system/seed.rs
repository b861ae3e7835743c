use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Duration, Utc};
use tracing::info;

use super::SystemService;
use crate::errors::Result;
use crate::models::homeworks::requests::CreateHomeworkRequest;
use crate::models::resources::requests::CreateResourceForm;
use crate::models::threads::requests::CreateThreadForm;
use crate::services::storage_error_response;
use crate::storage::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded,
    AlreadySeeded,
}

impl SeedOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SeedOutcome::Seeded => "Seeded sample data",
            SeedOutcome::AlreadySeeded => "Already seeded",
        }
    }
}

pub async fn seed(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match seed_sample_data(storage.as_ref(), Utc::now()).await {
        Ok(outcome) => Ok(HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(outcome.message())),
        Err(e) => Ok(storage_error_response("写入示例数据失败", e)),
    }
}

/// 数据库中已有作业时不做任何写入
pub async fn seed_sample_data(storage: &dyn Storage, now: DateTime<Utc>) -> Result<SeedOutcome> {
    if storage.count_homeworks().await? > 0 {
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let samples = [
        (
            "Math",
            "Algebra worksheet",
            "Exercises 1-10",
            Duration::days(3),
            "#ff6b6b",
        ),
        (
            "English",
            "Short essay",
            "Topic: Climate",
            Duration::days(7),
            "#ffd93d",
        ),
        (
            "Science",
            "Chemistry lab",
            "Write the lab report",
            Duration::days(1),
            "#2d9cdb",
        ),
    ];

    let mut math_id = None;
    for (subject, title, description, offset, color) in samples {
        let homework = storage
            .create_homework(CreateHomeworkRequest {
                title: title.to_string(),
                subject: subject.to_string(),
                description: Some(description.to_string()),
                due_date: now + offset,
                color: Some(color.to_string()),
            })
            .await?;
        if math_id.is_none() {
            math_id = Some(homework.id);
        }
    }

    if let Some(homework_id) = math_id {
        storage
            .add_resource(
                homework_id,
                CreateResourceForm {
                    title: Some("Video explanation".to_string()),
                    url: Some("https://example.com/algebra-video".to_string()),
                },
            )
            .await?;
        storage
            .add_thread(
                homework_id,
                CreateThreadForm {
                    author: Some("Teacher A".to_string()),
                    message: Some("Remember to show your steps.".to_string()),
                },
            )
            .await?;
    }

    info!("Sample data seeded");
    Ok(SeedOutcome::Seeded)
}
