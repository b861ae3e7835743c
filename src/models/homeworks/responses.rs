use chrono::SecondsFormat;
use serde::Serialize;
use ts_rs::TS;

use crate::models::Notice;
use crate::models::homeworks::entities::Homework;
use crate::models::resources::entities::Resource;
use crate::models::submissions::responses::SubmissionListItem;
use crate::models::threads::entities::Thread;

/// 日历事件（供日历组件直接消费）
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "homework.ts")]
pub struct CalendarEvent {
    pub id: i64,
    pub title: String,
    pub start: String,
    pub url: String,
    pub color: String,
}

impl From<&Homework> for CalendarEvent {
    fn from(homework: &Homework) -> Self {
        Self {
            id: homework.id,
            title: format!("{}: {}", homework.subject, homework.title),
            start: homework
                .due_date
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            url: homework.detail_path(),
            color: homework.color.clone(),
        }
    }
}

/// 首页：即将到期的作业
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "homework.ts")]
pub struct UpcomingHomeworkResponse {
    pub upcoming: Vec<Homework>,
    pub notice: Option<Notice>,
}

/// 创建作业页：表单默认值
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "homework.ts")]
pub struct CreateHomeworkFormResponse {
    pub default_color: String,
    pub notice: Option<Notice>,
}

/// 作业详情
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "homework.ts")]
pub struct HomeworkDetail {
    pub homework: Homework,
    pub threads: Vec<Thread>,
    pub resources: Vec<Resource>,
    pub submissions: Vec<SubmissionListItem>,
    pub notice: Option<Notice>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_calendar_event_projection() {
        let homework = Homework {
            id: 7,
            title: "Worksheet".into(),
            subject: "Math".into(),
            description: None,
            due_date: Utc.with_ymd_and_hms(2030, 5, 1, 9, 0, 0).unwrap(),
            color: "#ff6b6b".into(),
            created_at: Utc.with_ymd_and_hms(2030, 4, 1, 9, 0, 0).unwrap(),
        };
        let event = CalendarEvent::from(&homework);
        assert_eq!(event.id, 7);
        assert_eq!(event.title, "Math: Worksheet");
        assert_eq!(event.start, "2030-05-01T09:00:00Z");
        assert_eq!(event.url, "/homework/7");
        assert_eq!(event.color, "#ff6b6b");
    }
}
