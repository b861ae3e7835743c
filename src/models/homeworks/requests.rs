use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::errors::{Result, TrackerError};
use crate::utils::parse_due_date;
use crate::utils::validate::{non_blank, validate_hex_color};

/// 创建作业表单（HTTP 请求）
#[derive(Debug, Default, Deserialize)]
pub struct CreateHomeworkForm {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>, // ISO 8601 格式，如 "2026-01-24T12:00"
    pub color: Option<String>,
}

// 用于存储层的创建参数
#[derive(Debug, Clone)]
pub struct CreateHomeworkRequest {
    pub title: String,
    pub subject: String,
    pub description: Option<String>,
    pub due_date: DateTime<Utc>,
    pub color: Option<String>, // None 时使用默认颜色
}

impl CreateHomeworkForm {
    /// 校验表单并转换为存储层参数
    pub fn into_request(self) -> Result<CreateHomeworkRequest> {
        let title =
            non_blank(self.title).ok_or_else(|| TrackerError::validation("title is required"))?;
        let subject = non_blank(self.subject)
            .ok_or_else(|| TrackerError::validation("subject is required"))?;
        let due_date = parse_due_date(self.due_date.as_deref().unwrap_or_default())?;

        let color = non_blank(self.color);
        if let Some(ref color) = color {
            validate_hex_color(color).map_err(TrackerError::validation)?;
        }

        Ok(CreateHomeworkRequest {
            title,
            subject,
            description: non_blank(self.description),
            due_date,
            color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CreateHomeworkForm {
        CreateHomeworkForm {
            title: Some("Worksheet".into()),
            subject: Some("Math".into()),
            description: Some("".into()),
            due_date: Some("2030-05-01T09:00".into()),
            color: None,
        }
    }

    #[test]
    fn test_valid_form() {
        let req = form().into_request().unwrap();
        assert_eq!(req.title, "Worksheet");
        assert_eq!(req.subject, "Math");
        assert_eq!(req.description, None);
        assert_eq!(req.color, None);
        assert_eq!(req.due_date.to_rfc3339(), "2030-05-01T09:00:00+00:00");
    }

    #[test]
    fn test_unparseable_due_date() {
        let mut f = form();
        f.due_date = Some("tomorrow-ish".into());
        assert!(f.into_request().unwrap_err().is_user_facing());
    }

    #[test]
    fn test_missing_fields() {
        let mut f = form();
        f.title = Some("  ".into());
        assert!(f.into_request().is_err());

        let mut f = form();
        f.subject = None;
        assert!(f.into_request().is_err());

        let mut f = form();
        f.due_date = None;
        assert!(f.into_request().is_err());
    }

    #[test]
    fn test_color() {
        let mut f = form();
        f.color = Some("#ff6b6b".into());
        assert_eq!(f.into_request().unwrap().color.as_deref(), Some("#ff6b6b"));

        let mut f = form();
        f.color = Some("   ".into());
        assert_eq!(f.into_request().unwrap().color, None);

        let mut f = form();
        f.color = Some("blue".into());
        assert!(f.into_request().is_err());
    }
}
