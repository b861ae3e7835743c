use serde::Deserialize;

use crate::errors::{Result, TrackerError};
use crate::utils::validate::{non_blank, validate_grade};

/// 提交作业表单
#[derive(Debug, Default, Deserialize)]
pub struct SubmitHomeworkForm {
    pub student_name: Option<String>,
    pub content: Option<String>,
}

/// 评分表单
#[derive(Debug, Default, Deserialize)]
pub struct GradeSubmissionForm {
    pub grade: Option<String>,
    pub feedback: Option<String>,
}

// 用于存储层的评分参数
#[derive(Debug, Clone, PartialEq)]
pub struct GradeSubmissionRequest {
    pub grade: Option<f64>, // None 表示撤销评分
    pub feedback: Option<String>,
}

impl GradeSubmissionForm {
    pub fn into_request(self) -> Result<GradeSubmissionRequest> {
        let grade = match non_blank(self.grade) {
            Some(raw) => {
                let value = raw
                    .parse::<f64>()
                    .map_err(|e| TrackerError::validation(format!("invalid grade '{raw}': {e}")))?;
                validate_grade(value).map_err(TrackerError::validation)?;
                Some(value)
            }
            None => None,
        };

        Ok(GradeSubmissionRequest {
            grade,
            feedback: non_blank(self.feedback),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_form() {
        let req = GradeSubmissionForm {
            grade: Some(" 90 ".into()),
            feedback: Some("Nice work".into()),
        }
        .into_request()
        .unwrap();
        assert_eq!(req.grade, Some(90.0));
        assert_eq!(req.feedback.as_deref(), Some("Nice work"));
    }

    #[test]
    fn test_blank_grade_clears() {
        let req = GradeSubmissionForm {
            grade: Some("".into()),
            feedback: None,
        }
        .into_request()
        .unwrap();
        assert_eq!(req.grade, None);
    }

    #[test]
    fn test_invalid_grade() {
        for raw in ["A+", "NaN", "inf"] {
            let form = GradeSubmissionForm {
                grade: Some(raw.into()),
                feedback: None,
            };
            assert!(form.into_request().is_err(), "{raw} should be rejected");
        }
    }
}
