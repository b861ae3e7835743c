//! 一次性提示（flash）
//!
//! 变更类请求完成后重定向，结果以提示码的形式带到下一个视图。

use serde::Serialize;
use ts_rs::TS;

/// 提示级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "notice.ts")]
pub enum NoticeLevel {
    Success,
    Warning,
}

/// 提示类型，序列化为 cookie 中的提示码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    HomeworkCreated,
    CommentPosted,
    ResourceAdded,
    Submitted,
    GradeSaved,
    EmptySubmission,
    InvalidHomework,
    InvalidGrade,
}

impl FlashKind {
    pub const HOMEWORK_CREATED: &'static str = "homework_created";
    pub const COMMENT_POSTED: &'static str = "comment_posted";
    pub const RESOURCE_ADDED: &'static str = "resource_added";
    pub const SUBMITTED: &'static str = "submitted";
    pub const GRADE_SAVED: &'static str = "grade_saved";
    pub const EMPTY_SUBMISSION: &'static str = "empty_submission";
    pub const INVALID_HOMEWORK: &'static str = "invalid_homework";
    pub const INVALID_GRADE: &'static str = "invalid_grade";

    pub fn code(&self) -> &'static str {
        match self {
            FlashKind::HomeworkCreated => Self::HOMEWORK_CREATED,
            FlashKind::CommentPosted => Self::COMMENT_POSTED,
            FlashKind::ResourceAdded => Self::RESOURCE_ADDED,
            FlashKind::Submitted => Self::SUBMITTED,
            FlashKind::GradeSaved => Self::GRADE_SAVED,
            FlashKind::EmptySubmission => Self::EMPTY_SUBMISSION,
            FlashKind::InvalidHomework => Self::INVALID_HOMEWORK,
            FlashKind::InvalidGrade => Self::INVALID_GRADE,
        }
    }

    pub fn level(&self) -> NoticeLevel {
        match self {
            FlashKind::EmptySubmission | FlashKind::InvalidHomework | FlashKind::InvalidGrade => {
                NoticeLevel::Warning
            }
            _ => NoticeLevel::Success,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FlashKind::HomeworkCreated => "作业已创建",
            FlashKind::CommentPosted => "评论已发布",
            FlashKind::ResourceAdded => "资料已添加",
            FlashKind::Submitted => "提交成功",
            FlashKind::GradeSaved => "评分已保存",
            FlashKind::EmptySubmission => "提交内容不能为空",
            FlashKind::InvalidHomework => "作业信息无效，请检查标题、科目、截止时间和颜色",
            FlashKind::InvalidGrade => "评分格式无效",
        }
    }

    pub fn into_notice(self) -> Notice {
        Notice {
            level: self.level(),
            message: self.message().to_string(),
        }
    }
}

impl std::fmt::Display for FlashKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for FlashKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::HOMEWORK_CREATED => Ok(FlashKind::HomeworkCreated),
            Self::COMMENT_POSTED => Ok(FlashKind::CommentPosted),
            Self::RESOURCE_ADDED => Ok(FlashKind::ResourceAdded),
            Self::SUBMITTED => Ok(FlashKind::Submitted),
            Self::GRADE_SAVED => Ok(FlashKind::GradeSaved),
            Self::EMPTY_SUBMISSION => Ok(FlashKind::EmptySubmission),
            Self::INVALID_HOMEWORK => Ok(FlashKind::InvalidHomework),
            Self::INVALID_GRADE => Ok(FlashKind::InvalidGrade),
            _ => Err(format!("Invalid flash code: {s}")),
        }
    }
}

/// 视图中展示的提示
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "notice.ts")]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}
