//! 数据模型定义
//!
//! - `entities`: 业务实体
//! - `requests`: 表单与存储层参数
//! - `responses`: 视图响应

pub mod common;
pub mod dashboard;
pub mod homeworks;
pub mod resources;
pub mod submissions;
pub mod threads;
pub mod users;

pub use common::{ApiResponse, ErrorCode, FlashKind, Notice, NoticeLevel};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
