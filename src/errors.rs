//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_tracker_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum TrackerError {
            $($variant(String),)*
        }

        impl TrackerError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(TrackerError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(TrackerError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(TrackerError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl TrackerError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        TrackerError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_tracker_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Conflict("E006", "Conflict Error"),
    DateParse("E007", "Date Parse Error"),
}

impl TrackerError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为用户输入导致的错误（以提示形式反馈，而非失败响应）
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            TrackerError::Validation(_) | TrackerError::DateParse(_)
        )
    }
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TrackerError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for TrackerError {
    fn from(err: sea_orm::DbErr) -> Self {
        TrackerError::DatabaseOperation(err.to_string())
    }
}

impl From<chrono::ParseError> for TrackerError {
    fn from(err: chrono::ParseError) -> Self {
        TrackerError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TrackerError::database_config("test").code(), "E001");
        assert_eq!(TrackerError::validation("test").code(), "E004");
        assert_eq!(TrackerError::not_found("test").code(), "E005");
        assert_eq!(TrackerError::conflict("test").code(), "E006");
        assert_eq!(TrackerError::date_parse("test").code(), "E007");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            TrackerError::database_operation("test").error_type(),
            "Database Operation Error"
        );
        assert_eq!(
            TrackerError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = TrackerError::validation("empty content");
        assert_eq!(err.message(), "empty content");
    }

    #[test]
    fn test_format_simple() {
        let err = TrackerError::not_found("homework 42");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("homework 42"));
    }

    #[test]
    fn test_user_facing() {
        assert!(TrackerError::validation("x").is_user_facing());
        assert!(TrackerError::date_parse("x").is_user_facing());
        assert!(!TrackerError::not_found("x").is_user_facing());
        assert!(!TrackerError::database_operation("x").is_user_facing());
    }
}
