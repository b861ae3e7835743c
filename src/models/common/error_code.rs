/// API 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    ValidationFailed = 1001,
    NotFound = 1004,
    Conflict = 1009,

    // 作业相关
    HomeworkNotFound = 2004,

    // 提交相关
    SubmissionNotFound = 3004,

    InternalServerError = 5000,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::HomeworkNotFound as i32, 2004);
        assert_eq!(ErrorCode::InternalServerError as i32, 5000);
    }
}
