pub mod error_code;
pub mod notice;
pub mod response;

pub use error_code::ErrorCode;
pub use notice::{FlashKind, Notice, NoticeLevel};
pub use response::ApiResponse;
