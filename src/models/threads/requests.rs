use serde::Deserialize;

/// 发表评论表单
#[derive(Debug, Default, Deserialize)]
pub struct CreateThreadForm {
    pub author: Option<String>,
    pub message: Option<String>,
}
