use serde::Deserialize;

/// 添加资料表单
#[derive(Debug, Default, Deserialize)]
pub struct CreateResourceForm {
    pub title: Option<String>,
    pub url: Option<String>,
}
