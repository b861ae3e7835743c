use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "resource.ts")]
pub struct Resource {
    pub id: i64,
    pub homework_id: i64,
    pub title: Option<String>,
    pub url: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
