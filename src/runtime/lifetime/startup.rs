use crate::config::AppConfig;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 输出当前数据概况
async fn log_storage_summary(storage: &Arc<dyn Storage>) {
    match storage.count_homeworks().await {
        Ok(0) => {
            if AppConfig::get().is_development() {
                info!("No homework found, GET /_seed to load sample data");
            } else {
                info!("No homework found");
            }
        }
        Ok(count) => debug!("Database has {} homework(s)", count),
        Err(e) => warn!("Failed to count homeworks: {}", e),
    }
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup() -> StartupContext {
    let storage = match crate::storage::create_storage().await {
        Ok(storage) => storage,
        Err(e) => {
            #[cfg(debug_assertions)]
            eprintln!("{}", e.format_colored());
            panic!("Failed to create storage backend: {}", e.format_simple());
        }
    };
    warn!("Storage backend initialized and migrations completed");

    log_storage_summary(&storage).await;

    StartupContext { storage }
}
