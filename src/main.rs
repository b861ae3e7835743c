use actix_cors::Cors;
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use human_panic::setup_panic;
use std::time::Duration;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use rust_homework_tracker::config::AppConfig;
use rust_homework_tracker::models::AppStartTime;
use rust_homework_tracker::routes;
use rust_homework_tracker::runtime::lifetime;
use rust_homework_tracker::utils::form_error_handler;

/// 开发环境输出带文件行号的文本日志，其余环境输出 JSON
fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.app.log_level))
        .with_writer(writer)
        .event_format(
            tracing_subscriber::fmt::format()
                .with_level(true)
                .with_ansi(true),
        );

    if config.is_development() {
        builder.with_file(true).with_line_number(true).init();
    } else {
        builder.json().init();
    }
    guard
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    let started = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();
    let _log_guard = init_tracing(config);

    info!(
        "{} v{} ({})",
        config.app.system_name,
        env!("CARGO_PKG_VERSION"),
        config.app.environment
    );

    let storage = lifetime::startup::prepare_server_startup().await.storage;
    debug!(
        "Storage ready in {} ms",
        chrono::Utc::now()
            .signed_duration_since(started.start_datetime)
            .num_milliseconds()
    );

    let seed_enabled = config.is_development();
    if seed_enabled {
        warn!("Development mode: GET /_seed loads sample homework");
    }

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(config.cors.max_age);
        // 视图与日历数据都不缓存
        let headers = DefaultHeaders::new().add(("Cache-Control", "no-cache, no-store, must-revalidate"));

        App::new()
            .wrap(cors)
            .wrap(Compress::default())
            .wrap(headers)
            .app_data(web::FormConfig::default().error_handler(form_error_handler))
            .app_data(web::PayloadConfig::new(config.server.limits.max_payload_size))
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(started.clone()))
            .configure(routes::configure_homeworks_routes)
            .configure(routes::configure_submissions_routes)
            .configure(routes::configure_dashboard_routes)
            .configure(routes::configure_frontend_routes)
            .configure(|cfg| {
                if seed_enabled {
                    routes::configure_dev_routes(cfg);
                }
            })
    })
    .keep_alive(Duration::from_secs(config.server.timeouts.keep_alive))
    .client_request_timeout(Duration::from_millis(config.server.timeouts.client_request))
    .client_disconnect_timeout(Duration::from_millis(
        config.server.timeouts.client_disconnect,
    ))
    .workers(config.server.workers);

    #[cfg(unix)]
    let server = match config.unix_socket_path() {
        Some(socket_path) => {
            if std::path::Path::new(socket_path).exists() {
                std::fs::remove_file(socket_path)?;
            }
            warn!("Listening on unix:{} ({} workers)", socket_path, config.server.workers);
            server.bind_uds(socket_path)?
        }
        None => {
            let bind_address = config.server_bind_address();
            warn!("Listening on http://{} ({} workers)", bind_address, config.server.workers);
            server.bind(bind_address)?
        }
    };

    #[cfg(not(unix))]
    let server = {
        let bind_address = config.server_bind_address();
        warn!("Listening on http://{} ({} workers)", bind_address, config.server.workers);
        server.bind(bind_address)?
    };

    tokio::select! {
        res = server.run() => res?,
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Server stopped");
        }
    }

    Ok(())
}
