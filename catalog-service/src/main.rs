//! 材料价格目录服务
//!
//! 提供只读的价格查询功能，包括：
//! - 全部记录导出
//! - 地区、产品、品种筛选值
//! - 按地区/产品/品种/年份精确查找价格

mod catalog;
mod handlers;
mod loader;
mod routes;
mod state;

use anyhow::Context;
use axum::{middleware, routing::get, Json, Router};
use common::config::{load_dotenv, AppConfig, LogFormat};
use common::middleware::request_id::request_id_middleware;
use state::AppState;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utoipa::OpenApi;

const SERVICE_NAME: &str = "catalog-service";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Material Price Catalog API",
        version = "1.0.0",
        description = "材料价格目录查询微服务"
    ),
    paths(
        handlers::home,
        handlers::get_all,
        handlers::get_regions,
        handlers::get_produits,
        handlers::get_varietes,
        handlers::predict,
    ),
    components(schemas(
        common::models::PriceRecord,
        common::response::StatusResponse,
        common::response::ListResponse,
        common::response::ErrorBody,
    )),
    tags(
        (name = "Status", description = "服务状态端点"),
        (name = "Data", description = "原始数据端点"),
        (name = "Filters", description = "筛选值端点"),
        (name = "Prediction", description = "价格查找端点")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (if present) before anything else
    load_dotenv();

    // 加载配置
    let config = AppConfig::load_with_service(SERVICE_NAME);

    // 初始化日志追踪
    init_tracing(config.log_format);

    // 加载数据集，失败则直接退出
    let catalog = loader::load_catalog(&config.data_file)
        .inspect_err(|e| tracing::error!(error = %e, "数据集加载失败，服务不会启动"))
        .with_context(|| format!("failed to load catalog from '{}'", config.data_file.display()))?;

    let records = catalog.len();
    let state = AppState::new(config.clone(), catalog);
    let app = create_router(state);

    // 启动服务
    let addr = config.bind_address();
    info!(service = SERVICE_NAME, address = %addr, records, "启动服务");

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("绑定地址失败: {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务启动失败")?;

    info!(service = SERVICE_NAME, "服务已停止");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::router())
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "无法监听 Ctrl-C 信号");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "无法监听 SIGTERM 信号");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("收到关闭信号");
}
