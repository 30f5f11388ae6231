//! 路由模块

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home))
        .route("/data", get(handlers::get_all))
        .route("/regions", get(handlers::get_regions))
        .route("/produits", get(handlers::get_produits))
        .route("/varietes", get(handlers::get_varietes))
        .route("/predict", get(handlers::predict))
}
