//! Handler模块

use axum::{extract::State, Json};

use common::errors::AppError;
use common::extract::ValidatedQuery;
use common::models::{PredictQuery, PriceRecord, VarietesQuery};
use common::response::{ErrorBody, ListResponse, StatusResponse};

use crate::state::AppState;

/// 服务状态
#[utoipa::path(
    get,
    path = "/",
    tag = "Status",
    responses(
        (status = 200, description = "服务运行正常", body = StatusResponse)
    )
)]
pub async fn home(State(state): State<AppState>) -> Json<StatusResponse> {
    tracing::debug!(service = %state.config.service_name, "status requested");
    Json(StatusResponse::running(state.catalog.len()))
}

/// 返回全部价格记录（按加载顺序）
#[utoipa::path(
    get,
    path = "/data",
    tag = "Data",
    responses(
        (status = 200, description = "全部记录", body = Vec<PriceRecord>)
    )
)]
pub async fn get_all(State(state): State<AppState>) -> Json<Vec<PriceRecord>> {
    Json(state.catalog.records().to_vec())
}

/// 列出所有地区
#[utoipa::path(
    get,
    path = "/regions",
    tag = "Filters",
    responses(
        (status = 200, description = "去重并排序的地区列表", body = ListResponse)
    )
)]
pub async fn get_regions(State(state): State<AppState>) -> Json<ListResponse> {
    Json(state.catalog.regions().into())
}

/// 列出所有产品
#[utoipa::path(
    get,
    path = "/produits",
    tag = "Filters",
    responses(
        (status = 200, description = "去重并排序的产品列表", body = ListResponse)
    )
)]
pub async fn get_produits(State(state): State<AppState>) -> Json<ListResponse> {
    Json(state.catalog.products().into())
}

/// 列出指定产品的品种
#[utoipa::path(
    get,
    path = "/varietes",
    tag = "Filters",
    params(VarietesQuery),
    responses(
        (status = 200, description = "该产品的品种列表（产品不存在时为空）", body = ListResponse),
        (status = 422, description = "缺少参数", body = ErrorBody)
    )
)]
pub async fn get_varietes(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<VarietesQuery>,
) -> Json<ListResponse> {
    let items = state.catalog.varieties(&query.produit);
    tracing::debug!(produit = %query.produit, count = items.len(), "varieties listed");
    Json(items.into())
}

/// 按地区、产品、品种和年份精确查找价格
#[utoipa::path(
    get,
    path = "/predict",
    tag = "Prediction",
    params(PredictQuery),
    responses(
        (status = 200, description = "匹配的价格记录", body = PriceRecord),
        (status = 404, description = "没有匹配的记录", body = ErrorBody),
        (status = 422, description = "参数缺失或超出范围", body = ErrorBody)
    )
)]
pub async fn predict(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PredictQuery>,
) -> Result<Json<PriceRecord>, AppError> {
    let PredictQuery { region, produit, variete, annee } = query;
    match state.catalog.find_exact(&region, &produit, &variete, annee) {
        Ok(record) => {
            tracing::debug!(%region, %produit, %variete, annee, prix = record.prix, "price found");
            Ok(Json(record.clone()))
        }
        Err(err) => {
            tracing::info!(%region, %produit, %variete, annee, "no matching price record");
            Err(err)
        }
    }
}
