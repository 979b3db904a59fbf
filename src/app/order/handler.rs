//! 订单处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use super::model::{CheckoutRequest, CheckoutResponse, Country, OrderRecord, COUNTRIES};
use crate::app::AppState;
use crate::core::error::ShopError;
use crate::core::response::ApiResponse;

/// 结算下单
pub async fn submit_checkout(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CheckoutResponse>>), ShopError> {
    let order = state
        .order_service
        .submit_checkout(&state.cart_service, payload)
        .await?;

    let response = CheckoutResponse {
        order_id: order.order_id,
        total_amount: order.total_amount,
    };
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(response, "订单创建成功")),
    ))
}

/// 按订单号查询回执
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<ApiResponse<OrderRecord>>, ShopError> {
    let order = state.order_service.get_by_id(&order_id).await?;
    Ok(Json(ApiResponse::success(order, "订单获取成功")))
}

/// 固定的收货国家列表
pub async fn list_countries() -> Json<ApiResponse<Vec<Country>>> {
    Json(ApiResponse::success(COUNTRIES.to_vec(), "国家列表获取成功"))
}
