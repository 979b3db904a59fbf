//! 购物车处理器

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Deserialize;

use super::model::CartView;
use crate::app::catalog::model::Product;
use crate::app::AppState;
use crate::core::error::ShopError;
use crate::core::response::ApiResponse;

/// 修改数量请求
#[derive(Debug, Deserialize)]
pub struct SetQuantityRequest {
    pub quantity: i64,
}

/// 查看购物车
pub async fn get_cart(State(state): State<AppState>) -> Json<ApiResponse<CartView>> {
    Json(ApiResponse::success(state.cart_service.view(), "购物车获取成功"))
}

/// 加入商品
///
/// 请求体携带完整商品数据，按提交时的价格与文案固化成购物车行快照。
pub async fn add_item(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<Json<ApiResponse<CartView>>, ShopError> {
    let view = state.cart_service.add_item(product)?;
    Ok(Json(ApiResponse::success(view, "商品已加入购物车")))
}

/// 修改指定商品的数量
pub async fn set_quantity(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(payload): Json<SetQuantityRequest>,
) -> Result<Json<ApiResponse<CartView>>, ShopError> {
    let view = state
        .cart_service
        .set_quantity(&product_id, payload.quantity)?;
    Ok(Json(ApiResponse::success(view, "数量修改成功")))
}

/// 移除指定商品
pub async fn remove_item(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<ApiResponse<CartView>>, ShopError> {
    let view = state.cart_service.remove_item(&product_id)?;
    Ok(Json(ApiResponse::success(view, "商品已移除")))
}

/// 清空购物车
pub async fn clear_cart(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CartView>>, ShopError> {
    state.cart_service.clear()?;
    Ok(Json(ApiResponse::success(
        state.cart_service.view(),
        "购物车已清空",
    )))
}
