//! 商品目录处理器

use axum::{extract::State, response::Json};

use super::model::Product;
use crate::app::AppState;
use crate::core::error::ShopError;
use crate::core::response::ApiResponse;

/// 获取商品列表
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Product>>>, ShopError> {
    let products = state.catalog_service.list().await?;
    let message = format!("获取到 {} 个商品", products.len());
    Ok(Json(ApiResponse::success(products, &message)))
}
