//! 应用层：各业务模块、全局状态与路由装配

pub mod cart;
pub mod catalog;
pub mod order;

use axum::{
    extract::State,
    middleware,
    response::Json,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
use cart::service::CartService;
use catalog::service::CatalogService;
use order::service::OrderService;

/// 应用全局状态，启动时构建一次后注入各处理器
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: CatalogService,
    pub cart_service: CartService,
    pub order_service: OrderService,
}

/// 装配全部路由和中间件
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health_check))
        .route("/products", get(catalog::handler::list_products))
        .route(
            "/cart",
            get(cart::handler::get_cart).delete(cart::handler::clear_cart),
        )
        .route("/cart/items", post(cart::handler::add_item))
        .route(
            "/cart/items/:product_id",
            put(cart::handler::set_quantity).delete(cart::handler::remove_item),
        )
        .route("/checkout", post(order::handler::submit_checkout))
        .route("/orders/:order_id", get(order::handler::get_order))
        .route("/countries", get(order::handler::list_countries))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API 信息
async fn api_info(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "FlashSale Storefront API",
        "version": "0.1.0",
        "description": "限时抢购主题的模拟电商后端",
        "sale_ends_at": state.catalog_service.sale_ends_at().to_rfc3339(),
        "endpoints": {
            "GET /products": "商品列表（模拟网络延迟）",
            "GET /cart": "查看购物车",
            "POST /cart/items": "加入商品",
            "PUT /cart/items/:product_id": "修改数量（<=0 等价于移除）",
            "DELETE /cart/items/:product_id": "移除商品",
            "DELETE /cart": "清空购物车",
            "POST /checkout": "结算下单",
            "GET /orders/:order_id": "按订单号查询回执",
            "GET /countries": "可选收货国家"
        },
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// 健康检查
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": "0.1.0",
        "storage": {
            "type": "local-json",
            "cart_lines": state.cart_service.lines().len(),
            "cart_item_count": state.cart_service.item_count()
        }
    }))
}
