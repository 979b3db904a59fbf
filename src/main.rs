//! FlashSale 商城服务器入口
//! 组装配置、日志、存储与各业务服务，然后启动 HTTP 服务

use flashsale_shop::app::cart::service::CartService;
use flashsale_shop::app::catalog::service::CatalogService;
use flashsale_shop::app::order::service::OrderService;
use flashsale_shop::app::{build_router, AppState};
use flashsale_shop::infrastructure::config::AppConfig;
use flashsale_shop::infrastructure::logger::Logger;
use flashsale_shop::infrastructure::storage::LocalStorage;
use tokio::net::TcpListener;
use tracing::{info, Level};

#[tokio::main]
async fn main() {
    // 初始化日志
    Logger::init_with_env(Level::INFO);

    let config = AppConfig::from_env();
    info!("启动 FlashSale 商城服务器...");
    info!("数据目录: {}", config.data_dir.display());

    // 持久化镜像 + 各业务服务
    let storage = LocalStorage::new(config.data_dir.clone());
    let state = AppState {
        catalog_service: CatalogService::new(config.catalog_delay),
        cart_service: CartService::initialize(storage.clone()),
        order_service: OrderService::new(storage, config.order_delay),
    };

    let app = build_router(state);

    // 绑定地址
    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .expect("无法绑定监听地址");

    info!("🚀 FlashSale 商城运行在 http://{}", config.bind_addr);
    info!("📖 API 端点:");
    info!("   GET    /                         - API 信息");
    info!("   GET    /health                   - 健康检查");
    info!("   GET    /products                 - 商品列表");
    info!("   GET    /cart                     - 查看购物车");
    info!("   POST   /cart/items               - 加入商品");
    info!("   PUT    /cart/items/:product_id   - 修改数量");
    info!("   DELETE /cart/items/:product_id   - 移除商品");
    info!("   DELETE /cart                     - 清空购物车");
    info!("   POST   /checkout                 - 结算下单");
    info!("   GET    /orders/:order_id         - 订单回执");
    info!("   GET    /countries                - 可选收货国家");

    // 启动服务器
    axum::serve(listener, app).await.expect("服务器启动失败");
}
