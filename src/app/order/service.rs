//! 订单业务服务
//!
//! 订单镜像是只追加的列表：下单时读出全量、追加一条、整体写回。
//! 结算的可见效果要么全部发生（订单入镜像 + 购物车清空），
//! 要么全部不发生（镜像写入失败时购物车原样保留，调用方可重试）。

use super::model::{is_supported_country, CheckoutRequest, OrderRecord};
use crate::app::cart::model::CartLine;
use crate::app::cart::service::CartService;
use crate::core::error::ShopError;
use crate::infrastructure::storage::LocalStorage;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

/// 订单镜像所在的存储槽，沿用历史槽名
pub const ORDERS_SLOT: &str = "mockOrders";

#[derive(Clone)]
pub struct OrderService {
    storage: LocalStorage,
    delay: Duration,
}

impl OrderService {
    pub fn new(storage: LocalStorage, delay: Duration) -> Self {
        Self { storage, delay }
    }

    /// 校验结算表单，返回逐字段错误标记；空 map 表示全部通过
    pub fn validate(request: &CheckoutRequest) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();

        if request.full_name.trim().is_empty() {
            errors.insert("full_name".to_string(), "Required".to_string());
        }
        if request.email.trim().is_empty() {
            errors.insert("email".to_string(), "Required".to_string());
        } else if !request.email.contains('@') {
            // 只查 @，不做更严格的邮箱格式校验
            errors.insert("email".to_string(), "Invalid email".to_string());
        }
        if request.phone.trim().is_empty() {
            errors.insert("phone".to_string(), "Required".to_string());
        }
        if request.address.trim().is_empty() {
            errors.insert("address".to_string(), "Required".to_string());
        }
        if request.country.trim().is_empty() {
            errors.insert("country".to_string(), "Required".to_string());
        } else if !is_supported_country(&request.country) {
            errors.insert("country".to_string(), "Invalid country".to_string());
        }

        errors
    }

    /// 结算下单
    ///
    /// 校验通过后：生成订单号 → 快照购物车 → 订单入镜像 → 清空购物车。
    /// 任何一个失败点都不会留下半截状态。
    pub async fn submit_checkout(
        &self,
        cart: &CartService,
        request: CheckoutRequest,
    ) -> Result<OrderRecord, ShopError> {
        let errors = Self::validate(&request);
        if !errors.is_empty() {
            return Err(ShopError::ValidationFailed(errors));
        }

        let items = cart.lines();
        if items.is_empty() {
            return Err(ShopError::BadRequest("购物车是空的，无法结算".to_string()));
        }
        // 总价从同一份行快照算出，和 items 必然一致
        let total_amount: Decimal = items.iter().map(CartLine::subtotal).sum();

        let order = OrderRecord {
            order_id: generate_order_id(),
            customer_name: request.full_name,
            customer_email: request.email,
            phone: request.phone,
            shipping_address: request.address,
            country: request.country,
            items,
            total_amount,
            language: request.language,
            created_date: Utc::now(),
        };

        // 订单持久化失败时直接返回，购物车保持原样以便重试
        self.create(order.clone()).await?;
        if let Err(clear_err) = cart.clear() {
            // 订单已入镜像而购物车没清掉，原样重试会重复下单：
            // 把刚写入的订单撤掉，恢复到提交前的状态
            if let Err(revert_err) = self.revert(&order.order_id) {
                warn!("撤销订单 {} 失败: {}", order.order_id, revert_err);
            }
            return Err(clear_err);
        }

        info!(
            "✅ 订单 {} 创建成功，金额 {}",
            order.order_id, order.total_amount
        );
        Ok(order)
    }

    /// 追加写入订单镜像
    pub async fn create(&self, order: OrderRecord) -> Result<(), ShopError> {
        // 模拟网络延迟
        tokio::time::sleep(self.delay).await;

        let mut orders: Vec<OrderRecord> = self.storage.read_json(ORDERS_SLOT).unwrap_or_default();
        orders.push(order);
        self.storage.write_json(ORDERS_SLOT, &orders)
    }

    /// 从订单镜像里撤掉指定订单，仅用于结算中止时的补偿
    fn revert(&self, order_id: &str) -> Result<(), ShopError> {
        let mut orders: Vec<OrderRecord> = self.storage.read_json(ORDERS_SLOT).unwrap_or_default();
        orders.retain(|order| order.order_id != order_id);
        self.storage.write_json(ORDERS_SLOT, &orders)
    }

    /// 按订单号查询
    pub async fn get_by_id(&self, order_id: &str) -> Result<OrderRecord, ShopError> {
        // 模拟网络延迟
        tokio::time::sleep(self.delay).await;

        let orders: Vec<OrderRecord> = self.storage.read_json(ORDERS_SLOT).unwrap_or_default();
        orders
            .into_iter()
            .find(|order| order.order_id == order_id)
            .ok_or_else(|| ShopError::NotFound(format!("订单 {} 不存在", order_id)))
    }
}

/// 生成订单号：FS 前缀 + 毫秒时间戳后 8 位 + 4 位随机十六进制
///
/// 纯时间戳后缀在同一毫秒内会撞号，随机后缀用来排除这种情况。
pub fn generate_order_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let random = Uuid::new_v4().simple().to_string();
    format!("FS{:08}{}", millis % 100_000_000, &random[..4])
}
