//! 购物车业务服务
//!
//! 内存中的购物车是唯一权威状态，持久化镜像只是副本：
//! 每次变更后整体覆盖写入镜像，启动时从镜像恢复一次。
//! 镜像缺失或损坏不影响启动，按空购物车处理。

use super::model::{CartLine, CartView};
use crate::app::catalog::model::Product;
use crate::core::error::ShopError;
use crate::infrastructure::storage::LocalStorage;
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};
use tracing::info;

/// 购物车镜像所在的存储槽，沿用历史槽名
pub const CART_SLOT: &str = "flashSaleCart";

#[derive(Clone)]
pub struct CartService {
    lines: Arc<Mutex<Vec<CartLine>>>,
    storage: LocalStorage,
}

impl CartService {
    /// 创建购物车并从持久化镜像恢复一次
    pub fn initialize(storage: LocalStorage) -> Self {
        let lines: Vec<CartLine> = storage.read_json(CART_SLOT).unwrap_or_default();
        if !lines.is_empty() {
            info!("从持久化镜像恢复购物车: {} 行", lines.len());
        }
        Self {
            lines: Arc::new(Mutex::new(lines)),
            storage,
        }
    }

    /// 加入商品：已有同 id 的行则数量 +1，否则按商品快照追加新行
    pub fn add_item(&self, product: Product) -> Result<CartView, ShopError> {
        let mut lines = self.lines.lock().unwrap();
        match lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity += 1,
            None => lines.push(CartLine {
                product,
                quantity: 1,
            }),
        }
        self.persist(&lines)?;
        Ok(Self::view_of(&lines))
    }

    /// 移除指定商品的行；不在购物车中则什么都不做
    pub fn remove_item(&self, product_id: &str) -> Result<CartView, ShopError> {
        let mut lines = self.lines.lock().unwrap();
        lines.retain(|line| line.product.id != product_id);
        self.persist(&lines)?;
        Ok(Self::view_of(&lines))
    }

    /// 把指定行的数量改成 quantity（替换，不是累加）
    ///
    /// quantity <= 0 等价于移除该行；商品不在购物车中则什么都不做。
    /// 超出 u32 范围的数量直接拒绝，不会截断出数量为 0 的行。
    pub fn set_quantity(&self, product_id: &str, quantity: i64) -> Result<CartView, ShopError> {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }
        let quantity = u32::try_from(quantity)
            .map_err(|_| ShopError::BadRequest(format!("数量 {} 超出允许范围", quantity)))?;
        let mut lines = self.lines.lock().unwrap();
        if let Some(line) = lines.iter_mut().find(|line| line.product.id == product_id) {
            line.quantity = quantity;
        }
        self.persist(&lines)?;
        Ok(Self::view_of(&lines))
    }

    /// 清空购物车（写入空镜像，不是删除镜像）
    ///
    /// 先写镜像再清内存，镜像写失败时内存购物车原样保留。
    pub fn clear(&self) -> Result<(), ShopError> {
        let mut lines = self.lines.lock().unwrap();
        self.storage.write_json(CART_SLOT, &Vec::<CartLine>::new())?;
        lines.clear();
        Ok(())
    }

    /// 购物车总价，每次读取重新计算
    pub fn total(&self) -> Decimal {
        let lines = self.lines.lock().unwrap();
        lines.iter().map(CartLine::subtotal).sum()
    }

    /// 购物车内商品总件数，每次读取重新计算
    pub fn item_count(&self) -> u32 {
        let lines = self.lines.lock().unwrap();
        lines.iter().map(|line| line.quantity).sum()
    }

    /// 当前行的快照副本
    pub fn lines(&self) -> Vec<CartLine> {
        self.lines.lock().unwrap().clone()
    }

    /// 当前购物车视图
    pub fn view(&self) -> CartView {
        Self::view_of(&self.lines.lock().unwrap())
    }

    fn view_of(lines: &[CartLine]) -> CartView {
        CartView {
            items: lines.to_vec(),
            total: lines.iter().map(CartLine::subtotal).sum(),
            item_count: lines.iter().map(|line| line.quantity).sum(),
        }
    }

    fn persist(&self, lines: &[CartLine]) -> Result<(), ShopError> {
        self.storage.write_json(CART_SLOT, &lines)
    }
}
