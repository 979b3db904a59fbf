//! 本地持久化存储基础设施
//!
//! 模拟浏览器 localStorage：按名字划分的存储槽，每个槽对应数据目录下
//! 的一个 JSON 文件。读取时任何缺失或损坏都当作"没有保存过的数据"，
//! 写入时整体覆盖对应文件。

use crate::core::error::ShopError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// 本地存储管理器
#[derive(Debug, Clone)]
pub struct LocalStorage {
    data_dir: PathBuf,
}

impl LocalStorage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", slot))
    }

    /// 读取存储槽的原始内容；槽不存在或不可读时返回 None
    pub fn read_slot(&self, slot: &str) -> Option<String> {
        fs::read_to_string(self.slot_path(slot)).ok()
    }

    /// 整体覆盖写入存储槽
    pub fn write_slot(&self, slot: &str, contents: &str) -> Result<(), ShopError> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| ShopError::StorageFailed(format!("创建数据目录失败: {}", e)))?;
        fs::write(self.slot_path(slot), contents)
            .map_err(|e| ShopError::StorageFailed(format!("写入存储槽 {} 失败: {}", slot, e)))
    }

    /// 读取并反序列化存储槽；内容损坏时丢弃并返回 None，不向上冒错
    pub fn read_json<T: DeserializeOwned>(&self, slot: &str) -> Option<T> {
        let raw = self.read_slot(slot)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("存储槽 {} 内容损坏，按无保存数据处理: {}", slot, e);
                None
            }
        }
    }

    /// 序列化并整体覆盖写入存储槽
    pub fn write_json<T: Serialize>(&self, slot: &str, value: &T) -> Result<(), ShopError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| ShopError::StorageFailed(format!("序列化存储槽 {} 失败: {}", slot, e)))?;
        self.write_slot(slot, &raw)
    }
}
