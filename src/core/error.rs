//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::BTreeMap;

/// 核心错误类型
#[derive(Debug)]
pub enum ShopError {
    BadRequest(String),
    /// 结算表单校验失败，携带逐字段错误标记
    ValidationFailed(BTreeMap<String, String>),
    NotFound(String),
    /// 持久化镜像写入失败，调用方可原样重试
    StorageFailed(String),
    InternalServerError(String),
}

impl std::fmt::Display for ShopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShopError::BadRequest(msg) => write!(f, "请求无效: {}", msg),
            ShopError::ValidationFailed(fields) => {
                write!(f, "表单校验失败: {} 个字段有误", fields.len())
            }
            ShopError::NotFound(msg) => write!(f, "资源不存在: {}", msg),
            ShopError::StorageFailed(msg) => write!(f, "本地存储写入失败: {}", msg),
            ShopError::InternalServerError(msg) => write!(f, "内部错误: {}", msg),
        }
    }
}

impl std::error::Error for ShopError {}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    /// 逐字段校验错误，仅校验失败时出现
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, String>>,
    pub timestamp: String,
}

impl IntoResponse for ShopError {
    fn into_response(self) -> Response {
        let (status, error_message, user_message, fields) = match self {
            ShopError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None),
            ShopError::ValidationFailed(field_errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_FAILED",
                "请检查标记的表单字段后重新提交".to_string(),
                Some(field_errors),
            ),
            ShopError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg, None),
            ShopError::StorageFailed(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "STORAGE_FAILED",
                "订单处理失败，请稍后重试".to_string(),
                None,
            ),
            ShopError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                msg,
                None,
            ),
        };

        let error_response = ErrorResponse {
            error: error_message.to_string(),
            message: user_message,
            code: status.as_u16(),
            fields,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}
