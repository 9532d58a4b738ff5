//! 錯誤分類定義

use thiserror::Error;

/// 核心錯誤分類
///
/// - `InvalidParameter`: 取樣前拒絕，不產生任何隨機抽取
/// - `UnknownTag`: 未知的狀態/公式識別名，渲染端降級處理
/// - `ResourceUnavailable`: 渲染資源缺失，記錄後以內建資源繼續
#[derive(Debug, Error)]
pub enum QuantumError {
    #[error("invalid control parameter: {0}")]
    InvalidParameter(f64),

    #[error("unknown tag: {0}")]
    UnknownTag(String),

    #[error("render resource unavailable: {0}")]
    ResourceUnavailable(String),
}
