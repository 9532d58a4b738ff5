//! 呈現配置
//!
//! 原始版本把顏色、字型、尺寸散落在多個近似重複的端點裡；
//! 這裡收斂成單一配置物件，核心邏輯只有一份

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::quantum::QuantumError;

/// 呈現參數（顏色、尺寸、字型）
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    // 畫布尺寸
    pub sphere_width: u32,
    pub sphere_height: u32,
    pub formula_width: u32,
    pub formula_height: u32,

    // 調色盤
    pub background: [u8; 3],
    pub foreground: [u8; 3],
    pub error_color: [u8; 3],

    // 字型
    pub text_scale: u32,             // 5x7 字模的放大倍數
    pub font_path: Option<PathBuf>,  // 可選的覆蓋字型檔
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sphere_width: 800,
            sphere_height: 800,
            formula_width: 600,
            formula_height: 100,
            background: [51, 48, 95],
            foreground: [255, 255, 255],
            error_color: [220, 60, 60],
            text_scale: 2,
            font_path: None,
        }
    }
}

impl RenderConfig {
    /// 從 JSON 檔載入；缺欄位回落到預設值
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, QuantumError> {
        let data = std::fs::read_to_string(&path).map_err(|e| {
            QuantumError::ResourceUnavailable(format!(
                "config {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        serde_json::from_str(&data).map_err(|e| {
            QuantumError::ResourceUnavailable(format!(
                "config {}: {}",
                path.as_ref().display(),
                e
            ))
        })
    }
}

// ============================================================================
// 單元測試
// ============================================================================
