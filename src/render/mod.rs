//! 渲染模組
//!
//! 消費 `quantum` 模組的向量與標籤，產出點陣圖：
//! - `config`: 配置驅動的呈現參數（調色盤、尺寸、字型）
//! - `canvas`: RGBA8 像素緩衝與繪圖原語
//! - `font`: 內建 5x7 字模與可選覆蓋字型
//! - `sphere`: Bloch 球圖
//! - `formula`: 公式圖與佔位圖
//!
//! 相同輸入與配置下輸出完全確定；資源缺失一律降級，不中斷請求

#![allow(unused_imports)]

pub mod canvas;
pub mod config;
pub mod font;
pub mod formula;
pub mod sphere;

pub use canvas::Canvas;
pub use config::RenderConfig;
pub use font::Font;
pub use formula::FormulaTag;

use crate::quantum::{StateTag, StateVector, VectorStyle};

/// 渲染器：配置 + 字型的組合
///
/// 字型覆蓋檔載入失敗時記錄警告並退回內建字模（降級，不報錯）
pub struct Renderer {
    pub config: RenderConfig,
    font: Font,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        let font = match &config.font_path {
            Some(path) => match Font::with_overlay(path) {
                Ok(font) => font,
                Err(err) => {
                    log::warn!("font overlay unavailable, using builtin glyphs: {}", err);
                    Font::builtin()
                }
            },
            None => Font::builtin(),
        };
        Self { config, font }
    }

    /// 渲染顯示狀態目錄中的一個 Bloch 球圖
    pub fn sphere(&self, tag: StateTag) -> Canvas {
        sphere::render_sphere(&self.config, &self.font, &tag.vectors())
    }

    /// 渲染任意向量組成的 Bloch 球圖
    pub fn sphere_items(
        &self,
        items: &[(StateVector, &str, VectorStyle)],
    ) -> Canvas {
        sphere::render_sphere(&self.config, &self.font, items)
    }

    /// 渲染公式圖
    pub fn formula(&self, tag: FormulaTag) -> Canvas {
        formula::render_formula(&self.config, &self.font, tag)
    }

    /// 未知公式識別名的佔位圖（明確標示錯誤）
    pub fn formula_placeholder(&self, tag: &str) -> Canvas {
        formula::render_placeholder(&self.config, &self.font, tag)
    }
}
