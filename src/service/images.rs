//! 圖像分派
//!
//! 把識別名字串導向對應的渲染：
//! - 狀態圖：未知識別名回傳 `UnknownTag`（上層對應 404）
//! - 公式圖：未知識別名降級為佔位圖，永遠回傳合法圖像

use crate::quantum::{QuantumError, StateTag};
use crate::render::{Canvas, FormulaTag, Renderer};

/// 狀態標籤 → Bloch 球圖
pub fn state_image(renderer: &Renderer, tag: &str) -> Result<Canvas, QuantumError> {
    let state = StateTag::parse(tag)?;
    Ok(renderer.sphere(state))
}

/// 公式識別名 → 公式圖；未知識別名 → 佔位圖
///
/// 回傳的布林值標示是否為佔位圖
pub fn formula_image(renderer: &Renderer, tag: &str) -> (Canvas, bool) {
    match FormulaTag::parse(tag) {
        Ok(formula) => (renderer.formula(formula), false),
        Err(err) => {
            log::warn!("formula render degraded to placeholder: {}", err);
            (renderer.formula_placeholder(tag), true)
        }
    }
}
