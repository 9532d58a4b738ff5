//! 測量取樣器
//!
//! 從機率對中抽取一個離散結果。隨機源一律由呼叫端注入，
//! 方便用固定源做單元測試，也避免跨請求的隱式耦合

use rand::Rng;

use super::outcome::Outcome;
use super::rotation::OutcomeProbabilities;

/// 執行一次測量（坍縮）
///
/// 每次呼叫恰好消耗隨機源一次抽取：u ∈ [0, 1)，
/// u < p_x 時回傳 X，否則 O。邊界 u == p_x 取 O（以 `<` 為準的
/// 標準平手規則）
pub fn sample<R: Rng + ?Sized>(probs: &OutcomeProbabilities, rng: &mut R) -> Outcome {
    let u: f64 = rng.gen();
    Outcome::from_bit(u < probs.p_x)
}

// ============================================================================
// 測試用固定隨機源
// ============================================================================


// ============================================================================
// 單元測試
// ============================================================================
