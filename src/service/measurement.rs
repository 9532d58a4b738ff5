//! 測量編排
//!
//! 每個請求走固定流程：Received → Validated → Sampled → Responded，
//! 驗證失敗則 Received → Rejected。請求之間不保留任何狀態。
//! 刻意不冪等：同樣的輸入每次都重新抽樣，可能得到不同結果

use rand::Rng;

use crate::quantum::{probabilities, sample, Outcome, QuantumError};

/// 單次測量的回應資料
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeasureOutcome {
    pub outcome: Outcome,
    pub cell_index: i64, // 原樣回傳，核心從不解讀
}

/// 執行一次測量
///
/// 驗證先於抽樣：`InvalidParameter` 時隨機源一次都不會被動用
pub fn measure<R: Rng + ?Sized>(
    power: f64,
    cell_index: i64,
    rng: &mut R,
) -> Result<MeasureOutcome, QuantumError> {
    // Validated：非有限 power 在這裡被拒絕
    let probs = probabilities(power)?;

    // Sampled：恰好一次抽取
    let outcome = sample(&probs, rng);

    log::info!(
        "measured cell {} at power {}: {} (p_x = {:.4})",
        cell_index,
        power,
        outcome.as_str(),
        probs.p_x
    );

    Ok(MeasureOutcome {
        outcome,
        cell_index,
    })
}
