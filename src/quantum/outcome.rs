//! 測量結果定義

/// 單次測量的離散結果
///
/// 一旦取樣完成即不可變，與呼叫端提供的格子編號成對回傳
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    X,
    O,
}

impl Outcome {
    /// 由測量位元轉換（1 → X，0 → O）
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            Outcome::X
        } else {
            Outcome::O
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::X => "X",
            Outcome::O => "O",
        }
    }

    /// 轉換為整數 ID (用於統計)
    pub fn to_int(&self) -> u8 {
        match self {
            Outcome::X => 1,
            Outcome::O => 0,
        }
    }
}

// ============================================================================
// 單元測試
// ============================================================================
