//! 模型與顯示常量定義

// ============================================================================
// 測量模型常量
// ============================================================================

pub const DEFAULT_LABEL: &str = "X"; // 未提供標籤提示時的預設值
pub const NO_CELL: i64 = -1;         // 「無格子」哨兵值
pub const PROB_EPSILON: f64 = 1e-9;  // 機率不變量容差

// ============================================================================
// Bloch 球顯示常量
// ============================================================================

pub const SPHERE_RADIUS: f64 = 2.0;       // 球面半徑（顯示單位）
pub const VECTOR_RADIUS: f64 = 1.2;       // 基底/角度狀態向量長度
pub const COLLAPSE_RADIUS: f64 = 1.5;     // 坍縮狀態向量長度
pub const POLE_LABEL_OFFSET: f64 = 3.1;   // |0⟩ / |1⟩ 極點標籤位置
