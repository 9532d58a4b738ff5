//! 量子核心模組
//!
//! 包含量子格子的核心定義：
//! - `constants`: 模型與顯示常量
//! - `error`: 錯誤分類
//! - `outcome`: 測量結果定義
//! - `rotation`: 旋轉模型（power → 機率對）
//! - `sampler`: 測量取樣器
//! - `bloch`: 狀態向量映射（Bloch 球幾何）
//!
//! 注意：這裡只有純計算，隨機源一律由呼叫端注入

#![allow(unused_imports)]

pub mod bloch;
pub mod constants;
pub mod error;
pub mod outcome;
pub mod rotation;
pub mod sampler;

// Re-export 常用類型
pub use bloch::{angle_vector, basis_vector, superposition_marker, StateTag, StateVector, VectorStyle};
pub use constants::*;
pub use error::QuantumError;
pub use outcome::Outcome;
pub use rotation::{probabilities, theta, OutcomeProbabilities};
pub use sampler::sample;
