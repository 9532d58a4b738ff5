//! 服務層模組
//!
//! 提供 gRPC 服務所需的測量編排與圖像分派功能

#![allow(unused_imports)]

pub mod images;
pub mod measurement;

pub use images::{formula_image, state_image};
pub use measurement::{measure, MeasureOutcome};

#[cfg(test)]
mod integration_tests;
