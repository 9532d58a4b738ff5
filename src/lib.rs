//! quantum_cell 共用介面
//!
//! 只公開 gRPC 生成代碼；核心邏輯模組由 binary 端掛載

pub mod proto {
    tonic::include_proto!("quantum_cell");
}
