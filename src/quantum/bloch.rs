//! 狀態向量映射（Bloch 球幾何）
//!
//! 把邏輯狀態（基底、疊加、任意角度）映射到 3D 單位球上的顯示向量。
//! 這裡的向量純粹用於視覺化，絕不回流到取樣

use super::constants::{COLLAPSE_RADIUS, VECTOR_RADIUS};
use super::error::QuantumError;
use super::outcome::Outcome;

/// 顯示用 3D 向量（範數 ≤ 球面半徑）
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl StateVector {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// 與另一向量的逐分量距離是否都在容差內
    pub fn approx_eq(&self, other: &StateVector, eps: f64) -> bool {
        (self.x - other.x).abs() < eps
            && (self.y - other.y).abs() < eps
            && (self.z - other.z).abs() < eps
    }
}

/// 基底狀態向量：X（"0"）→ +z 極，O（"1"）→ −z 極
pub fn basis_vector(outcome: Outcome) -> StateVector {
    match outcome {
        Outcome::X => StateVector::new(0.0, 0.0, VECTOR_RADIUS),
        Outcome::O => StateVector::new(0.0, 0.0, -VECTOR_RADIUS),
    }
}

/// 球座標 → 直角座標：x = r·sinθ·cosφ，y = r·sinθ·sinφ，z = r·cosθ
///
/// 固定採用這個慣例，θ = 0 落在 "0" 極
pub fn angle_vector(theta: f64, phi: f64) -> Result<StateVector, QuantumError> {
    if !theta.is_finite() {
        return Err(QuantumError::InvalidParameter(theta));
    }
    if !phi.is_finite() {
        return Err(QuantumError::InvalidParameter(phi));
    }

    let r = VECTOR_RADIUS;
    Ok(StateVector::new(
        r * theta.sin() * phi.cos(),
        r * theta.sin() * phi.sin(),
        r * theta.cos(),
    ))
}

/// 疊加態標記：退化的零長向量，只用於「結果未知」的視覺呈現
pub fn superposition_marker() -> StateVector {
    StateVector::zero()
}

// ============================================================================
// 顯示狀態目錄
// ============================================================================

/// 向量繪製樣式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorStyle {
    Solid,
    Faded, // 測量前的半透明向量
}

/// 固定列舉的顯示狀態集合（Bloch 球圖目錄）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateTag {
    Zero,          // |0⟩，+z 極
    One,           // |1⟩，−z 極
    Plus,          // |+⟩，+x 軸
    Minus,         // |−⟩，−x 軸
    Superposition, // 結果未知：上下兩支向量
    CollapseX,     // 坍縮到 |0⟩
    CollapseO,     // 坍縮到 |1⟩
}

impl StateTag {
    /// 解析識別名；未知名稱回傳 `UnknownTag`
    pub fn parse(tag: &str) -> Result<Self, QuantumError> {
        match tag {
            "state_0" => Ok(StateTag::Zero),
            "state_1" => Ok(StateTag::One),
            "state_plus" => Ok(StateTag::Plus),
            "state_minus" => Ok(StateTag::Minus),
            "superposition_state" => Ok(StateTag::Superposition),
            "measurement_collapse_0" => Ok(StateTag::CollapseX),
            "measurement_collapse_1" => Ok(StateTag::CollapseO),
            _ => Err(QuantumError::UnknownTag(tag.to_string())),
        }
    }

    /// 所有顯示狀態（用於預先生成圖檔）
    pub fn all() -> &'static [StateTag] {
        &[
            StateTag::Zero,
            StateTag::One,
            StateTag::Plus,
            StateTag::Minus,
            StateTag::Superposition,
            StateTag::CollapseX,
            StateTag::CollapseO,
        ]
    }

    /// 要繪製的向量清單：(向量, 標籤, 樣式)
    pub fn vectors(&self) -> Vec<(StateVector, &'static str, VectorStyle)> {
        let r = VECTOR_RADIUS;
        let c = COLLAPSE_RADIUS;
        match self {
            StateTag::Zero => vec![(StateVector::new(0.0, 0.0, r), "|psi> = |0>", VectorStyle::Solid)],
            StateTag::One => vec![(StateVector::new(0.0, 0.0, -r), "|psi> = |1>", VectorStyle::Solid)],
            StateTag::Plus => vec![(StateVector::new(r, 0.0, 0.0), "|psi> = |+>", VectorStyle::Solid)],
            StateTag::Minus => vec![(StateVector::new(-r, 0.0, 0.0), "|psi> = |->", VectorStyle::Solid)],
            // 疊加：上下兩支等長向量，無標籤
            StateTag::Superposition => vec![
                (StateVector::new(0.0, 0.0, c), "", VectorStyle::Solid),
                (StateVector::new(0.0, 0.0, -c), "", VectorStyle::Solid),
            ],
            StateTag::CollapseX => vec![(StateVector::new(0.0, 0.0, c), "|psi> = |0>", VectorStyle::Solid)],
            StateTag::CollapseO => vec![(StateVector::new(0.0, 0.0, -c), "|psi> = |1>", VectorStyle::Solid)],
        }
    }
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantum::constants::PROB_EPSILON;
    use std::f64::consts::PI;

    #[test]
    fn test_angle_vector_poles_match_basis() {
        let zero_pole = angle_vector(0.0, 0.0).unwrap();
        assert!(zero_pole.approx_eq(&basis_vector(Outcome::X), PROB_EPSILON));

        let one_pole = angle_vector(PI, 0.0).unwrap();
        assert!(one_pole.approx_eq(&basis_vector(Outcome::O), PROB_EPSILON));
    }

    #[test]
    fn test_angle_vector_equator() {
        // θ = π/2, φ = 0 → +x 軸上
        let v = angle_vector(PI / 2.0, 0.0).unwrap();
        assert!(v.approx_eq(&StateVector::new(VECTOR_RADIUS, 0.0, 0.0), PROB_EPSILON));

        // φ = π/2 → +y 軸上
        let v = angle_vector(PI / 2.0, PI / 2.0).unwrap();
        assert!(v.approx_eq(&StateVector::new(0.0, VECTOR_RADIUS, 0.0), PROB_EPSILON));
    }

    #[test]
    fn test_angle_vector_preserves_radius() {
        for i in 0..20 {
            let theta = i as f64 * 0.31;
            let v = angle_vector(theta, 0.7).unwrap();
            assert!((v.norm() - VECTOR_RADIUS).abs() < PROB_EPSILON);
        }
    }

    #[test]
    fn test_non_finite_angles_rejected() {
        assert!(matches!(
            angle_vector(f64::NAN, 0.0),
            Err(QuantumError::InvalidParameter(_))
        ));
        assert!(matches!(
            angle_vector(0.0, f64::INFINITY),
            Err(QuantumError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_superposition_marker_is_degenerate() {
        assert_eq!(superposition_marker().norm(), 0.0);
    }

    #[test]
    fn test_tag_parse_round_trip() {
        assert_eq!(StateTag::parse("state_0").unwrap(), StateTag::Zero);
        assert_eq!(
            StateTag::parse("measurement_collapse_1").unwrap(),
            StateTag::CollapseO
        );
        assert!(matches!(
            StateTag::parse("state_2"),
            Err(QuantumError::UnknownTag(_))
        ));
    }

    #[test]
    fn test_all_tags_have_bounded_vectors() {
        use crate::quantum::constants::SPHERE_RADIUS;
        for tag in StateTag::all() {
            for (v, _, _) in tag.vectors() {
                assert!(v.norm() <= SPHERE_RADIUS + PROB_EPSILON);
            }
        }
    }
}
