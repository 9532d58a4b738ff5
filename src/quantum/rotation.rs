//! 旋轉模型
//!
//! 將連續控制參數 power（半圈旋轉比例）轉換為兩種結果的機率對：
//! θ = π · power，P(X) = sin²(θ/2)，P(O) = cos²(θ/2)

use std::f64::consts::PI;

use super::error::QuantumError;

/// 兩種結果的機率對
///
/// 不變量：對任意有限 θ，p_x + p_o = 1（浮點容差內）
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutcomeProbabilities {
    pub p_x: f64,
    pub p_o: f64,
}

/// 由控制參數導出旋轉角 θ（弧度）
pub fn theta(power: f64) -> f64 {
    PI * power
}

/// 計算機率對
///
/// 任意有限輸入都產生合法機率對（超出 [0, 1] 的 power 也一樣）；
/// 非有限輸入（NaN/∞）回傳 `InvalidParameter`
pub fn probabilities(power: f64) -> Result<OutcomeProbabilities, QuantumError> {
    if !power.is_finite() {
        return Err(QuantumError::InvalidParameter(power));
    }

    // 半角恆等式直接計算，θ = 0 與 θ = π 處各落在精確的 0/1 邊界
    let half = theta(power) / 2.0;
    let (sin_half, cos_half) = half.sin_cos();

    Ok(OutcomeProbabilities {
        p_x: sin_half * sin_half,
        p_o: cos_half * cos_half,
    })
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantum::constants::PROB_EPSILON;
    use proptest::prelude::*;

    #[test]
    fn test_boundary_powers() {
        let p = probabilities(0.0).unwrap();
        assert!(p.p_x.abs() < PROB_EPSILON);
        assert!((p.p_o - 1.0).abs() < PROB_EPSILON);

        let p = probabilities(1.0).unwrap();
        assert!((p.p_x - 1.0).abs() < PROB_EPSILON);
        assert!(p.p_o.abs() < PROB_EPSILON);
    }

    #[test]
    fn test_half_power_is_even_split() {
        // power = 0.5 → θ = π/2 → 50/50
        let p = probabilities(0.5).unwrap();
        assert!((p.p_x - 0.5).abs() < PROB_EPSILON);
        assert!((p.p_o - 0.5).abs() < PROB_EPSILON);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            probabilities(f64::NAN),
            Err(QuantumError::InvalidParameter(_))
        ));
        assert!(matches!(
            probabilities(f64::INFINITY),
            Err(QuantumError::InvalidParameter(_))
        ));
        assert!(matches!(
            probabilities(f64::NEG_INFINITY),
            Err(QuantumError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_out_of_range_power_still_valid() {
        // 契約不限制範圍，超出 [0, 1] 仍是合法機率對
        for power in [-3.5, -1.0, 1.5, 7.25, 1e6] {
            let p = probabilities(power).unwrap();
            assert!((0.0..=1.0).contains(&p.p_x));
            assert!((0.0..=1.0).contains(&p.p_o));
        }
    }

    proptest! {
        #[test]
        fn prop_probabilities_sum_to_one(power in -1e4f64..1e4) {
            let p = probabilities(power).unwrap();
            prop_assert!((p.p_x + p.p_o - 1.0).abs() < PROB_EPSILON);
        }

        #[test]
        fn prop_probabilities_in_unit_interval(power in -1e4f64..1e4) {
            let p = probabilities(power).unwrap();
            prop_assert!((0.0..=1.0).contains(&p.p_x));
            prop_assert!((0.0..=1.0).contains(&p.p_o));
        }

        #[test]
        fn prop_deterministic(power in -100.0f64..100.0) {
            // 純函數：同輸入必同輸出
            let a = probabilities(power).unwrap();
            let b = probabilities(power).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
