use crate::gess::constants::MAX_TOTAL_DEGRADATION;
use crate::gess::{ensure_non_negative, GessError};
use crate::material_db::MaterialData;

/// 저장 중 증발에 의한 자기방전을 적용한다.
/// 물: E' = E * (1 - r)^h (r: 분율/h), 고체 매체는 그대로 반환한다.
pub fn apply_self_discharge(
    energy: f64,
    material: &MaterialData,
    hours_elapsed: f64,
) -> Result<f64, GessError> {
    ensure_non_negative("time_elapsed_h", hours_elapsed)?;
    if !material.is_evaporating() || hours_elapsed == 0.0 {
        return Ok(energy);
    }
    Ok(energy * (1.0 - material.self_discharge_rate).powf(hours_elapsed))
}

/// 사이클 열화 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Degradation {
    /// 누적 열화(분율, 최대 0.5)
    pub total: f64,
    /// 운전 기간 평균 효율 배율 = 1 - total/2
    pub average_efficiency_factor: f64,
}

/// 선형 열화 모델: total = min(0.5, loss * cycles / lifespan).
pub fn degradation(material: &MaterialData, cycles: u32) -> Degradation {
    let total = (material.efficiency_loss * f64::from(cycles) / material.lifespan_cycles)
        .min(MAX_TOTAL_DEGRADATION);
    Degradation {
        total,
        average_efficiency_factor: 1.0 - total / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material_db::{concrete, water};

    #[test]
    fn zero_hours_is_identity_for_water() {
        assert_eq!(apply_self_discharge(123.0, water(), 0.0), Ok(123.0));
    }

    #[test]
    fn negative_hours_rejected() {
        let err = apply_self_discharge(1.0, concrete(), -1.0).unwrap_err();
        assert_eq!(err.field(), Some("time_elapsed_h"));
    }

    #[test]
    fn degradation_without_loss_is_neutral() {
        let d = degradation(concrete(), 1_000_000);
        assert_eq!(d.total, 0.0);
        assert_eq!(d.average_efficiency_factor, 1.0);
    }
}
