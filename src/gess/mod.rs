//! 중력 에너지 저장(GESS) 계산 모듈 모음.
//! 에너지 계산기, 자기방전/열화, 스윕 생성기, 재료 최적화, 설비 규모 산정으로 구성한다.

pub mod constants;
pub mod energy;
pub mod optimizer;
pub mod self_discharge;
pub mod sizing;
pub mod sweeps;

pub use energy::*;
pub use optimizer::*;
pub use self_discharge::*;
pub use sizing::*;
pub use sweeps::*;

/// GESS 계산 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum GessError {
    /// 입력값 오류. 문제가 된 필드명을 함께 전달한다.
    InvalidParameter {
        field: &'static str,
        reason: &'static str,
    },
    /// 카탈로그에 없는 재료
    UnknownMaterial(String),
    /// 등록되지 않은 시나리오
    UnknownScenario(String),
}

impl GessError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        GessError::InvalidParameter { field, reason }
    }

    /// 입력 오류라면 해당 필드명을 반환한다.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            GessError::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl std::fmt::Display for GessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GessError::InvalidParameter { field, reason } => {
                write!(f, "입력 오류({field}): {reason}")
            }
            GessError::UnknownMaterial(name) => write!(f, "알 수 없는 재료: {name}"),
            GessError::UnknownScenario(key) => write!(f, "알 수 없는 시나리오: {key}"),
        }
    }
}

impl std::error::Error for GessError {}

/// 유한한 양수인지 확인한다.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<(), GessError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GessError::invalid(field, "0보다 큰 유한한 값이어야 합니다."))
    }
}

/// 유한한 0 이상의 값인지 확인한다.
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), GessError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GessError::invalid(field, "0 이상의 유한한 값이어야 합니다."))
    }
}
