/// 중력 저장 매체(물/모래/콘크리트)의 물성 테이블을 제공한다.
/// 값은 공개 문헌(IRENA 2020, Journal of Energy Storage 2021, ARES 2019 등)의 대표값이며
/// 교육/연구용 참고치다.
use crate::gess::GessError;

/// 효율 범위(분율, 0~1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EfficiencyRange {
    pub min: f64,
    pub max: f64,
}

impl EfficiencyRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// 범위 중앙값. 회수 에너지 계산의 기본 배율로 쓴다.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// 정격 출력 범위. 표시용으로만 전달된다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerOutput {
    pub min_kw: f64,
    pub max_kw: f64,
    /// 방전 지속 시간 설명(예: "minutes", "hours")
    pub duration: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialData {
    pub code: &'static str,
    pub name: &'static str,
    /// 밀도 [kg/m³]
    pub density: f64,
    /// 공칭 수명 [cycle]
    pub lifespan_cycles: f64,
    /// 사이클당 효율 손실(분율)
    pub efficiency_loss: f64,
    /// 일반 효율 범위(분율)
    pub efficiency: EfficiencyRange,
    /// 인양 효율(분율)
    pub lift_efficiency: f64,
    /// 발전 효율(분율)
    pub generation_efficiency: f64,
    /// 자기방전율 [분율/h]. 물은 증발 손실, 고체는 0.
    pub self_discharge_rate: f64,
    /// 상대 비용 등급 (1=저가 ~ 3=고가)
    pub relative_cost: u8,
    pub color: &'static str,
    pub power_output: Option<PowerOutput>,
    pub properties: &'static [&'static str],
    pub notes: &'static str,
}

impl MaterialData {
    /// 인양×발전 효율(분율).
    pub fn round_trip_efficiency(&self) -> f64 {
        self.lift_efficiency * self.generation_efficiency
    }

    /// 시간 경과에 따라 저장 에너지가 증발로 줄어드는 매체인지 여부.
    pub fn is_evaporating(&self) -> bool {
        self.name == WATER_NAME
    }

    /// 물성값이 허용 범위 안에 있는지 확인한다.
    pub fn validate(&self) -> Result<(), GessError> {
        if !(self.density > 0.0) {
            return Err(GessError::invalid("density", "밀도는 0보다 커야 합니다."));
        }
        if !(self.lifespan_cycles > 0.0) {
            return Err(GessError::invalid(
                "lifespan_cycles",
                "수명 사이클은 0보다 커야 합니다.",
            ));
        }
        let fractions = [
            ("efficiency.min", self.efficiency.min),
            ("efficiency.max", self.efficiency.max),
            ("lift_efficiency", self.lift_efficiency),
            ("generation_efficiency", self.generation_efficiency),
            ("self_discharge_rate", self.self_discharge_rate),
            ("efficiency_loss", self.efficiency_loss),
        ];
        for (field, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(GessError::invalid(field, "0~1 범위의 분율이어야 합니다."));
            }
        }
        if self.efficiency.min > self.efficiency.max {
            return Err(GessError::invalid(
                "efficiency",
                "효율 범위의 최소값이 최대값보다 큽니다.",
            ));
        }
        if self.relative_cost == 0 {
            return Err(GessError::invalid(
                "relative_cost",
                "상대 비용 등급은 1 이상이어야 합니다.",
            ));
        }
        Ok(())
    }
}

pub const WATER_NAME: &str = "Water";

/// 카탈로그 전체를 반복 순서(물, 모래, 콘크리트)대로 반환한다.
pub fn materials() -> &'static [MaterialData] {
    MATERIALS
}

pub fn find_material(code: &str) -> Option<&'static MaterialData> {
    let code = code.trim();
    MATERIALS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(code) || m.name.eq_ignore_ascii_case(code))
}

/// 이름/코드로 재료를 찾고 없으면 오류를 반환한다.
pub fn material(code: &str) -> Result<&'static MaterialData, GessError> {
    find_material(code).ok_or_else(|| GessError::UnknownMaterial(code.trim().to_string()))
}

pub fn water() -> &'static MaterialData {
    &MATERIALS[0]
}

pub fn sand() -> &'static MaterialData {
    &MATERIALS[1]
}

pub fn concrete() -> &'static MaterialData {
    &MATERIALS[2]
}

static MATERIALS: &[MaterialData] = &[
    MaterialData {
        code: "water",
        name: WATER_NAME,
        density: 1000.0,
        lifespan_cycles: 50_000.0,
        efficiency_loss: 0.001,
        efficiency: EfficiencyRange::new(0.56, 0.77),
        lift_efficiency: 0.80,
        generation_efficiency: 0.85,
        self_discharge_rate: 0.001,
        relative_cost: 2,
        color: "#60a5fa",
        power_output: Some(PowerOutput {
            min_kw: 500.0,
            max_kw: 1000.0,
            duration: "minutes",
        }),
        properties: &["Evaporation", "Turbine Compatibility", "High Power Output"],
        notes: "양수발전 방식; 펌프/배관 마찰/터빈 변환 손실 + 증발 손실",
    },
    MaterialData {
        code: "sand",
        name: "Sand",
        density: 1600.0,
        lifespan_cycles: 100_000.0,
        efficiency_loss: 0.0,
        efficiency: EfficiencyRange::new(0.60, 0.77),
        lift_efficiency: 0.85,
        generation_efficiency: 0.88,
        self_discharge_rate: 0.0,
        relative_cost: 1,
        color: "#fbbf24",
        power_output: Some(PowerOutput {
            min_kw: 150.0,
            max_kw: 300.0,
            duration: "10-30 min",
        }),
        properties: &["Zero Self-Discharge", "Low Cost", "Granular Flow"],
        notes: "컨베이어 방식; 벨트 마찰과 모터 커플링 손실",
    },
    MaterialData {
        code: "concrete",
        name: "Concrete",
        density: 2400.0,
        lifespan_cycles: 100_000.0,
        efficiency_loss: 0.0,
        efficiency: EfficiencyRange::new(0.75, 0.90),
        lift_efficiency: 0.92,
        generation_efficiency: 0.90,
        self_discharge_rate: 0.0,
        relative_cost: 3,
        color: "#9ca3af",
        power_output: Some(PowerOutput {
            min_kw: 50.0,
            max_kw: 100.0,
            duration: "hours",
        }),
        properties: &["High Density", "Long Lifespan", "Precision Control"],
        notes: "정밀 크레인 방식; 저마찰 풀리와 회생 제동",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_entries_are_valid() {
        for m in materials() {
            assert!(m.validate().is_ok(), "{} failed validation", m.name);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(find_material("CONCRETE").map(|m| m.name), Some("Concrete"));
        assert_eq!(find_material(" water ").map(|m| m.name), Some("Water"));
        assert!(find_material("steel").is_none());
    }

    #[test]
    fn only_water_evaporates() {
        assert!(water().is_evaporating());
        assert!(!sand().is_evaporating());
        assert!(!concrete().is_evaporating());
    }
}
