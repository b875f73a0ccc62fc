use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::gess::sweeps::{generate_comparison, MaterialSummary};
use crate::gess::GessError;

/// 재료 선택 기준. 모두 값이 클수록 유리하다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// 회수 효율 [%]
    Efficiency,
    /// 유효 수명 [cycle]
    Lifespan,
    /// 비용 효과 점수
    Cost,
    /// 에너지 밀도 [kWh/m³]
    EnergyDensity,
    /// 정격 최대 출력 [kW]
    PowerOutput,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Efficiency,
        Criterion::Lifespan,
        Criterion::Cost,
        Criterion::EnergyDensity,
        Criterion::PowerOutput,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Criterion::Efficiency => "efficiency",
            Criterion::Lifespan => "lifespan",
            Criterion::Cost => "cost",
            Criterion::EnergyDensity => "energy_density",
            Criterion::PowerOutput => "power_output",
        }
    }

    /// 요약에서 기준 필드 값을 꺼낸다.
    pub fn score(&self, summary: &MaterialSummary) -> f64 {
        match self {
            Criterion::Efficiency => summary.efficiency_pct,
            Criterion::Lifespan => summary.lifespan as f64,
            Criterion::Cost => summary.cost_effectiveness,
            Criterion::EnergyDensity => summary.energy_density,
            Criterion::PowerOutput => summary.max_power_kw,
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// 알 수 없는 기준 이름은 첫 재료로 대체하지 않고 오류로 처리한다.
impl FromStr for Criterion {
    type Err = GessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "efficiency" => Ok(Criterion::Efficiency),
            "lifespan" => Ok(Criterion::Lifespan),
            "cost" | "cost_effectiveness" | "material_cost" => Ok(Criterion::Cost),
            "energy_density" | "density" => Ok(Criterion::EnergyDensity),
            "power_output" | "power" => Ok(Criterion::PowerOutput),
            _ => Err(GessError::invalid(
                "criterion",
                "efficiency, lifespan, cost, energy_density, power_output 중 하나여야 합니다.",
            )),
        }
    }
}

/// 후보 중 기준 값이 가장 큰 항목을 고른다.
/// 동률이면 먼저 나온 항목(카탈로그 순서상 앞선 재료)이 이긴다.
pub fn select_best<'a>(
    candidates: &'a [MaterialSummary],
    criterion: Criterion,
) -> Option<&'a MaterialSummary> {
    let mut best: Option<&MaterialSummary> = None;
    for candidate in candidates {
        match best {
            Some(b) if criterion.score(candidate) <= criterion.score(b) => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// 카탈로그 전 재료를 평가하여 기준 값이 가장 큰 재료를 반환한다.
pub fn find_optimal_material(
    mass_kg: f64,
    height_m: f64,
    system_efficiency_pct: f64,
    cycles: u32,
    criterion: Criterion,
) -> Result<MaterialSummary, GessError> {
    let comparison = generate_comparison(mass_kg, height_m, system_efficiency_pct, cycles)?;
    let best = select_best(&comparison, criterion)
        .cloned()
        .ok_or_else(|| GessError::invalid("materials", "재료 카탈로그가 비어 있습니다."))?;
    tracing::debug!(criterion = %criterion, material = best.material, "optimal material selected");
    Ok(best)
}

/// 시나리오 제약 조건. 지정하지 않은 항목은 검사하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScenarioConstraints {
    /// 최대 체적 [m³]
    pub max_volume_m3: Option<f64>,
    /// 최대 높이 [m]. 재료와 무관하게 호출자가 준 높이와 비교한다.
    pub max_height_m: Option<f64>,
    /// 허용 상대 비용 등급 상한
    pub max_relative_cost: Option<u8>,
    /// 최소 정격 출력 [kW]
    pub min_power_kw: Option<f64>,
}

impl ScenarioConstraints {
    fn admits(&self, summary: &MaterialSummary, height_m: f64) -> bool {
        self.max_volume_m3.map_or(true, |v| summary.volume_m3 <= v)
            && self.max_height_m.map_or(true, |h| height_m <= h)
            && self
                .max_relative_cost
                .map_or(true, |c| summary.relative_cost <= c)
            && self.min_power_kw.map_or(true, |p| summary.max_power_kw >= p)
    }
}

/// 배치 시나리오.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub constraints: ScenarioConstraints,
    pub priority: Criterion,
}

pub fn scenarios() -> &'static [Scenario] {
    SCENARIOS
}

pub fn find_scenario(key: &str) -> Result<&'static Scenario, GessError> {
    let key = key.trim();
    SCENARIOS
        .iter()
        .find(|s| s.key.eq_ignore_ascii_case(key) || s.name.eq_ignore_ascii_case(key))
        .ok_or_else(|| GessError::UnknownScenario(key.to_string()))
}

/// 시나리오 제약으로 후보를 거른 뒤 우선 기준으로 최적 재료를 고른다.
/// 제약을 만족하는 재료가 없으면 전체 카탈로그에서 고른다.
pub fn recommend_for_scenario(
    scenario: &Scenario,
    mass_kg: f64,
    height_m: f64,
    system_efficiency_pct: f64,
    cycles: u32,
) -> Result<MaterialSummary, GessError> {
    let comparison = generate_comparison(mass_kg, height_m, system_efficiency_pct, cycles)?;
    let filtered: Vec<MaterialSummary> = comparison
        .iter()
        .filter(|s| scenario.constraints.admits(s, height_m))
        .cloned()
        .collect();
    let candidates = if filtered.is_empty() {
        tracing::warn!(
            scenario = scenario.key,
            "no material satisfies the scenario constraints; using the full catalog"
        );
        &comparison
    } else {
        &filtered
    };
    select_best(candidates, scenario.priority)
        .cloned()
        .ok_or_else(|| GessError::invalid("materials", "재료 카탈로그가 비어 있습니다."))
}

static SCENARIOS: &[Scenario] = &[
    Scenario {
        key: "urban_constrained",
        name: "Urban Constrained",
        description: "Limited space urban deployment",
        constraints: ScenarioConstraints {
            max_volume_m3: Some(500.0),
            max_height_m: Some(100.0),
            max_relative_cost: None,
            min_power_kw: None,
        },
        priority: Criterion::EnergyDensity,
    },
    Scenario {
        key: "low_budget",
        name: "Low Budget",
        description: "Cost-optimized rural installation",
        constraints: ScenarioConstraints {
            max_volume_m3: None,
            max_height_m: Some(150.0),
            max_relative_cost: Some(2),
            min_power_kw: None,
        },
        priority: Criterion::Cost,
    },
    Scenario {
        key: "high_power",
        name: "High Power",
        description: "Grid-scale power delivery",
        constraints: ScenarioConstraints {
            max_volume_m3: None,
            max_height_m: Some(200.0),
            max_relative_cost: None,
            min_power_kw: Some(500.0),
        },
        priority: Criterion::PowerOutput,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &'static str, efficiency_pct: f64) -> MaterialSummary {
        MaterialSummary {
            material: name,
            potential_energy_mj: 1.0,
            recovered_energy_mj: 1.0,
            efficiency_pct,
            lifespan: 1,
            volume_m3: 1.0,
            cost_effectiveness: 1.0,
            energy_density: 1.0,
            self_discharge_pct: 0.0,
            relative_cost: 1,
            max_power_kw: 0.0,
            color: "#000000",
        }
    }

    #[test]
    fn ties_keep_the_first_candidate() {
        let candidates = [summary("A", 50.0), summary("B", 70.0), summary("C", 70.0)];
        let best = select_best(&candidates, Criterion::Efficiency).map(|s| s.material);
        assert_eq!(best, Some("B"));
    }

    #[test]
    fn empty_candidates_yield_none() {
        assert!(select_best(&[], Criterion::Cost).is_none());
    }

    #[test]
    fn criterion_aliases_parse() {
        assert_eq!("material_cost".parse::<Criterion>(), Ok(Criterion::Cost));
        assert_eq!(
            "Energy-Density".parse::<Criterion>(),
            Ok(Criterion::EnergyDensity)
        );
        for c in Criterion::ALL {
            assert_eq!(c.key().parse::<Criterion>(), Ok(c));
        }
    }
}
