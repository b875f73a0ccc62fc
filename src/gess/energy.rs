use serde::{Deserialize, Serialize};

use crate::gess::constants::*;
use crate::gess::self_discharge::{apply_self_discharge, degradation};
use crate::gess::{ensure_non_negative, ensure_positive, GessError};
use crate::material_db::MaterialData;
use crate::units::{convert_energy, EnergyUnit};

/// 1회 계산에 쓰는 운전 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingParameters {
    /// 부하 질량 [kg]
    pub mass_kg: f64,
    /// 인양 높이 [m]
    pub height_m: f64,
    /// 시스템 효율 [%] (0~100)
    pub system_efficiency_pct: f64,
    /// 누적 운전 사이클
    pub cycles: u32,
    /// 저장 경과 시간 [h]
    #[serde(default = "default_time_elapsed")]
    pub time_elapsed_h: f64,
}

fn default_time_elapsed() -> f64 {
    DEFAULT_TIME_ELAPSED_H
}

impl OperatingParameters {
    pub fn new(mass_kg: f64, height_m: f64, system_efficiency_pct: f64, cycles: u32) -> Self {
        Self {
            mass_kg,
            height_m,
            system_efficiency_pct,
            cycles,
            time_elapsed_h: DEFAULT_TIME_ELAPSED_H,
        }
    }

    pub fn with_time_elapsed(mut self, hours: f64) -> Self {
        self.time_elapsed_h = hours;
        self
    }

    /// 계산 전에 입력 범위를 검증한다.
    pub fn validate(&self) -> Result<(), GessError> {
        ensure_positive("mass_kg", self.mass_kg)?;
        ensure_positive("height_m", self.height_m)?;
        if !(0.0..=100.0).contains(&self.system_efficiency_pct) {
            return Err(GessError::invalid(
                "system_efficiency_pct",
                "시스템 효율은 0~100% 범위여야 합니다.",
            ));
        }
        ensure_non_negative("time_elapsed_h", self.time_elapsed_h)
    }
}

impl Default for OperatingParameters {
    fn default() -> Self {
        Self::new(5000.0, 100.0, 85.0, 1000)
    }
}

/// 에너지 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyResult {
    /// 위치 에너지 [J]
    pub potential_energy_j: f64,
    /// 자기방전·열화 적용 전 회수 에너지 [J]
    pub baseline_recovered_energy_j: f64,
    /// 최종 회수 에너지 [J]
    pub recovered_energy_j: f64,
    /// 인양에 필요한 투입 에너지 [kWh]
    pub input_energy_kwh: f64,
    /// 발전으로 얻는 출력 에너지 [kWh]
    pub output_energy_kwh: f64,
    /// 명목 손실량 [J]. 시간 기준이 없으므로 전력이 아니라 에너지 차이다.
    pub power_loss_j: f64,
    /// 부하를 반영한 유효 수명 [cycle]
    pub total_lifespan: u64,
    /// 필요 체적 [m³]
    pub volume_required_m3: f64,
    /// 에너지 밀도 [kWh/m³]
    pub energy_density_kwh_per_m3: f64,
    /// 왕복 효율 [%]
    pub round_trip_efficiency_pct: f64,
    /// 자기방전율 [%/h]
    pub self_discharge_rate_pct: f64,
    /// 사이클당 열화율 [%]
    pub degradation_rate_pct: f64,
    /// 누적 열화(분율, 최대 0.5)
    pub total_degradation: f64,
    /// 비용 효과 점수(무차원, 클수록 유리)
    pub cost_effectiveness: f64,
}

impl EnergyResult {
    /// 회수 에너지 / 위치 에너지 [%]
    pub fn efficiency_pct(&self) -> f64 {
        self.recovered_energy_j / self.potential_energy_j * 100.0
    }
}

/// 위치 에너지 E = m g h [J]
pub fn potential_energy_j(mass_kg: f64, height_m: f64) -> f64 {
    mass_kg * G * height_m
}

/// 물성 범위를 검증하고, 투입 에너지 계산에 쓰는 효율이 0이 아닌지 확인한다.
fn check_material(material: &MaterialData) -> Result<(), GessError> {
    material.validate()?;
    ensure_positive("lift_efficiency", material.lift_efficiency)?;
    ensure_positive("generation_efficiency", material.generation_efficiency)
}

/// 재료와 운전 조건으로 GESS 성능 지표를 계산한다.
///
/// 회수 에너지는 재료 효율 범위의 중앙값과 시스템 효율로 기준값을 잡은 뒤
/// 자기방전, 사이클 열화 순으로 적용한다. 투입/출력 에너지와 왕복 효율은
/// 인양/발전 효율 쌍으로 따로 계산한다.
pub fn calculate(
    material: &MaterialData,
    params: &OperatingParameters,
) -> Result<EnergyResult, GessError> {
    params.validate()?;
    check_material(material)?;

    let potential = potential_energy_j(params.mass_kg, params.height_m);
    let potential_kwh = convert_energy(potential, EnergyUnit::Joule, EnergyUnit::KilowattHour);

    let input_energy_kwh = potential_kwh / material.lift_efficiency;
    let output_energy_kwh = potential_kwh * material.generation_efficiency;
    let round_trip_efficiency_pct = material.round_trip_efficiency() * 100.0;

    let baseline =
        potential * material.efficiency.midpoint() * (params.system_efficiency_pct / 100.0);
    let discharged = apply_self_discharge(baseline, material, params.time_elapsed_h)?;
    let wear = degradation(material, params.cycles);
    let recovered = discharged * wear.average_efficiency_factor;

    let volume = params.mass_kg / material.density;
    let recovered_kwh = convert_energy(recovered, EnergyUnit::Joule, EnergyUnit::KilowattHour);
    let energy_density = recovered_kwh / volume;

    let load_factor = (params.mass_kg / LOAD_FACTOR_REFERENCE_KG).min(MAX_LOAD_FACTOR);
    let effective_lifespan = (material.lifespan_cycles / load_factor).floor();

    let cost_effectiveness =
        (energy_density * effective_lifespan) / (f64::from(material.relative_cost) * volume);

    Ok(EnergyResult {
        potential_energy_j: potential,
        baseline_recovered_energy_j: baseline,
        recovered_energy_j: recovered,
        input_energy_kwh,
        output_energy_kwh,
        power_loss_j: potential - recovered,
        total_lifespan: effective_lifespan as u64,
        volume_required_m3: volume,
        energy_density_kwh_per_m3: energy_density,
        round_trip_efficiency_pct,
        self_discharge_rate_pct: material.self_discharge_rate * 100.0,
        degradation_rate_pct: material.efficiency_loss * 100.0,
        total_degradation: wear.total,
        cost_effectiveness,
    })
}

/// 인양/발전 효율만으로 본 헤드라인 에너지 수치.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectEnergy {
    /// 위치 에너지 [kWh]
    pub potential_kwh: f64,
    /// 투입 에너지 [kWh]
    pub input_kwh: f64,
    /// 출력 에너지 [kWh]
    pub output_kwh: f64,
    /// 왕복 효율 [%]
    pub round_trip_pct: f64,
}

/// 재료별 인양/발전 효율 기준 투입·출력 에너지를 계산한다.
pub fn project_energy(
    mass_kg: f64,
    height_m: f64,
    material: &MaterialData,
) -> Result<ProjectEnergy, GessError> {
    ensure_positive("mass_kg", mass_kg)?;
    ensure_positive("height_m", height_m)?;
    check_material(material)?;
    let potential_kwh = potential_energy_j(mass_kg, height_m) / J_PER_KWH;
    Ok(ProjectEnergy {
        potential_kwh,
        input_kwh: potential_kwh / material.lift_efficiency,
        output_kwh: potential_kwh * material.generation_efficiency,
        round_trip_pct: material.round_trip_efficiency() * 100.0,
    })
}
