//! 한 변수만 바꿔 가며 재료별 결과를 표로 만드는 스윕 생성기.
//! 모든 생성기는 고정된 표본점 목록을 쓰며 같은 입력에 항상 같은 표를 돌려준다.

use crate::gess::constants::*;
use crate::gess::energy::{calculate, potential_energy_j, OperatingParameters};
use crate::gess::sizing::{calc_volume, required_mass_for_energy};
use crate::gess::{ensure_positive, GessError};
use crate::material_db::{materials, MaterialData};
use crate::units::{convert_energy, EnergyUnit};

/// 재료별 비교 요약. 최적화기의 후보 단위다.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialSummary {
    pub material: &'static str,
    /// 위치 에너지 [MJ]
    pub potential_energy_mj: f64,
    /// 회수 에너지 [MJ]
    pub recovered_energy_mj: f64,
    /// 회수/위치 에너지 [%]
    pub efficiency_pct: f64,
    /// 유효 수명 [cycle]
    pub lifespan: u64,
    /// 필요 체적 [m³]
    pub volume_m3: f64,
    pub cost_effectiveness: f64,
    /// 에너지 밀도 [kWh/m³]
    pub energy_density: f64,
    /// 자기방전율 [%/h]
    pub self_discharge_pct: f64,
    pub relative_cost: u8,
    /// 정격 최대 출력 [kW]. 정보가 없으면 0.
    pub max_power_kw: f64,
    pub color: &'static str,
}

fn summarize(
    material: &'static MaterialData,
    params: &OperatingParameters,
) -> Result<MaterialSummary, GessError> {
    let r = calculate(material, params)?;
    Ok(MaterialSummary {
        material: material.name,
        potential_energy_mj: to_mj(r.potential_energy_j),
        recovered_energy_mj: to_mj(r.recovered_energy_j),
        efficiency_pct: r.efficiency_pct(),
        lifespan: r.total_lifespan,
        volume_m3: r.volume_required_m3,
        cost_effectiveness: r.cost_effectiveness,
        energy_density: r.energy_density_kwh_per_m3,
        self_discharge_pct: r.self_discharge_rate_pct,
        relative_cost: material.relative_cost,
        max_power_kw: material.power_output.map_or(0.0, |p| p.max_kw),
        color: material.color,
    })
}

fn to_mj(joules: f64) -> f64 {
    convert_energy(joules, EnergyUnit::Joule, EnergyUnit::Megajoule)
}

/// 고정 조건에서 카탈로그 전 재료의 비교 요약을 카탈로그 순서대로 만든다.
pub fn generate_comparison(
    mass_kg: f64,
    height_m: f64,
    system_efficiency_pct: f64,
    cycles: u32,
) -> Result<Vec<MaterialSummary>, GessError> {
    let params = OperatingParameters::new(mass_kg, height_m, system_efficiency_pct, cycles);
    materials().iter().map(|m| summarize(m, &params)).collect()
}

/// 스윕 표의 한 행. `values`는 카탈로그 순서의 (재료명, 회수 에너지 MJ) 목록.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    /// 변화시킨 변수 값 (질량 kg 또는 높이 m)
    pub parameter: f64,
    pub values: Vec<(&'static str, f64)>,
}

impl SweepRow {
    pub fn value_for(&self, material: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(material))
            .map(|(_, v)| *v)
    }
}

fn sweep<F>(samples: &[f64], make_params: F) -> Result<Vec<SweepRow>, GessError>
where
    F: Fn(f64) -> OperatingParameters,
{
    samples
        .iter()
        .map(|&x| {
            let params = make_params(x);
            let values = materials()
                .iter()
                .map(|m| Ok((m.name, to_mj(calculate(m, &params)?.recovered_energy_j))))
                .collect::<Result<Vec<_>, GessError>>()?;
            Ok(SweepRow {
                parameter: x,
                values,
            })
        })
        .collect()
}

/// 높이를 고정하고 질량 1000~10000 kg 구간의 회수 에너지(MJ)를 만든다.
pub fn generate_mass_sweep(
    height_m: f64,
    system_efficiency_pct: f64,
    cycles: u32,
) -> Result<Vec<SweepRow>, GessError> {
    sweep(&MASS_SAMPLES_KG, |mass| {
        OperatingParameters::new(mass, height_m, system_efficiency_pct, cycles)
    })
}

/// 질량을 고정하고 높이 10~100 m 구간의 회수 에너지(MJ)를 만든다.
pub fn generate_height_sweep(
    mass_kg: f64,
    system_efficiency_pct: f64,
    cycles: u32,
) -> Result<Vec<SweepRow>, GessError> {
    sweep(&HEIGHT_SAMPLES_M, |height| {
        OperatingParameters::new(mass_kg, height, system_efficiency_pct, cycles)
    })
}

/// 에너지 수요 스윕에서 재료 하나의 요구량.
#[derive(Debug, Clone, PartialEq)]
pub struct DemandMaterialRequirement {
    pub material: &'static str,
    /// 왕복 효율 반영 요구 질량 [kg]
    pub required_mass_kg: f64,
    /// 요구 체적 [m³]
    pub volume_m3: f64,
}

/// 에너지 수요 스윕의 한 행.
#[derive(Debug, Clone, PartialEq)]
pub struct DemandRow {
    pub demand_kwh: f64,
    /// 손실 없는 기준 요구 질량 m = E·3.6e6 / (g·h) [kg]
    pub required_mass_kg: f64,
    pub mech_energy_kj: f64,
    /// 기준 충전 시간 동안의 충전 전력 [kW]
    pub charge_power_kw: f64,
    pub materials: Vec<DemandMaterialRequirement>,
}

/// 높이를 고정하고 50~500 kWh 수요에 필요한 질량과 재료별 체적을 만든다.
pub fn generate_energy_demand_sweep(height_m: f64) -> Result<Vec<DemandRow>, GessError> {
    ensure_positive("height_m", height_m)?;
    DEMAND_SAMPLES_KWH
        .iter()
        .map(|&demand_kwh| {
            let required_mass_kg = demand_kwh * J_PER_KWH / (G * height_m);
            let per_material = materials()
                .iter()
                .map(|m| {
                    let mass = required_mass_for_energy(demand_kwh, height_m, m)?;
                    Ok(DemandMaterialRequirement {
                        material: m.name,
                        required_mass_kg: mass,
                        volume_m3: calc_volume(mass, m.density)?,
                    })
                })
                .collect::<Result<Vec<_>, GessError>>()?;
            Ok(DemandRow {
                demand_kwh,
                required_mass_kg,
                mech_energy_kj: demand_kwh * KWH_TO_KJ,
                charge_power_kw: demand_kwh / SCENARIO_CHARGE_TIME_H,
                materials: per_material,
            })
        })
        .collect()
}

/// 밀도·비용 비교용 재료별 지표.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityComparisonRow {
    pub material: &'static str,
    /// 에너지 밀도 [kWh/m³]
    pub energy_density: f64,
    /// 왕복 효율 [%]
    pub efficiency_pct: f64,
    /// 자기방전율 [%/h]
    pub self_discharge_pct: f64,
    pub relative_cost: u8,
    pub color: &'static str,
}

pub fn generate_energy_density_comparison(
    mass_kg: f64,
    height_m: f64,
    system_efficiency_pct: f64,
    cycles: u32,
) -> Result<Vec<DensityComparisonRow>, GessError> {
    let params = OperatingParameters::new(mass_kg, height_m, system_efficiency_pct, cycles);
    materials()
        .iter()
        .map(|m| {
            let r = calculate(m, &params)?;
            Ok(DensityComparisonRow {
                material: m.name,
                energy_density: r.energy_density_kwh_per_m3,
                efficiency_pct: r.round_trip_efficiency_pct,
                self_discharge_pct: r.self_discharge_rate_pct,
                relative_cost: m.relative_cost,
                color: m.color,
            })
        })
        .collect()
}

/// 재료별 인양/발전/왕복 효율과 100 kWh 투입 시 에너지 흐름.
#[derive(Debug, Clone, PartialEq)]
pub struct EfficiencyBreakdown {
    pub material: &'static str,
    pub lift_efficiency_pct: f64,
    pub generation_efficiency_pct: f64,
    pub round_trip_efficiency_pct: f64,
    pub input_kwh: f64,
    pub after_lift_kwh: f64,
    pub after_generation_kwh: f64,
    pub color: &'static str,
}

pub fn generate_efficiency_breakdown() -> Vec<EfficiencyBreakdown> {
    materials()
        .iter()
        .map(|m| {
            let after_lift = LADDER_INPUT_KWH * m.lift_efficiency;
            EfficiencyBreakdown {
                material: m.name,
                lift_efficiency_pct: m.lift_efficiency * 100.0,
                generation_efficiency_pct: m.generation_efficiency * 100.0,
                round_trip_efficiency_pct: m.round_trip_efficiency() * 100.0,
                input_kwh: LADDER_INPUT_KWH,
                after_lift_kwh: after_lift,
                after_generation_kwh: after_lift * m.generation_efficiency,
                color: m.color,
            }
        })
        .collect()
}

/// 프로젝트 기준 효율(η_gen = 0.9)로 만든 충·방전 시뮬레이션 행.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationRow {
    pub mass_kg: f64,
    pub height_m: f64,
    /// E_mech = m g h / 1000 [kJ]
    pub mech_energy_kj: f64,
    /// E_elec = E_mech / 3600 [kWh]
    pub elec_energy_kwh: f64,
    pub charge_power_kw: f64,
    /// E_out = E_elec × η_gen [kWh]
    pub energy_out_kwh: f64,
    pub discharge_power_kw: f64,
}

fn simulation_row(mass_kg: f64, height_m: f64) -> SimulationRow {
    let mech_energy_kj = potential_energy_j(mass_kg, height_m) / 1000.0;
    let elec_energy_kwh = mech_energy_kj / KWH_TO_KJ;
    let energy_out_kwh = elec_energy_kwh * ETA_GEN;
    SimulationRow {
        mass_kg,
        height_m,
        mech_energy_kj,
        elec_energy_kwh,
        charge_power_kw: elec_energy_kwh / SCENARIO_CHARGE_TIME_H,
        energy_out_kwh,
        discharge_power_kw: energy_out_kwh / SCENARIO_DISCHARGE_TIME_H,
    }
}

/// 높이 100 m 고정, 질량 변화 시뮬레이션.
pub fn generate_mass_scenario() -> Vec<SimulationRow> {
    MASS_SAMPLES_KG
        .iter()
        .map(|&m| simulation_row(m, MASS_SCENARIO_HEIGHT_M))
        .collect()
}

/// 질량 5000 kg 고정, 높이 변화 시뮬레이션.
pub fn generate_height_scenario() -> Vec<SimulationRow> {
    HEIGHT_SAMPLES_M
        .iter()
        .map(|&h| simulation_row(HEIGHT_SCENARIO_MASS_KG, h))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn simulation_row_follows_project_equations() {
        let row = simulation_row(1000.0, 100.0);
        assert_relative_eq!(row.mech_energy_kj, 981.0, max_relative = 1e-12);
        assert_relative_eq!(row.elec_energy_kwh, 981.0 / 3600.0, max_relative = 1e-12);
        assert_relative_eq!(
            row.discharge_power_kw,
            row.energy_out_kwh / SCENARIO_DISCHARGE_TIME_H,
            max_relative = 1e-12
        );
        assert_relative_eq!(row.energy_out_kwh, row.elec_energy_kwh * 0.9, max_relative = 1e-12);
    }
}
