//! 목표 에너지 수요를 충족하기 위한 질량/높이 산정.
//! E = m·g·h·η 를 질량 또는 높이에 대해 푼다.

use crate::gess::constants::*;
use crate::gess::{ensure_non_negative, ensure_positive, GessError};
use crate::material_db::{materials, MaterialData};

fn round_trip_of(material: &MaterialData) -> Result<f64, GessError> {
    material.validate()?;
    let eta = material.round_trip_efficiency();
    ensure_positive("round_trip_efficiency", eta)?;
    Ok(eta)
}

/// 주어진 높이에서 목표 에너지를 얻는 데 필요한 질량 [kg].
pub fn required_mass_for_energy(
    target_energy_kwh: f64,
    height_m: f64,
    material: &MaterialData,
) -> Result<f64, GessError> {
    ensure_non_negative("target_energy_kwh", target_energy_kwh)?;
    ensure_positive("height_m", height_m)?;
    let eta = round_trip_of(material)?;
    Ok(target_energy_kwh * J_PER_KWH / (G * height_m * eta))
}

/// 주어진 질량으로 목표 에너지를 얻는 데 필요한 높이 [m].
pub fn required_height_for_energy(
    target_energy_kwh: f64,
    mass_kg: f64,
    material: &MaterialData,
) -> Result<f64, GessError> {
    ensure_non_negative("target_energy_kwh", target_energy_kwh)?;
    ensure_positive("mass_kg", mass_kg)?;
    let eta = round_trip_of(material)?;
    Ok(target_energy_kwh * J_PER_KWH / (mass_kg * G * eta))
}

/// 체적 = 질량 / 밀도 [m³]
pub fn calc_volume(mass_kg: f64, density: f64) -> Result<f64, GessError> {
    ensure_positive("density", density)?;
    ensure_non_negative("mass_kg", mass_kg)?;
    Ok(mass_kg / density)
}

/// 발전 효율 η_gen만 고려해 목표 전력량을 내는 데 필요한 기계 에너지 [kJ].
pub fn mech_energy_for_demand_kj(energy_kwh: f64) -> f64 {
    energy_kwh * KWH_TO_KJ / ETA_GEN
}

/// 설비 부하 프로필.
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub typical_loads: &'static str,
    pub power_kw: f64,
    pub time_h: f64,
    pub height_m: f64,
}

/// 설비별 산정 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityEstimate {
    pub profile: &'static FacilityProfile,
    /// E = P × t [kWh]
    pub energy_kwh: f64,
    /// E_mech = E × 3600 / η_gen [kJ]
    pub mech_energy_kj: f64,
    /// m = E_mech × 1000 / (g × h) [kg]
    pub required_mass_kg: f64,
}

pub fn facility_profiles() -> &'static [FacilityProfile] {
    FACILITIES
}

/// 설비 부하 프로필마다 필요한 질량을 계산한다.
pub fn generate_facility_profiles() -> Vec<FacilityEstimate> {
    FACILITIES
        .iter()
        .map(|profile| {
            let energy_kwh = profile.power_kw * profile.time_h;
            let mech_energy_kj = mech_energy_for_demand_kj(energy_kwh);
            FacilityEstimate {
                profile,
                energy_kwh,
                mech_energy_kj,
                required_mass_kg: mech_energy_kj * 1000.0 / (G * profile.height_m),
            }
        })
        .collect()
}

/// 높이-질량 트레이드오프의 한 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightTradeoff {
    pub height_m: f64,
    pub required_mass_kg: f64,
}

/// 목표 전력량에 대해 높이별 필요 질량을 만든다.
pub fn generate_height_tradeoff(energy_kwh: f64) -> Result<Vec<HeightTradeoff>, GessError> {
    ensure_non_negative("target_energy_kwh", energy_kwh)?;
    let mech_energy_j = mech_energy_for_demand_kj(energy_kwh) * 1000.0;
    Ok(TRADEOFF_HEIGHTS_M
        .iter()
        .map(|&height_m| HeightTradeoff {
            height_m,
            required_mass_kg: mech_energy_j / (G * height_m),
        })
        .collect())
}

/// 학교 유형별 일간 에너지 수요.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolDemand {
    pub name: &'static str,
    pub daily_energy_kwh: f64,
    pub description: &'static str,
    pub typical_load: &'static str,
}

pub fn school_energy_demands() -> &'static [SchoolDemand] {
    SCHOOLS
}

/// 학교 분석에서 재료 하나의 요구량.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolMaterialRequirement {
    pub material: &'static str,
    /// 고정 질량에서 필요한 높이 [m]
    pub required_height_m: f64,
    /// 고정 높이에서 필요한 질량 [kg]
    pub required_mass_kg: f64,
    pub round_trip_efficiency_pct: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchoolAnalytics {
    pub school: &'static str,
    pub daily_energy_kwh: f64,
    pub typical_load: &'static str,
    pub materials: Vec<SchoolMaterialRequirement>,
}

/// 학교 유형마다 재료별 요구 높이(고정 질량)와 요구 질량(고정 높이)을 계산한다.
pub fn generate_school_analytics(
    constant_mass_kg: f64,
    constant_height_m: f64,
) -> Result<Vec<SchoolAnalytics>, GessError> {
    SCHOOLS
        .iter()
        .map(|school| {
            let per_material = materials()
                .iter()
                .map(|m| {
                    Ok(SchoolMaterialRequirement {
                        material: m.name,
                        required_height_m: required_height_for_energy(
                            school.daily_energy_kwh,
                            constant_mass_kg,
                            m,
                        )?,
                        required_mass_kg: required_mass_for_energy(
                            school.daily_energy_kwh,
                            constant_height_m,
                            m,
                        )?,
                        round_trip_efficiency_pct: m.round_trip_efficiency() * 100.0,
                        color: m.color,
                    })
                })
                .collect::<Result<Vec<_>, GessError>>()?;
            Ok(SchoolAnalytics {
                school: school.name,
                daily_energy_kwh: school.daily_energy_kwh,
                typical_load: school.typical_load,
                materials: per_material,
            })
        })
        .collect()
}

static FACILITIES: &[FacilityProfile] = &[
    FacilityProfile {
        name: "School",
        description: "School running overnight",
        typical_loads: "Lighting, security, servers, ventilation",
        power_kw: 10.0,
        time_h: 10.0,
        height_m: 100.0,
    },
    FacilityProfile {
        name: "Small Clinic",
        description: "Critical loads during an outage",
        typical_loads: "Refrigeration, medical devices, lighting",
        power_kw: 15.0,
        time_h: 8.0,
        height_m: 100.0,
    },
    FacilityProfile {
        name: "Office Building",
        description: "Evening peak shaving",
        typical_loads: "HVAC, computers, lighting",
        power_kw: 50.0,
        time_h: 4.0,
        height_m: 150.0,
    },
    FacilityProfile {
        name: "Household",
        description: "Single home overnight",
        typical_loads: "Refrigerator, lighting, appliances",
        power_kw: 1.5,
        time_h: 12.0,
        height_m: 50.0,
    },
];

static SCHOOLS: &[SchoolDemand] = &[
    SchoolDemand {
        name: "Rural Primary School",
        daily_energy_kwh: 50.0,
        description: "Small campus, daytime use",
        typical_load: "Lighting, fans, a few computers",
    },
    SchoolDemand {
        name: "Urban Primary School",
        daily_energy_kwh: 150.0,
        description: "Medium campus",
        typical_load: "Lighting, HVAC, computer lab",
    },
    SchoolDemand {
        name: "Secondary School",
        daily_energy_kwh: 400.0,
        description: "Large campus with labs",
        typical_load: "HVAC, science labs, kitchen, IT",
    },
    SchoolDemand {
        name: "University Building",
        daily_energy_kwh: 1200.0,
        description: "Lecture halls and research labs",
        typical_load: "HVAC, lab equipment, servers, lighting",
    },
];
