//! 물리 상수와 프로젝트 기준값.

/// 중력가속도 [m/s²]
pub const G: f64 = 9.81;

/// 1 kWh = 3.6e6 J
pub const J_PER_KWH: f64 = 3.6e6;

/// 1 kWh = 3600 kJ
pub const KWH_TO_KJ: f64 = 3600.0;

/// 부하 계수 기준 질량 [kg]. 수명 = 공칭 수명 / min(2, m / 5000).
pub const LOAD_FACTOR_REFERENCE_KG: f64 = 5000.0;
pub const MAX_LOAD_FACTOR: f64 = 2.0;

/// 누적 열화 상한(분율)
pub const MAX_TOTAL_DEGRADATION: f64 = 0.5;

/// 시뮬레이션 표와 수요 산정에 쓰는 기준 발전 효율
pub const ETA_GEN: f64 = 0.90;

/// 기본 경과 시간 [h]
pub const DEFAULT_TIME_ELAPSED_H: f64 = 1.0;

// 기준 시뮬레이션 조건
pub const MASS_SCENARIO_HEIGHT_M: f64 = 100.0;
pub const HEIGHT_SCENARIO_MASS_KG: f64 = 5000.0;
pub const SCENARIO_CHARGE_TIME_H: f64 = 4.0;
pub const SCENARIO_DISCHARGE_TIME_H: f64 = 2.0;

pub const MASS_SAMPLES_KG: [f64; 10] = [
    1000.0, 2000.0, 3000.0, 4000.0, 5000.0, 6000.0, 7000.0, 8000.0, 9000.0, 10000.0,
];
pub const HEIGHT_SAMPLES_M: [f64; 10] = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0];
pub const DEMAND_SAMPLES_KWH: [f64; 10] = [
    50.0, 100.0, 150.0, 200.0, 250.0, 300.0, 350.0, 400.0, 450.0, 500.0,
];
pub const TRADEOFF_HEIGHTS_M: [f64; 8] = [10.0, 25.0, 50.0, 75.0, 100.0, 125.0, 150.0, 200.0];

/// 효율 비교 사다리의 투입 에너지 [kWh]
pub const LADDER_INPUT_KWH: f64 = 100.0;
