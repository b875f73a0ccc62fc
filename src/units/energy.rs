use serde::{Deserialize, Serialize};

use crate::gess::constants::J_PER_KWH;

/// 에너지 단위. 내부 기준은 줄(J)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    Joule,
    Kilojoule,
    Megajoule,
    WattHour,
    KilowattHour,
}

impl EnergyUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            EnergyUnit::Joule => "J",
            EnergyUnit::Kilojoule => "kJ",
            EnergyUnit::Megajoule => "MJ",
            EnergyUnit::WattHour => "Wh",
            EnergyUnit::KilowattHour => "kWh",
        }
    }
}

fn to_joule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Joule => value,
        EnergyUnit::Kilojoule => value * 1000.0,
        EnergyUnit::Megajoule => value * 1.0e6,
        EnergyUnit::WattHour => value * 3600.0,
        EnergyUnit::KilowattHour => value * J_PER_KWH,
    }
}

fn from_joule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Joule => value,
        EnergyUnit::Kilojoule => value / 1000.0,
        EnergyUnit::Megajoule => value / 1.0e6,
        EnergyUnit::WattHour => value / 3600.0,
        EnergyUnit::KilowattHour => value / J_PER_KWH,
    }
}

/// 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    let j = to_joule(value, from);
    from_joule(j, to)
}

/// 줄 값을 크기에 맞춰 J/kJ/MJ로 표시한다.
pub fn format_energy(joules: f64) -> String {
    let unit = if joules.abs() >= 1.0e6 {
        EnergyUnit::Megajoule
    } else if joules.abs() >= 1.0e3 {
        EnergyUnit::Kilojoule
    } else {
        EnergyUnit::Joule
    };
    format!(
        "{:.2} {}",
        convert_energy(joules, EnergyUnit::Joule, unit),
        unit.symbol()
    )
}

/// kWh 값을 1 kWh 미만이면 Wh로 표시한다.
pub fn format_kwh(kwh: f64) -> String {
    if kwh.abs() >= 1.0 {
        format!("{kwh:.2} kWh")
    } else {
        format!("{:.0} Wh", kwh * 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn kwh_is_three_point_six_megajoules() {
        let mj = convert_energy(1.0, EnergyUnit::KilowattHour, EnergyUnit::Megajoule);
        assert_relative_eq!(mj, 3.6, max_relative = 1e-12);
        let wh = convert_energy(2.5, EnergyUnit::KilowattHour, EnergyUnit::WattHour);
        assert_relative_eq!(wh, 2500.0, max_relative = 1e-12);
    }

    #[test]
    fn format_scales_by_magnitude() {
        assert_eq!(format_energy(2_500_000.0), "2.50 MJ");
        assert_eq!(format_energy(2_500.0), "2.50 kJ");
        assert_eq!(format_energy(12.0), "12.00 J");
        assert_eq!(format_kwh(0.25), "250 Wh");
        assert_eq!(format_kwh(1.5), "1.50 kWh");
    }
}
