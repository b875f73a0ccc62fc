//! 단위 정의 및 변환 모듈 모음.

pub mod energy;

pub use energy::{convert_energy, format_energy, format_kwh, EnergyUnit};
