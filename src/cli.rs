//! clap 기반 명령행 인자 정의. 서브커맨드 없이 실행하면 대화형 메뉴로 들어간다.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::gess::OperatingParameters;

#[derive(Debug, Parser)]
#[command(name = "gess_toolbox", version, about = "Gravity energy storage (GESS) toolbox")]
pub struct Cli {
    /// 표시 언어 (auto/ko/en-us)
    #[arg(long, short = 'L', global = true)]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 한 재료의 에너지 지표를 계산한다
    Calc {
        #[arg(long, short)]
        material: Option<String>,
        #[command(flatten)]
        params: ParamArgs,
    },
    /// 스윕/비교 표를 출력한다
    Sweep {
        #[arg(value_enum)]
        kind: SweepKind,
        #[command(flatten)]
        params: ParamArgs,
    },
    /// 기준에 따라 최적 재료를 찾는다
    Optimize {
        /// efficiency, lifespan, cost, energy_density, power_output
        #[arg(long, short)]
        criterion: Option<String>,
        #[command(flatten)]
        params: ParamArgs,
    },
    /// 시나리오 제약에 맞는 재료를 추천한다
    Recommend {
        /// urban_constrained, low_budget, high_power
        scenario: String,
        #[command(flatten)]
        params: ParamArgs,
    },
    /// 목표 에너지에 필요한 질량(--height) 또는 높이(--mass)를 구한다
    Size {
        #[arg(long)]
        energy_kwh: f64,
        #[arg(long, short)]
        material: Option<String>,
        #[arg(long, conflicts_with = "mass")]
        height: Option<f64>,
        #[arg(long)]
        mass: Option<f64>,
    },
    /// 설비 부하 프로필별 필요 질량
    Facilities,
    /// 학교 유형별 재료 요구량
    Schools {
        #[command(flatten)]
        params: ParamArgs,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SweepKind {
    Mass,
    Height,
    Demand,
    Density,
    Efficiency,
    MassSim,
    HeightSim,
}

/// 운전 조건 인자. 생략한 값은 설정 파일의 기본값을 쓴다.
#[derive(Debug, Clone, Default, Args)]
pub struct ParamArgs {
    /// 부하 질량 [kg]
    #[arg(long)]
    pub mass: Option<f64>,
    /// 인양 높이 [m]
    #[arg(long)]
    pub height: Option<f64>,
    /// 시스템 효율 [%]
    #[arg(long)]
    pub efficiency: Option<f64>,
    /// 운전 사이클 수
    #[arg(long)]
    pub cycles: Option<u32>,
    /// 저장 경과 시간 [h]
    #[arg(long)]
    pub hours: Option<f64>,
}

impl ParamArgs {
    pub fn resolve(&self, defaults: &OperatingParameters) -> OperatingParameters {
        OperatingParameters {
            mass_kg: self.mass.unwrap_or(defaults.mass_kg),
            height_m: self.height.unwrap_or(defaults.height_m),
            system_efficiency_pct: self.efficiency.unwrap_or(defaults.system_efficiency_pct),
            cycles: self.cycles.unwrap_or(defaults.cycles),
            time_elapsed_h: self.hours.unwrap_or(defaults.time_elapsed_h),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_params_fall_back_to_defaults() {
        let cli = Cli::try_parse_from(["gess_toolbox", "calc", "--mass", "2000"])
            .expect("parse calc");
        let Some(Command::Calc { params, material }) = cli.command else {
            panic!("expected calc command");
        };
        assert!(material.is_none());
        let p = params.resolve(&OperatingParameters::default());
        assert_eq!(p.mass_kg, 2000.0);
        assert_eq!(p.height_m, 100.0);
        assert_eq!(p.cycles, 1000);
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["gess_toolbox", "--lang", "en"]).expect("parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.lang.as_deref(), Some("en"));
    }

    #[test]
    fn size_rejects_both_mass_and_height() {
        let res = Cli::try_parse_from([
            "gess_toolbox",
            "size",
            "--energy-kwh",
            "100",
            "--height",
            "100",
            "--mass",
            "5000",
        ]);
        assert!(res.is_err());
    }
}
