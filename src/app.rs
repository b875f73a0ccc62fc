use crate::cli::{Command, SweepKind};
use crate::config::Config;
use crate::gess::{self, GessError};
use crate::i18n::{self, keys, Translator};
use crate::material_db;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// GESS 계산 오류
    Calc(GessError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Calc(e) => write!(f, "계산 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// 표준 입력이 닫혀 더 읽을 수 없는 경우.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, AppError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<GessError> for AppError {
    fn from(value: GessError) -> Self {
        AppError::Calc(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
/// 계산 오류는 메뉴 안에서 보고하고 루프를 계속한다. 입력이 끝나면 종료 메뉴와 같이 처리한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        let choice = match ui_cli::main_menu(tr) {
            Err(e) if e.is_end_of_input() => MenuChoice::Exit,
            other => other?,
        };
        let outcome = match choice {
            MenuChoice::Calculate => ui_cli::handle_calculate(tr, config),
            MenuChoice::Sweeps => ui_cli::handle_sweeps(tr, config),
            MenuChoice::Optimize => ui_cli::handle_optimize(tr, config),
            MenuChoice::Scenario => ui_cli::handle_scenario(tr, config),
            MenuChoice::Sizing => ui_cli::handle_sizing(tr, config),
            MenuChoice::Settings => save_settings(tr, config),
            MenuChoice::Exit => break,
        };
        match outcome {
            Err(AppError::Calc(e)) => {
                tracing::warn!(error = %e, "calculation rejected");
                println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            }
            Err(e) if e.is_end_of_input() => break,
            other => other?,
        }
    }
    config.save()?;
    println!("{}", tr.t(i18n::keys::APP_EXIT));
    Ok(())
}

fn save_settings(tr: &Translator, config: &mut Config) -> Result<(), AppError> {
    ui_cli::handle_settings(tr, config)?;
    config.save()?;
    Ok(())
}

/// 서브커맨드 하나를 실행하고 결과를 출력한다.
pub fn execute(command: Command, config: &Config, tr: &Translator) -> Result<(), AppError> {
    tracing::debug!(?command, "executing subcommand");
    match command {
        Command::Calc { material, params } => {
            let code = material.as_deref().unwrap_or(&config.analysis.material);
            let material = material_db::material(code)?;
            let params = params.resolve(&config.defaults);
            let result = gess::calculate(material, &params)?;
            ui_cli::print_energy_result(tr, material, &result);
            ui_cli::print_project_energy(tr, material, &params)?;
        }
        Command::Sweep { kind, params } => {
            let p = params.resolve(&config.defaults);
            match kind {
                SweepKind::Mass => ui_cli::print_sweep(
                    "mass [kg]",
                    &gess::generate_mass_sweep(p.height_m, p.system_efficiency_pct, p.cycles)?,
                ),
                SweepKind::Height => ui_cli::print_sweep(
                    "height [m]",
                    &gess::generate_height_sweep(p.mass_kg, p.system_efficiency_pct, p.cycles)?,
                ),
                SweepKind::Demand => {
                    ui_cli::print_demand_sweep(&gess::generate_energy_demand_sweep(p.height_m)?)
                }
                SweepKind::Density => ui_cli::print_density_comparison(&p)?,
                SweepKind::Efficiency => ui_cli::print_efficiency_breakdown(),
                SweepKind::MassSim => {
                    ui_cli::print_simulation("mass [kg]", &gess::generate_mass_scenario(), |r| {
                        r.mass_kg
                    })
                }
                SweepKind::HeightSim => ui_cli::print_simulation(
                    "height [m]",
                    &gess::generate_height_scenario(),
                    |r| r.height_m,
                ),
            }
        }
        Command::Optimize { criterion, params } => {
            let criterion = match criterion {
                Some(s) => s.parse()?,
                None => config.analysis.criterion,
            };
            let p = params.resolve(&config.defaults);
            for summary in
                gess::generate_comparison(p.mass_kg, p.height_m, p.system_efficiency_pct, p.cycles)?
            {
                println!("{}:", summary.material);
                ui_cli::print_summary(&summary);
            }
            let best = gess::find_optimal_material(
                p.mass_kg,
                p.height_m,
                p.system_efficiency_pct,
                p.cycles,
                criterion,
            )?;
            println!("{} {} ({criterion})", tr.t(keys::RESULT_OPTIMAL), best.material);
        }
        Command::Recommend { scenario, params } => {
            let scenario = gess::find_scenario(&scenario)?;
            let p = params.resolve(&config.defaults);
            let best = gess::recommend_for_scenario(
                scenario,
                p.mass_kg,
                p.height_m,
                p.system_efficiency_pct,
                p.cycles,
            )?;
            println!("{} {} [{}]", tr.t(keys::RESULT_RECOMMENDED), best.material, scenario.name);
            ui_cli::print_summary(&best);
        }
        Command::Size {
            energy_kwh,
            material,
            height,
            mass,
        } => {
            let code = material.as_deref().unwrap_or(&config.analysis.material);
            let material = material_db::material(code)?;
            match mass {
                Some(mass) => {
                    let h = gess::required_height_for_energy(energy_kwh, mass, material)?;
                    println!("{} {h:.2} m", tr.t(keys::RESULT_REQUIRED_HEIGHT));
                }
                None => {
                    let height = height.unwrap_or(config.defaults.height_m);
                    let m = gess::required_mass_for_energy(energy_kwh, height, material)?;
                    println!("{} {m:.1} kg", tr.t(keys::RESULT_REQUIRED_MASS));
                }
            }
        }
        Command::Facilities => ui_cli::print_facilities()?,
        Command::Schools { params } => {
            let p = params.resolve(&config.defaults);
            ui_cli::print_school_analytics(p.mass_kg, p.height_m)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unexpected_eof_ends_input() {
        let eof = AppError::Io(std::io::ErrorKind::UnexpectedEof.into());
        assert!(eof.is_end_of_input());
        let denied = AppError::Io(std::io::ErrorKind::PermissionDenied.into());
        assert!(!denied.is_end_of_input());
        let calc = AppError::Calc(GessError::UnknownMaterial("granite".into()));
        assert!(!calc.is_end_of_input());
    }
}
