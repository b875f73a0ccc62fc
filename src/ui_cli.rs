use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::gess::{
    self, Criterion, DemandRow, EnergyResult, MaterialSummary, OperatingParameters, SimulationRow,
    SweepRow,
};
use crate::i18n::{keys, Translator};
use crate::material_db::{self, MaterialData};
use crate::units::{format_energy, format_kwh};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Sweeps,
    Optimize,
    Scenario,
    Sizing,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_CALCULATE,
        keys::MAIN_MENU_SWEEPS,
        keys::MAIN_MENU_OPTIMIZE,
        keys::MAIN_MENU_SCENARIO,
        keys::MAIN_MENU_SIZING,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Sweeps),
            "3" => return Ok(MenuChoice::Optimize),
            "4" => return Ok(MenuChoice::Scenario),
            "5" => return Ok(MenuChoice::Sizing),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 에너지 계산 메뉴를 처리한다.
pub fn handle_calculate(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));
    let material = read_material(tr, &cfg.analysis.material)?;
    let params = read_params(tr, &cfg.defaults, true)?;
    let result = gess::calculate(material, &params)?;
    print_energy_result(tr, material, &result);
    print_project_energy(tr, material, &params)?;
    Ok(())
}

/// 스윕/비교 메뉴를 처리한다.
pub fn handle_sweeps(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SWEEPS_HEADING));
    println!("{}", tr.t(keys::SWEEPS_OPTIONS_LINE1));
    println!("{}", tr.t(keys::SWEEPS_OPTIONS_LINE2));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let d = &cfg.defaults;
    match sel.trim() {
        "1" => {
            let height = read_f64_or(tr, keys::PROMPT_HEIGHT, d.height_m)?;
            let rows = gess::generate_mass_sweep(height, d.system_efficiency_pct, d.cycles)?;
            print_sweep("mass [kg]", &rows);
        }
        "2" => {
            let mass = read_f64_or(tr, keys::PROMPT_MASS, d.mass_kg)?;
            let rows = gess::generate_height_sweep(mass, d.system_efficiency_pct, d.cycles)?;
            print_sweep("height [m]", &rows);
        }
        "3" => {
            let height = read_f64_or(tr, keys::PROMPT_HEIGHT, d.height_m)?;
            print_demand_sweep(&gess::generate_energy_demand_sweep(height)?);
        }
        "4" => print_density_comparison(d)?,
        "5" => print_efficiency_breakdown(),
        "6" => print_simulation("mass [kg]", &gess::generate_mass_scenario(), |r| r.mass_kg),
        "7" => print_simulation("height [m]", &gess::generate_height_scenario(), |r| {
            r.height_m
        }),
        _ => println!("{}", tr.t(keys::INVALID_SELECTION)),
    }
    Ok(())
}

/// 최적 재료 메뉴를 처리한다.
pub fn handle_optimize(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::OPTIMIZE_HEADING));
    println!("{}", tr.t(keys::CRITERION_OPTIONS));
    let criterion = read_criterion(tr, cfg.analysis.criterion)?;
    let p = read_params(tr, &cfg.defaults, false)?;
    let best = gess::find_optimal_material(
        p.mass_kg,
        p.height_m,
        p.system_efficiency_pct,
        p.cycles,
        criterion,
    )?;
    println!("{} {} ({criterion})", tr.t(keys::RESULT_OPTIMAL), best.material);
    print_summary(&best);
    Ok(())
}

/// 시나리오 추천 메뉴를 처리한다.
pub fn handle_scenario(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SCENARIO_HEADING));
    let all = gess::scenarios();
    for (i, s) in all.iter().enumerate() {
        println!("{}) {} - {} [{}]", i + 1, s.name, s.description, s.priority);
    }
    let sel = read_line(tr.t(keys::PROMPT_SCENARIO))?;
    let Some(scenario) = sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| all.get(i))
    else {
        println!("{}", tr.t(keys::INVALID_SELECTION));
        return Ok(());
    };
    let p = read_params(tr, &cfg.defaults, false)?;
    let best = gess::recommend_for_scenario(
        scenario,
        p.mass_kg,
        p.height_m,
        p.system_efficiency_pct,
        p.cycles,
    )?;
    println!("{} {}", tr.t(keys::RESULT_RECOMMENDED), best.material);
    print_summary(&best);
    Ok(())
}

/// 설비 규모 산정 메뉴를 처리한다.
pub fn handle_sizing(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SIZING_HEADING));
    println!("{}", tr.t(keys::SIZING_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let d = &cfg.defaults;
    match sel.trim() {
        "1" => {
            let material = read_material(tr, &cfg.analysis.material)?;
            let energy = read_f64(tr, keys::PROMPT_TARGET_ENERGY)?;
            let height = read_f64_or(tr, keys::PROMPT_HEIGHT, d.height_m)?;
            let mass = gess::required_mass_for_energy(energy, height, material)?;
            println!("{} {mass:.1} kg", tr.t(keys::RESULT_REQUIRED_MASS));
        }
        "2" => {
            let material = read_material(tr, &cfg.analysis.material)?;
            let energy = read_f64(tr, keys::PROMPT_TARGET_ENERGY)?;
            let mass = read_f64_or(tr, keys::PROMPT_MASS, d.mass_kg)?;
            let height = gess::required_height_for_energy(energy, mass, material)?;
            println!("{} {height:.2} m", tr.t(keys::RESULT_REQUIRED_HEIGHT));
        }
        "3" => print_facilities()?,
        "4" => print_school_analytics(d.mass_kg, d.height_m)?,
        "5" => {
            let energy = read_f64(tr, keys::PROMPT_TARGET_ENERGY)?;
            for point in gess::generate_height_tradeoff(energy)? {
                println!("{:>8.1} m  {:>14.0} kg", point.height_m, point.required_mass_kg);
            }
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 새 기본 운전 조건을 입력받는다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {:?}", tr.t(keys::SETTINGS_CURRENT), cfg.defaults);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let params = read_params(tr, &cfg.defaults, true)?;
    params.validate()?;
    cfg.defaults = params;
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 에너지 계산 결과를 출력한다.
pub fn print_energy_result(tr: &Translator, material: &MaterialData, r: &EnergyResult) {
    println!("== {} ==", material.name);
    println!("{} {}", tr.t(keys::RESULT_POTENTIAL), format_energy(r.potential_energy_j));
    println!("{} {}", tr.t(keys::RESULT_RECOVERED), format_energy(r.recovered_energy_j));
    println!(
        "{} {} / {}",
        tr.t(keys::RESULT_INPUT_OUTPUT),
        format_kwh(r.input_energy_kwh),
        format_kwh(r.output_energy_kwh)
    );
    println!("{} {}", tr.t(keys::RESULT_POWER_LOSS), format_energy(r.power_loss_j));
    println!("{} {:.2} %", tr.t(keys::RESULT_EFFICIENCY), r.efficiency_pct());
    println!("{} {:.1} %", tr.t(keys::RESULT_ROUND_TRIP), r.round_trip_efficiency_pct);
    println!("{} {} cycles", tr.t(keys::RESULT_LIFESPAN), r.total_lifespan);
    println!("{} {:.3} m³", tr.t(keys::RESULT_VOLUME), r.volume_required_m3);
    println!(
        "{} {:.4} kWh/m³",
        tr.t(keys::RESULT_ENERGY_DENSITY),
        r.energy_density_kwh_per_m3
    );
    println!("{} {:.2} %/h", tr.t(keys::RESULT_SELF_DISCHARGE), r.self_discharge_rate_pct);
    println!(
        "{} {:.3} % / {:.4} %",
        tr.t(keys::RESULT_DEGRADATION),
        r.degradation_rate_pct,
        r.total_degradation * 100.0
    );
    println!("{} {:.2}", tr.t(keys::RESULT_COST_EFFECTIVENESS), r.cost_effectiveness);
}

/// 인양/발전 효율 기준 헤드라인 수치와 저장 경과 후 남는 출력 에너지를 출력한다.
pub fn print_project_energy(
    tr: &Translator,
    material: &MaterialData,
    params: &OperatingParameters,
) -> Result<(), AppError> {
    for line in project_energy_lines(tr, material, params)? {
        println!("{line}");
    }
    Ok(())
}

fn project_energy_lines(
    tr: &Translator,
    material: &MaterialData,
    params: &OperatingParameters,
) -> Result<Vec<String>, AppError> {
    let e = gess::project_energy(params.mass_kg, params.height_m, material)?;
    let stored_kwh = gess::apply_self_discharge(e.output_kwh, material, params.time_elapsed_h)?;
    Ok(vec![
        format!(
            "{} {} → {} / {} ({:.1} %)",
            tr.t(keys::RESULT_PROJECT_ENERGY),
            format_kwh(e.potential_kwh),
            format_kwh(e.input_kwh),
            format_kwh(e.output_kwh),
            e.round_trip_pct
        ),
        format!(
            "{} {} ({} h)",
            tr.t(keys::RESULT_AFTER_STORAGE),
            format_kwh(stored_kwh),
            params.time_elapsed_h
        ),
    ])
}

pub fn print_summary(s: &MaterialSummary) {
    println!(
        "  recovered {:.3} MJ / {:.3} MJ, efficiency {:.2} %, lifespan {} cycles",
        s.recovered_energy_mj, s.potential_energy_mj, s.efficiency_pct, s.lifespan
    );
    println!(
        "  volume {:.3} m³, density {:.4} kWh/m³, cost score {:.2}, max power {:.0} kW",
        s.volume_m3, s.energy_density, s.cost_effectiveness, s.max_power_kw
    );
}

pub fn print_sweep(label: &str, rows: &[SweepRow]) {
    let Some(first) = rows.first() else {
        return;
    };
    print!("{label:>12}");
    for (name, _) in &first.values {
        print!("{:>14}", format!("{name} [MJ]"));
    }
    println!();
    for row in rows {
        print!("{:>12.0}", row.parameter);
        for (_, v) in &row.values {
            print!("{v:>14.4}");
        }
        println!();
    }
}

pub fn print_demand_sweep(rows: &[DemandRow]) {
    for row in rows {
        println!(
            "{:>6.0} kWh  m={:>12.0} kg  E_mech={:>10.1} kJ  P_charge={:>7.1} kW",
            row.demand_kwh, row.required_mass_kg, row.mech_energy_kj, row.charge_power_kw
        );
        for m in &row.materials {
            println!(
                "          {:<10} {:>12.0} kg  {:>10.1} m³",
                m.material, m.required_mass_kg, m.volume_m3
            );
        }
    }
}

pub fn print_density_comparison(p: &OperatingParameters) -> Result<(), AppError> {
    let rows = gess::generate_energy_density_comparison(
        p.mass_kg,
        p.height_m,
        p.system_efficiency_pct,
        p.cycles,
    )?;
    println!(
        "{:<10}{:>16}{:>14}{:>16}{:>6}",
        "material", "kWh/m³", "round-trip %", "self-disch %/h", "cost"
    );
    for r in rows {
        println!(
            "{:<10}{:>16.4}{:>14.1}{:>16.2}{:>6}",
            r.material, r.energy_density, r.efficiency_pct, r.self_discharge_pct, r.relative_cost
        );
    }
    Ok(())
}

pub fn print_efficiency_breakdown() {
    for b in gess::generate_efficiency_breakdown() {
        println!(
            "{:<10} lift {:.1} %  gen {:.1} %  rt {:.1} %  | {:.0} kWh → {:.1} kWh → {:.1} kWh",
            b.material,
            b.lift_efficiency_pct,
            b.generation_efficiency_pct,
            b.round_trip_efficiency_pct,
            b.input_kwh,
            b.after_lift_kwh,
            b.after_generation_kwh
        );
    }
}

pub fn print_simulation<F>(label: &str, rows: &[SimulationRow], key: F)
where
    F: Fn(&SimulationRow) -> f64,
{
    println!(
        "{label:>12}{:>14}{:>12}{:>12}{:>12}{:>12}",
        "E_mech kJ", "E_elec kWh", "P_ch kW", "E_out kWh", "P_dis kW"
    );
    for r in rows {
        println!(
            "{:>12.0}{:>14.1}{:>12.4}{:>12.4}{:>12.4}{:>12.4}",
            key(r),
            r.mech_energy_kj,
            r.elec_energy_kwh,
            r.charge_power_kw,
            r.energy_out_kwh,
            r.discharge_power_kw
        );
    }
}

pub fn print_facilities() -> Result<(), AppError> {
    for f in gess::generate_facility_profiles() {
        println!(
            "{:<16} {:>6.1} kW × {:>4.1} h = {:>7.1} kWh @ {:>5.0} m → {:>12.0} kg",
            f.profile.name,
            f.profile.power_kw,
            f.profile.time_h,
            f.energy_kwh,
            f.profile.height_m,
            f.required_mass_kg
        );
        for m in material_db::materials() {
            let volume = gess::calc_volume(f.required_mass_kg, m.density)?;
            println!("                 {:<10} {:>10.1} m³", m.name, volume);
        }
    }
    Ok(())
}

pub fn print_school_analytics(mass_kg: f64, height_m: f64) -> Result<(), AppError> {
    for school in gess::generate_school_analytics(mass_kg, height_m)? {
        println!(
            "{}: {:.0} kWh/day ({})",
            school.school, school.daily_energy_kwh, school.typical_load
        );
        for m in &school.materials {
            println!(
                "  {:<10} h={:>10.1} m @ {mass_kg:.0} kg   m={:>12.0} kg @ {height_m:.0} m   η_rt={:.1} %",
                m.material, m.required_height_m, m.required_mass_kg, m.round_trip_efficiency_pct
            );
        }
    }
    Ok(())
}

fn read_params(
    tr: &Translator,
    defaults: &OperatingParameters,
    with_time: bool,
) -> Result<OperatingParameters, AppError> {
    println!("{}", tr.t(keys::USING_DEFAULT));
    let mut p = OperatingParameters::new(
        read_f64_or(tr, keys::PROMPT_MASS, defaults.mass_kg)?,
        read_f64_or(tr, keys::PROMPT_HEIGHT, defaults.height_m)?,
        read_f64_or(tr, keys::PROMPT_SYSTEM_EFFICIENCY, defaults.system_efficiency_pct)?,
        read_u32_or(tr, keys::PROMPT_CYCLES, defaults.cycles)?,
    );
    p.time_elapsed_h = if with_time {
        read_f64_or(tr, keys::PROMPT_TIME_ELAPSED, defaults.time_elapsed_h)?
    } else {
        defaults.time_elapsed_h
    };
    Ok(p)
}

fn read_material(tr: &Translator, default: &str) -> Result<&'static MaterialData, AppError> {
    loop {
        let s = read_line(&format!("{}[{default}] ", tr.t(keys::PROMPT_MATERIAL)))?;
        let code = if s.trim().is_empty() { default } else { s.trim() };
        match material_db::material(code) {
            Ok(m) => return Ok(m),
            Err(e) => println!("{e}"),
        }
    }
}

fn read_criterion(tr: &Translator, default: Criterion) -> Result<Criterion, AppError> {
    loop {
        let s = read_line(&format!("{}[{default}] ", tr.t(keys::PROMPT_CRITERION)))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        if let Some(c) = s
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Criterion::ALL.get(i).copied())
        {
            return Ok(c);
        }
        match s.parse::<Criterion>() {
            Ok(c) => return Ok(c),
            Err(e) => println!("{e}"),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    read_line_from(&mut io::stdin().lock())
}

/// 한 줄을 읽는다. 입력이 끝났으면(0바이트) `UnexpectedEof` 입출력 오류를 돌려준다.
fn read_line_from<R: BufRead>(input: &mut R) -> Result<String, AppError> {
    let mut buf = String::new();
    if input.read_line(&mut buf).map_err(AppError::Io)? == 0 {
        return Err(AppError::Io(io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, key: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(tr.t(key))?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_f64_or(tr: &Translator, key: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{}[{default}] ", tr.t(key)))?;
        if s.trim().is_empty() {
            return Ok(default);
        }
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32_or(tr: &Translator, key: &str, default: u32) -> Result<u32, AppError> {
    loop {
        let s = read_line(&format!("{}[{default}] ", tr.t(key)))?;
        if s.trim().is_empty() {
            return Ok(default);
        }
        match s.trim().parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material_db::{concrete, water};

    #[test]
    fn end_of_input_is_an_error() {
        let mut empty: &[u8] = b"";
        let err = read_line_from(&mut empty).unwrap_err();
        assert!(err.is_end_of_input(), "{err}");
    }

    #[test]
    fn reads_one_line_at_a_time() {
        let mut input: &[u8] = b"3\n\n";
        assert_eq!(read_line_from(&mut input).expect("first"), "3\n");
        // 빈 줄은 기본값 선택이므로 입력 종료가 아니다
        assert_eq!(read_line_from(&mut input).expect("second"), "\n");
        assert!(read_line_from(&mut input).is_err());
    }

    #[test]
    fn project_energy_lines_show_headline_and_stored_output() {
        let tr = Translator::new("en-us");
        let params = OperatingParameters::default();
        let lines = project_energy_lines(&tr, concrete(), &params).expect("concrete");
        assert_eq!(
            lines[0],
            "Project energy (lift × generation): 1.36 kWh → 1.48 kWh / 1.23 kWh (82.8 %)"
        );
        assert_eq!(lines[1], "Output after storage: 1.23 kWh (1 h)");

        let params = params.with_time_elapsed(10.0);
        let lines = project_energy_lines(&tr, water(), &params).expect("water");
        // 1.3625 × 0.85 × 0.999^10
        assert_eq!(lines[1], "Output after storage: 1.15 kWh (10 h)");
    }
}
