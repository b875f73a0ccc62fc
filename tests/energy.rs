use approx::{assert_abs_diff_eq, assert_relative_eq};
use gess_toolbox::gess::{self, GessError, OperatingParameters};
use gess_toolbox::material_db::{concrete, material, materials, sand, water, MaterialData};

fn params(mass_kg: f64, height_m: f64) -> OperatingParameters {
    OperatingParameters::new(mass_kg, height_m, 85.0, 1000)
}

#[test]
fn concrete_reference_point() {
    let r = gess::calculate(concrete(), &params(5000.0, 100.0)).expect("concrete calc");
    assert_abs_diff_eq!(r.potential_energy_j, 4_905_000.0, epsilon = 1e-6);
    // 고체 매체는 자기방전·열화가 없으므로 기준값 그대로
    assert_relative_eq!(r.recovered_energy_j, 4_905_000.0 * 0.825 * 0.85, max_relative = 1e-12);
    assert_relative_eq!(r.efficiency_pct(), 70.125, max_relative = 1e-12);
    assert_relative_eq!(r.round_trip_efficiency_pct, 82.8, max_relative = 1e-12);
    assert_relative_eq!(r.input_energy_kwh, 1.3625 / 0.92, max_relative = 1e-12);
    assert_relative_eq!(r.output_energy_kwh, 1.3625 * 0.90, max_relative = 1e-12);
    assert_relative_eq!(r.volume_required_m3, 5000.0 / 2400.0, max_relative = 1e-12);
    assert_eq!(r.total_lifespan, 100_000);
    assert_eq!(r.self_discharge_rate_pct, 0.0);
    assert_eq!(r.total_degradation, 0.0);
    assert_relative_eq!(
        r.power_loss_j,
        r.potential_energy_j - r.recovered_energy_j,
        max_relative = 1e-12
    );
}

#[test]
fn water_applies_evaporation_and_wear() {
    let r = gess::calculate(water(), &params(5000.0, 100.0)).expect("water calc");
    let baseline = 4_905_000.0 * 0.665 * 0.85;
    assert_relative_eq!(r.baseline_recovered_energy_j, baseline, max_relative = 1e-12);
    // 1 h 증발(0.1 %/h) 후 누적 열화 2e-5 의 절반
    let expected = baseline * 0.999 * (1.0 - 1e-5);
    assert_relative_eq!(r.recovered_energy_j, expected, max_relative = 1e-12);
    assert_relative_eq!(r.self_discharge_rate_pct, 0.1, max_relative = 1e-12);
    assert_relative_eq!(r.degradation_rate_pct, 0.1, max_relative = 1e-12);
    assert_relative_eq!(r.total_degradation, 2e-5, max_relative = 1e-12);
}

#[test]
fn recovered_energy_scales_linearly_with_mass_and_height() {
    for m in materials() {
        let base = gess::calculate(m, &params(2000.0, 50.0)).expect("base");
        let heavier = gess::calculate(m, &params(4000.0, 50.0)).expect("heavier");
        let higher = gess::calculate(m, &params(2000.0, 150.0)).expect("higher");
        assert_relative_eq!(
            heavier.recovered_energy_j,
            2.0 * base.recovered_energy_j,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            higher.recovered_energy_j,
            3.0 * base.recovered_energy_j,
            max_relative = 1e-12
        );
    }
}

#[test]
fn zero_cycles_and_zero_time_give_baseline() {
    for m in materials() {
        let p = OperatingParameters::new(3000.0, 80.0, 90.0, 0).with_time_elapsed(0.0);
        let r = gess::calculate(m, &p).expect("calc");
        assert_eq!(r.recovered_energy_j, r.baseline_recovered_energy_j, "{}", m.name);
    }
}

#[test]
fn water_decays_monotonically_with_storage_time() {
    let mut previous = f64::INFINITY;
    for hours in [0.0, 1.0, 6.0, 24.0, 24.0 * 30.0] {
        let p = params(5000.0, 100.0).with_time_elapsed(hours);
        let r = gess::calculate(water(), &p).expect("calc");
        assert!(r.recovered_energy_j < previous, "not decreasing at {hours} h");
        previous = r.recovered_energy_j;
    }
}

#[test]
fn solid_media_ignore_storage_time() {
    for m in [sand(), concrete()] {
        let short = gess::calculate(m, &params(5000.0, 100.0)).expect("short");
        let long = gess::calculate(m, &params(5000.0, 100.0).with_time_elapsed(1000.0))
            .expect("long");
        assert_eq!(short.recovered_energy_j, long.recovered_energy_j);
    }
}

#[test]
fn degradation_is_capped_at_half() {
    let p = OperatingParameters::new(5000.0, 100.0, 85.0, u32::MAX).with_time_elapsed(0.0);
    let r = gess::calculate(water(), &p).expect("calc");
    assert_eq!(r.total_degradation, 0.5);
    assert_relative_eq!(
        r.recovered_energy_j,
        0.75 * r.baseline_recovered_energy_j,
        max_relative = 1e-12
    );
}

#[test]
fn heavy_loads_shorten_lifespan_up_to_factor_two() {
    let light = gess::calculate(concrete(), &params(2500.0, 100.0)).expect("light");
    let heavy = gess::calculate(concrete(), &params(10_000.0, 100.0)).expect("heavy");
    let very_heavy = gess::calculate(concrete(), &params(50_000.0, 100.0)).expect("very heavy");
    assert_eq!(light.total_lifespan, 200_000);
    assert_eq!(heavy.total_lifespan, 50_000);
    assert_eq!(very_heavy.total_lifespan, 50_000);
}

#[test]
fn invalid_inputs_name_the_field() {
    let cases = [
        (OperatingParameters::new(0.0, 100.0, 85.0, 10), "mass_kg"),
        (OperatingParameters::new(1000.0, -5.0, 85.0, 10), "height_m"),
        (OperatingParameters::new(1000.0, 100.0, 120.0, 10), "system_efficiency_pct"),
        (
            OperatingParameters::new(1000.0, 100.0, 85.0, 10).with_time_elapsed(-1.0),
            "time_elapsed_h",
        ),
        (OperatingParameters::new(f64::NAN, 100.0, 85.0, 10), "mass_kg"),
    ];
    for (p, field) in cases {
        let err = gess::calculate(concrete(), &p).unwrap_err();
        assert_eq!(err.field(), Some(field), "{p:?}");
    }
}

#[test]
fn unknown_material_is_reported() {
    assert_eq!(
        material("granite").unwrap_err(),
        GessError::UnknownMaterial("granite".to_string())
    );
    assert_eq!(material("Sand").map(|m| m.code), Ok("sand"));
}

#[test]
fn project_energy_matches_lift_and_generation_pair() {
    let e = gess::project_energy(5000.0, 100.0, concrete()).expect("project energy");
    assert_relative_eq!(e.potential_kwh, 1.3625, max_relative = 1e-12);
    assert_relative_eq!(e.output_kwh / e.input_kwh, 0.828, max_relative = 1e-12);
    assert_relative_eq!(e.round_trip_pct, 82.8, max_relative = 1e-12);
}

#[test]
fn out_of_range_materials_are_rejected() {
    let p = params(5000.0, 100.0).with_time_elapsed(0.5);
    let cases = [
        (
            MaterialData {
                density: 0.0,
                ..concrete().clone()
            },
            "density",
        ),
        (
            MaterialData {
                lift_efficiency: 1.5,
                ..concrete().clone()
            },
            "lift_efficiency",
        ),
        (
            MaterialData {
                lift_efficiency: 0.0,
                ..concrete().clone()
            },
            "lift_efficiency",
        ),
        (
            MaterialData {
                self_discharge_rate: 2.0,
                ..water().clone()
            },
            "self_discharge_rate",
        ),
    ];
    for (m, field) in cases {
        let err = gess::calculate(&m, &p).unwrap_err();
        assert_eq!(err.field(), Some(field), "calculate {m:?}");
        let err = gess::project_energy(5000.0, 100.0, &m).unwrap_err();
        assert_eq!(err.field(), Some(field), "project_energy {m:?}");
    }
}
