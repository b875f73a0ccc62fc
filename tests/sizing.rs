use approx::assert_relative_eq;
use gess_toolbox::gess::{self, constants::G};
use gess_toolbox::material_db::{concrete, materials, water, MaterialData};

#[test]
fn mass_inversion_round_trips() {
    for m in materials() {
        let mass = gess::required_mass_for_energy(100.0, 100.0, m).expect("mass");
        let delivered_kwh = mass * G * 100.0 * m.round_trip_efficiency() / 3.6e6;
        assert_relative_eq!(delivered_kwh, 100.0, max_relative = 1e-12);
    }
}

#[test]
fn height_inversion_round_trips() {
    let height = gess::required_height_for_energy(10.0, 5000.0, concrete()).expect("height");
    let p = gess::project_energy(5000.0, height, concrete()).expect("project energy");
    assert_relative_eq!(p.potential_kwh * 0.828, 10.0, max_relative = 1e-12);
}

#[test]
fn zero_target_needs_nothing() {
    assert_eq!(gess::required_mass_for_energy(0.0, 100.0, water()), Ok(0.0));
}

#[test]
fn sizing_rejects_bad_inputs() {
    let err = gess::required_mass_for_energy(-1.0, 100.0, water()).unwrap_err();
    assert_eq!(err.field(), Some("target_energy_kwh"));
    let err = gess::required_mass_for_energy(10.0, 0.0, water()).unwrap_err();
    assert_eq!(err.field(), Some("height_m"));
    let err = gess::required_height_for_energy(10.0, -3.0, water()).unwrap_err();
    assert_eq!(err.field(), Some("mass_kg"));
}

#[test]
fn school_facility_mass() {
    let estimates = gess::generate_facility_profiles();
    assert_eq!(estimates.len(), gess::facility_profiles().len());
    let school = estimates
        .iter()
        .find(|e| e.profile.name == "School")
        .expect("school profile");
    assert_relative_eq!(school.energy_kwh, 100.0, max_relative = 1e-12);
    assert_relative_eq!(school.mech_energy_kj, 400_000.0, max_relative = 1e-12);
    assert_relative_eq!(school.required_mass_kg, 4.0e8 / 981.0, max_relative = 1e-12);
}

#[test]
fn tradeoff_mass_falls_with_height() {
    let points = gess::generate_height_tradeoff(100.0).expect("tradeoff");
    assert_eq!(points.first().map(|p| p.height_m), Some(10.0));
    assert!(points.windows(2).all(|w| w[1].required_mass_kg < w[0].required_mass_kg));
    // m·h 는 일정하다
    let product = points[0].height_m * points[0].required_mass_kg;
    for p in &points {
        assert_relative_eq!(p.height_m * p.required_mass_kg, product, max_relative = 1e-12);
    }
}

#[test]
fn school_analytics_cover_every_material() {
    let analytics = gess::generate_school_analytics(5000.0, 100.0).expect("schools");
    assert_eq!(analytics.len(), gess::school_energy_demands().len());
    for school in &analytics {
        assert_eq!(school.materials.len(), materials().len());
        let concrete = school
            .materials
            .iter()
            .find(|m| m.material == "Concrete")
            .expect("concrete");
        let water = school.materials.iter().find(|m| m.material == "Water").expect("water");
        // 왕복 효율이 높을수록 요구량이 작다
        assert!(concrete.required_mass_kg < water.required_mass_kg);
        assert!(concrete.required_height_m < water.required_height_m);
    }
    assert!(gess::generate_school_analytics(0.0, 100.0).is_err());
}

#[test]
fn sizing_rejects_unusable_materials() {
    let no_lift = MaterialData {
        lift_efficiency: 0.0,
        ..concrete().clone()
    };
    let err = gess::required_mass_for_energy(10.0, 100.0, &no_lift).unwrap_err();
    assert_eq!(err.field(), Some("round_trip_efficiency"));
    let err = gess::required_height_for_energy(10.0, 5000.0, &no_lift).unwrap_err();
    assert_eq!(err.field(), Some("round_trip_efficiency"));

    let over_unity = MaterialData {
        lift_efficiency: 1.5,
        ..water().clone()
    };
    let err = gess::required_mass_for_energy(10.0, 100.0, &over_unity).unwrap_err();
    assert_eq!(err.field(), Some("lift_efficiency"));
    let err = gess::required_height_for_energy(10.0, 5000.0, &over_unity).unwrap_err();
    assert_eq!(err.field(), Some("lift_efficiency"));
}
