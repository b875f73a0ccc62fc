use gess_toolbox::config::{self, Config};
use gess_toolbox::gess::Criterion;

#[test]
fn partial_file_fills_defaults() {
    let cfg: Config = toml::from_str("language = \"ko\"\n").expect("parse");
    assert_eq!(cfg.language, "ko");
    assert_eq!(cfg.defaults.mass_kg, 5000.0);
    assert_eq!(cfg.defaults.cycles, 1000);
    assert_eq!(cfg.analysis.criterion, Criterion::Efficiency);
}

#[test]
fn defaults_table_parses() {
    let src = r#"
language = "en-us"

[defaults]
mass_kg = 2000.0
height_m = 50.0
system_efficiency_pct = 90.0
cycles = 10

[analysis]
criterion = "energy_density"
material = "sand"
"#;
    let cfg: Config = toml::from_str(src).expect("parse");
    assert_eq!(cfg.defaults.height_m, 50.0);
    assert_eq!(cfg.defaults.time_elapsed_h, 1.0);
    assert_eq!(cfg.analysis.criterion, Criterion::EnergyDensity);
    assert_eq!(cfg.analysis.material, "sand");
}

#[test]
fn load_creates_then_reads_file() {
    let dir = std::env::temp_dir().join(format!("gess_toolbox_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("config.toml");
    let _ = std::fs::remove_file(&path);

    let created = config::load_or_default_at(&path).expect("create");
    assert!(path.exists());
    assert_eq!(created.language, "auto");

    let mut changed = created.clone();
    changed.defaults.mass_kg = 1234.0;
    changed.save_to(&path).expect("save");
    let reloaded = config::load_or_default_at(&path).expect("reload");
    assert_eq!(reloaded.defaults.mass_kg, 1234.0);

    let _ = std::fs::remove_dir_all(&dir);
}
