use rocket_design_calculator::parts::{Catalog, RadialSize, load_catalog};

#[test]
fn stock_catalog_covers_every_radial_size() {
    let catalog = Catalog::stock();
    for size in RadialSize::ALL {
        assert!(
            catalog.engines.iter().any(|e| e.size == size),
            "no stock engine of size {}",
            size
        );
        assert!(
            catalog.tank_family(size).is_some(),
            "no stock tank family of size {}",
            size
        );
        assert!(
            catalog.decoupler(size).is_some(),
            "no stock decoupler of size {}",
            size
        );
    }
}

#[test]
fn size_filter_keeps_only_matching_parts() {
    let tiny = Catalog::stock().filter_size(Some(RadialSize::Tiny));
    assert!(!tiny.engines.is_empty());
    assert!(tiny.engines.iter().all(|e| e.size == RadialSize::Tiny));
    assert!(tiny.tanks.iter().all(|t| t.size == RadialSize::Tiny));
    assert!(tiny.decouplers.iter().all(|d| d.size == RadialSize::Tiny));
    assert!(tiny.tank_family(RadialSize::Small).is_none());
}

#[test]
fn radial_sizes_are_ordered_narrow_to_wide() {
    assert!(RadialSize::Tiny < RadialSize::Small);
    assert!(RadialSize::Small < RadialSize::Large);
    assert!(RadialSize::Large < RadialSize::ExtraLarge);
}

#[test]
fn tank_family_derives_structure_ratio_from_the_part() {
    let catalog = Catalog::stock();
    let family = catalog.tank_family(RadialSize::Small).expect("small tanks");
    // Stock tank lines carry 8 kg of propellant per kg of structure
    assert!((family.dry_fraction - 0.125).abs() < 1e-9);
    assert!(family.cost_per_kg > 0.0);
}

#[test]
fn loads_catalog_from_yaml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.yaml");
    std::fs::write(
        &path,
        r#"
engines:
  - name: Test Engine
    dry_mass_kg: 500
    thrust_n: 60000
    isp_vac_s: 345
    isp_atm_s: 85
    size: small
    gimbal_deg: 4
    cost: 390
tanks:
  - name: Test Tank
    dry_mass_kg: 100
    propellant_kg: 800
    size: small
    cost: 200
"#,
    )
    .expect("write catalog");

    let catalog = load_catalog(&path).expect("load yaml catalog");
    assert_eq!(catalog.engines.len(), 1);
    assert_eq!(catalog.engines[0].name, "Test Engine");
    assert_eq!(catalog.engines[0].size, RadialSize::Small);
    assert_eq!(catalog.tanks.len(), 1);
    // decouplers are optional in catalog files
    assert!(catalog.decouplers.is_empty());
}

#[test]
fn loads_catalog_from_toml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        r#"
[[engines]]
name = "Wide Engine"
dry_mass_kg = 9000.0
thrust_n = 2000000.0
isp_vac_s = 340.0
isp_atm_s = 255.0
size = "extra-large"
gimbal_deg = 4.0
cost = 25000.0

[[tanks]]
name = "Wide Tank"
dry_mass_kg = 9000.0
propellant_kg = 72000.0
size = "extra-large"
cost = 13000.0
"#,
    )
    .expect("write catalog");

    let catalog = load_catalog(&path).expect("load toml catalog");
    assert_eq!(catalog.engines.len(), 1);
    assert_eq!(catalog.engines[0].size, RadialSize::ExtraLarge);
    assert!(catalog.tank_family(RadialSize::ExtraLarge).is_some());
}

#[test]
fn missing_catalog_file_is_an_error() {
    assert!(load_catalog("does/not/exist.yaml").is_err());
}
