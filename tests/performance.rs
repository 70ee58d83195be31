use rocket_design_calculator::constants::G0;
use rocket_design_calculator::parts::Catalog;
use rocket_design_calculator::search::performance::{
    combined_isp, delta_v, ignition_acceleration, propellant_for_delta_v,
};

#[test]
fn isp_interpolates_linearly_between_ratings() {
    let catalog = Catalog::stock();
    let terrier = catalog
        .engines
        .iter()
        .find(|e| e.name.contains("Terrier"))
        .expect("stock Terrier");

    assert_eq!(terrier.isp_at(0.0), terrier.isp_vac_s);
    assert_eq!(terrier.isp_at(1.0), terrier.isp_atm_s);
    let mid = 0.5 * (terrier.isp_vac_s + terrier.isp_atm_s);
    assert!((terrier.isp_at(0.5) - mid).abs() < 1e-9);

    // Out-of-range pressures clamp instead of extrapolating
    assert_eq!(terrier.isp_at(-0.5), terrier.isp_vac_s);
    assert_eq!(terrier.isp_at(2.0), terrier.isp_atm_s);
}

#[test]
fn combined_isp_weights_by_mass_flow() {
    // Equal thrust, Isp 300 and 200: flows 1/300 + 1/200 give 240, not the
    // arithmetic mean 250.
    let isp = combined_isp(&[(100.0, 300.0), (100.0, 200.0)]);
    assert!((isp - 240.0).abs() < 1e-9, "isp = {}", isp);

    // A single engine combines to itself
    let single = combined_isp(&[(50.0, 345.0)]);
    assert!((single - 345.0).abs() < 1e-9);
}

#[test]
fn rocket_equation_reference_value() {
    // Isp 300 s, mass ratio 2: dv = 300 · g0 · ln 2 ≈ 2039.3 m/s
    let dv = delta_v(300.0, 2.0, 1.0);
    let expected = 300.0 * G0 * std::f64::consts::LN_2;
    assert!((dv - expected).abs() < 1e-9);
    assert!((dv - 2039.3).abs() < 0.5, "dv = {}", dv);
}

#[test]
fn propellant_sizing_round_trips_through_the_rocket_equation() {
    let isp = 345.0;
    let inert = 1500.0;
    let fraction = 0.125;
    let target = 3000.0;

    let propellant =
        propellant_for_delta_v(isp, inert, fraction, target).expect("reachable increment");
    assert!(propellant > 0.0);

    let dry = inert + fraction * propellant;
    let wet = dry + propellant;
    let achieved = delta_v(isp, wet, dry);
    assert!(
        (achieved - target).abs() < 1e-6,
        "achieved = {}, target = {}",
        achieved,
        target
    );
}

#[test]
fn unreachable_increment_yields_none() {
    // Isp 85 s and a 1:8 tank fraction cannot reach 2000 m/s: the required
    // mass ratio exceeds what the tankage structure permits.
    assert!(propellant_for_delta_v(85.0, 1000.0, 0.125, 2000.0).is_none());
    // Zero delta-v needs no propellant at all
    assert_eq!(propellant_for_delta_v(85.0, 1000.0, 0.125, 0.0), Some(0.0));
}

#[test]
fn ignition_acceleration_is_thrust_over_mass() {
    assert!((ignition_acceleration(60_000.0, 4_000.0) - 15.0).abs() < 1e-9);
}
