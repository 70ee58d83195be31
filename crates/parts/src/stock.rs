//! Builtin stock parts list.
//!
//! Values are modeled on familiar hobby-rocketry/simulator hardware: engine
//! clusters from tiny pressure-fed thrusters up to extra-large lifter
//! mounts, tank lines with an 1:8 structure-to-propellant ratio, and stack
//! decouplers per size class.

use crate::{Catalog, Decoupler, Engine, RadialSize, Tank};

fn engine(
    name: &str,
    dry_mass_kg: f64,
    thrust_n: f64,
    isp_vac_s: f64,
    isp_atm_s: f64,
    size: RadialSize,
    gimbal_deg: f64,
    cost: f64,
) -> Engine {
    Engine {
        name: name.to_string(),
        dry_mass_kg,
        thrust_n,
        isp_vac_s,
        isp_atm_s,
        size,
        gimbal_deg,
        cost,
    }
}

fn tank(
    name: &str,
    dry_mass_kg: f64,
    propellant_kg: f64,
    size: RadialSize,
    cost: f64,
) -> Tank {
    Tank {
        name: name.to_string(),
        dry_mass_kg,
        propellant_kg,
        size,
        cost,
    }
}

fn decoupler(name: &str, mass_kg: f64, size: RadialSize, cost: f64) -> Decoupler {
    Decoupler {
        name: name.to_string(),
        mass_kg,
        size,
        cost,
    }
}

/// Assemble the stock catalog. Ordering is stable and drives deterministic
/// enumeration downstream.
pub fn catalog() -> Catalog {
    use RadialSize::{ExtraLarge, Large, Small, Tiny};

    Catalog {
        engines: vec![
            engine("LV-1 Ant", 20.0, 2_000.0, 315.0, 80.0, Tiny, 0.0, 110.0),
            engine("48-7S Spark", 130.0, 20_000.0, 320.0, 270.0, Tiny, 3.0, 240.0),
            engine("LV-909 Terrier", 500.0, 60_000.0, 345.0, 85.0, Small, 4.0, 390.0),
            engine("LV-T30 Reliant", 1_250.0, 240_000.0, 310.0, 265.0, Small, 0.0, 1_100.0),
            engine("LV-T45 Swivel", 1_500.0, 200_000.0, 320.0, 250.0, Small, 3.0, 1_200.0),
            engine("T-1 Dart", 1_000.0, 180_000.0, 340.0, 290.0, Small, 0.0, 3_850.0),
            engine("RE-L10 Poodle", 1_750.0, 250_000.0, 350.0, 90.0, Large, 4.5, 1_300.0),
            engine("RE-I5 Skipper", 3_000.0, 650_000.0, 320.0, 280.0, Large, 2.0, 5_300.0),
            engine("RE-M3 Mainsail", 6_000.0, 1_500_000.0, 310.0, 285.0, Large, 2.0, 13_000.0),
            engine("KR-2L+ Rhino", 9_000.0, 2_000_000.0, 340.0, 255.0, ExtraLarge, 4.0, 25_000.0),
            engine("KS-25x4 Mammoth", 15_000.0, 4_000_000.0, 315.0, 295.0, ExtraLarge, 2.0, 39_000.0),
        ],
        tanks: vec![
            tank("Oscar-B", 25.0, 200.0, Tiny, 70.0),
            tank("FL-T800", 500.0, 4_000.0, Small, 800.0),
            tank("X200-32", 2_000.0, 16_000.0, Large, 3_000.0),
            tank("S3-14400", 9_000.0, 72_000.0, ExtraLarge, 13_000.0),
        ],
        decouplers: vec![
            decoupler("TD-06", 15.0, Tiny, 300.0),
            decoupler("TD-12", 50.0, Small, 400.0),
            decoupler("TD-25", 400.0, Large, 600.0),
            decoupler("TD-37", 450.0, ExtraLarge, 900.0),
        ],
    }
}
