//! Candidate stage enumeration within a radial-size class.

use std::collections::HashSet;

use rdc_core::constants::ACCEL_EPSILON;
use rdc_parts::{Catalog, Engine};

use crate::performance;
use crate::stage::Stage;
use crate::{MAX_ENGINES_PER_STAGE, Requirement};

/// Collapse interchangeable engine records: two types with identical mass,
/// thrust, Isp curve, cost, and radial size count as one candidate. Gimbal
/// capability collapses to present/absent unless `best_gimbal` keeps
/// distinct angles apart. Catalog order is preserved.
pub fn dedup_engines(engines: &[Engine], best_gimbal: bool) -> Vec<&Engine> {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    for engine in engines {
        let gimbal_key = if best_gimbal {
            engine.gimbal_deg.to_bits()
        } else {
            u64::from(engine.has_gimbal())
        };
        let key = (
            engine.dry_mass_kg.to_bits(),
            engine.thrust_n.to_bits(),
            engine.isp_vac_s.to_bits(),
            engine.isp_atm_s.to_bits(),
            engine.cost.to_bits(),
            engine.size,
            gimbal_key,
        );
        if seen.insert(key) {
            kept.push(engine);
        }
    }
    kept
}

/// Enumerate candidate stages able to deliver every delta-v increment on top
/// of `inert_above_kg` while meeting the acceleration requirement at
/// ignition. Unreachable increments simply produce no candidates.
///
/// Per engine type, only the smallest cluster passing the acceleration check
/// is kept: ignition acceleration grows monotonically with cluster size
/// while extra engines add mass and cost on both objective axes, so larger
/// clusters cannot help any branch.
pub fn enumerate_stages(
    catalog: &Catalog,
    engines: &[&Engine],
    increments: &[Requirement],
    inert_above_kg: f64,
    min_acceleration_m_s2: f64,
    needs_decoupler: bool,
) -> Vec<Stage> {
    let mut out = Vec::new();
    for engine in engines {
        let Some(family) = catalog.tank_family(engine.size) else {
            continue;
        };
        let decoupler = if needs_decoupler {
            match catalog.decoupler(engine.size) {
                Some(d) => Some(d.clone()),
                None => continue,
            }
        } else {
            None
        };
        let decoupler_kg = decoupler.as_ref().map_or(0.0, |d| d.mass_kg);

        for count in 1..=MAX_ENGINES_PER_STAGE {
            let fixed_kg =
                inert_above_kg + engine.dry_mass_kg * f64::from(count) + decoupler_kg;

            // Size to the most restrictive increment: the one demanding the
            // most propellant. The others are then met with margin and get
            // re-checked exactly during design validation.
            let mut propellant_kg: f64 = 0.0;
            let mut reachable = true;
            for inc in increments {
                let isp = engine.isp_at(inc.pressure_atm);
                match performance::propellant_for_delta_v(
                    isp,
                    fixed_kg,
                    family.dry_fraction,
                    inc.delta_v_m_s,
                ) {
                    Some(p) => propellant_kg = propellant_kg.max(p),
                    None => {
                        reachable = false;
                        break;
                    }
                }
            }
            if !reachable {
                // Reachability depends on Isp and tank fraction only, never
                // on cluster size; no count of this engine can work.
                break;
            }

            let wet_kg = fixed_kg + (1.0 + family.dry_fraction) * propellant_kg;
            let accel = performance::ignition_acceleration(
                engine.thrust_n * f64::from(count),
                wet_kg,
            );
            if accel + ACCEL_EPSILON >= min_acceleration_m_s2 {
                out.push(Stage::assemble(
                    (*engine).clone(),
                    count,
                    propellant_kg,
                    &family,
                    decoupler,
                ));
                break;
            }
        }
    }
    out
}
