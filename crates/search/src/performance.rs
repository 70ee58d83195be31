//! Rocket-performance primitives: effective Isp, the rocket equation, and
//! propellant sizing. Pure functions of their inputs.

use rdc_core::constants::G0;

/// Mass-flow-weighted specific impulse of engines burning together, given
/// `(thrust_n, isp_s)` per engine. Engines mix by propellant consumption
/// rate, not by simple average.
pub fn combined_isp(engines: &[(f64, f64)]) -> f64 {
    let thrust: f64 = engines.iter().map(|(f, _)| f).sum();
    // mdot_i = F_i / (g0 · Isp_i); the g0 cancels out of the ratio
    let flow: f64 = engines.iter().map(|(f, isp)| f / isp).sum();
    if flow == 0.0 { 0.0 } else { thrust / flow }
}

/// Tsiolkovsky delta-v (m/s) for a wet/dry mass pair.
pub fn delta_v(isp_s: f64, wet_kg: f64, dry_kg: f64) -> f64 {
    isp_s * G0 * (wet_kg / dry_kg).ln()
}

/// Propellant load (kg) that lets a stage deliver `dv_m_s` on top of
/// `inert_kg` — everything above the stage plus its engines and fixed
/// hardware — when tank structure scales as `tank_dry_fraction` of the
/// propellant it holds.
///
/// Solves `dv = Isp·g0·ln(wet/dry)` with `dry = inert + fraction·mp` and
/// `wet = dry + mp`. Returns `None` when the increment is unreachable for
/// this Isp and tank fraction: past that point added tankage outweighs the
/// propellant it brings.
pub fn propellant_for_delta_v(
    isp_s: f64,
    inert_kg: f64,
    tank_dry_fraction: f64,
    dv_m_s: f64,
) -> Option<f64> {
    if dv_m_s <= 0.0 {
        return Some(0.0);
    }
    if isp_s <= 0.0 {
        return None;
    }
    let ratio = (dv_m_s / (isp_s * G0)).exp();
    let denom = 1.0 - tank_dry_fraction * (ratio - 1.0);
    if denom <= 0.0 {
        return None;
    }
    Some(inert_kg * (ratio - 1.0) / denom)
}

/// Acceleration (m/s²) at stage ignition, the worst instant of the burn
/// since mass only decreases as propellant is spent.
pub fn ignition_acceleration(thrust_n: f64, wet_kg: f64) -> f64 {
    rdc_core::accel::acceleration(thrust_n, wet_kg)
}
