//! A single jettisonable layer of a design: an engine cluster plus tankage
//! sized to its delta-v budget.

use rdc_parts::{Decoupler, Engine, RadialSize, TankFamily};
use serde::Serialize;

/// One stage of a design. Immutable once assembled.
#[derive(Debug, Clone, Serialize)]
pub struct Stage {
    pub engine: Engine,
    pub engine_count: u32,
    pub propellant_kg: f64,
    pub tank_name: String,
    pub tank_dry_kg: f64,
    /// Present on every stage below the topmost; jettisoned with the stage.
    pub decoupler: Option<Decoupler>,
    pub cost: f64,
}

impl Stage {
    /// Assemble a stage from a sized propellant load.
    pub fn assemble(
        engine: Engine,
        engine_count: u32,
        propellant_kg: f64,
        tanks: &TankFamily,
        decoupler: Option<Decoupler>,
    ) -> Stage {
        let tank_dry_kg = tanks.dry_fraction * propellant_kg;
        let cost = engine.cost * f64::from(engine_count)
            + tanks.cost_per_kg * propellant_kg
            + decoupler.as_ref().map_or(0.0, |d| d.cost);
        Stage {
            engine,
            engine_count,
            propellant_kg,
            tank_name: tanks.tank_name.clone(),
            tank_dry_kg,
            decoupler,
            cost,
        }
    }

    pub fn radial_size(&self) -> RadialSize {
        self.engine.size
    }

    pub fn engine_dry_kg(&self) -> f64 {
        self.engine.dry_mass_kg * f64::from(self.engine_count)
    }

    pub fn dry_mass_kg(&self) -> f64 {
        self.engine_dry_kg()
            + self.tank_dry_kg
            + self.decoupler.as_ref().map_or(0.0, |d| d.mass_kg)
    }

    pub fn wet_mass_kg(&self) -> f64 {
        self.dry_mass_kg() + self.propellant_kg
    }

    pub fn thrust_n(&self) -> f64 {
        self.engine.thrust_n * f64::from(self.engine_count)
    }

    /// Effective Isp of the cluster at ambient pressure. The cluster is
    /// homogeneous, so the mass-flow-weighted value equals the engine's own.
    pub fn isp_at(&self, pressure_atm: f64) -> f64 {
        self.engine.isp_at(pressure_atm)
    }

    pub fn gimbal_deg(&self) -> f64 {
        self.engine.gimbal_deg
    }

    pub fn has_gimbal(&self) -> bool {
        self.engine.has_gimbal()
    }
}
