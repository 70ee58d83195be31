//! Design-space search for stacked rocket stages.
//!
//! Enumerates feasible stage compositions from a parts catalog, evaluates
//! every candidate against every mission requirement with the rocket
//! equation, and marks the Pareto-optimal subset by mass and cost. The
//! search is a pure, synchronous enumeration over the in-memory catalog:
//! no global state, no I/O.

pub mod compose;
pub mod design;
pub mod dominance;
pub mod enumerate;
pub mod performance;
pub mod stage;

use rdc_parts::{Catalog, RadialSize};
use serde::Serialize;
use thiserror::Error;

pub use design::{Design, Verdict};
pub use dominance::{dominates, mark_pareto};
pub use stage::Stage;

/// Upper bound on stages per design. Branches that still fail with this many
/// stages are abandoned, not reported.
pub const MAX_STAGES: usize = 3;

/// Upper bound on engines of one type clustered in a single stage.
pub const MAX_ENGINES_PER_STAGE: u32 = 8;

/// One mission constraint: the full stack must deliver `delta_v_m_s` of
/// velocity change at ambient pressure `pressure_atm`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Requirement {
    pub delta_v_m_s: f64,
    /// Ambient pressure in atmospheres: 0 = vacuum, 1 = full atmosphere.
    pub pressure_atm: f64,
}

/// Full mission statement handed to the search. Each requirement is an
/// independent mission profile the design must satisfy on its own.
#[derive(Debug, Clone, Serialize)]
pub struct Mission {
    pub payload_kg: f64,
    /// Minimum acceleration (m/s²) at every stage ignition.
    pub min_acceleration_m_s2: f64,
    pub requirements: Vec<Requirement>,
    /// Restrict the search to parts of this radial size.
    pub size: Option<RadialSize>,
    /// Keep engines with distinct gimbal angles as distinct candidates
    /// instead of collapsing gimbal capability to present/absent.
    pub best_gimbal: bool,
}

/// Invalid mission input, rejected before any search work starts.
#[derive(Debug, Error, PartialEq)]
pub enum MissionError {
    #[error("payload must be positive, got {0} kg")]
    NonPositivePayload(f64),
    #[error("required acceleration must not be negative, got {0} m/s²")]
    NegativeAcceleration(f64),
    #[error("required delta-v must not be negative, got {0} m/s")]
    NegativeDeltaV(f64),
    #[error("pressure must lie in [0, 1], got {0}")]
    PressureOutOfRange(f64),
    #[error("at least one delta-v requirement is needed")]
    NoRequirements,
}

impl Mission {
    pub fn validate(&self) -> Result<(), MissionError> {
        if !(self.payload_kg > 0.0) {
            return Err(MissionError::NonPositivePayload(self.payload_kg));
        }
        if self.min_acceleration_m_s2 < 0.0 || self.min_acceleration_m_s2.is_nan() {
            return Err(MissionError::NegativeAcceleration(self.min_acceleration_m_s2));
        }
        if self.requirements.is_empty() {
            return Err(MissionError::NoRequirements);
        }
        for req in &self.requirements {
            if req.delta_v_m_s < 0.0 || req.delta_v_m_s.is_nan() {
                return Err(MissionError::NegativeDeltaV(req.delta_v_m_s));
            }
            if !(0.0..=1.0).contains(&req.pressure_atm) {
                return Err(MissionError::PressureOutOfRange(req.pressure_atm));
            }
        }
        Ok(())
    }
}

/// Run the full search: enumerate candidate stacks, keep every feasible
/// design, and mark the Pareto-optimal subset.
///
/// An empty result means no design satisfies all requirements (or the size
/// filter left no usable parts); neither is an error.
pub fn find_designs(catalog: &Catalog, mission: &Mission) -> Result<Vec<Design>, MissionError> {
    mission.validate()?;
    let filtered = catalog.filter_size(mission.size);
    let mut designs = compose::compose_designs(&filtered, mission);
    mark_pareto(&mut designs);
    Ok(designs)
}
