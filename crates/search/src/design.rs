//! Composite designs and their per-requirement verdicts.

use std::fmt;

use rdc_core::accel;
use rdc_core::constants::{ACCEL_EPSILON, DV_EPSILON};
use serde::Serialize;

use crate::performance;
use crate::stage::Stage;
use crate::{Mission, Requirement};

/// How a design performs against one requirement.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub requirement: Requirement,
    /// Delta-v the full stack achieves at this requirement's pressure.
    pub achieved_dv_m_s: f64,
    /// Worst ignition acceleration across the stack (m/s²).
    pub min_acceleration_m_s2: f64,
    /// Worst dimensionless thrust-to-weight ratio across the stack.
    pub min_twr: f64,
}

/// A complete, feasible multi-stage design. Immutable once evaluated;
/// `is_best` is marked after the full feasible set for a run is known.
#[derive(Debug, Clone, Serialize)]
pub struct Design {
    pub payload_kg: f64,
    /// Stages ordered uppermost (burned last) first.
    pub stages: Vec<Stage>,
    pub verdicts: Vec<Verdict>,
    pub is_best: bool,
}

impl Design {
    /// Evaluate a candidate stack against every mission requirement.
    ///
    /// Stages ignite bottom-up; at each ignition the stages above are still
    /// full and the stages below are already gone. `None` means some
    /// requirement fails — that branch is pruned, never an error.
    pub(crate) fn evaluate(mission: &Mission, stages: Vec<Stage>) -> Option<Design> {
        let mut verdicts = Vec::with_capacity(mission.requirements.len());
        for req in &mission.requirements {
            let mut achieved = 0.0;
            let mut min_accel = f64::INFINITY;
            let mut min_twr = f64::INFINITY;
            for (i, stage) in stages.iter().enumerate() {
                let inert_above: f64 = mission.payload_kg
                    + stages[..i].iter().map(Stage::wet_mass_kg).sum::<f64>();
                let dry = inert_above + stage.dry_mass_kg();
                let wet = dry + stage.propellant_kg;
                achieved += performance::delta_v(stage.isp_at(req.pressure_atm), wet, dry);
                min_accel =
                    min_accel.min(performance::ignition_acceleration(stage.thrust_n(), wet));
                min_twr = min_twr.min(accel::thrust_to_weight(stage.thrust_n(), wet));
            }
            if achieved + DV_EPSILON < req.delta_v_m_s {
                return None;
            }
            if min_accel + ACCEL_EPSILON < mission.min_acceleration_m_s2 {
                return None;
            }
            verdicts.push(Verdict {
                requirement: *req,
                achieved_dv_m_s: achieved,
                min_acceleration_m_s2: min_accel,
                min_twr,
            });
        }
        Some(Design {
            payload_kg: mission.payload_kg,
            stages,
            verdicts,
            is_best: false,
        })
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Payload plus every stage, fully fueled.
    pub fn total_mass_kg(&self) -> f64 {
        self.payload_kg + self.stages.iter().map(Stage::wet_mass_kg).sum::<f64>()
    }

    pub fn total_cost(&self) -> f64 {
        self.stages.iter().map(|s| s.cost).sum()
    }

    /// Worst ignition acceleration across all requirements (m/s²).
    pub fn min_acceleration_m_s2(&self) -> f64 {
        self.verdicts
            .iter()
            .map(|v| v.min_acceleration_m_s2)
            .fold(f64::INFINITY, f64::min)
    }

    /// Worst dimensionless thrust-to-weight ratio across all requirements.
    pub fn min_twr(&self) -> f64 {
        self.verdicts
            .iter()
            .map(|v| v.min_twr)
            .fold(f64::INFINITY, f64::min)
    }

    /// Structural identity used to drop duplicate compositions.
    pub(crate) fn key(&self) -> String {
        self.stages
            .iter()
            .map(|s| format!("{}x{}@{:.3}", s.engine_count, s.engine.name, s.propellant_kg))
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl fmt::Display for Design {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        lines.push(format!(
            "{}-stage design: {:.1} kg, {:.0} cost{}",
            self.stage_count(),
            self.total_mass_kg(),
            self.total_cost(),
            if self.is_best { " [best]" } else { "" },
        ));
        for (i, stage) in self.stages.iter().enumerate() {
            let mut line = format!(
                "  stage {} ({}): {}x {}, {:.1} kg propellant ({} tankage)",
                i + 1,
                stage.radial_size(),
                stage.engine_count,
                stage.engine.name,
                stage.propellant_kg,
                stage.tank_name,
            );
            if let Some(d) = &stage.decoupler {
                line.push_str(&format!(", {}", d.name));
            }
            if stage.has_gimbal() {
                line.push_str(&format!(", gimbal {:.1}°", stage.gimbal_deg()));
            }
            lines.push(line);
        }
        for v in &self.verdicts {
            lines.push(format!(
                "  {:.0} m/s @ {:.2} atm: {:.0} m/s achieved, min ignition accel {:.1} m/s² (TWR {:.2})",
                v.requirement.delta_v_m_s,
                v.requirement.pressure_atm,
                v.achieved_dv_m_s,
                v.min_acceleration_m_s2,
                v.min_twr,
            ));
        }
        f.write_str(&lines.join("\n"))
    }
}
