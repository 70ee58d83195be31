//! Work-list composition of multi-stage designs.

use std::collections::HashSet;

use rdc_parts::Catalog;

use crate::design::Design;
use crate::enumerate::{dedup_engines, enumerate_stages};
use crate::stage::Stage;
use crate::{MAX_STAGES, Mission, Requirement};

/// Enumerate every feasible design with 1..=[`MAX_STAGES`] stages.
///
/// For a k-stage design each stage is allocated 1/k of every requirement's
/// delta-v; the tree of stage choices is walked with an explicit frontier
/// (index-addressed work list) instead of recursion. Stages are added from
/// the payload downward, so the mass stacked above each new stage is already
/// known when it is sized, and a branch dies silently as soon as no stage
/// candidate exists for its next layer. Structurally identical designs
/// reached through different branches are kept once.
pub fn compose_designs(catalog: &Catalog, mission: &Mission) -> Vec<Design> {
    let engines = dedup_engines(&catalog.engines, mission.best_gimbal);
    let mut designs = Vec::new();
    let mut seen = HashSet::new();

    for stage_count in 1..=MAX_STAGES {
        let increments: Vec<Requirement> = mission
            .requirements
            .iter()
            .map(|r| Requirement {
                delta_v_m_s: r.delta_v_m_s / stage_count as f64,
                pressure_atm: r.pressure_atm,
            })
            .collect();

        let mut frontier: Vec<Vec<Stage>> = vec![Vec::new()];
        while let Some(stack) = frontier.pop() {
            let inert_above = mission.payload_kg
                + stack.iter().map(Stage::wet_mass_kg).sum::<f64>();
            let depth = stack.len();
            for stage in enumerate_stages(
                catalog,
                &engines,
                &increments,
                inert_above,
                mission.min_acceleration_m_s2,
                depth > 0,
            ) {
                let mut next = stack.clone();
                next.push(stage);
                if next.len() == stage_count {
                    if let Some(design) = Design::evaluate(mission, next) {
                        if seen.insert(design.key()) {
                            designs.push(design);
                        }
                    }
                } else {
                    frontier.push(next);
                }
            }
        }
    }
    designs
}
