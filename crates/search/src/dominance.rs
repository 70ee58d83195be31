//! Pareto dominance over the feasible design set.

use crate::design::Design;

/// True when `a` is at least as good as `b` on both mass and cost and
/// strictly better on at least one.
pub fn dominates(a: &Design, b: &Design) -> bool {
    let (ma, ca) = (a.total_mass_kg(), a.total_cost());
    let (mb, cb) = (b.total_mass_kg(), b.total_cost());
    ma <= mb && ca <= cb && (ma < mb || ca < cb)
}

/// Mark `is_best` on every design not dominated by another in the set.
///
/// Designs with identical mass and cost never dominate each other and are
/// all retained as best; any further preference between them — gimbal
/// capability included — belongs to the caller's presentation layer.
pub fn mark_pareto(designs: &mut [Design]) {
    for i in 0..designs.len() {
        let beaten =
            (0..designs.len()).any(|j| j != i && dominates(&designs[j], &designs[i]));
        designs[i].is_best = !beaten;
    }
}
