//! Combat-attrition model.
//!
//! Replays one chromosome against a private copy of the target list and
//! scores the surviving capability. Damage is all-or-nothing per category:
//! a section's stored kills apply only when the category's remaining hit
//! points are positive and at least as large as the attacking capacity;
//! an overmatched strike is not applied at all. Sections are processed in
//! ATO order against the same survivor state, so two sections on the same
//! target see each other's damage.
//!
//! The weighting of surviving assets (aircraft on deck ×3, stationary
//! vehicles ×1.5, mobile vehicles ×2, personnel ×1, IADS ×4) is targeting
//! policy. Changing it changes every result.

use crate::models::{AircraftSection, Scenario, Target};

use super::StrikeChromosome;

/// Strategic value weight: aircraft on the deck.
pub const WEIGHT_ACDECK: f64 = 3.0;
/// Strategic value weight: stationary vehicles.
pub const WEIGHT_VEHSTAT: f64 = 1.5;
/// Strategic value weight: mobile vehicles.
pub const WEIGHT_VEHMOV: f64 = 2.0;
/// Strategic value weight: personnel.
pub const WEIGHT_PERS: f64 = 1.0;
/// Strategic value weight: IADS.
pub const WEIGHT_IADS: f64 = 4.0;

/// Weighted strategic value of a target's remaining assets.
pub fn weighted_value(target: &Target) -> f64 {
    f64::from(target.hp_acdeck) * WEIGHT_ACDECK
        + f64::from(target.hp_vehstat) * WEIGHT_VEHSTAT
        + f64::from(target.hp_vehmov) * WEIGHT_VEHMOV
        + f64::from(target.hp_pers) * WEIGHT_PERS
        + f64::from(target.hp_iads) * WEIGHT_IADS
}

/// The fitness zero-floor: total weighted value of all undamaged targets.
///
/// Computed once per run; an organism that destroys everything scores a
/// fitness equal to this constant.
pub fn cost_constant(targets: &[Target]) -> f64 {
    targets.iter().map(weighted_value).sum()
}

/// All-or-nothing kill threshold for one category.
fn apply_kills(hp: &mut i32, capacity: i32) {
    if *hp > 0 && *hp >= capacity {
        *hp = (*hp - capacity).max(0);
    }
}

/// Applies one section's stored kills to a target's remaining assets.
///
/// Aircraft on the deck are attacked with the stationary-vehicle capacity;
/// there is no separate on-deck capacity field.
pub fn strike(target: &mut Target, section: &AircraftSection) {
    apply_kills(&mut target.hp_acdeck, section.sk_vehstat);
    apply_kills(&mut target.hp_vehstat, section.sk_vehstat);
    apply_kills(&mut target.hp_vehmov, section.sk_vehmov);
    apply_kills(&mut target.hp_pers, section.sk_pers);
    apply_kills(&mut target.hp_iads, section.sk_iads);
}

/// Evaluates one chromosome: weighted value of surviving target capability.
///
/// Works on a per-call clone of the scenario's targets; the templates are
/// never mutated. Always non-negative. Genes must satisfy
/// [`StrikeChromosome::is_valid`] for the scenario's target count.
pub fn evaluate_cost(chromosome: &StrikeChromosome, scenario: &Scenario) -> f64 {
    let mut survivors = scenario.targets.clone();

    for (section, &tgt) in scenario.sections.iter().zip(&chromosome.genes) {
        strike(&mut survivors[tgt], section);
    }

    survivors.iter().map(weighted_value).sum()
}
