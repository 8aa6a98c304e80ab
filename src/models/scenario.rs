//! Strike scenario: one ATO against one JTAR list.
//!
//! The scenario fixes both index spaces of the GA encoding: gene position
//! = section index into the ATO, gene value = target index into the JTAR
//! list. Both collections are ordered and immutable for the life of a run.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{AircraftSection, Target};

/// A complete strike scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Air Tasking Order: one entry per gene position.
    pub sections: Vec<AircraftSection>,
    /// JTAR targets: one entry per gene value.
    pub targets: Vec<Target>,
}

impl Scenario {
    /// Creates a scenario from an ATO and a target list.
    pub fn new(sections: Vec<AircraftSection>, targets: Vec<Target>) -> Self {
        Self { sections, targets }
    }

    /// The reference ten-section, ten-target scenario.
    ///
    /// Two waves of the five airframe archetypes against a mixed target
    /// set: parked aircraft, vehicle parks, troop concentrations, and two
    /// IADS sites.
    pub fn standard() -> Self {
        let sections = vec![
            AircraftSection::rainbow("0001"),
            AircraftSection::leopard("0002"),
            AircraftSection::shark("0003"),
            AircraftSection::flanker("0004"),
            AircraftSection::qiang("0005"),
            AircraftSection::rainbow("0006"),
            AircraftSection::leopard("0007"),
            AircraftSection::shark("0008"),
            AircraftSection::flanker("0009"),
            AircraftSection::qiang("0010"),
        ];
        let targets = vec![
            Target::new(1).with_acdeck(6),
            Target::new(3).with_iads(4),
            Target::new(5).with_iads(2),
            Target::new(7).with_vehmov(10),
            Target::new(9).with_pers(15),
            Target::new(11).with_vehstat(20),
            Target::new(13).with_acdeck(10),
            Target::new(15).with_pers(15),
            Target::new(17).with_acdeck(8),
            Target::new(19).with_vehstat(20),
        ];
        Self { sections, targets }
    }

    /// Generates a random scenario.
    ///
    /// Each section is a uniformly-drawn airframe archetype; each target
    /// holds 1..=15 hit points in exactly one uniformly-drawn category.
    /// JTAR numbers follow the odd-number convention.
    pub fn random<R: Rng>(num_sections: usize, num_targets: usize, rng: &mut R) -> Self {
        let sections = (0..num_sections)
            .map(|i| {
                let msn = format!("{:04}", i + 1);
                match rng.random_range(0..5) {
                    0 => AircraftSection::rainbow(msn),
                    1 => AircraftSection::leopard(msn),
                    2 => AircraftSection::shark(msn),
                    3 => AircraftSection::flanker(msn),
                    _ => AircraftSection::qiang(msn),
                }
            })
            .collect();

        let targets = (0..num_targets)
            .map(|i| {
                let target = Target::new((2 * i + 1) as i32);
                let hp = rng.random_range(1..=15);
                match rng.random_range(0..5) {
                    0 => target.with_acdeck(hp),
                    1 => target.with_vehstat(hp),
                    2 => target.with_vehmov(hp),
                    3 => target.with_pers(hp),
                    _ => target.with_iads(hp),
                }
            })
            .collect();

        Self { sections, targets }
    }

    /// Number of gene positions (ATO size).
    pub fn num_sections(&self) -> usize {
        self.sections.len()
    }

    /// Number of valid gene values (target count).
    pub fn num_targets(&self) -> usize {
        self.targets.len()
    }
}
