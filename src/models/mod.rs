//! Strike-planning domain models.
//!
//! Core data types for the assignment problem: which aircraft section
//! strikes which ground target.
//!
//! | Type | Role |
//! |------|------|
//! | `AircraftSection` | ATO entry with per-category stored kills |
//! | `Target` | JTAR with per-category hit points |
//! | `Scenario` | Ordered ATO + ordered target list (the gene index spaces) |

mod scenario;
mod section;
mod target;

pub use scenario::Scenario;
pub use section::AircraftSection;
pub use target::Target;
