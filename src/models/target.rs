//! Ground target (JTAR) model.
//!
//! A target is a Joint Tactical Air Request: a geographic point holding
//! some mix of destroyable assets, tallied as per-category "hit points".
//! Targets are immutable templates; the attrition model works on private
//! copies.

use serde::{Deserialize, Serialize};

/// A JTAR ground target.
///
/// Hit points count destroyable assets per category. Most real targets
/// populate a single category; nothing enforces that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// JTAR number (odd by fielding convention).
    pub num_jtar: i32,
    /// Latitude, decimal degrees.
    pub pos_lat: i32,
    /// Longitude, decimal degrees.
    pub pos_long: i32,
    /// Aircraft parked on the deck.
    pub hp_acdeck: i32,
    /// Stationary vehicles or non-flying aircraft.
    pub hp_vehstat: i32,
    /// Mobile vehicles.
    pub hp_vehmov: i32,
    /// Infantry/personnel.
    pub hp_pers: i32,
    /// Air-defense assets and radar sites.
    pub hp_iads: i32,
}

impl Target {
    /// Creates an empty target with the given JTAR number.
    pub fn new(num_jtar: i32) -> Self {
        Self {
            num_jtar,
            pos_lat: 0,
            pos_long: 0,
            hp_acdeck: 0,
            hp_vehstat: 0,
            hp_vehmov: 0,
            hp_pers: 0,
            hp_iads: 0,
        }
    }

    /// Sets the target position (decimal degrees).
    pub fn with_position(mut self, lat: i32, long: i32) -> Self {
        self.pos_lat = lat;
        self.pos_long = long;
        self
    }

    /// Sets aircraft-on-deck hit points.
    pub fn with_acdeck(mut self, hp: i32) -> Self {
        self.hp_acdeck = hp;
        self
    }

    /// Sets stationary-vehicle hit points.
    pub fn with_vehstat(mut self, hp: i32) -> Self {
        self.hp_vehstat = hp;
        self
    }

    /// Sets mobile-vehicle hit points.
    pub fn with_vehmov(mut self, hp: i32) -> Self {
        self.hp_vehmov = hp;
        self
    }

    /// Sets personnel hit points.
    pub fn with_pers(mut self, hp: i32) -> Self {
        self.hp_pers = hp;
        self
    }

    /// Sets IADS hit points.
    pub fn with_iads(mut self, hp: i32) -> Self {
        self.hp_iads = hp;
        self
    }

    /// Total raw (unweighted) hit points across all categories.
    pub fn total_hp(&self) -> i32 {
        self.hp_acdeck + self.hp_vehstat + self.hp_vehmov + self.hp_pers + self.hp_iads
    }

    /// Whether every category has been reduced to zero.
    pub fn is_destroyed(&self) -> bool {
        self.total_hp() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_builder() {
        let t = Target::new(11)
            .with_position(35, 128)
            .with_vehstat(20)
            .with_iads(4);

        assert_eq!(t.num_jtar, 11);
        assert_eq!(t.pos_lat, 35);
        assert_eq!(t.pos_long, 128);
        assert_eq!(t.hp_vehstat, 20);
        assert_eq!(t.hp_iads, 4);
        assert_eq!(t.hp_acdeck, 0);
        assert_eq!(t.total_hp(), 24);
        assert!(!t.is_destroyed());
    }

    #[test]
    fn test_empty_target_destroyed() {
        let t = Target::new(1);
        assert_eq!(t.total_hp(), 0);
        assert!(t.is_destroyed());
    }

    #[test]
    fn test_serde_round_trip() {
        let t = Target::new(7).with_vehmov(10);
        let json = serde_json::to_string(&t).unwrap();
        let back: Target = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
