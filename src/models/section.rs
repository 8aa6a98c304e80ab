//! Aircraft section (ATO entry) model.
//!
//! A section is a flight of strike aircraft tasked on the Air Tasking
//! Order. Each section carries a fixed load of stored kills against the
//! four target categories it can engage.
//!
//! # Reference
//! JP 3-60, "Joint Targeting", App. A (target development categories)

use serde::{Deserialize, Serialize};

/// A strike aircraft section on the ATO.
///
/// Stored-kill capacities are per-sortie and immutable; the attrition
/// model never draws them down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftSection {
    /// ATO mission number.
    pub msn: String,
    /// Latitude, decimal degrees.
    pub pos_lat: i32,
    /// Longitude, decimal degrees.
    pub pos_long: i32,
    /// Cruise speed (km/h).
    pub speed: i32,
    /// Stored kills vs stationary vehicles or aircraft on the deck.
    pub sk_vehstat: i32,
    /// Stored kills vs mobile vehicles.
    pub sk_vehmov: i32,
    /// Stored kills vs infantry/personnel.
    pub sk_pers: i32,
    /// Stored kills vs air-defense assets and radar sites.
    pub sk_iads: i32,
}

impl AircraftSection {
    /// Creates a section with the given mission number and no capability.
    pub fn new(msn: impl Into<String>) -> Self {
        Self {
            msn: msn.into(),
            pos_lat: 0,
            pos_long: 0,
            speed: 0,
            sk_vehstat: 0,
            sk_vehmov: 0,
            sk_pers: 0,
            sk_iads: 0,
        }
    }

    /// Sets the section position (decimal degrees).
    pub fn with_position(mut self, lat: i32, long: i32) -> Self {
        self.pos_lat = lat;
        self.pos_long = long;
        self
    }

    /// Sets the cruise speed (km/h).
    pub fn with_speed(mut self, speed: i32) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the stored-kill capacities (stationary, mobile, personnel, IADS).
    pub fn with_stored_kills(mut self, vehstat: i32, vehmov: i32, pers: i32, iads: i32) -> Self {
        self.sk_vehstat = vehstat;
        self.sk_vehmov = vehmov;
        self.sk_pers = pers;
        self.sk_iads = iads;
        self
    }

    /// Creates a Rainbow section: slow UCAV, balanced soft-target load.
    pub fn rainbow(msn: impl Into<String>) -> Self {
        Self::new(msn).with_speed(280).with_stored_kills(4, 4, 4, 0)
    }

    /// Creates a Leopard section: attack helicopters, heavy anti-armor load.
    pub fn leopard(msn: impl Into<String>) -> Self {
        Self::new(msn).with_speed(900).with_stored_kills(12, 0, 12, 0)
    }

    /// Creates a Shark section: strike fighters, stationary/personnel load.
    pub fn shark(msn: impl Into<String>) -> Self {
        Self::new(msn).with_speed(1380).with_stored_kills(8, 0, 8, 0)
    }

    /// Creates a Flanker section: multirole fighters, the only archetype
    /// with a SEAD-capable load.
    pub fn flanker(msn: impl Into<String>) -> Self {
        Self::new(msn).with_speed(1380).with_stored_kills(8, 8, 8, 12)
    }

    /// Creates a Qiang section: light attack, small general-purpose load.
    pub fn qiang(msn: impl Into<String>) -> Self {
        Self::new(msn).with_speed(1380).with_stored_kills(4, 4, 4, 4)
    }

    /// Whether this section can affect any target category at all.
    pub fn has_capability(&self) -> bool {
        self.sk_vehstat > 0 || self.sk_vehmov > 0 || self.sk_pers > 0 || self.sk_iads > 0
    }
}
