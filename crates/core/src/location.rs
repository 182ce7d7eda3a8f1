//! Facility areas that report fire-sensor events.
//!
//! The set is closed: every [`FireEvent`](crate::FireEvent) names one of the
//! fifteen areas below, and the alert store is keyed by them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A monitored facility area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "Warehouse A")]
    WarehouseA,
    #[serde(rename = "Office Block B")]
    OfficeBlockB,
    #[serde(rename = "Data Center C")]
    DataCenterC,
    #[serde(rename = "Production Line D")]
    ProductionLineD,
    #[serde(rename = "Storage Unit E")]
    StorageUnitE,
    #[serde(rename = "Main Lobby F")]
    MainLobbyF,
    #[serde(rename = "Loading Dock G")]
    LoadingDockG,
    #[serde(rename = "Server Room H")]
    ServerRoomH,
    #[serde(rename = "R&D Lab I")]
    RndLabI,
    #[serde(rename = "Cafeteria J")]
    CafeteriaJ,
    #[serde(rename = "Security Hub K")]
    SecurityHubK,
    #[serde(rename = "Ventilation Room L")]
    VentilationRoomL,
    #[serde(rename = "Emergency Exit M")]
    EmergencyExitM,
    #[serde(rename = "Parking Level N")]
    ParkingLevelN,
    #[serde(rename = "IT Server Room O")]
    ItServerRoomO,
}

impl Location {
    /// Number of monitored areas.
    pub const COUNT: usize = 15;

    /// Every location, in canonical order.
    pub const ALL: [Location; Self::COUNT] = [
        Location::WarehouseA,
        Location::OfficeBlockB,
        Location::DataCenterC,
        Location::ProductionLineD,
        Location::StorageUnitE,
        Location::MainLobbyF,
        Location::LoadingDockG,
        Location::ServerRoomH,
        Location::RndLabI,
        Location::CafeteriaJ,
        Location::SecurityHubK,
        Location::VentilationRoomL,
        Location::EmergencyExitM,
        Location::ParkingLevelN,
        Location::ItServerRoomO,
    ];

    /// Human-readable area name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Location::WarehouseA => "Warehouse A",
            Location::OfficeBlockB => "Office Block B",
            Location::DataCenterC => "Data Center C",
            Location::ProductionLineD => "Production Line D",
            Location::StorageUnitE => "Storage Unit E",
            Location::MainLobbyF => "Main Lobby F",
            Location::LoadingDockG => "Loading Dock G",
            Location::ServerRoomH => "Server Room H",
            Location::RndLabI => "R&D Lab I",
            Location::CafeteriaJ => "Cafeteria J",
            Location::SecurityHubK => "Security Hub K",
            Location::VentilationRoomL => "Ventilation Room L",
            Location::EmergencyExitM => "Emergency Exit M",
            Location::ParkingLevelN => "Parking Level N",
            Location::ItServerRoomO => "IT Server Room O",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .into_iter()
            .find(|loc| loc.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown location: '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
