//! Documents consumed by the cloud display service.
//!
//! Values are integers truncated toward zero, the same way the inverter portal reports them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::InverterSnapshot;

pub const DEFAULT_DEVICE_ID: &str = "20221942";

/// Live readings document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readings {
    pub battery_soc: i64,
    pub pv_power: i64,
    pub load_power: i64,

    /// Serialised in UTC.
    pub last_updated: DateTime<Utc>,
}

impl From<&InverterSnapshot> for Readings {
    fn from(snapshot: &InverterSnapshot) -> Self {
        Self {
            battery_soc: snapshot.battery_percent.truncated(),
            pv_power: snapshot.pv_watts.truncated(),
            load_power: snapshot.load_watts.truncated(),
            last_updated: snapshot.timestamp.with_timezone(&Utc),
        }
    }
}

/// Device push document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevicePush {
    pub device_id: String,
    pub data: DeviceData,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceData {
    pub battery_soc: i64,
    pub pv_power: i64,
    pub load_power: i64,
}

impl DevicePush {
    pub fn new(device_id: impl Into<String>, snapshot: &InverterSnapshot) -> Self {
        Self {
            device_id: device_id.into(),
            data: DeviceData {
                battery_soc: snapshot.battery_percent.truncated(),
                pv_power: snapshot.pv_watts.truncated(),
                load_power: snapshot.load_watts.truncated(),
            },
        }
    }
}
