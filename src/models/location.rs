//! Location model sent by the client

use serde::{Deserialize, Serialize};

use super::{finite_f64, null_as_default};

/// Location coordinates as exchanged on the wire (`{"lat": .., "lon": ..}`)
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct Location {
    /// Latitude in decimal degrees
    #[serde(
        rename = "lat",
        serialize_with = "finite_f64",
        deserialize_with = "null_as_default"
    )]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(
        rename = "lon",
        serialize_with = "finite_f64",
        deserialize_with = "null_as_default"
    )]
    pub longitude: f64,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Zzyzx, California. The location the client asks about.
    #[must_use]
    pub fn zzyzx() -> Self {
        Self::new(35.143_26, -116.104)
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
