//! Data models exchanged between client and server
//!
//! - Location: coordinates posted by the client
//! - Weather: the report (with nested wind info) returned by the server

use serde::{Deserialize, Deserializer, Serializer, ser::Error};

pub mod location;
pub mod weather;

pub use location::Location;
pub use weather::{WeatherReport, WindInfo};

/// Treat an explicit JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Refuse NaN and infinities, which JSON has no literal for.
fn finite_f64<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if !value.is_finite() {
        return Err(S::Error::custom(format!(
            "unsupported value {value}: JSON numbers must be finite"
        )));
    }
    serializer.serialize_f64(*value)
}
