// file: src/models/serde_fixed.rs
// description: fixed-precision float serialization for result payloads

use serde::Serializer;

const SCALE: f64 = 10_000.0;

pub fn round4(value: f64) -> f64 {
    (value * SCALE).round() / SCALE
}

/// Serialize an `f64` rounded to four decimal places.
pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(round4(*value))
}
