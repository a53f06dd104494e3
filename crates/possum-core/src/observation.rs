//! Raw measurements as entered by the caller, before schema encoding.

use serde::{Deserialize, Serialize};

/// One specimen's measurements, as supplied by the form or API caller.
///
/// `sex` is kept as the raw enumerated string; encoding to the trained
/// numeric representation happens in
/// [`FeatureRecord::assemble`](crate::record::FeatureRecord::assemble), which
/// rejects anything outside the recognised set. Built fresh per prediction
/// request and discarded after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    /// Trapping site, observed range 0–7.
    pub site: i64,
    /// `"male"` or `"female"`.
    pub sex: String,
    pub hdlngth: f32,
    pub skullw: f32,
    pub totlngth: f32,
    pub taill: f32,
    pub footlgth: f32,
    pub earconch: f32,
    pub eye: f32,
    pub chest: f32,
    pub belly: f32,
}

impl Default for RawObservation {
    /// Defaults matching the input form's initial widget values.
    fn default() -> Self {
        Self {
            site: 1,
            sex: "male".to_string(),
            hdlngth: 95.0,
            skullw: 55.0,
            totlngth: 900.0,
            taill: 360.0,
            footlgth: 80.0,
            earconch: 45.0,
            eye: 15.0,
            chest: 180.0,
            belly: 140.0,
        }
    }
}
