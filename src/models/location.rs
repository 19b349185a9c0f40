use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Appended to the place label when a device position request falls
/// back to the reference coordinate.
pub const FALLBACK_MARKER: &str = "(Default)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationSource {
    Manual,
    Device,
    Fallback,
}

impl LocationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationSource::Manual => "Manual",
            LocationSource::Device => "Device GPS",
            LocationSource::Fallback => "Fallback",
        }
    }
}

impl std::fmt::Display for LocationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single user location selection. Replaces any prior value wholesale;
/// no history is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub source: LocationSource,
    pub acquired_at: DateTime<Utc>,
}

impl GeoLocation {
    /// Manual entry keeps the typed text verbatim and anchors it to the
    /// configured reference coordinate (no geocoding is performed).
    pub fn manual(address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            address: address.into(),
            source: LocationSource::Manual,
            acquired_at: Utc::now(),
        }
    }

    pub fn device(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            address: format!("{:.4}, {:.4}", latitude, longitude),
            source: LocationSource::Device,
            acquired_at: Utc::now(),
        }
    }

    pub fn fallback(label: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            address: format!("{} {}", label, FALLBACK_MARKER),
            source: LocationSource::Fallback,
            acquired_at: Utc::now(),
        }
    }

    pub fn coordinate_label(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    pub fn is_fallback(&self) -> bool {
        self.source == LocationSource::Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_keeps_typed_text_and_reference_coordinate() {
        let loc = GeoLocation::manual("Karol Bagh, Delhi", 28.6139, 77.2090);
        assert_eq!(loc.address, "Karol Bagh, Delhi");
        assert!((loc.latitude - 28.6139).abs() < 1e-9);
        assert!((loc.longitude - 77.2090).abs() < 1e-9);
        assert_eq!(loc.source, LocationSource::Manual);
    }

    #[test]
    fn fallback_carries_marker() {
        let loc = GeoLocation::fallback("Delhi, India", 28.6139, 77.2090);
        assert!(loc.address.contains(FALLBACK_MARKER));
        assert!(loc.is_fallback());
    }

    #[test]
    fn device_address_is_formatted_coordinate() {
        let loc = GeoLocation::device(19.0760, 72.8777);
        assert_eq!(loc.address, "19.0760, 72.8777");
        assert_eq!(loc.source, LocationSource::Device);
        assert!(!loc.is_fallback());
    }

    #[test]
    fn coordinate_label_uses_four_decimals() {
        let loc = GeoLocation::manual("x", 28.61391234, 77.20901234);
        assert_eq!(loc.coordinate_label(), "28.6139, 77.2090");
    }
}
