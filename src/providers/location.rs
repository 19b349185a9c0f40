use crate::config::{DeviceConfig, ReferenceConfig};
use crate::error::{KrishiError, Result};
use crate::models::GeoLocation;
use std::path::PathBuf;

/// One-shot reader of a positioning daemon's fix file. The file holds
/// the latest fix as `<latitude> <longitude>` in decimal degrees.
pub struct DeviceFixClient {
    fix_file: PathBuf,
}

impl DeviceFixClient {
    pub fn new(config: DeviceConfig) -> Self {
        Self {
            fix_file: config.fix_file,
        }
    }

    pub async fn fetch_position(&self) -> Result<(f64, f64)> {
        let raw = tokio::fs::read_to_string(&self.fix_file).await.map_err(|e| {
            KrishiError::DeviceUnavailable(format!("{}: {}", self.fix_file.display(), e))
        })?;
        Self::parse_fix(&raw)
    }

    fn parse_fix(raw: &str) -> Result<(f64, f64)> {
        let mut parts = raw.split_whitespace();
        let latitude = parts.next().and_then(|v| v.parse::<f64>().ok());
        let longitude = parts.next().and_then(|v| v.parse::<f64>().ok());
        match (latitude, longitude) {
            (Some(lat), Some(lon))
                if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) =>
            {
                Ok((lat, lon))
            }
            _ => Err(KrishiError::DeviceUnavailable(format!(
                "malformed fix '{}'",
                raw.trim()
            ))),
        }
    }

    pub fn available(&self) -> bool {
        self.fix_file.exists()
    }
}

/// Produces a `GeoLocation` for both entry paths: manual text entry
/// and device position requests.
pub struct LocationService {
    reference: ReferenceConfig,
    device: Option<DeviceFixClient>,
}

impl LocationService {
    pub fn new(reference: ReferenceConfig, device: Option<DeviceConfig>) -> Self {
        if device.is_none() {
            tracing::info!("No device fix source configured - GPS requests will use the fallback");
        }
        Self {
            reference,
            device: device.map(DeviceFixClient::new),
        }
    }

    /// Manual entry: the typed text is kept verbatim and anchored to
    /// the reference coordinate. No geocoding happens.
    pub fn manual(&self, address: &str) -> GeoLocation {
        GeoLocation::manual(address, self.reference.latitude, self.reference.longitude)
    }

    /// Device position request. Any failure - no source configured,
    /// unreadable file, malformed fix - substitutes the reference
    /// coordinate with the fallback marker. No retry is attempted.
    pub async fn device_location(&self) -> GeoLocation {
        let position = match &self.device {
            Some(client) => client.fetch_position().await,
            None => Err(KrishiError::DeviceUnavailable(
                "no fix source configured".into(),
            )),
        };

        match position {
            Ok((latitude, longitude)) => GeoLocation::device(latitude, longitude),
            Err(e) => {
                tracing::warn!("Device position failed: {} - using fallback", e);
                GeoLocation::fallback(
                    &self.reference.label,
                    self.reference.latitude,
                    self.reference.longitude,
                )
            }
        }
    }

    pub fn device_available(&self) -> bool {
        self.device.as_ref().is_some_and(DeviceFixClient::available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LocationSource, FALLBACK_MARKER};

    fn reference() -> ReferenceConfig {
        ReferenceConfig {
            latitude: 28.6139,
            longitude: 77.2090,
            label: "Delhi, India".into(),
        }
    }

    fn temp_fix_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("krishi-fix-{}-{}", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn manual_entry_anchors_typed_text_to_reference() {
        let service = LocationService::new(reference(), None);
        let loc = service.manual("110001");
        assert_eq!(loc.address, "110001");
        assert!((loc.latitude - 28.6139).abs() < 1e-9);
        assert!((loc.longitude - 77.2090).abs() < 1e-9);
        assert_eq!(loc.source, LocationSource::Manual);
    }

    #[tokio::test]
    async fn unconfigured_device_yields_fallback_immediately() {
        let service = LocationService::new(reference(), None);
        let loc = service.device_location().await;
        assert_eq!(loc.source, LocationSource::Fallback);
        assert!(loc.address.contains(FALLBACK_MARKER));
        assert!((loc.latitude - 28.6139).abs() < 1e-9);
    }

    #[tokio::test]
    async fn missing_fix_file_yields_fallback() {
        let device = DeviceConfig {
            fix_file: std::env::temp_dir().join("krishi-fix-does-not-exist"),
        };
        let service = LocationService::new(reference(), Some(device));
        let loc = service.device_location().await;
        assert!(loc.is_fallback());
        assert!(loc.address.contains(FALLBACK_MARKER));
    }

    #[tokio::test]
    async fn malformed_fix_yields_fallback() {
        let path = temp_fix_file("malformed", "not a fix");
        let service = LocationService::new(
            reference(),
            Some(DeviceConfig {
                fix_file: path.clone(),
            }),
        );
        let loc = service.device_location().await;
        assert!(loc.is_fallback());
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn valid_fix_yields_device_coordinates() {
        let path = temp_fix_file("valid", "19.0760 72.8777\n");
        let service = LocationService::new(
            reference(),
            Some(DeviceConfig {
                fix_file: path.clone(),
            }),
        );
        let loc = service.device_location().await;
        assert_eq!(loc.source, LocationSource::Device);
        assert!((loc.latitude - 19.0760).abs() < 1e-9);
        assert!((loc.longitude - 72.8777).abs() < 1e-9);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn parse_fix_rejects_out_of_range_coordinates() {
        assert!(DeviceFixClient::parse_fix("91.0 10.0").is_err());
        assert!(DeviceFixClient::parse_fix("45.0 -200.0").is_err());
        assert!(DeviceFixClient::parse_fix("").is_err());
        assert!(DeviceFixClient::parse_fix("28.6139 77.2090").is_ok());
    }
}
