use super::{CropSuitability, SoilSample, WeatherSnapshot};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Everything one advisory fetch delivers: a weather snapshot, a soil
/// sample, and the ranked crop list. Assigned to view state as a unit
/// so the display can never mix fields from two different fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryBundle {
    pub weather: WeatherSnapshot,
    pub soil: SoilSample,
    pub crops: Vec<CropSuitability>,
}

impl AdvisoryBundle {
    /// Ingestion-boundary check. Today's values come from a static
    /// table, but anything replacing that table must pass here too.
    pub fn validate(&self) -> Result<()> {
        self.weather.validate()?;
        self.soil.validate()?;
        for crop in &self.crops {
            crop.validate()?;
        }
        Ok(())
    }

    pub fn top_crop(&self) -> Option<&CropSuitability> {
        self.crops.first()
    }
}
