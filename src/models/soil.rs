use crate::error::{KrishiError, Result};
use crate::i18n::MessageKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilType {
    Loamy,
    Clay,
    Sandy,
    Silty,
}

impl SoilType {
    pub fn message_key(&self) -> MessageKey {
        match self {
            SoilType::Loamy => MessageKey::SoilLoamy,
            SoilType::Clay => MessageKey::SoilClay,
            SoilType::Sandy => MessageKey::SoilSandy,
            SoilType::Silty => MessageKey::SoilSilty,
        }
    }
}

/// The five measured soil parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilParameter {
    Ph,
    Organic,
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl SoilParameter {
    pub const ALL: [SoilParameter; 5] = [
        SoilParameter::Ph,
        SoilParameter::Organic,
        SoilParameter::Nitrogen,
        SoilParameter::Phosphorus,
        SoilParameter::Potassium,
    ];

    pub fn message_key(&self) -> MessageKey {
        match self {
            SoilParameter::Ph => MessageKey::PhLevel,
            SoilParameter::Organic => MessageKey::OrganicContent,
            SoilParameter::Nitrogen => MessageKey::Nitrogen,
            SoilParameter::Phosphorus => MessageKey::Phosphorus,
            SoilParameter::Potassium => MessageKey::Potassium,
        }
    }

    /// Unit label key, if the parameter carries a unit at all.
    pub fn unit_key(&self) -> Option<MessageKey> {
        match self {
            SoilParameter::Ph => None,
            SoilParameter::Organic => Some(MessageKey::UnitPercent),
            _ => Some(MessageKey::UnitPpm),
        }
    }

    /// Ceiling used when mapping a reading onto a chart bar.
    pub fn display_max(&self) -> f64 {
        match self {
            SoilParameter::Ph => 14.0,
            SoilParameter::Organic => 10.0,
            SoilParameter::Nitrogen => 100.0,
            SoilParameter::Phosphorus => 50.0,
            SoilParameter::Potassium => 300.0,
        }
    }
}

/// Qualitative classification of a single soil parameter reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SoilBand {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl SoilBand {
    pub fn message_key(&self) -> MessageKey {
        match self {
            SoilBand::Excellent => MessageKey::BandExcellent,
            SoilBand::Good => MessageKey::BandGood,
            SoilBand::Moderate => MessageKey::BandModerate,
            SoilBand::Poor => MessageKey::BandPoor,
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            SoilBand::Excellent => Color::Green,
            SoilBand::Good => Color::Blue,
            SoilBand::Moderate => Color::Yellow,
            SoilBand::Poor => Color::Red,
        }
    }
}

/// An immutable soil reading bundle, replaced wholesale like the
/// weather snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilSample {
    pub soil_type: SoilType,
    pub ph: f64,
    pub organic_pct: f64,
    pub nitrogen_ppm: f64,
    pub phosphorus_ppm: f64,
    pub potassium_ppm: f64,
}

impl SoilSample {
    pub fn value(&self, parameter: SoilParameter) -> f64 {
        match parameter {
            SoilParameter::Ph => self.ph,
            SoilParameter::Organic => self.organic_pct,
            SoilParameter::Nitrogen => self.nitrogen_ppm,
            SoilParameter::Phosphorus => self.phosphorus_ppm,
            SoilParameter::Potassium => self.potassium_ppm,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=14.0).contains(&self.ph) {
            return Err(KrishiError::InvalidData(format!(
                "pH {} outside 0-14",
                self.ph
            )));
        }
        if !(0.0..=100.0).contains(&self.organic_pct) {
            return Err(KrishiError::InvalidData(format!(
                "organic content {} outside 0-100%",
                self.organic_pct
            )));
        }
        for parameter in [
            SoilParameter::Nitrogen,
            SoilParameter::Phosphorus,
            SoilParameter::Potassium,
        ] {
            if self.value(parameter) < 0.0 {
                return Err(KrishiError::InvalidData(format!(
                    "negative reading for {:?}",
                    parameter
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SoilSample {
        SoilSample {
            soil_type: SoilType::Loamy,
            ph: 6.8,
            organic_pct: 3.2,
            nitrogen_ppm: 45.0,
            phosphorus_ppm: 22.0,
            potassium_ppm: 180.0,
        }
    }

    #[test]
    fn value_selects_the_matching_field() {
        let s = sample();
        assert_eq!(s.value(SoilParameter::Ph), 6.8);
        assert_eq!(s.value(SoilParameter::Organic), 3.2);
        assert_eq!(s.value(SoilParameter::Potassium), 180.0);
    }

    #[test]
    fn display_max_matches_chart_ceilings() {
        assert_eq!(SoilParameter::Ph.display_max(), 14.0);
        assert_eq!(SoilParameter::Organic.display_max(), 10.0);
        assert_eq!(SoilParameter::Nitrogen.display_max(), 100.0);
        assert_eq!(SoilParameter::Phosphorus.display_max(), 50.0);
        assert_eq!(SoilParameter::Potassium.display_max(), 300.0);
    }

    #[test]
    fn validation_rejects_out_of_domain_ph() {
        let mut s = sample();
        s.ph = 15.2;
        assert!(s.validate().is_err());
        s.ph = -0.1;
        assert!(s.validate().is_err());
    }
}
