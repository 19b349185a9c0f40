use crate::error::{KrishiError, Result};
use crate::i18n::MessageKey;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NE => "NE",
            CompassPoint::E => "E",
            CompassPoint::SE => "SE",
            CompassPoint::S => "S",
            CompassPoint::SW => "SW",
            CompassPoint::W => "W",
            CompassPoint::NW => "NW",
        }
    }
}

impl std::fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeatherCondition {
    #[default]
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
}

impl WeatherCondition {
    pub fn message_key(&self) -> MessageKey {
        match self {
            WeatherCondition::Sunny => MessageKey::CondSunny,
            WeatherCondition::PartlyCloudy => MessageKey::CondPartlyCloudy,
            WeatherCondition::Cloudy => MessageKey::CondCloudy,
            WeatherCondition::Rainy => MessageKey::CondRainy,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "☀",
            WeatherCondition::PartlyCloudy => "⛅",
            WeatherCondition::Cloudy => "☁",
            WeatherCondition::Rainy => "🌧",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub temp_c: f64,
    pub condition: WeatherCondition,
}

/// An immutable point-in-time bundle of weather readings. Replaces any
/// prior snapshot wholesale; never merged or diffed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_kmh: f64,
    pub wind_direction: CompassPoint,
    pub forecast: Vec<ForecastDay>,
}

impl WeatherSnapshot {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.humidity_pct) {
            return Err(KrishiError::InvalidData(format!(
                "humidity {} outside 0-100%",
                self.humidity_pct
            )));
        }
        if self.wind_speed_kmh < 0.0 {
            return Err(KrishiError::InvalidData(format!(
                "negative wind speed {}",
                self.wind_speed_kmh
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_symbols_are_distinct_for_rain_and_sun() {
        assert_ne!(
            WeatherCondition::Sunny.symbol(),
            WeatherCondition::Rainy.symbol()
        );
    }

    #[test]
    fn snapshot_validation_rejects_bad_humidity() {
        let snap = WeatherSnapshot {
            temperature_c: 28.0,
            humidity_pct: 130.0,
            wind_speed_kmh: 12.0,
            wind_direction: CompassPoint::NE,
            forecast: Vec::new(),
        };
        assert!(snap.validate().is_err());
    }

    #[test]
    fn snapshot_validation_accepts_sample_ranges() {
        let snap = WeatherSnapshot {
            temperature_c: 28.0,
            humidity_pct: 65.0,
            wind_speed_kmh: 12.0,
            wind_direction: CompassPoint::NE,
            forecast: Vec::new(),
        };
        assert!(snap.validate().is_ok());
    }
}
