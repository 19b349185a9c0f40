use crate::models::{
    AdvisoryBundle, CompassPoint, CropSuitability, ForecastDay, SoilSample, SoilType,
    WeatherCondition, WeatherSnapshot,
};
use chrono::{Duration, Utc};

pub fn sample_weather() -> WeatherSnapshot {
    let today = Utc::now().date_naive();
    WeatherSnapshot {
        temperature_c: 28.0,
        humidity_pct: 65.0,
        wind_speed_kmh: 12.0,
        wind_direction: CompassPoint::NE,
        forecast: vec![
            ForecastDay {
                date: today + Duration::days(1),
                temp_c: 29.0,
                condition: WeatherCondition::Sunny,
            },
            ForecastDay {
                date: today + Duration::days(2),
                temp_c: 31.0,
                condition: WeatherCondition::PartlyCloudy,
            },
            ForecastDay {
                date: today + Duration::days(3),
                temp_c: 27.0,
                condition: WeatherCondition::Rainy,
            },
        ],
    }
}

pub fn sample_soil() -> SoilSample {
    SoilSample {
        soil_type: SoilType::Loamy,
        ph: 6.8,
        organic_pct: 3.2,
        nitrogen_ppm: 45.0,
        phosphorus_ppm: 22.0,
        potassium_ppm: 180.0,
    }
}

/// The fixed three-entry crop table; insertion order is the
/// display/ranking order.
pub fn sample_crops() -> Vec<CropSuitability> {
    vec![
        CropSuitability {
            common_name: "Rice".into(),
            localized_name: "चावल".into(),
            suitability_score: 95,
            planting_window: "June-July".into(),
            harvest_window: "October-November".into(),
            irrigation_advice: "Heavy irrigation needed".into(),
            fertilizer_advice: "NPK 20:10:10".into(),
            pest_control_advice: "Regular monitoring for stem borer".into(),
        },
        CropSuitability {
            common_name: "Wheat".into(),
            localized_name: "गेहूं".into(),
            suitability_score: 88,
            planting_window: "November-December".into(),
            harvest_window: "March-April".into(),
            irrigation_advice: "Moderate irrigation".into(),
            fertilizer_advice: "NPK 18:18:18".into(),
            pest_control_advice: "Watch for aphids and rust".into(),
        },
        CropSuitability {
            common_name: "Sugarcane".into(),
            localized_name: "गन्ना".into(),
            suitability_score: 82,
            planting_window: "February-March".into(),
            harvest_window: "December-January".into(),
            irrigation_advice: "Heavy irrigation in summer".into(),
            fertilizer_advice: "High nitrogen content".into(),
            pest_control_advice: "Monitor for red rot disease".into(),
        },
    ]
}

pub fn sample_bundle() -> AdvisoryBundle {
    AdvisoryBundle {
        weather: sample_weather(),
        soil: sample_soil(),
        crops: sample_crops(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{bucket, classify};
    use crate::models::{SoilBand, SoilParameter, SuitabilityLevel};

    #[test]
    fn sample_bundle_passes_ingestion_validation() {
        assert!(sample_bundle().validate().is_ok());
    }

    #[test]
    fn crop_table_has_three_entries_ranked_descending() {
        let crops = sample_crops();
        assert_eq!(crops.len(), 3);
        assert!(crops
            .windows(2)
            .all(|pair| pair[0].suitability_score >= pair[1].suitability_score));
    }

    #[test]
    fn sample_scores_span_two_levels() {
        let crops = sample_crops();
        assert_eq!(
            bucket(crops[0].suitability_score),
            SuitabilityLevel::HighlyRecommended
        );
        assert_eq!(
            bucket(crops[2].suitability_score),
            SuitabilityLevel::Recommended
        );
    }

    #[test]
    fn sample_soil_is_excellent_across_the_board() {
        let soil = sample_soil();
        for parameter in SoilParameter::ALL {
            assert_eq!(
                classify(parameter, soil.value(parameter)),
                SoilBand::Excellent
            );
        }
    }

    #[test]
    fn forecast_covers_the_next_three_days() {
        let weather = sample_weather();
        assert_eq!(weather.forecast.len(), 3);
        let today = Utc::now().date_naive();
        assert!(weather.forecast.iter().all(|day| day.date > today));
    }
}
