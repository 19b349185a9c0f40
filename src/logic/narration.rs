use crate::i18n::{label, template, Lang, MessageKey};
use crate::models::{AdvisoryBundle, CropSuitability, SoilSample, WeatherSnapshot};

/// Format a reading the way the narration reads it aloud: whole
/// numbers without a trailing ".0", everything else to one decimal.
pub fn compact(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

pub fn weather_summary(lang: Lang, weather: &WeatherSnapshot) -> String {
    template(
        lang,
        MessageKey::NarrWeather,
        &[
            ("temp", &compact(weather.temperature_c)),
            ("humidity", &compact(weather.humidity_pct)),
            ("wind", &compact(weather.wind_speed_kmh)),
        ],
    )
}

pub fn soil_summary(lang: Lang, soil: &SoilSample) -> String {
    template(
        lang,
        MessageKey::NarrSoil,
        &[
            ("soil", label(lang, soil.soil_type.message_key())),
            ("ph", &compact(soil.ph)),
            ("organic", &compact(soil.organic_pct)),
            ("nitrogen", &compact(soil.nitrogen_ppm)),
            ("phosphorus", &compact(soil.phosphorus_ppm)),
            ("potassium", &compact(soil.potassium_ppm)),
        ],
    )
}

pub fn crop_summary(lang: Lang, crop: &CropSuitability) -> String {
    template(
        lang,
        MessageKey::NarrCrop,
        &[
            ("crop", crop.display_name(lang)),
            ("score", &crop.suitability_score.to_string()),
            ("planting", &crop.planting_window),
            ("harvest", &crop.harvest_window),
            ("irrigation", &crop.irrigation_advice),
            ("fertilizer", &crop.fertilizer_advice),
        ],
    )
}

/// Dashboard narration needs the ranked list to be non-empty.
pub fn dashboard_summary(lang: Lang, bundle: &AdvisoryBundle) -> Option<String> {
    let top = bundle.top_crop()?;
    Some(template(
        lang,
        MessageKey::NarrDashboard,
        &[
            ("crop", top.display_name(lang)),
            ("score", &top.suitability_score.to_string()),
            ("temp", &compact(bundle.weather.temperature_c)),
            ("ph", &compact(bundle.soil.ph)),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn compact_drops_trailing_zero() {
        assert_eq!(compact(28.0), "28");
        assert_eq!(compact(3.2), "3.2");
        assert_eq!(compact(6.8), "6.8");
    }

    #[test]
    fn english_weather_summary_reads_the_readings() {
        let text = weather_summary(Lang::En, &data::sample_weather());
        assert_eq!(
            text,
            "Current temperature is 28 degrees Celsius. Humidity is 65 percent. \
             Wind speed is 12 kilometers per hour."
        );
    }

    #[test]
    fn hindi_soil_summary_uses_hindi_soil_type() {
        let text = soil_summary(Lang::Hi, &data::sample_soil());
        assert!(text.contains("दोमट"));
        assert!(text.contains("6.8"));
        assert!(!text.contains("{"));
    }

    #[test]
    fn crop_summary_interpolates_every_slot() {
        let crops = data::sample_crops();
        let text = crop_summary(Lang::En, &crops[0]);
        assert!(text.contains("Rice"));
        assert!(text.contains("95"));
        assert!(text.contains("June-July"));
        assert!(!text.contains("{"));
    }

    #[test]
    fn dashboard_summary_names_the_top_crop() {
        let bundle = data::sample_bundle();
        let hi = dashboard_summary(Lang::Hi, &bundle).unwrap();
        assert!(hi.contains("चावल"));
        let en = dashboard_summary(Lang::En, &bundle).unwrap();
        assert!(en.contains("Rice"));
        assert_ne!(hi, en);
    }
}
