use crate::error::Result;
use std::collections::HashMap;
use std::sync::OnceLock;

/// The eight language codes offered by the selector. Only `hi` and `en`
/// carry complete translation tables; the rest are advertised but
/// untranslated, and the selector refuses them rather than falling back
/// to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Hi,
    En,
    Te,
    Ta,
    Bn,
    Gu,
    Mr,
    Pa,
}

impl Lang {
    pub const ALL: [Lang; 8] = [
        Lang::Hi,
        Lang::En,
        Lang::Te,
        Lang::Ta,
        Lang::Bn,
        Lang::Gu,
        Lang::Mr,
        Lang::Pa,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Lang::Hi => "hi",
            Lang::En => "en",
            Lang::Te => "te",
            Lang::Ta => "ta",
            Lang::Bn => "bn",
            Lang::Gu => "gu",
            Lang::Mr => "mr",
            Lang::Pa => "pa",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "hi" => Some(Lang::Hi),
            "en" => Some(Lang::En),
            "te" => Some(Lang::Te),
            "ta" => Some(Lang::Ta),
            "bn" => Some(Lang::Bn),
            "gu" => Some(Lang::Gu),
            "mr" => Some(Lang::Mr),
            "pa" => Some(Lang::Pa),
            _ => None,
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::Hi => "हिन्दी",
            Lang::En => "English",
            Lang::Te => "తెలుగు",
            Lang::Ta => "தமிழ்",
            Lang::Bn => "বাংলা",
            Lang::Gu => "ગુજરાતી",
            Lang::Mr => "मराठी",
            Lang::Pa => "ਪੰਜਾਬੀ",
        }
    }

    /// BCP-47 tag handed to the speech synthesizer.
    pub fn speech_tag(&self) -> &'static str {
        match self {
            Lang::Hi => "hi-IN",
            Lang::En => "en-US",
            Lang::Te => "te-IN",
            Lang::Ta => "ta-IN",
            Lang::Bn => "bn-IN",
            Lang::Gu => "gu-IN",
            Lang::Mr => "mr-IN",
            Lang::Pa => "pa-IN",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Every message the views and narration templates can request. The
/// coverage tests below keep both shipped tables in sync with this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    AppTitle,
    TabLocation,
    TabWeather,
    TabSoil,
    TabCrops,
    TabDashboard,
    TabLanguage,
    ManualEntry,
    EnterLocation,
    LocationPlaceholder,
    UseGps,
    Submit,
    GettingLocation,
    GpsHint,
    GetRecommendations,
    LocationLabel,
    NoLocation,
    FetchingAdvisory,
    CurrentWeather,
    Temperature,
    Humidity,
    WindSpeed,
    WindDirection,
    Forecast,
    WeatherInsights,
    InsightHumidity,
    InsightTemperature,
    InsightWind,
    SoilAnalysis,
    SoilHealth,
    SoilTypeLabel,
    PhLevel,
    OrganicContent,
    Nitrogen,
    Phosphorus,
    Potassium,
    SoilAdvice,
    HintSoilType,
    HintPh,
    HintOrganic,
    CropRecommendations,
    Suitability,
    PlantingWindow,
    HarvestWindow,
    Irrigation,
    Fertilizer,
    PestControl,
    TopCropInsight,
    BandExcellent,
    BandGood,
    BandModerate,
    BandPoor,
    LevelHighlyRecommended,
    LevelRecommended,
    LevelModerate,
    LevelLowRecommended,
    TopCrop,
    SuitabilityScore,
    CropSuitabilityChart,
    SoilNutrients,
    ChooseLanguage,
    LanguageUnavailable,
    LanguageChanged,
    Listen,
    CondSunny,
    CondPartlyCloudy,
    CondCloudy,
    CondRainy,
    SoilLoamy,
    SoilClay,
    SoilSandy,
    SoilSilty,
    UnitCelsius,
    UnitPercent,
    UnitPpm,
    UnitKmh,
    NarrWeather,
    NarrSoil,
    NarrCrop,
    NarrDashboard,
}

impl MessageKey {
    pub const ALL: [MessageKey; 80] = [
        MessageKey::AppTitle,
        MessageKey::TabLocation,
        MessageKey::TabWeather,
        MessageKey::TabSoil,
        MessageKey::TabCrops,
        MessageKey::TabDashboard,
        MessageKey::TabLanguage,
        MessageKey::ManualEntry,
        MessageKey::EnterLocation,
        MessageKey::LocationPlaceholder,
        MessageKey::UseGps,
        MessageKey::Submit,
        MessageKey::GettingLocation,
        MessageKey::GpsHint,
        MessageKey::GetRecommendations,
        MessageKey::LocationLabel,
        MessageKey::NoLocation,
        MessageKey::FetchingAdvisory,
        MessageKey::CurrentWeather,
        MessageKey::Temperature,
        MessageKey::Humidity,
        MessageKey::WindSpeed,
        MessageKey::WindDirection,
        MessageKey::Forecast,
        MessageKey::WeatherInsights,
        MessageKey::InsightHumidity,
        MessageKey::InsightTemperature,
        MessageKey::InsightWind,
        MessageKey::SoilAnalysis,
        MessageKey::SoilHealth,
        MessageKey::SoilTypeLabel,
        MessageKey::PhLevel,
        MessageKey::OrganicContent,
        MessageKey::Nitrogen,
        MessageKey::Phosphorus,
        MessageKey::Potassium,
        MessageKey::SoilAdvice,
        MessageKey::HintSoilType,
        MessageKey::HintPh,
        MessageKey::HintOrganic,
        MessageKey::CropRecommendations,
        MessageKey::Suitability,
        MessageKey::PlantingWindow,
        MessageKey::HarvestWindow,
        MessageKey::Irrigation,
        MessageKey::Fertilizer,
        MessageKey::PestControl,
        MessageKey::TopCropInsight,
        MessageKey::BandExcellent,
        MessageKey::BandGood,
        MessageKey::BandModerate,
        MessageKey::BandPoor,
        MessageKey::LevelHighlyRecommended,
        MessageKey::LevelRecommended,
        MessageKey::LevelModerate,
        MessageKey::LevelLowRecommended,
        MessageKey::TopCrop,
        MessageKey::SuitabilityScore,
        MessageKey::CropSuitabilityChart,
        MessageKey::SoilNutrients,
        MessageKey::ChooseLanguage,
        MessageKey::LanguageUnavailable,
        MessageKey::LanguageChanged,
        MessageKey::Listen,
        MessageKey::CondSunny,
        MessageKey::CondPartlyCloudy,
        MessageKey::CondCloudy,
        MessageKey::CondRainy,
        MessageKey::SoilLoamy,
        MessageKey::SoilClay,
        MessageKey::SoilSandy,
        MessageKey::SoilSilty,
        MessageKey::UnitCelsius,
        MessageKey::UnitPercent,
        MessageKey::UnitPpm,
        MessageKey::UnitKmh,
        MessageKey::NarrWeather,
        MessageKey::NarrSoil,
        MessageKey::NarrCrop,
        MessageKey::NarrDashboard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::AppTitle => "app_title",
            MessageKey::TabLocation => "tab_location",
            MessageKey::TabWeather => "tab_weather",
            MessageKey::TabSoil => "tab_soil",
            MessageKey::TabCrops => "tab_crops",
            MessageKey::TabDashboard => "tab_dashboard",
            MessageKey::TabLanguage => "tab_language",
            MessageKey::ManualEntry => "manual_entry",
            MessageKey::EnterLocation => "enter_location",
            MessageKey::LocationPlaceholder => "location_placeholder",
            MessageKey::UseGps => "use_gps",
            MessageKey::Submit => "submit",
            MessageKey::GettingLocation => "getting_location",
            MessageKey::GpsHint => "gps_hint",
            MessageKey::GetRecommendations => "get_recommendations",
            MessageKey::LocationLabel => "location_label",
            MessageKey::NoLocation => "no_location",
            MessageKey::FetchingAdvisory => "fetching_advisory",
            MessageKey::CurrentWeather => "current_weather",
            MessageKey::Temperature => "temperature",
            MessageKey::Humidity => "humidity",
            MessageKey::WindSpeed => "wind_speed",
            MessageKey::WindDirection => "wind_direction",
            MessageKey::Forecast => "forecast",
            MessageKey::WeatherInsights => "weather_insights",
            MessageKey::InsightHumidity => "insight_humidity",
            MessageKey::InsightTemperature => "insight_temperature",
            MessageKey::InsightWind => "insight_wind",
            MessageKey::SoilAnalysis => "soil_analysis",
            MessageKey::SoilHealth => "soil_health",
            MessageKey::SoilTypeLabel => "soil_type",
            MessageKey::PhLevel => "ph_level",
            MessageKey::OrganicContent => "organic_content",
            MessageKey::Nitrogen => "nitrogen",
            MessageKey::Phosphorus => "phosphorus",
            MessageKey::Potassium => "potassium",
            MessageKey::SoilAdvice => "soil_advice",
            MessageKey::HintSoilType => "hint_soil_type",
            MessageKey::HintPh => "hint_ph",
            MessageKey::HintOrganic => "hint_organic",
            MessageKey::CropRecommendations => "crop_recommendations",
            MessageKey::Suitability => "suitability",
            MessageKey::PlantingWindow => "planting_window",
            MessageKey::HarvestWindow => "harvest_window",
            MessageKey::Irrigation => "irrigation",
            MessageKey::Fertilizer => "fertilizer",
            MessageKey::PestControl => "pest_control",
            MessageKey::TopCropInsight => "top_crop_insight",
            MessageKey::BandExcellent => "band_excellent",
            MessageKey::BandGood => "band_good",
            MessageKey::BandModerate => "band_moderate",
            MessageKey::BandPoor => "band_poor",
            MessageKey::LevelHighlyRecommended => "level_highly_recommended",
            MessageKey::LevelRecommended => "level_recommended",
            MessageKey::LevelModerate => "level_moderate",
            MessageKey::LevelLowRecommended => "level_low_recommended",
            MessageKey::TopCrop => "top_crop",
            MessageKey::SuitabilityScore => "suitability_score",
            MessageKey::CropSuitabilityChart => "crop_suitability_chart",
            MessageKey::SoilNutrients => "soil_nutrients",
            MessageKey::ChooseLanguage => "choose_language",
            MessageKey::LanguageUnavailable => "language_unavailable",
            MessageKey::LanguageChanged => "language_changed",
            MessageKey::Listen => "listen",
            MessageKey::CondSunny => "cond_sunny",
            MessageKey::CondPartlyCloudy => "cond_partly_cloudy",
            MessageKey::CondCloudy => "cond_cloudy",
            MessageKey::CondRainy => "cond_rainy",
            MessageKey::SoilLoamy => "soil_loamy",
            MessageKey::SoilClay => "soil_clay",
            MessageKey::SoilSandy => "soil_sandy",
            MessageKey::SoilSilty => "soil_silty",
            MessageKey::UnitCelsius => "unit_celsius",
            MessageKey::UnitPercent => "unit_percent",
            MessageKey::UnitPpm => "unit_ppm",
            MessageKey::UnitKmh => "unit_kmh",
            MessageKey::NarrWeather => "narr_weather",
            MessageKey::NarrSoil => "narr_soil",
            MessageKey::NarrCrop => "narr_crop",
            MessageKey::NarrDashboard => "narr_dashboard",
        }
    }
}

const HI_TABLE: &str = include_str!("../../assets/i18n/hi.json");
const EN_TABLE: &str = include_str!("../../assets/i18n/en.json");

/// One central mapping from (language, message key) to localized text,
/// parsed once at process start. Views request strings by key and never
/// embed literal tables.
pub struct Catalog {
    tables: HashMap<Lang, HashMap<String, String>>,
}

impl Catalog {
    fn from_embedded() -> Result<Self> {
        let mut tables = HashMap::new();
        tables.insert(Lang::Hi, serde_json::from_str(HI_TABLE)?);
        tables.insert(Lang::En, serde_json::from_str(EN_TABLE)?);
        Ok(Self { tables })
    }

    /// Whether a complete translation table ships for this language.
    pub fn supports(&self, lang: Lang) -> bool {
        self.tables.contains_key(&lang)
    }

    pub fn get(&self, lang: Lang, key: MessageKey) -> Option<&str> {
        self.tables
            .get(&lang)?
            .get(key.as_str())
            .map(String::as_str)
    }

    /// Render-path lookup. Supported languages are fully covered (the
    /// tests enforce it); the key name shows through if that ever
    /// regresses, which beats panicking mid-draw.
    pub fn label(&self, lang: Lang, key: MessageKey) -> &str {
        self.get(lang, key).unwrap_or_else(|| key.as_str())
    }
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| {
        Catalog::from_embedded().expect("embedded translation tables are valid JSON")
    })
}

/// Shorthand used throughout the screens.
pub fn label(lang: Lang, key: MessageKey) -> &'static str {
    catalog().label(lang, key)
}

/// Fill a catalog template's `{placeholder}` slots.
pub fn template(lang: Lang, key: MessageKey, args: &[(&str, &str)]) -> String {
    let mut out = label(lang, key).to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{}}}", name), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_code_round_trip() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Lang::from_code("fr"), None);
    }

    #[test]
    fn only_hindi_and_english_are_supported() {
        let cat = catalog();
        assert!(cat.supports(Lang::Hi));
        assert!(cat.supports(Lang::En));
        for lang in [Lang::Te, Lang::Ta, Lang::Bn, Lang::Gu, Lang::Mr, Lang::Pa] {
            assert!(!cat.supports(lang));
            assert_eq!(cat.get(lang, MessageKey::AppTitle), None);
        }
    }

    #[test]
    fn shipped_tables_cover_every_message_key() {
        let cat = catalog();
        for lang in [Lang::Hi, Lang::En] {
            for key in MessageKey::ALL {
                assert!(
                    cat.get(lang, key).is_some(),
                    "{} missing {}",
                    lang,
                    key.as_str()
                );
            }
        }
    }

    #[test]
    fn switching_language_and_back_restores_labels_exactly() {
        let cat = catalog();
        let before: Vec<&str> = MessageKey::ALL
            .iter()
            .map(|k| cat.label(Lang::Hi, *k))
            .collect();
        let _other: Vec<&str> = MessageKey::ALL
            .iter()
            .map(|k| cat.label(Lang::En, *k))
            .collect();
        let after: Vec<&str> = MessageKey::ALL
            .iter()
            .map(|k| cat.label(Lang::Hi, *k))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn core_labels_differ_between_languages() {
        let cat = catalog();
        for key in [
            MessageKey::AppTitle,
            MessageKey::TabWeather,
            MessageKey::BandExcellent,
            MessageKey::NarrWeather,
        ] {
            assert_ne!(cat.get(Lang::Hi, key), cat.get(Lang::En, key));
        }
    }

    #[test]
    fn narration_templates_keep_their_placeholders() {
        let cat = catalog();
        for lang in [Lang::Hi, Lang::En] {
            let weather = cat.get(lang, MessageKey::NarrWeather).unwrap();
            for placeholder in ["{temp}", "{humidity}", "{wind}"] {
                assert!(weather.contains(placeholder), "{lang}: {placeholder}");
            }
            let crop = cat.get(lang, MessageKey::NarrCrop).unwrap();
            assert!(crop.contains("{crop}") && crop.contains("{score}"));
        }
    }

    #[test]
    fn unknown_key_degrades_to_key_name() {
        // Simulate a regression by looking up against an unsupported
        // language directly through label().
        assert_eq!(
            catalog().label(Lang::Te, MessageKey::Submit),
            MessageKey::Submit.as_str()
        );
    }
}
