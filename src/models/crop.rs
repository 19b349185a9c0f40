use crate::error::{KrishiError, Result};
use crate::i18n::{Lang, MessageKey};
use serde::{Deserialize, Serialize};

/// Qualitative recommendation strength derived from the suitability
/// score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SuitabilityLevel {
    HighlyRecommended,
    Recommended,
    Moderate,
    LowRecommended,
}

impl SuitabilityLevel {
    pub fn message_key(&self) -> MessageKey {
        match self {
            SuitabilityLevel::HighlyRecommended => MessageKey::LevelHighlyRecommended,
            SuitabilityLevel::Recommended => MessageKey::LevelRecommended,
            SuitabilityLevel::Moderate => MessageKey::LevelModerate,
            SuitabilityLevel::LowRecommended => MessageKey::LevelLowRecommended,
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            SuitabilityLevel::HighlyRecommended => Color::Green,
            SuitabilityLevel::Recommended => Color::Blue,
            SuitabilityLevel::Moderate => Color::Yellow,
            SuitabilityLevel::LowRecommended => Color::Red,
        }
    }
}

/// One entry of the static crop suitability table. Ordering within the
/// table is the display/ranking order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropSuitability {
    pub common_name: String,
    pub localized_name: String,
    pub suitability_score: u8,
    pub planting_window: String,
    pub harvest_window: String,
    pub irrigation_advice: String,
    pub fertilizer_advice: String,
    pub pest_control_advice: String,
}

impl CropSuitability {
    /// Name to show for the active language: the Hindi table name for
    /// `hi`, the common (English) name otherwise.
    pub fn display_name(&self, lang: Lang) -> &str {
        match lang {
            Lang::Hi => &self.localized_name,
            _ => &self.common_name,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.suitability_score > 100 {
            return Err(KrishiError::InvalidData(format!(
                "suitability score {} above 100 for {}",
                self.suitability_score, self.common_name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice() -> CropSuitability {
        CropSuitability {
            common_name: "Rice".into(),
            localized_name: "चावल".into(),
            suitability_score: 95,
            planting_window: "June-July".into(),
            harvest_window: "October-November".into(),
            irrigation_advice: "Heavy irrigation needed".into(),
            fertilizer_advice: "NPK 20:10:10".into(),
            pest_control_advice: "Regular monitoring for stem borer".into(),
        }
    }

    #[test]
    fn display_name_follows_language() {
        let crop = rice();
        assert_eq!(crop.display_name(Lang::Hi), "चावल");
        assert_eq!(crop.display_name(Lang::En), "Rice");
        // Languages without their own crop names fall back to the
        // common name, not the Hindi one.
        assert_eq!(crop.display_name(Lang::Ta), "Rice");
    }

    #[test]
    fn validation_bounds_the_score() {
        let mut crop = rice();
        assert!(crop.validate().is_ok());
        crop.suitability_score = 101;
        assert!(crop.validate().is_err());
    }
}
